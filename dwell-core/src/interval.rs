//! # Transition Interval Calculator
//!
//! Replays an issue's change events and computes the window between the last
//! time the issue entered the start state and the last time it entered the
//! end state.
//!
//! A missing instant is represented by `None`, which orders before every real
//! instant. That keeps the "later timestamp wins" comparisons uniform without
//! a magic far-past value.

use chrono::{NaiveDateTime, TimeDelta};

use crate::changelog::ChangeEvent;
use crate::timestamp::{TimestampParseError, TimestampParser};

/// The computed start/end instant pair for one issue.
///
/// After [`compute_interval`] returns, `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionWindow {
  pub start: Option<NaiveDateTime>,
  pub end: Option<NaiveDateTime>,
}

impl TransitionWindow {
  /// Elapsed time between start and end. Zero for a collapsed window.
  pub fn duration(&self) -> TimeDelta {
    match (self.start, self.end) {
      (Some(start), Some(end)) if end > start => end - start,
      _ => TimeDelta::zero(),
    }
  }

  /// Whether the window carries no meaningful interval
  pub fn is_degenerate(&self) -> bool {
    self.start == self.end
  }
}

/// Compute the transition window for a sequence of change events.
///
/// Events whose field is not in `relevant_fields` are ignored. A timestamp is
/// only parsed when its event matches `start_label` or `end_label`; the first
/// malformed one aborts the computation.
pub fn compute_interval<S: AsRef<str>>(
  events: &[ChangeEvent],
  start_label: &str,
  end_label: &str,
  relevant_fields: &[S],
  parser: &TimestampParser,
) -> Result<TransitionWindow, TimestampParseError> {
  let mut start: Option<NaiveDateTime> = None;
  let mut end: Option<NaiveDateTime> = None;
  let mut saw_start = false;

  for event in events {
    if !relevant_fields.iter().any(|field| field.as_ref() == event.field) {
      continue;
    }

    let Some(to_value) = event.to_value.as_deref() else {
      continue;
    };

    if to_value == start_label {
      let at = Some(parser.parse(&event.timestamp)?);
      saw_start = true;
      if at > start {
        start = at;
      }
    } else if to_value == end_label {
      let at = Some(parser.parse(&event.timestamp)?);
      if at > end {
        end = at;
      }
    }
  }

  if !saw_start || end < start {
    start = end;
  }

  Ok(TransitionWindow { start, end })
}
