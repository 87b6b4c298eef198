//! # Changelog Model
//!
//! Domain representation of an issue changelog and the flattening step that
//! turns history entries into the change events consumed by the interval
//! calculator.

use serde::{Deserialize, Serialize};

/// A single recorded change against an issue.
///
/// Deserializes directly from the `changelog.histories[]` objects returned by
/// the Jira REST API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryEntry {
  /// Upstream creation timestamp, kept verbatim
  #[serde(default)]
  pub created: String,
  #[serde(default)]
  pub items: Vec<ChangeItem>,
}

/// One field-level change inside a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChangeItem {
  pub field: String,
  #[serde(rename = "fromString", default)]
  pub from_value: Option<String>,
  #[serde(rename = "toString", default)]
  pub to_value: Option<String>,
}

/// A flattened change event. The timestamp is parsed lazily, only when the
/// event matches one of the tracked labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
  pub timestamp: String,
  pub field: String,
  pub to_value: Option<String>,
}

impl ChangeEvent {
  pub fn new(timestamp: impl Into<String>, field: impl Into<String>, to_value: impl Into<String>) -> Self {
    Self {
      timestamp: timestamp.into(),
      field: field.into(),
      to_value: Some(to_value.into()),
    }
  }
}

/// Which items of a history entry become change events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemScan {
  /// Only the first item of each entry
  #[default]
  First,
  /// Every item of each entry
  All,
}

/// Flatten history entries into change events, preserving upstream order.
///
/// Entries without items produce no events.
pub fn flatten_changelog(histories: &[HistoryEntry], scan: ItemScan) -> Vec<ChangeEvent> {
  let take = match scan {
    ItemScan::First => 1,
    ItemScan::All => usize::MAX,
  };

  histories
    .iter()
    .flat_map(|entry| {
      entry.items.iter().take(take).map(|item| ChangeEvent {
        timestamp: entry.created.clone(),
        field: item.field.clone(),
        to_value: item.to_value.clone(),
      })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn sample_histories() -> Vec<HistoryEntry> {
    serde_json::from_value(json!([
      {
        "id": "1",
        "created": "2020-01-01T09:00:00.000+0000",
        "items": [
          { "field": "status", "fromString": "Open", "toString": "MSP Sprint 1" },
          { "field": "assignee", "fromString": null, "toString": "Jane" }
        ]
      },
      {
        "id": "2",
        "created": "2020-01-02T09:00:00.000+0000",
        "items": []
      },
      {
        "id": "3",
        "created": "2020-01-05T09:00:00.000+0000",
        "items": [
          { "field": "resolution", "toString": null },
          { "field": "status", "fromString": "MSP Sprint 1", "toString": "Done" }
        ]
      }
    ]))
    .unwrap()
  }

  #[test]
  fn test_history_entry_deserialization() {
    let histories = sample_histories();

    assert_eq!(histories.len(), 3);
    assert_eq!(histories[0].created, "2020-01-01T09:00:00.000+0000");
    assert_eq!(histories[0].items[0].field, "status");
    assert_eq!(histories[0].items[0].from_value.as_deref(), Some("Open"));
    assert_eq!(histories[0].items[0].to_value.as_deref(), Some("MSP Sprint 1"));
    assert_eq!(histories[2].items[0].to_value, None);
  }

  #[test]
  fn test_flatten_first_item_only() {
    let events = flatten_changelog(&sample_histories(), ItemScan::First);

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].field, "status");
    assert_eq!(events[0].to_value.as_deref(), Some("MSP Sprint 1"));
    assert_eq!(events[1].field, "resolution");
    assert_eq!(events[1].timestamp, "2020-01-05T09:00:00.000+0000");
  }

  #[test]
  fn test_flatten_all_items() {
    let events = flatten_changelog(&sample_histories(), ItemScan::All);

    assert_eq!(events.len(), 4);
    assert_eq!(events[1].field, "assignee");
    assert_eq!(events[3].to_value.as_deref(), Some("Done"));
    assert_eq!(events[3].timestamp, "2020-01-05T09:00:00.000+0000");
  }

  #[test]
  fn test_flatten_empty_changelog() {
    assert!(flatten_changelog(&[], ItemScan::First).is_empty());
  }

  #[test]
  fn test_item_scan_deserialization() {
    #[derive(Deserialize)]
    struct Wrapper {
      scan: ItemScan,
    }

    let wrapper: Wrapper = toml::from_str("scan = \"all\"").unwrap();
    assert_eq!(wrapper.scan, ItemScan::All);
    assert_eq!(ItemScan::default(), ItemScan::First);
  }
}
