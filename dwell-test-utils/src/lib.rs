//! Test utilities shared across the dwell workspace
//!
//! This crate provides common testing infrastructure including:
//! - XDG directory isolation ([`EnvTestGuard`])
//! - Single environment variable overrides ([`EnvVarGuard`])
//! - HOME directory isolation ([`HomeEnvTestGuard`])
//! - Temporary `.netrc` files ([`NetrcGuard`])
//!
//! Every guard serializes access to the variables it touches, so tests that
//! mutate the same part of the process environment never interleave.

#![allow(dead_code)]

pub mod env;
pub mod home;
pub mod netrc;

use std::sync::{Mutex, MutexGuard};

// Re-export commonly used items
pub use env::{EnvTestGuard, EnvVarGuard};
pub use home::HomeEnvTestGuard;
pub use netrc::NetrcGuard;

/// Lock a guard mutex, ignoring poison left behind by a failed test.
pub(crate) fn lock(mutex: &'static Mutex<()>) -> MutexGuard<'static, ()> {
  mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
