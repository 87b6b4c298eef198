//! Environment variable management for testing
//!
//! This module provides utilities for managing the XDG config and other environment
//! variables during testing to ensure tests don't interfere with each other.

use std::env;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

static XDG_LOCK: Mutex<()> = Mutex::new(());
static VAR_LOCK: Mutex<()> = Mutex::new(());

/// A test environment that points the XDG config directory at a per-test
/// temporary directory
pub struct EnvTestGuard {
  /// The temporary directory holding the XDG config directory
  pub temp_dir: TempDir,
  original: Option<String>,
  _lock: MutexGuard<'static, ()>,
}

impl Default for EnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl EnvTestGuard {
  /// XDG environment variable name
  pub const XDG_CONFIG_HOME: &'static str = "XDG_CONFIG_HOME";

  /// Create a new test environment with an overridden XDG config directory
  pub fn new() -> Self {
    let lock = crate::lock(&XDG_LOCK);
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let original = env::var(Self::XDG_CONFIG_HOME).ok();

    let dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&dir).expect("Failed to create XDG directory");
    unsafe {
      env::set_var(Self::XDG_CONFIG_HOME, &dir);
    }

    Self {
      temp_dir,
      original,
      _lock: lock,
    }
  }

  /// Get the path to the XDG config directory
  pub fn config_dir(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }
}

impl Drop for EnvTestGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(Self::XDG_CONFIG_HOME, val);
      },
      None => unsafe {
        env::remove_var(Self::XDG_CONFIG_HOME);
      },
    }
  }
}

/// Overrides a single environment variable for the lifetime of the guard and
/// restores its previous value on drop
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
  _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
  /// Capture the current value of `name`
  pub fn new(name: &str) -> Self {
    let lock = crate::lock(&VAR_LOCK);
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
      _lock: lock,
    }
  }

  /// Set the variable to `value`
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Remove the variable from the environment
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}
