//! Temporary `.netrc` files for credential tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::MutexGuard;

use tempfile::TempDir;

use crate::home::HOME_LOCK;

/// RAII guard for test .netrc files
///
/// Creates a temporary home directory holding a `.netrc` with the given
/// content, points `HOME` at it, and restores the original `HOME` on drop.
pub struct NetrcGuard {
  temp_dir: TempDir,
  netrc_path: PathBuf,
  original_home: Option<String>,
  _lock: MutexGuard<'static, ()>,
}

impl NetrcGuard {
  /// Create a new NetrcGuard with the given content
  pub fn new(content: &str) -> Self {
    let lock = crate::lock(&HOME_LOCK);
    let original_home = std::env::var("HOME").ok();

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let netrc_path = temp_dir.path().join(".netrc");
    fs::write(&netrc_path, content).expect("Failed to write test .netrc");

    unsafe {
      std::env::set_var("HOME", temp_dir.path());
    }

    Self {
      temp_dir,
      netrc_path,
      original_home,
      _lock: lock,
    }
  }

  /// Get the path to the .netrc file
  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }

  /// Get the path to the temporary home directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }
}

impl Drop for NetrcGuard {
  fn drop(&mut self) {
    match &self.original_home {
      Some(home) => unsafe {
        std::env::set_var("HOME", home);
      },
      None => unsafe {
        std::env::remove_var("HOME");
      },
    }
  }
}
