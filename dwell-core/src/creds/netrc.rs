//! Helpers for reading and writing credentials stored in `.netrc` files.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::creds::Credentials;

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// ```
/// use std::path::Path;
/// use dwell_core::creds::netrc::get_netrc_path;
///
/// let path = get_netrc_path(Path::new("/home/user"));
/// assert_eq!(path, Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// Both the single-line (`machine host login user password pass`) and the
/// multi-line layouts are accepted. Returns `Ok(None)` when the machine is
/// absent or its entry lacks a `login` or `password`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  let file = File::open(path).context("Failed to open .netrc file")?;
  let reader = BufReader::new(file);

  let mut current_machine: Option<String> = None;
  let mut username: Option<String> = None;
  let mut password: Option<String> = None;

  for line in reader.lines() {
    let line = line.context("Failed to read line from .netrc")?;
    let mut tokens = line.split_whitespace();

    while let Some(token) = tokens.next() {
      match token {
        "machine" => {
          if current_machine.as_deref() == Some(target_machine)
            && let (Some(username), Some(password)) = (username.take(), password.take())
          {
            return Ok(Some(Credentials { username, password }));
          }
          current_machine = tokens.next().map(str::to_string);
          username = None;
          password = None;
        }
        "login" => username = tokens.next().map(str::to_string),
        "password" => password = tokens.next().map(str::to_string),
        _ => {}
      }
    }
  }

  if current_machine.as_deref() == Some(target_machine)
    && let (Some(username), Some(password)) = (username, password)
  {
    return Ok(Some(Credentials { username, password }));
  }

  Ok(None)
}

/// Writes or updates a `.netrc` entry for the given machine.
///
/// An existing entry for the machine is replaced in place; otherwise a new
/// entry is appended. On Unix the file mode is tightened to `600`.
pub fn write_netrc_entry(path: &Path, machine: &str, username: &str, password: &str) -> Result<()> {
  let existing = if path.exists() {
    fs::read_to_string(path).context("Failed to read existing .netrc file")?
  } else {
    String::new()
  };

  let entry = format!("machine {machine}\n  login {username}\n  password {password}\n");
  let header = format!("machine {machine}");

  let content = if existing.lines().any(|line| line.trim() == header) {
    let mut updated = String::new();
    let mut skipping = false;

    for line in existing.lines() {
      let trimmed = line.trim();
      if trimmed.starts_with("machine ") {
        skipping = trimmed == header;
        if skipping {
          updated.push_str(&entry);
          continue;
        }
      }
      if !skipping {
        updated.push_str(line);
        updated.push('\n');
      }
    }
    updated
  } else {
    let mut appended = existing;
    if !appended.is_empty() && !appended.ends_with('\n') {
      appended.push('\n');
    }
    appended.push_str(&entry);
    appended
  };

  let mut file = File::create(path).context("Failed to open .netrc file for writing")?;
  file
    .write_all(content.as_bytes())
    .context("Failed to write .netrc file")?;

  set_secure_permissions(path)
}

/// Whether the `.netrc` file is readable by group or others.
#[cfg(unix)]
pub fn has_insecure_permissions(path: &Path) -> Result<bool> {
  use std::os::unix::fs::PermissionsExt;

  let mode = fs::metadata(path)
    .with_context(|| format!("Failed to read metadata for {}", path.display()))?
    .permissions()
    .mode();
  Ok(mode & 0o077 != 0)
}

/// Whether the `.netrc` file is readable by group or others.
#[cfg(not(unix))]
pub fn has_insecure_permissions(_path: &Path) -> Result<bool> {
  Ok(false)
}

#[cfg(unix)]
fn set_secure_permissions(path: &Path) -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  fs::set_permissions(path, fs::Permissions::from_mode(0o600)).context("Failed to set .netrc permissions to 600")
}

#[cfg(not(unix))]
fn set_secure_permissions(_path: &Path) -> Result<()> {
  Ok(())
}

/// Normalizes a host URL by removing protocol prefixes and trailing slashes.
///
/// ```
/// use dwell_core::creds::netrc::normalize_host;
///
/// assert_eq!(normalize_host("https://company.atlassian.net/"), "company.atlassian.net");
/// assert_eq!(normalize_host("http://192.168.33.30:8080"), "192.168.33.30:8080");
/// ```
pub fn normalize_host(raw_host: &str) -> String {
  raw_host
    .trim_start_matches("https://")
    .trim_start_matches("http://")
    .trim_end_matches('/')
    .to_string()
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  fn create_test_netrc(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let netrc_path = temp_dir.path().join(".netrc");
    fs::write(&netrc_path, content).expect("Failed to write test .netrc");
    (temp_dir, netrc_path)
  }

  #[test]
  fn test_parse_netrc_file_multiple_machines() {
    let content = r#"machine jira.example.com
  login user1
  password pass1

machine 192.168.33.30:8080
  login admin
  password admin
"#;
    let (_temp_dir, netrc_path) = create_test_netrc(content);

    let creds = parse_netrc_file(&netrc_path, "jira.example.com").unwrap().unwrap();
    assert_eq!(creds.username, "user1");
    assert_eq!(creds.password, "pass1");

    let creds = parse_netrc_file(&netrc_path, "192.168.33.30:8080").unwrap().unwrap();
    assert_eq!(creds.username, "admin");
    assert_eq!(creds.password, "admin");

    assert!(parse_netrc_file(&netrc_path, "other.example.com").unwrap().is_none());
  }

  #[test]
  fn test_parse_netrc_file_single_line_and_mixed() {
    let content = r#"machine a.example.com login user1 password pass1
machine b.example.com login user2
  password pass2
"#;
    let (_temp_dir, netrc_path) = create_test_netrc(content);

    let creds = parse_netrc_file(&netrc_path, "a.example.com").unwrap().unwrap();
    assert_eq!(creds.username, "user1");

    let creds = parse_netrc_file(&netrc_path, "b.example.com").unwrap().unwrap();
    assert_eq!(creds.password, "pass2");
  }

  #[test]
  fn test_parse_netrc_file_incomplete_entry() {
    let content = r#"machine a.example.com
  login user1
machine b.example.com
  login user2
  password pass2
"#;
    let (_temp_dir, netrc_path) = create_test_netrc(content);

    assert!(parse_netrc_file(&netrc_path, "a.example.com").unwrap().is_none());
    assert!(parse_netrc_file(&netrc_path, "b.example.com").unwrap().is_some());
  }

  #[test]
  fn test_parse_netrc_file_empty_and_missing() {
    let (temp_dir, netrc_path) = create_test_netrc("");
    assert!(parse_netrc_file(&netrc_path, "a.example.com").unwrap().is_none());

    let missing = temp_dir.path().join("missing");
    assert!(parse_netrc_file(&missing, "a.example.com").is_err());
  }

  #[test]
  fn test_write_netrc_entry_new_and_append() {
    let (_temp_dir, netrc_path) = create_test_netrc("machine a.example.com login user1 password pass1");

    write_netrc_entry(&netrc_path, "b.example.com", "user2", "pass2").unwrap();

    let creds = parse_netrc_file(&netrc_path, "a.example.com").unwrap().unwrap();
    assert_eq!(creds.username, "user1");
    let creds = parse_netrc_file(&netrc_path, "b.example.com").unwrap().unwrap();
    assert_eq!(creds.username, "user2");
    assert!(!has_insecure_permissions(&netrc_path).unwrap());
  }

  #[test]
  fn test_write_netrc_entry_update_existing() {
    let content = r#"machine a.example.com
  login olduser
  password oldpass

machine b.example.com
  login user2
  password pass2
"#;
    let (_temp_dir, netrc_path) = create_test_netrc(content);

    write_netrc_entry(&netrc_path, "a.example.com", "newuser", "newpass").unwrap();

    let creds = parse_netrc_file(&netrc_path, "a.example.com").unwrap().unwrap();
    assert_eq!(creds.username, "newuser");
    assert_eq!(creds.password, "newpass");
    let creds = parse_netrc_file(&netrc_path, "b.example.com").unwrap().unwrap();
    assert_eq!(creds.username, "user2");
  }

  #[test]
  #[cfg(unix)]
  fn test_insecure_permissions_detected() {
    use std::os::unix::fs::PermissionsExt;

    let (_temp_dir, netrc_path) = create_test_netrc("machine a login b password c\n");
    fs::set_permissions(&netrc_path, fs::Permissions::from_mode(0o644)).unwrap();

    assert!(has_insecure_permissions(&netrc_path).unwrap());
  }

  #[test]
  fn test_normalize_host() {
    assert_eq!(normalize_host("https://api.example.com/"), "api.example.com");
    assert_eq!(normalize_host("http://localhost:8080/"), "localhost:8080");
    assert_eq!(normalize_host("jira.example.com"), "jira.example.com");
  }
}
