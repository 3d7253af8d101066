// file: tests/common/mod.rs
// version: 1.0.0
// guid: 38106ff9-352f-40c7-8f93-163d3de1004f

//! Shared fixtures: a stand-in for sudo that logs its arguments

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Shell script accepting sudo's `-H`, `-u <user>` and `-K` flags.
///
/// Every invocation appends its arguments to `calls.log`, `-K` exits with
/// the configured status, anything else is exec'd after the flags.
pub struct FakeSudo {
    pub dir: TempDir,
    pub path: PathBuf,
    pub log: PathBuf,
}

impl FakeSudo {
    pub fn new() -> Self {
        Self::with_revoke_status(0)
    }

    pub fn with_revoke_status(status: i32) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sudo");
        let log = dir.path().join("calls.log");

        let script = format!(
            r#"#!/bin/sh
echo "$*" >> '{log}'
if [ "$1" = "-K" ]; then
  exit {status}
fi
while [ $# -gt 0 ]; do
  case "$1" in
    -H) shift ;;
    -u) shift 2 ;;
    *) break ;;
  esac
done
exec "$@"
"#,
            log = log.display(),
            status = status
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        Self { dir, path, log }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// One entry per invocation, in order
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn revocations(&self) -> usize {
        self.calls().iter().filter(|c| c.as_str() == "-K").count()
    }
}
