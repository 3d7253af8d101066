// file: src/elevation.rs
// version: 1.0.0
// guid: 19244741-dd12-42c8-afec-ef0c64a0051c

//! Privilege elevation through `sudo`

use crate::command::Command;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the elevation executable
pub const DEFAULT_ELEVATION_EXECUTABLE: &str = "/usr/bin/sudo";

/// Account `sudo` targets when no `-u` is given
pub const SUPERUSER: &str = "root";

/// Flag asking sudo to set HOME to the target user's home directory
const SET_HOME_FLAG: &str = "-H";
const USER_FLAG: &str = "-u";
/// Flag invalidating the cached sudo credential
const REVOKE_FLAG: &str = "-K";

/// How to escalate privilege for a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevationConfig {
    /// Path to the elevation executable
    pub executable: PathBuf,
    /// User to run the command as
    pub user: String,
    /// Pass `-H` by default
    pub set_home: bool,
    /// Run `sudo -K` after every elevated run
    pub revoke_credential: bool,
}

impl Default for ElevationConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_ELEVATION_EXECUTABLE),
            user: SUPERUSER.to_string(),
            set_home: false,
            revoke_credential: true,
        }
    }
}

impl ElevationConfig {
    fn executable_token(&self) -> String {
        self.executable.to_string_lossy().into_owned()
    }

    /// Wrap `command` so it runs through the elevation executable.
    ///
    /// Produces `<sudo> [-H] [-u <user>] <command...>`; `-u` is left out
    /// when the target is the superuser.
    pub fn build_elevated_command(&self, command: &Command, set_home: bool) -> Command {
        let mut prefix = vec![self.executable_token()];

        if set_home {
            prefix.push(SET_HOME_FLAG.to_string());
        }

        if self.user != SUPERUSER {
            prefix.push(USER_FLAG.to_string());
            prefix.push(self.user.clone());
        }

        command.prefixed(prefix)
    }

    /// Command that invalidates the cached credential
    pub fn revoke_command(&self) -> Command {
        Command::new([self.executable_token(), REVOKE_FLAG.to_string()])
    }
}
