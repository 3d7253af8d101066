// file: src/runner.rs
// version: 1.0.0
// guid: 6df9eb57-a138-4b27-8936-020bea28c4e4

//! One-shot command execution with optional sudo elevation
//!
//! A [`CommandRunner`] owns a single command. [`CommandRunner::execute`]
//! runs it at most once; later calls are no-ops. When elevation is used and
//! credential revocation is enabled, `sudo -K` runs after the command
//! whether it succeeded or not.

use crate::command::Command;
use crate::elevation::ElevationConfig;
use crate::encoding::OutputEncoding;
use crate::error::ExecutionError;
use crate::process::{ProcessLauncher, SystemLauncher};
use std::fmt;
use tracing::{debug, debug_span, error, info, warn, Span};

/// Lines of captured output, `None` when output was not captured
pub type RunOutput = Option<Vec<String>>;

/// Per-call settings for [`CommandRunner::execute`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Override the runner's `use_elevation` setting
    pub use_elevation: Option<bool>,
    /// Capture stdout and return it as lines
    pub capture_output: bool,
    /// Mark the runner configured once this call finishes, even on failure
    pub mark_configured: bool,
    /// Override the elevation config's `set_home` setting
    pub set_home: Option<bool>,
    /// Encoding used to decode captured output
    pub encoding: OutputEncoding,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self {
            use_elevation: None,
            capture_output: false,
            mark_configured: true,
            set_home: None,
            encoding: OutputEncoding::default(),
        }
    }
}

impl ExecuteOptions {
    /// Default options with output capture turned on
    pub fn capture() -> Self {
        Self {
            capture_output: true,
            ..Self::default()
        }
    }

    pub fn elevated(mut self, use_elevation: bool) -> Self {
        self.use_elevation = Some(use_elevation);
        self
    }

    pub fn set_home(mut self, set_home: bool) -> Self {
        self.set_home = Some(set_home);
        self
    }

    pub fn mark_configured(mut self, mark: bool) -> Self {
        self.mark_configured = mark;
        self
    }

    pub fn encoding(mut self, encoding: OutputEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Runs one system configuration command, optionally through sudo.
///
/// Not synchronized: the configured flag assumes a single caller.
#[derive(Debug)]
pub struct CommandRunner<L = SystemLauncher> {
    argv: Command,
    elevation: ElevationConfig,
    use_elevation: bool,
    configured: bool,
    span: Option<Span>,
    launcher: L,
}

impl CommandRunner<SystemLauncher> {
    /// Create a runner for `argv` that launches real processes.
    ///
    /// Elevation is off; when turned on it uses [`ElevationConfig::default`].
    pub fn new(argv: impl Into<Command>) -> Self {
        Self {
            argv: argv.into(),
            elevation: ElevationConfig::default(),
            use_elevation: false,
            configured: false,
            span: None,
            launcher: SystemLauncher,
        }
    }
}

impl<L: ProcessLauncher> CommandRunner<L> {
    /// Swap the process launcher, keeping every other setting
    pub fn with_launcher<M: ProcessLauncher>(self, launcher: M) -> CommandRunner<M> {
        CommandRunner {
            argv: self.argv,
            elevation: self.elevation,
            use_elevation: self.use_elevation,
            configured: self.configured,
            span: self.span,
            launcher,
        }
    }

    pub fn with_elevation(mut self, elevation: ElevationConfig) -> Self {
        self.elevation = elevation;
        self
    }

    /// Run through sudo by default
    pub fn use_elevation(mut self, use_elevation: bool) -> Self {
        self.use_elevation = use_elevation;
        self
    }

    /// Record this runner's log events under `span`
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn argv(&self) -> &Command {
        &self.argv
    }

    pub fn elevation(&self) -> &ElevationConfig {
        &self.elevation
    }

    pub fn uses_elevation(&self) -> bool {
        self.use_elevation
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Whether [`execute`](Self::execute) has already been attempted
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    fn span(&self) -> Span {
        self.span
            .clone()
            .unwrap_or_else(|| debug_span!("command_runner"))
    }

    /// The runner's argv wrapped for sudo.
    ///
    /// `set_home` of `None` uses the elevation config's own setting.
    pub fn build_elevated_command(&self, set_home: Option<bool>) -> Command {
        let set_home = set_home.unwrap_or(self.elevation.set_home);
        self.elevation.build_elevated_command(&self.argv, set_home)
    }

    /// Command line `execute()` would launch with the runner's defaults
    pub fn display_command(&self) -> Command {
        if self.use_elevation {
            self.build_elevated_command(None)
        } else {
            self.argv.clone()
        }
    }

    /// Run `command` (the runner's own argv when `None`) and wait for it.
    ///
    /// Returns the decoded stdout lines when `capture` is set. A non-zero
    /// exit, a failure to start, or undecodable output is an error.
    pub fn run(
        &self,
        command: Option<&Command>,
        capture: bool,
        encoding: OutputEncoding,
    ) -> Result<RunOutput, ExecutionError> {
        let span = self.span();
        let _enter = span.enter();

        let command = command.unwrap_or(&self.argv);
        let runstring = command.runstring();
        debug!("about to run: {}", runstring);

        let result = self.launch_checked(command, &runstring, capture, encoding);
        if let Err(ref e) = result {
            error!("Failed to run command: {}", runstring);
            error!("{}", e);
        }
        result
    }

    fn launch_checked(
        &self,
        command: &Command,
        runstring: &str,
        capture: bool,
        encoding: OutputEncoding,
    ) -> Result<RunOutput, ExecutionError> {
        let completed = self
            .launcher
            .launch(command, capture)
            .map_err(|source| ExecutionError::Spawn {
                command: runstring.to_string(),
                source,
            })?;

        if !completed.success() {
            return Err(ExecutionError::Exit {
                command: runstring.to_string(),
                code: completed.code,
            });
        }

        if !capture {
            return Ok(None);
        }

        let stdout = completed.stdout.unwrap_or_default();
        encoding
            .decode_lines(&stdout)
            .map(Some)
            .ok_or_else(|| ExecutionError::Decode {
                command: runstring.to_string(),
                encoding: encoding.name(),
            })
    }

    /// Invalidate the cached sudo credential with `sudo -K`
    pub fn revoke_elevation_credential(&self) -> Result<(), ExecutionError> {
        {
            let span = self.span();
            let _enter = span.enter();
            info!("Revoking elevation credential");
        }

        let revoke = self.elevation.revoke_command();
        self.run(Some(&revoke), false, OutputEncoding::default())
            .map(|_| ())
            .map_err(|e| ExecutionError::Revoke(Box::new(e)))
    }

    /// Run the argv through sudo.
    ///
    /// With credential revocation enabled, `sudo -K` follows the command on
    /// both the success and the failure path. If both fail the error carries
    /// both causes; if only the revocation fails the run counts as failed.
    pub fn run_elevated(
        &self,
        capture: bool,
        set_home: Option<bool>,
        encoding: OutputEncoding,
    ) -> Result<RunOutput, ExecutionError> {
        let elevated = self.build_elevated_command(set_home);
        let result = self.run(Some(&elevated), capture, encoding);

        if !self.elevation.revoke_credential {
            return result;
        }

        match (result, self.revoke_elevation_credential()) {
            (Ok(output), Ok(())) => Ok(output),
            (Ok(_), Err(cleanup)) => Err(cleanup),
            (Err(primary), Ok(())) => Err(primary),
            (Err(primary), Err(cleanup)) => {
                let span = self.span();
                let _enter = span.enter();
                warn!("Credential revocation failed after a failed run: {}", cleanup);
                Err(ExecutionError::CleanupAfterFailure {
                    primary: Box::new(primary),
                    cleanup: Box::new(cleanup),
                })
            }
        }
    }

    /// Run the argv unless it has already been run.
    ///
    /// A configured runner returns `Ok(None)` without launching anything.
    /// With `mark_configured` set the runner becomes configured when this
    /// call returns, including when the command failed, so a failed
    /// command is not retried by later calls.
    pub fn execute(&mut self, options: ExecuteOptions) -> Result<RunOutput, ExecutionError> {
        if self.configured {
            let span = self.span();
            let _enter = span.enter();
            debug!("Already configured, skipping: {}", self.argv);
            return Ok(None);
        }

        let use_elevation = options.use_elevation.unwrap_or(self.use_elevation);
        let result = if use_elevation {
            self.run_elevated(options.capture_output, options.set_home, options.encoding)
        } else {
            self.run(None, options.capture_output, options.encoding)
        };

        if options.mark_configured {
            self.configured = true;
        }
        result
    }
}

impl<L: ProcessLauncher> fmt::Display for CommandRunner<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_command())
    }
}
