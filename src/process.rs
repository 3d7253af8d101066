// file: src/process.rs
// version: 1.0.0
// guid: b607448f-303c-4cc9-aa98-344b8a149fea

//! Process launching for the command runner

use crate::command::Command;
use std::io;
use std::process::{Command as ProcessCommand, Stdio};
use tracing::trace;

/// Outcome of a process that ran to completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completed {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    /// Captured standard output, present only for capturing launches
    pub stdout: Option<Vec<u8>>,
}

impl Completed {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Starts external processes and waits for them to exit
pub trait ProcessLauncher {
    /// Run `command` to completion.
    ///
    /// With `capture` set, standard output is collected into
    /// [`Completed::stdout`]; otherwise it goes to the caller's stdout.
    /// Errors are reserved for processes that could not be started.
    fn launch(&self, command: &Command, capture: bool) -> io::Result<Completed>;
}

impl<L: ProcessLauncher + ?Sized> ProcessLauncher for &L {
    fn launch(&self, command: &Command, capture: bool) -> io::Result<Completed> {
        (**self).launch(command, capture)
    }
}

/// Launches real processes with `std::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, command: &Command, capture: bool) -> io::Result<Completed> {
        let (program, args) = command
            .tokens()
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;

        let mut cmd = ProcessCommand::new(program);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        if capture {
            let output = cmd.stdout(Stdio::piped()).output()?;
            trace!("Captured {} bytes from {}", output.stdout.len(), program);
            Ok(Completed {
                code: output.status.code(),
                stdout: Some(output.stdout),
            })
        } else {
            let status = cmd.stdout(Stdio::inherit()).status()?;
            Ok(Completed {
                code: status.code(),
                stdout: None,
            })
        }
    }
}
