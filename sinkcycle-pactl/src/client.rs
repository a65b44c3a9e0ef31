//! pactl client: sink enumeration and default-sink control

use std::process::Output;

use tracing::{debug, warn};

use crate::error::{PactlError, Result};
use crate::runner::{CommandRunner, SystemRunner};
use crate::sinks::{self, Sink};
use crate::DEFAULT_PACTL_BIN;

/// Blocking client for the audio server's command-line interface.
///
/// Generic over [`CommandRunner`] so tests can script command results;
/// production code uses the default [`SystemRunner`].
pub struct PactlClient<R = SystemRunner> {
    runner: R,
    binary: String,
}

impl PactlClient<SystemRunner> {
    /// Client spawning the real `pactl` binary.
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl Default for PactlClient<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> PactlClient<R> {
    /// Client using a custom runner.
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            binary: DEFAULT_PACTL_BIN.to_string(),
        }
    }

    /// Override the binary name (e.g. a wrapper script from config).
    pub fn binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Enumerate output sinks in the server's order.
    pub fn list_sinks(&self) -> Result<Vec<Sink>> {
        let output = self.invoke(&["--format=json", "list", "sinks"], false)?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let sinks = sinks::decode_sink_list(&stdout)?;

        debug!(
            count = sinks.len(),
            names = ?sinks.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            "enumerated output sinks"
        );
        Ok(sinks)
    }

    /// Identifier of the current default sink, or `None` when the server
    /// reports no default.
    pub fn default_sink(&self) -> Result<Option<String>> {
        let output = self.invoke(&["get-default-sink"], false)?;
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if name.is_empty() {
            warn!("audio server reported no default sink");
            Ok(None)
        } else {
            debug!(sink = %name, "current default sink");
            Ok(Some(name))
        }
    }

    /// Make `name` the default sink.
    pub fn set_default_sink(&self, name: &str) -> Result<()> {
        self.invoke(&["set-default-sink", name], true)?;
        debug!(sink = %name, "switched default sink");
        Ok(())
    }

    /// Run one pactl command, failing on launch errors and non-zero exits.
    fn invoke(&self, args: &[&str], switching: bool) -> Result<Output> {
        let command = self.render(args);
        debug!(command = %command, "invoking pactl");

        let output = self
            .runner
            .run(&self.binary, args)
            .map_err(|source| PactlError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(command = %command, status = %output.status, stderr = %stderr, "pactl failed");
            return Err(if switching {
                PactlError::Switch {
                    command,
                    status: output.status,
                    stderr,
                }
            } else {
                PactlError::Query {
                    command,
                    status: output.status,
                    stderr,
                }
            });
        }

        debug!(command = %command, status = %output.status, "pactl succeeded");
        Ok(output)
    }

    fn render(&self, args: &[&str]) -> String {
        let mut command = self.binary.clone();
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        command
    }
}
