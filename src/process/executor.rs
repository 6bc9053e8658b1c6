use std::process::{Command, Stdio};

use super::{signal, ProcessError};
use crate::flags::Flags;
use crate::path::PathExpander;

/// Launches external programs with inherited stdio and blocks until the
/// child reaches a terminal state. A merely stopped child keeps the wait
/// blocked.
#[derive(Clone)]
pub struct ProcessExecutor {
    quiet_mode: bool,
    path_expander: PathExpander,
}

impl ProcessExecutor {
    pub fn new(flags: &Flags) -> Result<Self, ProcessError> {
        Ok(ProcessExecutor {
            quiet_mode: flags.is_set("quiet"),
            path_expander: PathExpander::new(),
        })
    }

    /// Runs `args` as an external program, `args[0]` being its name or path.
    /// Launch failures are reported and never terminate the loop.
    pub fn spawn_process(&self, args: &[&str]) -> Result<(), ProcessError> {
        let expanded_args: Vec<String> = args.iter().map(|&arg| self.expand_arg(arg)).collect();

        let mut command = Command::new(&expanded_args[0]);
        command
            .args(&expanded_args[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(std::env::vars());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    if !self.quiet_mode {
                        eprintln!("murex: command not found: {}", args[0]);
                    }
                    return Ok(());
                }
                return Err(e.into());
            }
        };

        signal::install_wait_handler()?;

        match child.wait() {
            Ok(_status) => Ok(()),
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Err(ProcessError::CommandNotFound(args[0].to_string()))
                } else {
                    Err(e.into())
                }
            }
        }
    }

    fn expand_arg(&self, arg: &str) -> String {
        if arg.contains('~') {
            self.path_expander
                .expand(arg)
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|_| arg.to_owned())
        } else {
            arg.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_executor() -> ProcessExecutor {
        let mut flags = Flags::new();
        flags.parse(&["-q".to_string()]).unwrap();
        ProcessExecutor::new(&flags).unwrap()
    }

    #[test]
    fn runs_a_known_program_to_completion() {
        let executor = quiet_executor();
        assert!(executor.spawn_process(&["true"]).is_ok());
    }

    #[test]
    fn passes_the_full_argument_vector() {
        let executor = quiet_executor();
        assert!(executor.spawn_process(&["true", "--ignored", "args"]).is_ok());
    }

    #[test]
    fn missing_program_continues_without_error() {
        let executor = quiet_executor();
        let result = executor.spawn_process(&["murex-definitely-not-a-command"]);
        assert!(result.is_ok());
    }
}
