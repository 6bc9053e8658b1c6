use std::collections::BTreeMap;

mod cd;
mod exit;
mod help;
mod ls;
mod mv;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use ls::LsCommand;
pub use mv::MvCommand;

use crate::process::{ProcessError, ProcessExecutor};

/// Tells the read-eval loop whether to keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopSignal {
    Continue,
    Exit,
}

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    ExecutionError(String),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::ExecutionError(msg) => write!(f, "execution error: {}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "Process error: {}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

pub trait Command {
    fn execute(&self, args: &[String]) -> Result<LoopSignal, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Help(HelpCommand),
    Ls(LsCommand),
    Mv(MvCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String]) -> Result<LoopSignal, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args),
            CommandType::Exit(cmd) => cmd.execute(args),
            CommandType::Help(cmd) => cmd.execute(args),
            CommandType::Ls(cmd) => cmd.execute(args),
            CommandType::Mv(cmd) => cmd.execute(args),
        }
    }
}

/// Builtin registry plus the fallback to external dispatch. Builtins are
/// matched exactly and case-sensitively, and always shadow same-named
/// programs on the search path.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    process_executor: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new(flags: &crate::flags::Flags) -> Result<Self, CommandError> {
        let mut executor = Self {
            commands: BTreeMap::new(),
            process_executor: ProcessExecutor::new(flags)?,
        };

        executor.register("cd", CommandType::Cd(CdCommand::new()));
        executor.register("exit", CommandType::Exit(ExitCommand::new()));
        executor.register("ls", CommandType::Ls(LsCommand::new()));
        executor.register("mv", CommandType::Mv(MvCommand::new()));

        // help lists every builtin, itself included.
        let mut names: Vec<String> = executor.commands.keys().cloned().collect();
        names.push("help".to_string());
        names.sort();
        executor.register("help", CommandType::Help(HelpCommand::new(names)));

        Ok(executor)
    }

    fn register(&mut self, name: &str, command: CommandType) {
        let previous = self.commands.insert(name.to_string(), command);
        assert!(previous.is_none(), "duplicate builtin name: {}", name);
    }

    /// Runs `command` as a builtin when registered, otherwise hands the full
    /// argument vector to the process launcher.
    pub fn execute(&self, command: &str, args: &[String]) -> Result<LoopSignal, CommandError> {
        if let Some(cmd) = self.commands.get(command) {
            cmd.execute(args)
        } else {
            let mut full_args = vec![command];
            full_args.extend(args.iter().map(|s| s.as_str()));
            self.process_executor.spawn_process(&full_args)?;
            Ok(LoopSignal::Continue)
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn builtin_names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Flags;

    fn executor() -> CommandExecutor {
        CommandExecutor::new(&Flags::default()).unwrap()
    }

    #[test]
    fn registers_every_builtin() {
        let executor = executor();
        for name in ["cd", "exit", "help", "ls", "mv"] {
            assert!(executor.is_builtin(name), "missing builtin: {}", name);
        }
        assert_eq!(executor.builtin_names().len(), 5);
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let executor = executor();
        assert!(!executor.is_builtin("CD"));
        assert!(!executor.is_builtin("Exit"));
        assert!(!executor.is_builtin("l"));
        assert!(!executor.is_builtin(""));
    }

    #[test]
    fn exit_dispatches_to_the_builtin_not_the_launcher() {
        // Even a same-named program on PATH must never be consulted.
        let executor = executor();
        let signal = executor.execute("exit", &[]).unwrap();
        assert_eq!(signal, LoopSignal::Exit);
    }

    #[test]
    fn help_signals_continue() {
        let executor = executor();
        let signal = executor.execute("help", &[]).unwrap();
        assert_eq!(signal, LoopSignal::Continue);
    }

    #[test]
    #[should_panic(expected = "duplicate builtin name")]
    fn duplicate_registration_panics() {
        let mut executor = executor();
        executor.register("exit", CommandType::Exit(ExitCommand::new()));
    }

    #[test]
    fn command_error_display_is_nonempty() {
        let errors = vec![
            CommandError::InvalidArguments("bad args".to_string()),
            CommandError::ExecutionError("failed".to_string()),
            CommandError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "io")),
        ];
        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
