use super::{Command, CommandError, LoopSignal};

/// Signals the read-eval loop to terminate. Arguments are ignored.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String]) -> Result<LoopSignal, CommandError> {
        Ok(LoopSignal::Exit)
    }
}
