use std::env;

use super::{Command, CommandError, LoopSignal};
use crate::path::PathExpander;

/// Changes the process working directory. A missing or unusable operand is
/// reported and leaves the directory untouched.
#[derive(Clone)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String]) -> Result<LoopSignal, CommandError> {
        let Some(target) = args.first() else {
            eprintln!("murex: expected argument to \"cd\"");
            return Ok(LoopSignal::Continue);
        };

        let expanded = self
            .path_expander
            .expand(target)
            .map_err(|e| CommandError::ExecutionError(e.to_string()))?;

        if let Err(e) = env::set_current_dir(&expanded) {
            eprintln!("murex: cd: {}: {}", target, e);
        }
        Ok(LoopSignal::Continue)
    }
}
