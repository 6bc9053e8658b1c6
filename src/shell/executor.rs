use std::env;

use crate::core::commands::LoopSignal;
use crate::error::ShellError;
use crate::tokenizer;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<LoopSignal, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str) -> Result<LoopSignal, ShellError> {
        let tokens = tokenizer::split_line(line);

        // Nothing typed is a no-op, not an error.
        let Some((name, rest)) = tokens.split_first() else {
            return Ok(LoopSignal::Continue);
        };
        let args: Vec<String> = rest.iter().map(|&s| s.to_string()).collect();

        let signal = self.executor.execute(name, &args)?;

        // The prompt tracks the working directory, which cd may have moved.
        self.current_dir = env::current_dir()?.to_string_lossy().to_string();

        Ok(signal)
    }
}
