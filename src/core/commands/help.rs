use super::{Command, CommandError, LoopSignal};

/// Prints a usage summary naming every registered builtin.
#[derive(Clone)]
pub struct HelpCommand {
    builtin_names: Vec<String>,
}

impl HelpCommand {
    pub fn new(builtin_names: Vec<String>) -> Self {
        Self { builtin_names }
    }

    fn usage_text(&self) -> String {
        let mut text = String::from(
            "murex, an interactive command interpreter\n\
             Type program names and arguments, and hit enter.\n\
             The following are built in:\n",
        );
        for name in &self.builtin_names {
            text.push_str("  ");
            text.push_str(name);
            text.push('\n');
        }
        text.push_str("Use the man command for information on other programs.\n");
        text
    }
}

impl Command for HelpCommand {
    fn execute(&self, _args: &[String]) -> Result<LoopSignal, CommandError> {
        print!("{}", self.usage_text());
        Ok(LoopSignal::Continue)
    }
}
