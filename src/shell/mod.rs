use std::env;

use rustyline::{history::FileHistory, Editor};

mod executor;

use crate::{
    core::commands::{CommandExecutor, LoopSignal},
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::ShellCompleter,
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) editor: Editor<ShellCompleter, FileHistory>,
    pub(crate) current_dir: String,
    pub(crate) highlighter: SyntaxHighlighter,
    pub(crate) flags: Flags,
    pub(crate) executor: CommandExecutor,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let executor = CommandExecutor::new(&flags)?;
        let completer = ShellCompleter::new(executor.builtin_names());
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));

        let current_dir = env::current_dir()?.to_string_lossy().to_string();
        let highlighter = SyntaxHighlighter::new(executor.builtin_names());

        // An interrupt prints an advisory; only `exit` or end-of-input
        // leave the loop.
        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to leave the shell");
        })?;

        Ok(Shell {
            editor,
            current_dir,
            highlighter,
            flags,
            executor,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = format!("{} > ", self.current_dir);
            match self.editor.readline(&prompt) {
                Ok(line) => match self.execute_command(&line) {
                    Ok(LoopSignal::Exit) => break,
                    Ok(LoopSignal::Continue) => {}
                    Err(e) => {
                        if !self.flags.is_set("quiet") {
                            eprintln!("{}", self.highlighter.highlight_error(&e.to_string()));
                        }
                    }
                },
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("Use 'exit' to leave the shell");
                    }
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => break,
                Err(e) => {
                    if !self.flags.is_set("quiet") {
                        eprintln!("{}", self.highlighter.highlight_error(&e.to_string()));
                    }
                    continue;
                }
            }
        }
        Ok(())
    }
}
