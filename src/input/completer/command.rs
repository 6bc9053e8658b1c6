use std::{collections::BTreeSet, env, fs};

use rustyline::completion::Pair;

/// Completes the first word of a line from the builtin names and the
/// executables found on `PATH`.
#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new(builtins: Vec<String>) -> Self {
        let mut completer = Self {
            commands: BTreeSet::new(),
        };
        completer.commands.extend(builtins);
        completer.scan_path();
        completer
    }

    fn scan_path(&mut self) {
        let Some(path_var) = env::var_os("PATH") else {
            return;
        };
        for dir in env::split_paths(&path_var) {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                let is_program = entry
                    .file_type()
                    .map(|t| t.is_file() || t.is_symlink())
                    .unwrap_or(false);
                if is_program {
                    if let Some(name) = entry.file_name().to_str() {
                        self.commands.insert(name.to_string());
                    }
                }
            }
        }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        let prefix = prefix.trim();
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_always_candidates() {
        let completer = CommandCompleter::new(vec!["cd".to_string(), "exit".to_string()]);
        let matches = completer.complete_command("c");
        assert!(matches.iter().any(|p| p.replacement == "cd"));
    }

    #[test]
    fn empty_prefix_matches_everything_known() {
        let completer = CommandCompleter::new(vec!["help".to_string()]);
        let matches = completer.complete_command("");
        assert!(matches.iter().any(|p| p.replacement == "help"));
    }

    #[test]
    fn candidates_are_sorted_and_unique() {
        let completer =
            CommandCompleter::new(vec!["mv".to_string(), "mv".to_string(), "ls".to_string()]);
        let matches = completer.complete_command("");
        let names: Vec<&str> = matches.iter().map(|p| p.replacement.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }
}
