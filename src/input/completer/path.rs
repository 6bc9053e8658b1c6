use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Completes filesystem paths for every word after the command name.
#[derive(Clone)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir, prefix) = split_input(incomplete);
        let mut matches = Vec::new();

        if let Ok(entries) = fs::read_dir(&dir) {
            for entry in entries.filter_map(Result::ok) {
                let Some(name) = entry.file_name().to_str().map(String::from) else {
                    continue;
                };
                if !name.starts_with(&prefix) {
                    continue;
                }
                matches.push(completion_pair(&dir, &name, entry.path().is_dir()));
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

/// Splits the typed text into the directory to search and the name prefix
/// to match within it.
fn split_input(incomplete: &str) -> (PathBuf, String) {
    if incomplete.is_empty() {
        return (PathBuf::from("."), String::new());
    }
    if incomplete.ends_with('/') {
        return (PathBuf::from(incomplete), String::new());
    }

    let path = Path::new(incomplete);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let prefix = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_string();
    (dir, prefix)
}

fn completion_pair(dir: &Path, name: &str, is_dir: bool) -> Pair {
    let full = if dir == Path::new(".") {
        name.to_string()
    } else {
        dir.join(name).to_string_lossy().into_owned()
    };

    if is_dir {
        Pair {
            display: format!("{}/", full),
            replacement: format!("{}/", full),
        }
    } else {
        Pair {
            display: full.clone(),
            replacement: format!("{} ", full),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_bare_names_against_the_current_directory() {
        let (dir, prefix) = split_input("READ");
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(prefix, "READ");
    }

    #[test]
    fn splits_nested_paths_at_the_last_component() {
        let (dir, prefix) = split_input("/usr/bi");
        assert_eq!(dir, PathBuf::from("/usr"));
        assert_eq!(prefix, "bi");
    }

    #[test]
    fn trailing_slash_searches_inside_the_directory() {
        let (dir, prefix) = split_input("/usr/");
        assert_eq!(dir, PathBuf::from("/usr/"));
        assert!(prefix.is_empty());
    }

    #[test]
    fn directories_complete_with_a_trailing_slash() {
        let pair = completion_pair(Path::new("."), "sub", true);
        assert_eq!(pair.replacement, "sub/");

        let pair = completion_pair(Path::new("."), "file.txt", false);
        assert_eq!(pair.replacement, "file.txt ");
    }
}
