use std::fs;
use std::path::Path;

use super::{Command, CommandError, LoopSignal};

/// Relocates a single source to a single destination within the current
/// directory. A destination naming an existing directory receives the source
/// under the source's own name. Rename failures are not reported, and calls
/// with three or more operands perform nothing; both are kept limitations.
#[derive(Clone)]
pub struct MvCommand;

impl Default for MvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl MvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for MvCommand {
    fn execute(&self, args: &[String]) -> Result<LoopSignal, CommandError> {
        let Some(source) = args.first() else {
            eprintln!("murex: missing file operand");
            return Ok(LoopSignal::Continue);
        };
        let Some(destination) = args.get(1) else {
            eprintln!("mv: missing destination file operand after '{}'", source);
            return Ok(LoopSignal::Continue);
        };
        if args.len() > 2 {
            // Multiple sources are unsupported.
            return Ok(LoopSignal::Continue);
        }

        rename_entry(Path::new("."), source, destination);
        Ok(LoopSignal::Continue)
    }
}

/// Renames `source` to `destination`, both taken relative to `base`. One
/// trailing path separator on the destination is ignored when checking
/// whether it names a directory.
fn rename_entry(base: &Path, source: &str, destination: &str) {
    let destination = destination.strip_suffix('/').unwrap_or(destination);
    let target = if names_directory(base, destination) {
        format!("{}/{}", destination, source)
    } else {
        destination.to_string()
    };
    let _ = fs::rename(base.join(source), base.join(target));
}

/// True when an entry of `base` called `name` exists and is a directory
/// (lstat semantics: a symlink to a directory does not count).
fn names_directory(base: &Path, name: &str) -> bool {
    let Ok(entries) = fs::read_dir(base) else {
        return false;
    };
    entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy() == name)
        .any(|entry| {
            fs::symlink_metadata(entry.path())
                .map(|meta| meta.is_dir())
                .unwrap_or(false)
        })
}
