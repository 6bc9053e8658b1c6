use std::fs;
use std::path::Path;

use super::{Command, CommandError, LoopSignal};
use crate::core::fsinfo;

const USAGE: &str = "\
Usage: ls [OPTION]... [FILE]...
List information about the FILEs (the current directory by default).
Sort entries alphabetically if none of -cftuvSUX nor --sort is specified.
  -a, --all        do not ignore entries starting with .
  -l               use a long listing format
";

/// Whether dotfiles appear and which format each entry gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListOptions {
    all: bool,
    long: bool,
}

impl ListOptions {
    const BARE: Self = Self {
        all: false,
        long: false,
    };

    /// Reads a short-option bundle such as `-al`. Characters other than
    /// `a` and `l` are ignored.
    fn from_bundle(bundle: &str) -> Self {
        Self {
            all: bundle.contains('a'),
            long: bundle.contains('l'),
        }
    }

    fn requests_listing(&self) -> bool {
        self.all || self.long
    }
}

/// Lists directory contents with optional detail and hidden-entry
/// visibility. The flag surface is a deliberately narrow subset of the
/// conventional listing tools: `-a`, `-l`, combined bundles, and `--help`.
#[derive(Clone)]
pub struct LsCommand;

impl Default for LsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl LsCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for LsCommand {
    fn execute(&self, args: &[String]) -> Result<LoopSignal, CommandError> {
        let base = Path::new(".");
        let lines = match args.first().map(String::as_str) {
            None => render_directory(base, ListOptions::BARE)?,
            Some("--help") => {
                print!("{}", USAGE);
                return Ok(LoopSignal::Continue);
            }
            Some(bundle) if bundle.starts_with('-') => {
                let options = ListOptions::from_bundle(bundle);
                if !options.requests_listing() {
                    // Unknown bundles list nothing.
                    return Ok(LoopSignal::Continue);
                }
                match args.get(1) {
                    Some(target) => render_target(base, target, options)?,
                    None => render_directory(base, options)?,
                }
            }
            Some(target) => render_target(base, target, ListOptions::BARE)?,
        };

        for line in lines {
            println!("{}", line);
        }
        Ok(LoopSignal::Continue)
    }
}

/// Renders the entries of `dir`: one space-separated line of names in bare
/// mode, one detail line per entry in long mode.
fn render_directory(dir: &Path, options: ListOptions) -> Result<Vec<String>, CommandError> {
    let mut names = Vec::new();
    let mut lines = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !options.all && name.starts_with('.') {
            continue;
        }
        if options.long {
            let meta = fs::symlink_metadata(entry.path())?;
            lines.push(fsinfo::detail_line(&name, &meta));
        } else {
            names.push(name);
        }
    }
    if !options.long {
        lines.push(names.join(" "));
    }
    Ok(lines)
}

/// Resolves `target` as an entry of `dir`: a directory gets its contents
/// rendered, any other entry gets a single line, an unknown name gets a
/// not-found message.
fn render_target(
    dir: &Path,
    target: &str,
    options: ListOptions,
) -> Result<Vec<String>, CommandError> {
    match find_entry(dir, target)? {
        Some(meta) if meta.is_dir() => render_directory(&dir.join(target), options),
        Some(meta) if options.long => Ok(vec![fsinfo::detail_line(target, &meta)]),
        Some(_) => Ok(vec![target.to_string()]),
        None => Ok(vec!["No such file or directory".to_string()]),
    }
}

/// Looks `name` up among the entries of `dir`, with lstat semantics.
fn find_entry(dir: &Path, name: &str) -> Result<Option<fs::Metadata>, CommandError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy() == name {
            return Ok(Some(fs::symlink_metadata(entry.path())?));
        }
    }
    Ok(None)
}
