use crate::error::ShellError;
use std::path::PathBuf;

#[derive(Clone)]
pub struct PathExpander;

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    /// Expands a leading `~` or `~/` to the home directory. `~user` forms
    /// pass through untouched.
    pub fn expand(&self, path: &str) -> Result<PathBuf, ShellError> {
        match path.strip_prefix('~') {
            None => Ok(PathBuf::from(path)),
            Some("") => dirs::home_dir().ok_or(ShellError::HomeDirNotFound),
            Some(rest) => match rest.strip_prefix('/') {
                Some(tail) => {
                    let mut home = dirs::home_dir().ok_or(ShellError::HomeDirNotFound)?;
                    home.push(tail);
                    Ok(home)
                }
                None => Ok(PathBuf::from(path)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through() {
        let expander = PathExpander::new();
        assert_eq!(
            expander.expand("/usr/bin").unwrap(),
            PathBuf::from("/usr/bin")
        );
        assert_eq!(expander.expand("rel/path").unwrap(), PathBuf::from("rel/path"));
    }

    #[test]
    fn bare_tilde_expands_to_home() {
        let expander = PathExpander::new();
        assert_eq!(expander.expand("~").unwrap(), dirs::home_dir().unwrap());
    }

    #[test]
    fn tilde_slash_prefixes_home() {
        let expander = PathExpander::new();
        let expanded = expander.expand("~/notes.txt").unwrap();
        assert_eq!(expanded, dirs::home_dir().unwrap().join("notes.txt"));
    }

    #[test]
    fn tilde_user_forms_pass_through() {
        let expander = PathExpander::new();
        assert_eq!(
            expander.expand("~root/x").unwrap(),
            PathBuf::from("~root/x")
        );
    }
}
