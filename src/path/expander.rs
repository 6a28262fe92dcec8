use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default)]
pub struct PathExpander {
    home: Option<PathBuf>,
}

impl PathExpander {
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    // `~user` is left as typed
    pub fn expand(&self, path: &str) -> io::Result<PathBuf> {
        if path == "~" {
            return self.home_dir();
        }
        match path.strip_prefix("~/") {
            Some(rest) => {
                let mut home_path = self.home_dir()?;
                for part in rest.split('/').filter(|part| !part.is_empty()) {
                    home_path.push(part);
                }
                Ok(home_path)
            }
            None => Ok(Path::new(path).to_path_buf()),
        }
    }

    pub fn home_dir(&self) -> io::Result<PathBuf> {
        self.home
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "home directory not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_untouched() {
        let expander = PathExpander::with_home("/home/test");
        assert_eq!(expander.expand("a/b.txt").unwrap(), PathBuf::from("a/b.txt"));
        assert_eq!(expander.expand("/etc").unwrap(), PathBuf::from("/etc"));
    }

    #[test]
    fn test_tilde_forms() {
        let expander = PathExpander::with_home("/home/test");
        assert_eq!(expander.expand("~").unwrap(), PathBuf::from("/home/test"));
        assert_eq!(
            expander.expand("~/docs//notes").unwrap(),
            PathBuf::from("/home/test/docs/notes")
        );
        assert_eq!(expander.expand("~bob/x").unwrap(), PathBuf::from("~bob/x"));
    }

    #[test]
    fn test_missing_home() {
        let expander = PathExpander::default();
        let err = expander.expand("~").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(expander.expand("plain").unwrap(), PathBuf::from("plain"));
    }
}
