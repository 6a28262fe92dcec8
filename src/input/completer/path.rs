use std::{fs, path::PathBuf};

use rustyline::completion::Pair;

use crate::path::PathExpander;

#[derive(Clone)]
pub struct PathCompleter {
    expander: PathExpander,
}

impl PathCompleter {
    pub fn new(expander: PathExpander) -> Self {
        Self { expander }
    }

    // hidden entries only once a `.` is typed
    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir_part, prefix) = match incomplete.rfind('/') {
            Some(i) => incomplete.split_at(i + 1),
            None => ("", incomplete),
        };

        let search_dir = if dir_part.is_empty() {
            PathBuf::from(".")
        } else {
            self.expander
                .expand(dir_part)
                .unwrap_or_else(|_| PathBuf::from(dir_part))
        };

        let Ok(entries) = fs::read_dir(&search_dir) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(prefix) || (prefix.is_empty() && name.starts_with('.')) {
                    return None;
                }

                let candidate = format!("{}{}", dir_part, name);
                Some(if entry.path().is_dir() {
                    Pair {
                        display: format!("{}/", name),
                        replacement: format!("{}/", candidate),
                    }
                } else {
                    Pair {
                        display: name,
                        replacement: format!("{} ", candidate),
                    }
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}
