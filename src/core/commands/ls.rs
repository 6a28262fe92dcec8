use std::io::Write;
use std::path::PathBuf;

use super::{CommandError, Context, Flow, UnaryCommand};

pub struct LsCommand;

impl UnaryCommand for LsCommand {
    fn execute(&self, ctx: &mut Context<'_>, arg: Option<&str>) -> Result<Flow, CommandError> {
        let path = match arg.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => ctx.resolve(raw)?,
            None => PathBuf::from("."),
        };

        if ctx.fs.is_file(&path) {
            writeln!(ctx.out, "{}", path.display())?;
            return Ok(Flow::Continue);
        }

        let entries = ctx.fs.list(&path).map_err(CommandError::at(&path))?;
        for entry in entries {
            if entry.is_dir {
                writeln!(ctx.out, "{}/", ctx.highlighter.highlight_directory(&entry.name))?;
            } else {
                writeln!(ctx.out, "{}", entry.name)?;
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use crate::testutil::{cwd_lock, Harness};
    use std::fs;

    #[test]
    fn test_ls_sorted_with_directory_marker() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("zeta.txt"), "").unwrap();
        fs::write(dir.path().join("alpha.txt"), "").unwrap();
        fs::create_dir(dir.path().join("mid")).unwrap();

        let mut harness = Harness::new();
        harness.run(&format!("ls {}", dir.path().display()));

        assert_eq!(harness.out(), "alpha.txt\nmid/\nzeta.txt\n");
        assert_eq!(harness.err(), "");
    }

    #[test]
    fn test_ls_empty_directory_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut harness = Harness::new();
        harness.run(&format!("ls {}", dir.path().display()));
        assert_eq!(harness.out(), "");
        assert_eq!(harness.err(), "");
    }

    #[test]
    fn test_ls_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut harness = Harness::new();
        harness.run(&format!("ls {}", dir.path().join("nope").display()));
        assert!(harness.err().starts_with("ls: "));
    }

    #[test]
    fn test_ls_on_file_prints_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("one.txt");
        fs::write(&file, "1").unwrap();

        let mut harness = Harness::new();
        harness.run(&format!("ls {}", file.display()));
        assert_eq!(harness.out(), format!("{}\n", file.display()));
    }

    #[test]
    fn test_ls_without_argument_matches_dot() {
        let _guard = cwd_lock();
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b"), "").unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();

        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let mut harness = Harness::new();
        harness.run("ls");
        let bare = harness.out();
        harness.clear_output();
        harness.run("ls .");
        let dot = harness.out();
        harness.clear_output();
        harness.run("ls ");
        let blank = harness.out();

        std::env::set_current_dir(previous).unwrap();

        assert_eq!(bare, "a/\nb\n");
        assert_eq!(bare, dot);
        assert_eq!(bare, blank);
    }
}
