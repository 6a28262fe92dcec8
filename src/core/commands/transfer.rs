use std::path::{Path, PathBuf};

use super::{CommandError, Context, Flow, UnaryCommand};

pub struct MvCommand;
pub struct CpCommand;

fn source_and_destination(arg: Option<&str>) -> Result<(&str, &str), CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument("source> <destination"))?;
    let tokens: Vec<&str> = arg.split_whitespace().collect();

    match tokens.as_slice() {
        [source, destination] => Ok((*source, *destination)),
        _ => Err(CommandError::MalformedArgument(format!(
            "expected <source> <destination>, got {} operand(s)",
            tokens.len()
        ))),
    }
}

fn target_path(ctx: &Context<'_>, source: &Path, destination: PathBuf) -> PathBuf {
    if ctx.fs.is_dir(&destination) {
        if let Some(name) = source.file_name() {
            return destination.join(name);
        }
    }
    destination
}

fn transfer_error(source: &Path, target: &Path) -> impl FnOnce(std::io::Error) -> CommandError {
    let context = format!("{} -> {}", source.display(), target.display());
    move |err| CommandError::Filesystem {
        context: Some(context),
        source: err,
    }
}

impl UnaryCommand for MvCommand {
    fn execute(&self, ctx: &mut Context<'_>, arg: Option<&str>) -> Result<Flow, CommandError> {
        let (source, destination) = source_and_destination(arg)?;
        let source = ctx.resolve(source)?;
        let target = target_path(ctx, &source, ctx.resolve(destination)?);

        ctx.fs
            .rename(&source, &target)
            .map_err(transfer_error(&source, &target))?;
        Ok(Flow::Continue)
    }
}

impl UnaryCommand for CpCommand {
    fn execute(&self, ctx: &mut Context<'_>, arg: Option<&str>) -> Result<Flow, CommandError> {
        let (source, destination) = source_and_destination(arg)?;
        let source = ctx.resolve(source)?;
        if ctx.fs.is_dir(&source) {
            return Err(CommandError::NotAFile(source));
        }
        let target = target_path(ctx, &source, ctx.resolve(destination)?);
        // copying onto itself would truncate the source
        if ctx.fs.is_same_file(&source, &target) {
            return Err(CommandError::SameFile(source, target));
        }

        ctx.fs
            .copy(&source, &target)
            .map_err(transfer_error(&source, &target))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_line;
    use crate::testutil::Harness;
    use std::fs;

    #[test]
    fn test_split_operands() {
        assert_eq!(source_and_destination(Some("a b")).unwrap(), ("a", "b"));
        assert_eq!(source_and_destination(Some("  a \t b ")).unwrap(), ("a", "b"));
        assert!(matches!(
            source_and_destination(Some("only")),
            Err(CommandError::MalformedArgument(_))
        ));
        assert!(matches!(
            source_and_destination(Some("a b c")),
            Err(CommandError::MalformedArgument(_))
        ));
        assert!(matches!(
            source_and_destination(None),
            Err(CommandError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_mv_renames() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "content").unwrap();

        let mut harness = Harness::new();
        harness.run(&format!("mv {} {}", a.display(), b.display()));

        assert_eq!(harness.err(), "");
        assert!(!a.exists());
        assert_eq!(fs::read_to_string(&b).unwrap(), "content");
    }

    #[test]
    fn test_mv_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let sub = dir.path().join("sub");
        fs::write(&a, "content").unwrap();
        fs::create_dir(&sub).unwrap();

        let mut harness = Harness::new();
        harness.run(&format!("mv {} {}", a.display(), sub.display()));

        assert!(sub.join("a.txt").exists());
        assert!(!a.exists());
    }

    #[test]
    fn test_mv_single_operand_is_malformed() {
        let mut harness = Harness::new();
        let command = parse_line("mv lonely.txt").unwrap();
        assert!(matches!(
            harness.execute(&command),
            Err(CommandError::MalformedArgument(_))
        ));
    }

    #[test]
    fn test_cp_copies_and_keeps_source() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "copy me").unwrap();

        let mut harness = Harness::new();
        harness.run(&format!("cp {} {}", a.display(), b.display()));

        assert_eq!(harness.err(), "");
        assert_eq!(fs::read_to_string(&a).unwrap(), "copy me");
        assert_eq!(fs::read_to_string(&b).unwrap(), "copy me");
    }

    #[test]
    fn test_cp_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let sub = dir.path().join("sub");
        fs::write(&a, "x").unwrap();
        fs::create_dir(&sub).unwrap();

        let mut harness = Harness::new();
        harness.run(&format!("cp {} {}", a.display(), sub.display()));

        assert_eq!(fs::read_to_string(sub.join("a.txt")).unwrap(), "x");
    }

    #[test]
    fn test_cp_onto_itself_keeps_content() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "precious").unwrap();

        let mut harness = Harness::new();
        harness.run(&format!("cp {} {}", a.display(), a.display()));
        assert_eq!(
            harness.err(),
            format!("cp: '{}' and '{}' are the same file\n", a.display(), a.display())
        );
        assert_eq!(fs::read_to_string(&a).unwrap(), "precious");

        harness.clear_output();
        harness.run(&format!("cp {} {}", a.display(), dir.path().display()));
        assert!(harness.err().contains("are the same file"), "{}", harness.err());
        assert_eq!(fs::read_to_string(&a).unwrap(), "precious");

        let command = parse_line(&format!("cp {} {}", a.display(), dir.path().display())).unwrap();
        assert!(matches!(harness.execute(&command), Err(CommandError::SameFile(_, _))));
    }

    #[test]
    fn test_cp_directory_source_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        let mut harness = Harness::new();
        let command = parse_line(&format!("cp {} {}", sub.display(), dir.path().join("copy").display())).unwrap();
        assert!(matches!(harness.execute(&command), Err(CommandError::NotAFile(_))));
    }

    #[test]
    fn test_cp_missing_source_reports_both_paths() {
        let dir = tempfile::tempdir().unwrap();
        let mut harness = Harness::new();
        harness.run(&format!(
            "cp {} {}",
            dir.path().join("ghost").display(),
            dir.path().join("copy").display()
        ));

        let err = harness.err();
        assert!(err.starts_with("cp: "));
        assert!(err.contains("->"));
    }
}
