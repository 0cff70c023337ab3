use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use super::{FailureKind, OperationResult, RemovalOutcome, RULE};
use crate::path;

/// Create an empty file. Opening an existing file without truncation makes
/// this idempotent.
pub fn create_file(dir: &Path, name: &str) -> OperationResult {
    let target = dir.join(name);
    match OpenOptions::new().write(true).create(true).open(&target) {
        Ok(_) => OperationResult::Success(format!("File created: {}", target.display())),
        Err(e) => {
            OperationResult::Failure(FailureKind::Io, format!("Error creating file: {}", e))
        }
    }
}

/// Replace the file's content entirely (truncate-then-write, not append).
/// One matching layer of surrounding quotes is stripped from `content`.
pub fn write_file(dir: &Path, name: &str, content: &str) -> OperationResult {
    let target = dir.join(name);
    match fs::write(&target, strip_quotes(content)) {
        Ok(()) => {
            OperationResult::Success(format!("Content written to '{}' successfully", name))
        }
        Err(e) => {
            OperationResult::Failure(FailureKind::Io, format!("Error writing to file: {}", e))
        }
    }
}

/// Strip one layer of matching surrounding quote characters, if present.
pub fn strip_quotes(content: &str) -> &str {
    let bytes = content.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &content[1..content.len() - 1];
        }
    }
    content
}

pub fn read_file(dir: &Path, name: &str) -> OperationResult {
    let target = dir.join(name);
    if !target.exists() {
        return OperationResult::Failure(
            FailureKind::NotFound,
            format!("Error: File '{}' not found", name),
        );
    }
    if target.is_dir() {
        return OperationResult::Failure(
            FailureKind::WrongType,
            format!("Error: '{}' is a directory", name),
        );
    }
    match fs::read_to_string(&target) {
        Ok(content) => OperationResult::Success(format!(
            "Content of '{}':\n{}\n{}\n{}",
            name, RULE, content, RULE
        )),
        Err(e) => {
            OperationResult::Failure(FailureKind::Io, format!("Error reading file: {}", e))
        }
    }
}

/// Delete a file, or a directory with all its contents. The union semantics
/// of `rm` (files and directory trees alike) are deliberate; see the pinned
/// tests before splitting this in two.
pub fn delete_file(dir: &Path, name: &str) -> OperationResult {
    let target = dir.join(name);
    if !target.exists() {
        return OperationResult::Failure(
            FailureKind::NotFound,
            format!("Error: File '{}' not found", name),
        );
    }
    if target.is_dir() {
        match fs::remove_dir_all(&target) {
            Ok(()) => OperationResult::Success(format!(
                "Directory '{}' and its contents deleted successfully",
                name
            )),
            Err(e) => {
                OperationResult::Failure(FailureKind::Io, format!("Error deleting file: {}", e))
            }
        }
    } else {
        match fs::remove_file(&target) {
            Ok(()) => OperationResult::Success(format!("File '{}' deleted successfully", name)),
            Err(e) => {
                OperationResult::Failure(FailureKind::Io, format!("Error deleting file: {}", e))
            }
        }
    }
}

/// Create a directory; an already existing directory is not an error.
pub fn create_directory(dir: &Path, name: &str) -> OperationResult {
    let target = dir.join(name);
    match fs::create_dir(&target) {
        Ok(()) => OperationResult::Success(format!("Directory created: {}", target.display())),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && target.is_dir() => {
            OperationResult::Success(format!("Directory created: {}", target.display()))
        }
        Err(e) => OperationResult::Failure(
            FailureKind::Io,
            format!("Error creating directory: {}", e),
        ),
    }
}

/// Remove a directory, gated by the confirmation protocol unless `force`.
///
/// Check order matters: the Protected rail on the home directory and the
/// filesystem root wins over every flag combination, and the NotEmpty check
/// only applies to non-recursive removal.
pub fn remove_directory(
    dir: &Path,
    name: &str,
    force: bool,
    recursive: bool,
) -> RemovalOutcome {
    let target = path::normalize(&dir.join(name));

    if !target.exists() {
        return completed_failure(
            FailureKind::NotFound,
            format!("Error: Directory '{}' does not exist", name),
        );
    }
    if !target.is_dir() {
        return completed_failure(
            FailureKind::WrongType,
            format!("Error: '{}' is not a directory", name),
        );
    }
    if is_protected(&target) {
        return completed_failure(
            FailureKind::Protected,
            format!("Error: Cannot remove critical directory '{}'", name),
        );
    }
    if !recursive {
        match fs::read_dir(&target) {
            Ok(mut entries) => {
                if entries.next().is_some() {
                    return completed_failure(
                        FailureKind::NotEmpty,
                        format!(
                            "Error: Directory '{}' is not empty\nUse 'rmdir -r' to remove directory and its contents",
                            name
                        ),
                    );
                }
            }
            Err(e) => {
                return completed_failure(
                    FailureKind::Io,
                    format!("Error removing directory: {}", e),
                );
            }
        }
    }

    if !force {
        let what = if recursive {
            "directory and its contents"
        } else {
            "empty directory"
        };
        return RemovalOutcome::NeedsConfirmation {
            question: format!("Remove {}: {}? (y/n): ", what, name),
            target,
            recursive,
        };
    }

    RemovalOutcome::Completed(execute_removal(&target, recursive))
}

/// Complete a removal that was either forced or confirmed with 'y'.
pub fn execute_removal(target: &Path, recursive: bool) -> OperationResult {
    let shown = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.display().to_string());

    let outcome = if recursive {
        fs::remove_dir_all(target)
    } else {
        fs::remove_dir(target)
    };
    match outcome {
        Ok(()) if recursive => OperationResult::Success(format!(
            "Directory '{}' and its contents removed successfully",
            shown
        )),
        Ok(()) => {
            OperationResult::Success(format!("Empty directory '{}' removed successfully", shown))
        }
        Err(e) => OperationResult::Failure(
            FailureKind::Io,
            format!("Error completing directory removal: {}", e),
        ),
    }
}

fn completed_failure(kind: FailureKind, message: String) -> RemovalOutcome {
    RemovalOutcome::Completed(OperationResult::Failure(kind, message))
}

fn is_protected(target: &Path) -> bool {
    if target == Path::new("/") {
        return true;
    }
    dirs::home_dir()
        .map(|home| path::normalize(&home) == *target)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("conch-ops-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_create_file_is_idempotent() {
        let dir = scratch_dir("touch");
        assert!(create_file(&dir, "a.txt").is_success());

        fs::write(dir.join("a.txt"), "keep me").unwrap();
        assert!(create_file(&dir, "a.txt").is_success());
        assert_eq!(fs::read_to_string(dir.join("a.txt")).unwrap(), "keep me");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_then_read_strips_quotes() {
        let dir = scratch_dir("roundtrip");
        assert!(write_file(&dir, "test.txt", "\"hello\"").is_success());

        let result = read_file(&dir, "test.txt");
        assert!(result.is_success());
        assert_eq!(
            result.message(),
            format!("Content of 'test.txt':\n{}\nhello\n{}", RULE, RULE)
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_truncates_previous_content() {
        let dir = scratch_dir("truncate");
        write_file(&dir, "f.txt", "a much longer first version");
        write_file(&dir, "f.txt", "short");
        assert_eq!(fs::read_to_string(dir.join("f.txt")).unwrap(), "short");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_strip_quotes_single_matching_layer() {
        assert_eq!(strip_quotes("\"hello\""), "hello");
        assert_eq!(strip_quotes("'hello'"), "hello");
        assert_eq!(strip_quotes("\"'hi'\""), "'hi'");
        assert_eq!(strip_quotes("\"unmatched'"), "\"unmatched'");
        assert_eq!(strip_quotes("plain"), "plain");
        assert_eq!(strip_quotes("\""), "\"");
    }

    #[test]
    fn test_read_missing_and_wrong_type() {
        let dir = scratch_dir("read-errors");
        assert_eq!(
            read_file(&dir, "ghost.txt").failure_kind(),
            Some(FailureKind::NotFound)
        );

        fs::create_dir(dir.join("sub")).unwrap();
        assert_eq!(
            read_file(&dir, "sub").failure_kind(),
            Some(FailureKind::WrongType)
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_delete_file_union_semantics() {
        let dir = scratch_dir("rm-union");

        fs::write(dir.join("plain.txt"), "x").unwrap();
        assert!(delete_file(&dir, "plain.txt").is_success());
        assert!(!dir.join("plain.txt").exists());

        // rm takes whole directory trees too, by design
        fs::create_dir_all(dir.join("tree/nested")).unwrap();
        fs::write(dir.join("tree/nested/f.txt"), "x").unwrap();
        let result = delete_file(&dir, "tree");
        assert!(result.is_success());
        assert!(result.message().contains("and its contents"));
        assert!(!dir.join("tree").exists());

        assert_eq!(
            delete_file(&dir, "ghost").failure_kind(),
            Some(FailureKind::NotFound)
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_create_directory_is_idempotent() {
        let dir = scratch_dir("mkdir");
        assert!(create_directory(&dir, "sub").is_success());
        assert!(create_directory(&dir, "sub").is_success());
        assert!(dir.join("sub").is_dir());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_remove_directory_not_empty_without_recursive() {
        let dir = scratch_dir("rmdir-notempty");
        fs::create_dir(dir.join("full")).unwrap();
        fs::write(dir.join("full/f.txt"), "x").unwrap();

        let outcome = remove_directory(&dir, "full", false, false);
        match outcome {
            RemovalOutcome::Completed(result) => {
                assert_eq!(result.failure_kind(), Some(FailureKind::NotEmpty));
                assert!(result.message().contains("rmdir -r"));
            }
            other => panic!("expected NotEmpty failure, got {:?}", other),
        }
        // nothing was deleted
        assert!(dir.join("full/f.txt").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_remove_directory_missing_and_wrong_type() {
        let dir = scratch_dir("rmdir-errors");
        fs::write(dir.join("file.txt"), "x").unwrap();

        assert!(matches!(
            remove_directory(&dir, "ghost", true, true),
            RemovalOutcome::Completed(OperationResult::Failure(FailureKind::NotFound, _))
        ));
        assert!(matches!(
            remove_directory(&dir, "file.txt", true, true),
            RemovalOutcome::Completed(OperationResult::Failure(FailureKind::WrongType, _))
        ));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_remove_directory_protects_root_and_home() {
        assert!(matches!(
            remove_directory(Path::new("/"), ".", true, true),
            RemovalOutcome::Completed(OperationResult::Failure(FailureKind::Protected, _))
        ));

        if let Some(home) = dirs::home_dir() {
            if let (Some(parent), Some(name)) = (home.parent(), home.file_name()) {
                let outcome = remove_directory(
                    parent,
                    &name.to_string_lossy(),
                    true,
                    true,
                );
                assert!(matches!(
                    outcome,
                    RemovalOutcome::Completed(OperationResult::Failure(
                        FailureKind::Protected,
                        _
                    ))
                ));
            }
        }
    }

    #[test]
    fn test_remove_directory_asks_before_deleting() {
        let dir = scratch_dir("rmdir-confirm");
        fs::create_dir(dir.join("victim")).unwrap();

        let outcome = remove_directory(&dir, "victim", false, false);
        match outcome {
            RemovalOutcome::NeedsConfirmation {
                question,
                target,
                recursive,
            } => {
                assert_eq!(question, "Remove empty directory: victim? (y/n): ");
                assert!(!recursive);
                // still on disk until confirmed
                assert!(dir.join("victim").is_dir());
                assert!(execute_removal(&target, recursive).is_success());
                assert!(!dir.join("victim").exists());
            }
            other => panic!("expected confirmation request, got {:?}", other),
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_forced_recursive_removal_skips_confirmation() {
        let dir = scratch_dir("rmdir-force");
        fs::create_dir_all(dir.join("old/sub")).unwrap();
        fs::write(dir.join("old/sub/f.txt"), "x").unwrap();

        let outcome = remove_directory(&dir, "old", true, true);
        assert!(matches!(
            outcome,
            RemovalOutcome::Completed(OperationResult::Success(_))
        ));
        assert!(!dir.join("old").exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
