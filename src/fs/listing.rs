use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use super::{FailureKind, OperationResult, RULE};

#[derive(Debug, Clone)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_dir: bool,
    /// `None` for directories, matching the `-` shown in the listing.
    pub size: Option<u64>,
    pub modified: SystemTime,
}

/// Entries of `dir` sorted by name. Recomputed on every call; there is no
/// cached iterator state to invalidate.
pub fn list_directory(dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let meta = entry.metadata()?;
        entries.push(DirEntryInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: meta.is_dir(),
            size: if meta.is_dir() { None } else { Some(meta.len()) },
            modified: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// The `ls` table: type, size, modification time and name per entry.
pub fn render_listing(dir: &Path) -> OperationResult {
    let entries = match list_directory(dir) {
        Ok(entries) => entries,
        Err(e) => {
            return OperationResult::Failure(
                FailureKind::Io,
                format!("Error listing files: {}", e),
            );
        }
    };

    let mut out = String::from("Directory contents:\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str("Type       Size        Modified         Name\n");
    out.push_str(RULE);
    out.push('\n');
    for entry in &entries {
        let kind = if entry.is_dir { "DIR " } else { "FILE" };
        let size = match entry.size {
            Some(bytes) => format!("{:8}B", bytes),
            None => "-".to_string(),
        };
        let modified: DateTime<Local> = entry.modified.into();
        out.push_str(&format!(
            "{:<9} {:<10} {:<15} {}\n",
            kind,
            size,
            modified.format("%Y-%m-%d %H:%M"),
            entry.name
        ));
    }
    out.push_str(RULE);
    OperationResult::Success(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("conch-ls-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_entries_sorted_by_name() {
        let dir = scratch_dir("sorted");
        fs::write(dir.join("zeta.txt"), "zz").unwrap();
        fs::create_dir(dir.join("alpha")).unwrap();
        fs::write(dir.join("mid.txt"), "m").unwrap();

        let entries = list_directory(&dir).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mid.txt", "zeta.txt"]);

        assert!(entries[0].is_dir);
        assert_eq!(entries[0].size, None);
        assert_eq!(entries[2].size, Some(2));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_listing_restarts_fresh_each_call() {
        let dir = scratch_dir("restart");
        fs::write(dir.join("a.txt"), "x").unwrap();
        assert_eq!(list_directory(&dir).unwrap().len(), 1);

        fs::write(dir.join("b.txt"), "x").unwrap();
        assert_eq!(list_directory(&dir).unwrap().len(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_render_listing_layout() {
        let dir = scratch_dir("render");
        fs::write(dir.join("f.txt"), "hello").unwrap();
        fs::create_dir(dir.join("sub")).unwrap();

        let result = render_listing(&dir);
        assert!(result.is_success());
        let text = result.message().to_string();
        assert!(text.starts_with("Directory contents:\n"));
        assert!(text.contains("Type       Size        Modified         Name"));
        assert!(text.contains("FILE"));
        assert!(text.contains("DIR "));
        assert!(text.contains("f.txt"));
        assert!(text.contains(&format!("{:8}B", 5)));
        assert!(text.ends_with(RULE));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_render_listing_missing_dir_fails() {
        let result = render_listing(Path::new("/definitely/not/here"));
        assert_eq!(result.failure_kind(), Some(FailureKind::Io));
    }
}
