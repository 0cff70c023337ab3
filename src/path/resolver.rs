use std::path::{Component, Path, PathBuf};

/// Resolve a navigation token against the current directory.
///
/// A token made up solely of dots ascends one parent level per dot, clamped
/// at the filesystem root. A token starting with a separator is absolute.
/// Anything else is joined onto `current`. The result is normalized
/// lexically; no filesystem I/O happens here.
pub fn resolve(current: &Path, token: &str) -> PathBuf {
    let token = token.replace('\\', "/");

    if !token.is_empty() && token.chars().all(|c| c == '.') {
        return ascend(current, token.len());
    }

    let joined = if token.starts_with('/') {
        PathBuf::from(&token)
    } else {
        current.join(&token)
    };
    normalize(&joined)
}

/// Collapse `.` and `..` segments without touching the filesystem.
/// `..` at the root is dropped rather than erroring.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => out.push(comp.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Whether the resolved path exists and can be navigated into.
pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}

fn ascend(current: &Path, levels: usize) -> PathBuf {
    let mut dir = normalize(current);
    for _ in 0..levels {
        // pop() is false once we hit the root
        if !dir.pop() {
            break;
        }
    }
    dir
}
