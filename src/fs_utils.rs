use crate::error::{Result, TreeError};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Checks that `root` exists and is a directory
///
/// # Errors
///
/// - `TreeError::NotFound` if the path doesn't exist.
/// - `TreeError::NotADirectory` if it exists but isn't a directory.
/// - `TreeError::Io` for any other metadata failure.
pub fn ensure_directory(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TreeError::NotFound {
            path: root.to_path_buf(),
        },
        _ => TreeError::Io(e),
    })?;

    if !metadata.is_dir() {
        return Err(TreeError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    Ok(())
}

/// Name printed on the first line of a tree, without the trailing slash
///
/// This is the root's base name. Only `.` is resolved, to the working
/// directory's name; `..` and `/` are shown as written.
///
/// # Errors
///
/// Returns `TreeError::Io` if the working directory cannot be determined.
pub fn root_label(root: &Path) -> Result<String> {
    if root == Path::new(".") {
        let cwd = std::env::current_dir()?;
        return Ok(base_name(&cwd));
    }

    Ok(base_name(root))
}

fn base_name(path: &Path) -> String {
    path.components().next_back().map_or_else(
        || path.display().to_string(),
        |last| last.as_os_str().to_string_lossy().into_owned(),
    )
}

/// Suffix starting at the last `.` of a base name, if any
///
/// Unlike `Path::extension`, a leading dot counts: `.bashrc` yields `.bashrc`.
pub fn extension_of(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[idx..])
}

/// Reads a whole file into memory
///
/// # Errors
///
/// Returns `TreeError::ReadFailure` if the file can't be opened or read.
pub fn read_file_contents(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| TreeError::ReadFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Depth-first walker below `root`, siblings in file-name order, root excluded
pub fn walker(root: &Path) -> walkdir::IntoIter {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
}

/// Maps a mid-walk failure to the matching error kind
pub fn classify_walk_error(err: walkdir::Error) -> TreeError {
    if let Some(io_err) = err.io_error()
        && io_err.kind() == io::ErrorKind::PermissionDenied
        && let Some(path) = err.path()
    {
        return TreeError::PermissionDenied {
            path: path.to_path_buf(),
        };
    }

    TreeError::Walk(err)
}
