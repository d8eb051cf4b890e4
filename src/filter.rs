use crate::options::TraversalOptions;
use std::path::{Path, PathBuf};
use walkdir::DirEntry;

/// One filesystem node visited during a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Base name
    pub name: String,
    pub is_dir: bool,
    /// Path relative to the walk root
    pub relative_path: PathBuf,
    /// Number of path segments in `relative_path`
    pub depth: usize,
}

impl DirectoryEntry {
    /// Builds an entry from a walker item below `root`
    pub fn from_walk(entry: &DirEntry, root: &Path) -> Self {
        let relative_path = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path())
            .to_path_buf();

        Self {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: entry.file_type().is_dir(),
            depth: relative_path.components().count(),
            relative_path,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Outcome of evaluating an entry against the traversal options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Directory: render it and walk into it
    Descend,
    /// Directory: emit nothing for it or anything beneath it
    PruneSubtree,
    /// File: omit from output
    Skip,
    /// File: render or consider for dumping
    Include,
}

impl Decision {
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Descend | Self::Include)
    }
}

/// Hidden rule first, then the directory ignore list.
pub fn decide(entry: &DirectoryEntry, options: &TraversalOptions) -> Decision {
    if entry.is_hidden() && !options.include_hidden {
        return if entry.is_dir {
            Decision::PruneSubtree
        } else {
            Decision::Skip
        };
    }

    if entry.is_dir && options.is_ignored(&entry.name) {
        return Decision::PruneSubtree;
    }

    if entry.is_dir {
        Decision::Descend
    } else {
        Decision::Include
    }
}
