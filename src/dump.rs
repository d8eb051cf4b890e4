use crate::error::Result;
use crate::filter::{Decision, DirectoryEntry, decide};
use crate::fs_utils::{
    classify_walk_error, ensure_directory, extension_of, read_file_contents, walker,
};
use crate::options::TraversalOptions;
use log::{debug, trace};
use std::io::Write;
use std::path::PathBuf;

/// One dumped file: its path relative to the root and its raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub relative_path: PathBuf,
    pub raw_bytes: Vec<u8>,
}

impl ContentBlock {
    /// Appends `<path>:\n\n```\n<bytes>\n```\n\n` to `buffer`
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Io` if `buffer` rejects the write.
    pub fn write_to<W: Write>(&self, buffer: &mut W) -> Result<()> {
        write!(buffer, "{}:\n\n```\n", self.relative_path.display())?;
        buffer.write_all(&self.raw_bytes)?;
        buffer.write_all(b"\n```\n\n")?;
        Ok(())
    }
}

/// Collects every allow-listed file under `options.root` into one buffer.
///
/// Nothing is returned until the whole walk has completed; any walk or read
/// failure discards the buffer.
///
/// # Errors
///
/// - `TreeError::NotFound` / `TreeError::NotADirectory` for a bad root.
/// - `TreeError::PermissionDenied` or `TreeError::Walk` if a directory can't be listed.
/// - `TreeError::ReadFailure` if a matching file can't be read.
pub fn dump_contents(options: &TraversalOptions) -> Result<Vec<u8>> {
    let root = options.root.as_path();
    ensure_directory(root)?;
    debug!("Dumping contents of {}", root.display());

    let mut buffer = Vec::new();
    let mut dumped = 0usize;
    let mut entries = walker(root);
    while let Some(item) = entries.next() {
        let item = item.map_err(classify_walk_error)?;
        let entry = DirectoryEntry::from_walk(&item, root);

        match decide(&entry, options) {
            Decision::PruneSubtree => {
                debug!("Pruned {}", entry.relative_path.display());
                entries.skip_current_dir();
            }
            Decision::Skip | Decision::Descend => {}
            Decision::Include => {
                if !is_dumpable(&entry, options) {
                    trace!("Not allow-listed: {}", entry.relative_path.display());
                    continue;
                }

                let block = ContentBlock {
                    raw_bytes: read_file_contents(item.path())?,
                    relative_path: entry.relative_path,
                };
                block.write_to(&mut buffer)?;
                dumped += 1;
            }
        }
    }

    debug!("Dumped {dumped} files ({} bytes)", buffer.len());
    Ok(buffer)
}

/// Whether an included entry is a file whose extension is allow-listed
fn is_dumpable(entry: &DirectoryEntry, options: &TraversalOptions) -> bool {
    !entry.is_dir
        && extension_of(&entry.name).is_some_and(|ext| options.is_allowed_extension(ext))
}
