use crate::error::Result;
use crate::filter::{Decision, DirectoryEntry, decide};
use crate::fs_utils::{classify_walk_error, ensure_directory, root_label, walker};
use crate::options::{ConnectorStyle, TraversalOptions};
use log::{debug, trace};
use std::io::Write;

/// Writes the tree of `options.root` to `out`, one line per visible entry.
///
/// Lines are written as the walk proceeds. If the walk fails part-way, the
/// lines already written stay in `out` and the error is returned.
///
/// # Errors
///
/// - `TreeError::NotFound` / `TreeError::NotADirectory` for a bad root.
/// - `TreeError::PermissionDenied` or `TreeError::Walk` if a directory can't be listed.
/// - `TreeError::Io` if writing to `out` fails.
pub fn render_tree<W: Write>(options: &TraversalOptions, out: &mut W) -> Result<()> {
    let root = options.root.as_path();
    ensure_directory(root)?;

    writeln!(out, "{}/", root_label(root)?)?;
    debug!("Rendering tree of {}", root.display());

    let mut rendered = 0usize;
    let mut entries = walker(root);
    while let Some(item) = entries.next() {
        let item = item.map_err(classify_walk_error)?;
        let entry = DirectoryEntry::from_walk(&item, root);

        let decision = decide(&entry, options);
        if decision == Decision::PruneSubtree {
            debug!("Pruned {}", entry.relative_path.display());
            entries.skip_current_dir();
            continue;
        }
        if !decision.is_visible() {
            trace!("Skipped {}", entry.relative_path.display());
            continue;
        }

        writeln!(out, "{}", format_line(&entry, options.style))?;
        rendered += 1;
    }

    out.flush()?;
    debug!("Rendered {rendered} entries");
    Ok(())
}

/// Renders the tree into a string instead of a stream
///
/// # Errors
///
/// Same as [`render_tree`]; no partial output is returned on failure.
pub fn render_tree_to_string(options: &TraversalOptions) -> Result<String> {
    let mut buffer = Vec::new();
    render_tree(options, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// One tree line: a filler per ancestor level, the leaf connector, the name.
///
/// Only the entry's own depth is consulted, never its siblings.
pub fn format_line(entry: &DirectoryEntry, style: ConnectorStyle) -> String {
    let ancestors = entry.depth.saturating_sub(1);
    let mut line = String::with_capacity((ancestors + 1) * 4 + entry.name.len() + 1);

    for _ in 0..ancestors {
        line.push_str(style.filler());
    }
    line.push_str(style.leaf(entry.is_dir));
    line.push_str(&entry.name);
    if entry.is_dir {
        line.push('/');
    }

    line
}
