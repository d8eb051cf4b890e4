//! # treescribe
//!
//! Renders a directory as a text tree, or dumps the contents of its source
//! files as fenced blocks, ready to paste into an LLM prompt or a review.
//!
//! ## Features
//!
//! - `tree`-style listing with `└── ` connectors, directories suffixed with `/`
//! - Hidden entries skipped unless asked for
//! - `.git`, `node_modules`, `venv` and `env` always pruned, plus any extra names
//! - Content mode: every `.md`, `.go`, `.py`, ... file in one text stream
//!
//! ## Usage
//!
//! ### As a Library
//!
//! ```no_run
//! use treescribe::{TraversalOptions, dump_contents, render_tree};
//!
//! let options = TraversalOptions::new("src").with_extra_ignores("target");
//!
//! let mut stdout = std::io::stdout();
//! if let Err(e) = render_tree(&options, &mut stdout) {
//!     println!("Error: {e}");
//! }
//!
//! match dump_contents(&options) {
//!     Ok(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
//!     Err(e) => println!("Error: {e}"),
//! }
//! ```
//!
//! ### As a CLI Tool
//!
//! ```bash
//! # Tree of the current directory
//! treescribe
//!
//! # Include dotfiles and skip build output
//! treescribe -p ~/project -i --ignore target,dist
//!
//! # Dump file contents instead of the tree
//! treescribe --output-contents
//! ```

pub mod dump;
pub mod error;
pub mod filter;
pub mod fs_utils;
pub mod options;
pub mod tree;

// Re-export main types and functions for convenience
pub use dump::{ContentBlock, dump_contents};
pub use error::{Result, TreeError};
pub use filter::{Decision, DirectoryEntry, decide};
pub use options::{
    ConnectorStyle, DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_IGNORED_NAMES, TraversalOptions,
};
pub use tree::{render_tree, render_tree_to_string};
