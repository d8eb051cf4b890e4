use std::collections::BTreeSet;
use std::path::PathBuf;

/// Directory names pruned on every walk, in addition to user-supplied names
pub const DEFAULT_IGNORED_NAMES: [&str; 4] = [".git", "node_modules", "venv", "env"];

/// Extensions (with leading dot, case-sensitive) eligible for content dumping
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 11] = [
    ".js", ".py", ".c", ".h", ".go", ".html", ".css", ".scss", ".txt", ".json", ".md",
];

/// Connector glyphs used when rendering tree lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectorStyle {
    /// `└── ` on every entry, blank filler
    #[default]
    Plain,
    /// `├── ` for directories, `└── ` for files, `│   ` filler
    Bars,
}

impl ConnectorStyle {
    /// Connector drawn in front of the entry's own name
    pub const fn leaf(self, is_dir: bool) -> &'static str {
        match (self, is_dir) {
            (Self::Bars, true) => "├── ",
            _ => "└── ",
        }
    }

    /// 4-column padding drawn for each ancestor level
    pub const fn filler(self) -> &'static str {
        match self {
            Self::Plain => "    ",
            Self::Bars => "│   ",
        }
    }
}

/// Per-invocation traversal configuration
///
/// Built once and never mutated while a walk is running. The default ignore
/// set is copied in at construction, so merging user names never touches
/// shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Directory to walk
    pub root: PathBuf,
    /// Whether dot-prefixed entries are visited
    pub include_hidden: bool,
    /// Directory base names whose subtrees are pruned
    pub ignored_names: BTreeSet<String>,
    /// Extensions eligible for content dumping
    pub allowed_extensions: BTreeSet<String>,
    /// Glyph set for tree lines
    pub style: ConnectorStyle,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self::new(".")
    }
}

impl TraversalOptions {
    /// Options for `root` with the default ignore set and allow-list
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_hidden: false,
            ignored_names: DEFAULT_IGNORED_NAMES.iter().map(ToString::to_string).collect(),
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            style: ConnectorStyle::default(),
        }
    }

    #[must_use]
    pub fn with_include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Unions a comma-separated list of names into the ignore set.
    ///
    /// Elements are taken verbatim, so an empty input contributes a single
    /// empty-string name, which matches no directory.
    #[must_use]
    pub fn with_extra_ignores(mut self, csv: &str) -> Self {
        self.ignored_names
            .extend(csv.split(',').map(ToString::to_string));
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ConnectorStyle) -> Self {
        self.style = style;
        self
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_names.contains(name)
    }

    pub fn is_allowed_extension(&self, ext: &str) -> bool {
        self.allowed_extensions.contains(ext)
    }
}
