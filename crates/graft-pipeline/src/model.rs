//! Symbol graph model.
//!
//! [`Project`] holds the documented symbols the host's comment parser
//! produced for one build. Tag text is the unit plugins rewrite in place
//! during resolution; everything else is read-only as far as plugins are
//! concerned.

use std::collections::BTreeMap;

/// A named annotation block inside a [`Comment`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    /// Marker name without the `@` sigil (e.g. `"mermaid"`).
    pub name: String,
    /// Tag body text. Rewritten in place by plugins during resolution.
    pub text: String,
}

impl Tag {
    /// Create a tag from a marker name and body text.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A documentation comment owned by a [`Symbol`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comment {
    /// Ordered tag sequence. `None` when the comment carries no tag block
    /// at all, as opposed to an empty one.
    pub tags: Option<Vec<Tag>>,
}

impl Comment {
    /// Create a comment with the given tag sequence.
    pub fn with_tags(tags: Vec<Tag>) -> Self {
        Self { tags: Some(tags) }
    }
}

/// A documented entity in the symbol graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    /// Symbol name as it appears in generated documentation.
    pub name: String,
    /// Documentation comment, when the source carried one.
    pub comment: Option<Comment>,
}

impl Symbol {
    /// Create a symbol without a comment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
        }
    }

    /// Attach a comment, replacing any existing one.
    #[must_use]
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }

    /// Append a tag to this symbol's comment.
    ///
    /// The comment and its tag sequence are created when absent. Existing
    /// tags are always preserved; attaching never replaces the comment.
    pub fn attach_tag(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.comment
            .get_or_insert_with(Comment::default)
            .tags
            .get_or_insert_with(Vec::new)
            .push(Tag::new(name, text));
    }
}

/// The symbol graph for one build.
///
/// Symbols are keyed by a monotonically assigned id, so iteration order is
/// deterministic (insertion order) across builds with identical input.
#[derive(Debug, Default)]
pub struct Project {
    symbols: BTreeMap<u32, Symbol>,
    next_id: u32,
}

impl Project {
    /// Create an empty project.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a symbol and return its assigned id.
    pub fn insert(&mut self, symbol: Symbol) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.symbols.insert(id, symbol);
        id
    }

    /// Look up a symbol by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Symbol> {
        self.symbols.get(&id)
    }

    /// Look up a symbol by id, mutably.
    pub fn get_mut(&mut self, id: u32) -> Option<&mut Symbol> {
        self.symbols.get_mut(&id)
    }

    /// Iterate over symbols in id order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    /// Iterate over symbols in id order, mutably.
    pub fn symbols_mut(&mut self) -> impl Iterator<Item = &mut Symbol> {
        self.symbols.values_mut()
    }

    /// Number of symbols in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the graph is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
