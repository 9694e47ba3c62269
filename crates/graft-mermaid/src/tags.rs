//! Mermaid tag collection over the symbol graph.

use graft_pipeline::{Project, Tag};

use crate::consts::MERMAID_TAG;

/// Collect every `@mermaid` tag in the graph.
///
/// Ordering is graph iteration order, then tag order within each comment.
/// Symbols without a comment and comments without a tag sequence
/// contribute nothing. The returned references borrow the project mutably
/// so callers can rewrite tag text in place.
#[must_use]
pub fn mermaid_tags(project: &mut Project) -> Vec<&mut Tag> {
    project
        .symbols_mut()
        .filter_map(|symbol| symbol.comment.as_mut())
        .filter_map(|comment| comment.tags.as_mut())
        .flat_map(|tags| tags.iter_mut())
        .filter(|tag| tag.name == MERMAID_TAG)
        .collect()
}
