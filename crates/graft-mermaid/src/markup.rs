//! Tag text to diagram markup conversion.

/// Convert one `@mermaid` tag's text into diagram-embeddable markup.
///
/// The first line is the diagram title; the remaining lines, rejoined as
/// written, form the diagram body. Text without a newline is all title and
/// produces an empty body. The output is a level-4 heading followed by a
/// `<div class="mermaid">` container the browser runtime picks up.
///
/// The body is carried verbatim: no escaping and no syntax validation.
/// Applying this to already converted text converts again; callers rewrite
/// each tag at most once per build.
#[must_use]
pub fn diagram_markup(text: &str) -> String {
    let (title, body) = match text.split_once('\n') {
        Some((title, body)) => (title, body),
        None => (text, ""),
    };
    format!("#### {title} \n\n <div class=\"mermaid\">{body}</div>")
}
