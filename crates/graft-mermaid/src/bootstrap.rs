//! Mermaid runtime bootstrap injection.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Matches the literal closing-body marker.
///
/// Replacement is purely textual, not DOM-aware: a `</body>` inside a
/// script or text node matches the same way. Accepted limitation.
static BODY_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("</body>").unwrap());

/// Insert the mermaid loader and initialization scripts before a page's
/// first `</body>` marker.
///
/// Pages without the marker are returned unchanged. The marker itself is
/// reconstructed after the inserted fragment, so the output keeps exactly
/// one `</body>` per marker replaced. There is no guard against double
/// injection: applying this to its own output inserts the bootstrap a
/// second time.
///
/// `version` is spliced verbatim into the unpkg URL; it is never
/// validated.
#[must_use]
pub fn inject_bootstrap(html: &str, version: &str) -> String {
    if !BODY_CLOSE_RE.is_match(html) {
        return html.to_owned();
    }

    let fragment = format!(
        "<script src=\"https://unpkg.com/mermaid@{version}/dist/mermaid.min.js\"></script>\n\
         <script>mermaid.initialize({{startOnLoad:true}});</script>\n\
         </body>"
    );
    BODY_CLOSE_RE.replace(html, NoExpand(&fragment)).into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const LOADER: &str = "https://unpkg.com/mermaid@7.1.2/dist/mermaid.min.js";

    #[test]
    fn test_inject_bootstrap_without_marker_is_identity() {
        let html = "<html><head></head>no closing body";

        assert_eq!(inject_bootstrap(html, "7.1.2"), html);
    }

    #[test]
    fn test_inject_bootstrap_inserts_loader_before_marker() {
        let result = inject_bootstrap("<html><body>x</body></html>", "7.1.2");

        assert_eq!(result.matches(LOADER).count(), 1);
        assert_eq!(result.matches("</body>").count(), 1);
        assert!(result.find(LOADER).unwrap() < result.find("</body>").unwrap());
        assert!(result.contains("mermaid.initialize({startOnLoad:true});"));
    }

    #[test]
    fn test_inject_bootstrap_uses_configured_version() {
        let result = inject_bootstrap("<body></body>", "9.3.0");

        assert!(result.contains("https://unpkg.com/mermaid@9.3.0/dist/mermaid.min.js"));
    }

    #[test]
    fn test_inject_bootstrap_replaces_only_first_marker() {
        let result = inject_bootstrap("<body>a</body><body>b</body>", "7.1.2");

        assert_eq!(result.matches(LOADER).count(), 1);
        assert_eq!(result.matches("</body>").count(), 2);
        // Second marker untouched, so the tail of the page is unchanged.
        assert!(result.ends_with("<body>b</body>"));
    }

    #[test]
    fn test_inject_bootstrap_twice_duplicates_loader() {
        // No double-injection guard exists; re-application inserts again.
        let once = inject_bootstrap("<body>x</body>", "7.1.2");
        let twice = inject_bootstrap(&once, "7.1.2");

        assert_eq!(twice.matches(LOADER).count(), 2);
    }

    #[test]
    fn test_inject_bootstrap_version_with_replacement_metacharacters() {
        // The fragment is spliced literally; regex replacement expansion
        // must not interpret `$` in a configured version.
        let result = inject_bootstrap("<body></body>", "$1");

        assert!(result.contains("https://unpkg.com/mermaid@$1/dist/mermaid.min.js"));
    }
}
