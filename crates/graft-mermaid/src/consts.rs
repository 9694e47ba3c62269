//! Shared constants.

/// Tag marker name that selects a comment block for rewriting.
pub const MERMAID_TAG: &str = "mermaid";

/// Mermaid runtime version loaded when no override is configured.
pub const DEFAULT_MERMAID_VERSION: &str = "7.1.2";

/// Name of the host option that overrides the runtime version.
pub const VERSION_OPTION: &str = "mermaid-version";
