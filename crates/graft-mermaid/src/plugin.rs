//! Plugin wiring against the build pipeline.
//!
//! [`MermaidPlugin`] is the piece a host installs: it declares the
//! `mermaid-version` option, resolves its configuration, and registers the
//! two lifecycle hooks. Neither hook can fail the surrounding build;
//! degenerate input (missing comments, absent page contents, empty diagram
//! text) degrades to a no-op or empty markup.

use graft_pipeline::{BuildPipeline, Options};

use crate::bootstrap::inject_bootstrap;
use crate::consts::{DEFAULT_MERMAID_VERSION, VERSION_OPTION};
use crate::markup::diagram_markup;
use crate::tags::mermaid_tags;

/// Mermaid plugin for the Graft build pipeline.
///
/// # Example
///
/// ```
/// use graft_mermaid::MermaidPlugin;
/// use graft_pipeline::{BuildPipeline, Options};
///
/// let mut options = Options::new();
/// MermaidPlugin::declare_options(&mut options);
/// options.set("mermaid-version", "9.3.0").unwrap();
///
/// let mut pipeline = BuildPipeline::new();
/// MermaidPlugin::from_options(&options).attach(&mut pipeline);
/// ```
#[derive(Clone, Debug)]
pub struct MermaidPlugin {
    version: String,
}

impl MermaidPlugin {
    /// Create a plugin loading the default runtime version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: DEFAULT_MERMAID_VERSION.to_owned(),
        }
    }

    /// Declare the plugin's options against the host registry.
    pub fn declare_options(options: &mut Options) {
        options.declare(
            VERSION_OPTION,
            "Version of the mermaid runtime loaded into rendered pages",
            DEFAULT_MERMAID_VERSION,
        );
    }

    /// Build the plugin from resolved host options.
    ///
    /// Falls back to the default version when the option was never
    /// declared. The value is taken verbatim; no validation is performed.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let version = options
            .get(VERSION_OPTION)
            .unwrap_or(DEFAULT_MERMAID_VERSION)
            .to_owned();
        Self { version }
    }

    /// Override the runtime version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// The runtime version rendered pages will load.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Register the two lifecycle hooks with the pipeline.
    ///
    /// At resolve begin every collected `@mermaid` tag has its text
    /// rewritten in place, once per build cycle. At page end the runtime
    /// bootstrap is injected into pages that have contents; pages without
    /// contents pass through untouched.
    pub fn attach(self, pipeline: &mut BuildPipeline) {
        pipeline.on_resolve_begin(|context| {
            let tags = mermaid_tags(context.project);
            let count = tags.len();
            for tag in tags {
                tag.text = diagram_markup(&tag.text);
            }
            if count > 0 {
                tracing::debug!(count, "Rewrote mermaid tags");
            }
        });

        let version = self.version;
        pipeline.on_page_end(move |page| {
            if let Some(contents) = page.contents.take() {
                page.contents = Some(inject_bootstrap(&contents, &version));
            }
        });
    }
}

impl Default for MermaidPlugin {
    fn default() -> Self {
        Self::new()
    }
}
