//! Mermaid diagram support for the Graft documentation pipeline.
//!
//! The plugin hooks the two lifecycle points a build exposes:
//! - **Resolve begin**: every `@mermaid` tag in the symbol graph has its
//!   text rewritten into a level-4 heading followed by a
//!   `<div class="mermaid">` container the browser runtime renders in
//!   place.
//! - **Page end**: a script pair loading and initializing the mermaid
//!   runtime is inserted before each rendered page's closing `</body>`.
//!
//! Both transformations are plain text rewrites; diagram syntax is never
//! validated and degenerate input degrades to empty-but-valid markup. The
//! plugin never fails the surrounding build.
//!
//! # Example
//!
//! ```
//! use graft_mermaid::MermaidPlugin;
//! use graft_pipeline::{BuildPipeline, PageEvent, Project, Symbol};
//!
//! let mut pipeline = BuildPipeline::new();
//! MermaidPlugin::new().attach(&mut pipeline);
//!
//! let mut project = Project::new();
//! let mut symbol = Symbol::new("sequence");
//! symbol.attach_tag("mermaid", "Flow\nA-->B");
//! let id = project.insert(symbol);
//!
//! pipeline.emit_resolve_begin(&mut project);
//!
//! let comment = project.get(id).unwrap().comment.as_ref().unwrap();
//! let tag = &comment.tags.as_ref().unwrap()[0];
//! assert!(tag.text.starts_with("#### Flow"));
//!
//! let mut page = PageEvent::new("index.html", "<html><body></body></html>");
//! pipeline.emit_page_end(&mut page);
//! assert!(page.contents.unwrap().contains("mermaid.min.js"));
//! ```

mod bootstrap;
mod consts;
mod markup;
mod plugin;
mod tags;

pub use bootstrap::inject_bootstrap;
pub use consts::{DEFAULT_MERMAID_VERSION, MERMAID_TAG, VERSION_OPTION};
pub use markup::diagram_markup;
pub use plugin::MermaidPlugin;
pub use tags::mermaid_tags;
