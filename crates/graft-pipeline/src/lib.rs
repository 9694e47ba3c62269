//! Host-side build pipeline model for Graft.
//!
//! This crate defines the seam a documentation generator exposes to plugins:
//! - [`Project`]: the symbol graph produced by the host's comment parser
//! - [`BuildPipeline`]: lifecycle hook registration and dispatch
//! - [`Options`]: declared, CLI-style string options plugins register into
//!
//! # Architecture
//!
//! Plugins never own build data. The pipeline hands out non-owning mutable
//! handles ([`ResolveContext`], [`PageEvent`]) for the synchronous extent of
//! one callback, and the host persists whatever the hooks left in place:
//!
//! 1. The host parses sources into a [`Project`].
//! 2. `emit_resolve_begin` fires once, before cross-reference resolution.
//! 3. The host renders each page and fires `emit_page_end` per page,
//!    sequentially, before writing it to storage.
//!
//! # Example
//!
//! ```
//! use graft_pipeline::{BuildPipeline, PageEvent};
//!
//! let mut pipeline = BuildPipeline::new();
//! pipeline.on_page_end(|page| {
//!     if let Some(contents) = &mut page.contents {
//!         contents.push_str("<!-- built by graft -->");
//!     }
//! });
//!
//! let mut page = PageEvent::new("index.html", "<html></html>");
//! pipeline.emit_page_end(&mut page);
//! assert!(page.contents.unwrap().ends_with("-->"));
//! ```

mod hooks;
mod model;
mod options;

pub use hooks::{BuildPipeline, PageEvent, ResolveContext};
pub use model::{Comment, Project, Symbol, Tag};
pub use options::{OptionError, Options};
