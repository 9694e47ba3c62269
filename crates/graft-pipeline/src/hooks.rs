//! Lifecycle hook registration and dispatch.
//!
//! [`BuildPipeline`] exposes the two points a build exercises: resolve
//! begin (once per build, after graph construction) and page end (once per
//! rendered page, before persistence). There is no event bus behind this;
//! each point is an explicit, named registration with a documented payload.

use crate::model::Project;

/// Traversal context passed to resolve-begin hooks.
///
/// Borrows the symbol graph from the host for the synchronous extent of
/// the callback. Hooks must not retain the reference.
pub struct ResolveContext<'p> {
    /// Symbol graph under resolution.
    pub project: &'p mut Project,
}

/// One rendered page prior to persistence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageEvent {
    /// Output URL of the page, relative to the site root.
    pub url: String,
    /// Rendered HTML. `None` for pages the renderer produced no body for.
    pub contents: Option<String>,
}

impl PageEvent {
    /// Create a page event with rendered contents.
    pub fn new(url: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            contents: Some(contents.into()),
        }
    }

    /// Create a page event without contents.
    pub fn without_contents(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            contents: None,
        }
    }
}

type ResolveBeginHook = Box<dyn Fn(&mut ResolveContext<'_>)>;
type PageEndHook = Box<dyn Fn(&mut PageEvent)>;

/// Lifecycle dispatcher for one build.
///
/// Hooks are registered up front and invoked in registration order, on the
/// host's thread, with no retries. The host calls `emit_resolve_begin`
/// exactly once per build and `emit_page_end` once per page, sequentially.
#[derive(Default)]
pub struct BuildPipeline {
    resolve_begin: Vec<ResolveBeginHook>,
    page_end: Vec<PageEndHook>,
}

impl BuildPipeline {
    /// Create a pipeline with no hooks registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook for the resolve-begin point.
    pub fn on_resolve_begin(&mut self, hook: impl Fn(&mut ResolveContext<'_>) + 'static) {
        self.resolve_begin.push(Box::new(hook));
    }

    /// Register a hook for the page-end point.
    pub fn on_page_end(&mut self, hook: impl Fn(&mut PageEvent) + 'static) {
        self.page_end.push(Box::new(hook));
    }

    /// Fire the resolve-begin point over a freshly built symbol graph.
    pub fn emit_resolve_begin(&self, project: &mut Project) {
        let mut context = ResolveContext { project };
        for hook in &self.resolve_begin {
            hook(&mut context);
        }
    }

    /// Fire the page-end point for one rendered page.
    pub fn emit_page_end(&self, page: &mut PageEvent) {
        for hook in &self.page_end {
            hook(page);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::model::Symbol;

    use super::*;

    #[test]
    fn test_resolve_begin_hooks_run_in_registration_order() {
        let mut pipeline = BuildPipeline::new();
        pipeline.on_resolve_begin(|ctx| {
            ctx.project.insert(Symbol::new("first"));
        });
        pipeline.on_resolve_begin(|ctx| {
            ctx.project.insert(Symbol::new("second"));
        });

        let mut project = Project::new();
        pipeline.emit_resolve_begin(&mut project);

        let names: Vec<&str> = project.symbols().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_page_end_hooks_see_mutations_from_earlier_hooks() {
        let mut pipeline = BuildPipeline::new();
        pipeline.on_page_end(|page| {
            page.contents = Some("rewritten".to_owned());
        });
        pipeline.on_page_end(|page| {
            if let Some(contents) = &mut page.contents {
                contents.push('!');
            }
        });

        let mut page = PageEvent::new("index.html", "original");
        pipeline.emit_page_end(&mut page);

        assert_eq!(page.contents.as_deref(), Some("rewritten!"));
    }

    #[test]
    fn test_emit_page_end_fires_once_per_call() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);

        let mut pipeline = BuildPipeline::new();
        pipeline.on_page_end(move |_| seen.set(seen.get() + 1));

        let mut page = PageEvent::without_contents("empty.html");
        pipeline.emit_page_end(&mut page);
        pipeline.emit_page_end(&mut page);

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_pipeline_without_hooks_is_a_no_op() {
        let pipeline = BuildPipeline::new();
        let mut project = Project::new();
        let mut page = PageEvent::new("index.html", "<html></html>");

        pipeline.emit_resolve_begin(&mut project);
        pipeline.emit_page_end(&mut page);

        assert!(project.is_empty());
        assert_eq!(page.contents.as_deref(), Some("<html></html>"));
    }
}
