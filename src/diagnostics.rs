//! Non-fatal render events.
//!
//! A render never fails because of a dangling transition or a degenerate
//! edge; it reports them here instead. Callers that care pass a sink to
//! [`crate::render_with`], everyone else gets [`NullSink`].

use crate::render::layout::LayoutStrategy;

/// Something worth telling the caller about, which did not stop the render
#[derive(Debug, Clone, PartialEq)]
pub enum RenderDiagnostic {
    /// Auto-layout repositioned the states
    AutoLayout {
        strategy: LayoutStrategy,
        states: usize,
    },
    /// A transition names a state that does not exist; it was not drawn
    DanglingTransition {
        index: usize,
        from: String,
        to: String,
        missing: String,
    },
    /// A non-loop transition from a state to itself; drawn as a zero-length curve
    DegenerateEdge { index: usize, state: String },
    /// The diagram has no states; a blank canvas was produced
    EmptyDiagram,
}

/// Receives [`RenderDiagnostic`]s during a render
pub trait DiagnosticSink {
    fn record(&mut self, diagnostic: RenderDiagnostic);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _diagnostic: RenderDiagnostic) {}
}

impl DiagnosticSink for Vec<RenderDiagnostic> {
    fn record(&mut self, diagnostic: RenderDiagnostic) {
        self.push(diagnostic);
    }
}
