//! Render finite-state automaton descriptions to SVG.
//!
//! The input is an already-parsed [`DiagramSpec`]: states (optionally with
//! coordinates), transitions and a partial style. The output is a standalone
//! SVG document with circles for states, curved arrows for transitions,
//! double circles for accepting states and a chevron for the initial state.
//!
//! ```
//! use autodata::{DiagramSpec, StateSpec, TransitionSpec};
//!
//! let mut spec = DiagramSpec::new()
//!     .state("q0", StateSpec::unplaced().initial())
//!     .state("q1", StateSpec::unplaced().accepting())
//!     .transition(TransitionSpec::new("q0", "q1").with_label("a"))
//!     .transition(TransitionSpec::self_loop("q1").with_label("b"));
//!
//! let svg = autodata::render(&mut spec).unwrap();
//! assert!(svg.starts_with("<svg"));
//! // auto-layout filled in the coordinates
//! assert_eq!(spec.states["q0"].position(), Some((-100.0, 0.0)));
//! ```

pub mod diagnostics;
pub mod errors;
pub mod log;
pub mod render;
pub mod spec;
pub mod style;
pub mod types;

pub use diagnostics::{DiagnosticSink, NullSink, RenderDiagnostic};
pub use errors::RenderError;
pub use render::layout::{LayoutStrategy, auto_layout};
pub use spec::{DiagramSpec, LoopDir, StateSpec, TransitionSpec};
pub use style::{Style, StyleOverrides};

/// Render a diagram to an SVG string.
///
/// States without coordinates are positioned by [`auto_layout`], and the
/// resolved coordinates are written back into `spec`.
pub fn render(spec: &mut DiagramSpec) -> Result<String, RenderError> {
    render_with(spec, &mut NullSink)
}

/// Like [`render`], reporting skipped transitions and other non-fatal events
/// to `sink`.
pub fn render_with(
    spec: &mut DiagramSpec,
    sink: &mut dyn DiagnosticSink,
) -> Result<String, RenderError> {
    render::render_diagram(spec, sink)
}
