//! Error types with diagnostics using miette
//!
//! Only structurally invalid input fails a render. Dangling transition
//! references and degenerate geometry are absorbed and reported through
//! [`crate::diagnostics::DiagnosticSink`] instead.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Which coordinate of a state was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Errors that occur during rendering
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("state `{state}` has an invalid {axis} coordinate: {reason}")]
    #[diagnostic(
        code(autodata::render::non_finite_coordinate),
        help("coordinates must be finite numbers; omit them to let auto-layout place the states")
    )]
    NonFiniteCoordinate {
        state: String,
        axis: Axis,
        reason: NumericError,
    },

    #[error("state `{state}` has an invalid radius: {reason}")]
    #[diagnostic(code(autodata::render::non_finite_radius))]
    NonFiniteRadius { state: String, reason: NumericError },

    #[error("transition #{index} has an invalid bend: {reason}")]
    #[diagnostic(code(autodata::render::non_finite_bend))]
    NonFiniteBend { index: usize, reason: NumericError },

    #[error("transition #{index} produces non-finite geometry")]
    #[diagnostic(
        code(autodata::render::non_finite_geometry),
        help("the bend or state radius is too large to draw")
    )]
    NonFiniteGeometry { index: usize },

    #[error("style field `{field}` is invalid: {reason}")]
    #[diagnostic(code(autodata::render::non_finite_style))]
    NonFiniteStyle {
        field: &'static str,
        reason: NumericError,
    },

    #[error("infinite or NaN in bounds")]
    #[diagnostic(code(autodata::render::invalid_bounds))]
    InvalidBounds,

    #[error("SVG serialization failed: {0}")]
    #[diagnostic(code(autodata::render::serialize))]
    Serialize(String),
}
