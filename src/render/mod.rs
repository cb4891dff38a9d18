//! SVG rendering for automaton diagrams
//!
//! This module is organized into submodules:
//! - `defaults`: default style values and layout constants
//! - `geometry`: vector helpers, circle clipping, Bézier evaluation
//! - `layout`: fallback placement for states without coordinates
//! - `shapes`: state, edge and self-loop shapes
//! - `svg`: typed SVG DOM and serialization
//!
//! The pipeline is: resolve style, auto-layout, validate, compute bounds,
//! then draw every transition followed by every state so edges pass under
//! the circles.

pub mod defaults;
pub mod geometry;
pub mod layout;
pub mod shapes;
pub mod svg;

use glam::{DVec2, dvec2};
use indexmap::IndexMap;

use crate::diagnostics::{DiagnosticSink, RenderDiagnostic};
use crate::errors::{Axis, RenderError};
use crate::spec::{DiagramSpec, StateSpec, TransitionSpec};
use crate::style::Style;
use crate::types::{BBox, ViewBox, check_finite};
use geometry::padded_bounds;
use layout::{LayoutStrategy, auto_layout};
use shapes::{EdgeShape, LoopShape, Shape, ShapeEnum, StateShape};
use svg::{Defs, Group, Marker, Path, PathData, Rect, Svg, SvgNode};

/// A state after layout: where it is and how big it is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedState {
    pub center: DVec2,
    pub radius: f64,
}

/// Render a diagram to an SVG document.
///
/// Missing coordinates are filled in on `spec` as a side effect.
pub fn render_diagram(
    spec: &mut DiagramSpec,
    sink: &mut dyn DiagnosticSink,
) -> Result<String, RenderError> {
    build_svg(spec, sink)?.to_xml()
}

/// Build the SVG DOM without serializing it.
pub fn build_svg(spec: &mut DiagramSpec, sink: &mut dyn DiagnosticSink) -> Result<Svg, RenderError> {
    let style = Style::resolve(spec.style.as_ref());
    style.validate()?;

    let strategy = auto_layout(&mut spec.states);
    if strategy != LayoutStrategy::Preserved {
        sink.record(RenderDiagnostic::AutoLayout {
            strategy,
            states: spec.states.len(),
        });
    }

    let placed = place_states(&spec.states, &style)?;
    if placed.is_empty() {
        crate::log::debug!("empty diagram");
        sink.record(RenderDiagnostic::EmptyDiagram);
    }

    let view_box = compute_view_box(placed.values(), &style);
    if !view_box.is_finite() {
        return Err(RenderError::InvalidBounds);
    }
    crate::log::debug!(
        x = view_box.x,
        y = view_box.y,
        w = view_box.w,
        h = view_box.h,
        "view box"
    );

    let mut drawing = Vec::with_capacity(spec.transitions.len() + placed.len());
    for (index, tr) in spec.transitions.iter().enumerate() {
        if let Some(shape) = transition_shape(index, tr, &placed, &style, sink)? {
            drawing.push(shape.render_svg(&style));
        }
    }
    for (name, state) in &spec.states {
        let Some(at) = placed.get(name.as_str()) else {
            continue;
        };
        let shape = ShapeEnum::from(StateShape {
            center: at.center,
            radius: at.radius,
            label: state.label.clone().unwrap_or_else(|| name.clone()),
            initial: state.initial,
            accepting: state.accepting,
        });
        drawing.push(shape.render_svg(&style));
    }

    Ok(Svg {
        width: view_box.w,
        height: view_box.h,
        view_box,
        style: Some(format!("color:{}; font-family:{}", style.color, style.font_family)),
        children: vec![
            arrow_defs(&style),
            SvgNode::Rect(Rect {
                x: view_box.x,
                y: view_box.y,
                width: view_box.w,
                height: view_box.h,
                fill: Some(style.background_fill().to_string()),
                stroke: Some("none".to_string()),
            }),
            SvgNode::Group(Group {
                class: Some("autodata".to_string()),
                stroke: Some(style.color.clone()),
                stroke_width: Some(style.stroke_width),
                fill: Some("none".to_string()),
                stroke_linecap: Some("round".to_string()),
                stroke_linejoin: Some("round".to_string()),
                children: drawing,
            }),
        ],
    })
}

/// Resolve every state's center and radius, rejecting non-finite values.
pub fn place_states<'a>(
    states: &'a IndexMap<String, StateSpec>,
    style: &Style,
) -> Result<IndexMap<&'a str, PlacedState>, RenderError> {
    let mut placed = IndexMap::with_capacity(states.len());
    for (name, state) in states {
        let coord = |axis: Axis, value: Option<f64>| {
            check_finite(value.unwrap_or(f64::NAN)).map_err(|reason| {
                RenderError::NonFiniteCoordinate {
                    state: name.clone(),
                    axis,
                    reason,
                }
            })
        };
        let x = coord(Axis::X, state.x)?;
        let y = coord(Axis::Y, state.y)?;
        let radius = check_finite(state.radius.unwrap_or(style.state_radius)).map_err(|reason| {
            RenderError::NonFiniteRadius {
                state: name.clone(),
                reason,
            }
        })?;
        placed.insert(
            name.as_str(),
            PlacedState {
                center: dvec2(x, y),
                radius,
            },
        );
    }
    Ok(placed)
}

/// Union of every state grown by its radius plus the reserved margin, then
/// padded. An empty diagram gets a `2·padding` square around the origin.
pub fn compute_view_box<'a>(
    states: impl IntoIterator<Item = &'a PlacedState>,
    style: &Style,
) -> ViewBox {
    let mut bounds = BBox::new();
    for state in states {
        bounds.expand_square(state.center, state.radius + defaults::STATE_MARGIN);
    }
    if bounds.is_empty() {
        bounds.expand_point(DVec2::ZERO);
    }
    padded_bounds(&bounds, style.padding)
}

/// Shape for one transition, or `None` when it references a missing state.
fn transition_shape(
    index: usize,
    tr: &TransitionSpec,
    placed: &IndexMap<&str, PlacedState>,
    style: &Style,
    sink: &mut dyn DiagnosticSink,
) -> Result<Option<ShapeEnum>, RenderError> {
    let (Some(a), Some(b)) = (placed.get(tr.from.as_str()), placed.get(tr.to.as_str())) else {
        let missing = if placed.contains_key(tr.from.as_str()) {
            &tr.to
        } else {
            &tr.from
        };
        crate::log::warn!(index, from = %tr.from, to = %tr.to, missing = %missing, "transition references unknown state");
        sink.record(RenderDiagnostic::DanglingTransition {
            index,
            from: tr.from.clone(),
            to: tr.to.clone(),
            missing: missing.clone(),
        });
        return Ok(None);
    };

    if tr.is_loop {
        let shape = LoopShape {
            center: a.center,
            radius: a.radius,
            label: tr.label.clone(),
        };
        if !shape.geometry(style).is_finite() {
            return Err(RenderError::NonFiniteGeometry { index });
        }
        return Ok(Some(ShapeEnum::from(shape)));
    }

    let bend = check_finite(tr.bend.unwrap_or(defaults::BEND))
        .map_err(|reason| RenderError::NonFiniteBend { index, reason })?;

    let shape = EdgeShape {
        from: a.center,
        from_radius: a.radius,
        to: b.center,
        to_radius: b.radius,
        bend,
        label: tr.label.clone(),
    };
    // A finite bend can still overflow once scaled by the edge length.
    if !shape.geometry(style).is_finite() {
        return Err(RenderError::NonFiniteGeometry { index });
    }

    if tr.from == tr.to {
        crate::log::debug!(index, state = %tr.from, "non-loop transition to itself");
        sink.record(RenderDiagnostic::DegenerateEdge {
            index,
            state: tr.from.clone(),
        });
    }

    Ok(Some(ShapeEnum::from(shape)))
}

/// `<defs>` holding the shared triangular arrowhead
fn arrow_defs(style: &Style) -> SvgNode {
    let head = PathData::new()
        .m(dvec2(0.0, 0.0))
        .l(dvec2(10.0, 5.0))
        .l(dvec2(0.0, 10.0))
        .z();
    SvgNode::Defs(Defs {
        children: vec![SvgNode::Marker(Marker {
            id: defaults::ARROW_MARKER_ID.to_string(),
            view_box: "0 0 10 10".to_string(),
            ref_x: 10.0,
            ref_y: 5.0,
            marker_width: style.arrow_size,
            marker_height: style.arrow_size,
            orient: "auto".to_string(),
            children: vec![SvgNode::Path(Path {
                d: head,
                fill: Some("currentColor".to_string()),
                marker_end: None,
            })],
        })],
    })
}
