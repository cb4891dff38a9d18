//! Shape types for automaton rendering
//!
//! Each shape is its own type that knows how to compute its geometry and
//! render itself to SVG nodes. States become [`StateShape`]; transitions
//! become either an [`EdgeShape`] (quadratic curve between two states) or a
//! [`LoopShape`] (fixed upper arc on one state).

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use super::defaults;
use super::geometry::{
    canonical_pair, cubic_point, midpoint, perpendicular_offset, point_on_circle,
    point_toward_on_circle, quad_point,
};
use super::svg::{Circle, Group, Path, PathData, SvgNode, Text};
use crate::style::Style;

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    /// Render this shape as one SVG group
    fn render_svg(&self, style: &Style) -> SvgNode;
}

/// A shape enum wrapping all shape types
#[enum_dispatch(Shape)]
#[derive(Debug, Clone)]
pub enum ShapeEnum {
    State(StateShape),
    Edge(EdgeShape),
    Loop(LoopShape),
}

fn marker_url() -> String {
    format!("url(#{})", defaults::ARROW_MARKER_ID)
}

fn transition_label(style: &Style, at: DVec2, label: &str) -> SvgNode {
    SvgNode::Text(Text {
        x: at.x,
        y: at.y,
        text_anchor: Some("middle".to_string()),
        font_size: Some(style.transition_label_size),
        font_style: Some(style.label_font_style().to_string()),
        font_weight: None,
        fill: Some("currentColor".to_string()),
        stroke: Some("none".to_string()),
        content: label.to_string(),
    })
}

fn transition_group(path: PathData, label: Option<(&str, DVec2)>, style: &Style) -> SvgNode {
    let mut children = vec![SvgNode::Path(Path {
        d: path,
        fill: None,
        marker_end: Some(marker_url()),
    })];
    if let Some((text, at)) = label.filter(|(text, _)| !text.is_empty()) {
        children.push(transition_label(style, at, text));
    }
    SvgNode::Group(Group::with_class("transition", children))
}

// ============================================================================
// States
// ============================================================================

/// A state circle with its decorations
#[derive(Debug, Clone)]
pub struct StateShape {
    pub center: DVec2,
    pub radius: f64,
    pub label: String,
    pub initial: bool,
    pub accepting: bool,
}

impl StateShape {
    /// Radius of the inner ring of an accepting state
    pub fn ring_radius(&self, style: &Style) -> f64 {
        (self.radius - style.final_ring_gap).max(defaults::MIN_FINAL_RING)
    }

    /// Chevron points (upper arm end, tip, lower arm end) for initial states.
    ///
    /// The tip sits left of the circle with a gap of 1.5 stroke widths so the
    /// arms never touch the outline.
    pub fn initial_chevron(&self, style: &Style) -> [DVec2; 3] {
        let gap = style.stroke_width * 1.5;
        let tip = dvec2(self.center.x - self.radius - gap, self.center.y);
        let (sin, cos) = defaults::INITIAL_ARROW_HALF_ANGLE.sin_cos();
        let len = style.initial_arrow_length;
        let upper = dvec2(tip.x - len * cos, tip.y - len * sin);
        let lower = dvec2(tip.x - len * cos, tip.y + len * sin);
        [upper, tip, lower]
    }
}

impl Shape for StateShape {
    fn render_svg(&self, style: &Style) -> SvgNode {
        let c = self.center;
        let mut children = vec![SvgNode::Circle(Circle {
            cx: c.x,
            cy: c.y,
            r: self.radius,
        })];

        if self.accepting {
            children.push(SvgNode::Circle(Circle {
                cx: c.x,
                cy: c.y,
                r: self.ring_radius(style),
            }));
        }

        if self.initial {
            let [upper, tip, lower] = self.initial_chevron(style);
            children.push(SvgNode::Path(Path {
                d: PathData::new().m(upper).l(tip).l(lower),
                fill: None,
                marker_end: None,
            }));
        }

        children.push(SvgNode::Text(Text {
            x: c.x,
            y: c.y + self.radius + style.state_label_offset,
            text_anchor: Some("middle".to_string()),
            font_size: Some(style.state_label_size),
            font_style: Some("normal".to_string()),
            font_weight: Some("600".to_string()),
            fill: Some("currentColor".to_string()),
            stroke: Some("none".to_string()),
            content: self.label.clone(),
        }));

        SvgNode::Group(Group::with_class("state", children))
    }
}

// ============================================================================
// Point-to-point transitions
// ============================================================================

/// Resolved control geometry of an edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeGeometry {
    /// Curve start, on the source circle
    pub start: DVec2,
    pub control: DVec2,
    /// Curve end, on the target circle
    pub end: DVec2,
    pub label_at: DVec2,
}

impl EdgeGeometry {
    pub fn is_finite(&self) -> bool {
        [self.start, self.control, self.end, self.label_at]
            .iter()
            .all(|p| p.is_finite())
    }
}

/// A quadratic curve between two different state circles
#[derive(Debug, Clone)]
pub struct EdgeShape {
    pub from: DVec2,
    pub from_radius: f64,
    pub to: DVec2,
    pub to_radius: f64,
    pub bend: f64,
    pub label: Option<String>,
}

impl EdgeShape {
    pub fn geometry(&self, style: &Style) -> EdgeGeometry {
        // The normal comes from the canonical pair so that A->B and B->A use
        // the same vector with opposite signs: their curves mirror each other.
        let (p, q, swapped) = canonical_pair(self.from, self.to);
        let orient = if swapped { -1.0 } else { 1.0 };
        let chord = midpoint(p, q);
        let span = (q - p).length();
        let control = chord + perpendicular_offset(p, q, self.bend * span * orient);

        let start = point_toward_on_circle(self.from, control, self.from_radius);
        let end = point_toward_on_circle(self.to, control, self.to_radius);

        // Labels go on the convex side of the curve.
        let side = if self.bend * orient < 0.0 { -1.0 } else { 1.0 };
        let away = perpendicular_offset(p, q, side);
        let label_at = quad_point(start, control, end, 0.5) + away * style.label_offset;

        EdgeGeometry {
            start,
            control,
            end,
            label_at,
        }
    }
}

impl Shape for EdgeShape {
    fn render_svg(&self, style: &Style) -> SvgNode {
        let g = self.geometry(style);
        let path = PathData::new().m(g.start).q(g.control, g.end);
        transition_group(path, self.label.as_deref().map(|l| (l, g.label_at)), style)
    }
}

// ============================================================================
// Self-loops
// ============================================================================

/// Resolved control geometry of a self-loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopGeometry {
    pub start: DVec2,
    pub control1: DVec2,
    pub control2: DVec2,
    pub end: DVec2,
    pub label_at: DVec2,
}

impl LoopGeometry {
    pub fn is_finite(&self) -> bool {
        [self.start, self.control1, self.control2, self.end, self.label_at]
            .iter()
            .all(|p| p.is_finite())
    }
}

/// Upper arc leaving and re-entering one state
#[derive(Debug, Clone)]
pub struct LoopShape {
    pub center: DVec2,
    pub radius: f64,
    pub label: Option<String>,
}

impl LoopShape {
    pub fn geometry(&self, style: &Style) -> LoopGeometry {
        let (c, r) = (self.center, self.radius);
        let start = point_on_circle(c, r, defaults::LOOP_START_ANGLE);
        let end = point_on_circle(c, r, defaults::LOOP_END_ANGLE);
        let lift = r * defaults::LOOP_HEIGHT;
        let control1 = dvec2(c.x + r, c.y - lift);
        let control2 = dvec2(c.x - r, c.y - lift);

        let apex = cubic_point(start, control1, control2, end, 0.5);
        let label_at = apex - dvec2(0.0, style.label_offset);

        LoopGeometry {
            start,
            control1,
            control2,
            end,
            label_at,
        }
    }
}

impl Shape for LoopShape {
    fn render_svg(&self, style: &Style) -> SvgNode {
        let g = self.geometry(style);
        let path = PathData::new().m(g.start).c(g.control1, g.control2, g.end);
        transition_group(path, self.label.as_deref().map(|l| (l, g.label_at)), style)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::geometry::reflect_across;

    const EPSILON: f64 = 1e-9;

    fn edge(from: DVec2, to: DVec2, bend: f64) -> EdgeShape {
        EdgeShape {
            from,
            from_radius: 28.0,
            to,
            to_radius: 20.0,
            bend,
            label: Some("a".to_string()),
        }
    }

    fn children(node: &SvgNode) -> &[SvgNode] {
        match node {
            SvgNode::Group(g) => &g.children,
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn edge_endpoints_sit_on_circles() {
        let style = Style::default();
        let (a, b) = (dvec2(0.0, 0.0), dvec2(170.0, -60.0));
        for bend in [-0.5, -0.1, 0.0, 0.24, 0.8] {
            let g = edge(a, b, bend).geometry(&style);
            assert!((g.start.distance(a) - 28.0).abs() < EPSILON);
            assert!((g.end.distance(b) - 20.0).abs() < EPSILON);
        }
    }

    #[test]
    fn reversed_edge_mirrors_across_the_chord() {
        let style = Style::default();
        let (a, b) = (dvec2(10.0, 20.0), dvec2(210.0, 95.0));
        let forward = edge(a, b, 0.3).geometry(&style);
        let backward = edge(b, a, 0.3).geometry(&style);
        let mirrored = reflect_across(forward.control, a, b);
        assert!(mirrored.distance(backward.control) < 1e-6);
        assert!(forward.control.distance(backward.control) > 1.0);
    }

    #[test]
    fn label_is_on_the_control_side() {
        let style = Style::default();
        let (a, b) = (dvec2(0.0, 0.0), dvec2(200.0, 0.0));
        let cases = [(a, b, 0.24), (a, b, -0.24), (b, a, 0.24), (b, a, -0.24)];
        for (from, to, bend) in cases {
            let g = edge(from, to, bend).geometry(&style);
            let chord = midpoint(a, b);
            let toward_control = (g.control - chord).y.signum();
            let toward_label = (g.label_at - chord).y.signum();
            assert_eq!(toward_control, toward_label);
            let curve_mid = quad_point(g.start, g.control, g.end, 0.5);
            assert!((g.label_at.distance(curve_mid) - style.label_offset).abs() < EPSILON);
        }
    }

    #[test]
    fn coincident_endpoints_stay_finite() {
        let p = dvec2(50.0, 50.0);
        let g = edge(p, p, 0.24).geometry(&Style::default());
        assert!(g.is_finite(), "{g:?}");
        assert_eq!(g.control, p);
    }

    #[test]
    fn huge_bend_overflows_geometry() {
        let g = edge(dvec2(0.0, 0.0), dvec2(200.0, 0.0), 1e307).geometry(&Style::default());
        assert!(!g.is_finite());
    }

    #[test]
    fn loop_is_fixed_upper_arc() {
        let style = Style::default();
        let shape = LoopShape {
            center: dvec2(100.0, 100.0),
            radius: 20.0,
            label: None,
        };
        let g = shape.geometry(&style);
        assert!((g.start.distance(shape.center) - 20.0).abs() < EPSILON);
        assert!((g.end.distance(shape.center) - 20.0).abs() < EPSILON);
        assert!(g.start.x > 100.0 && g.end.x < 100.0);
        assert!(g.start.y < 100.0 && (g.start.y - g.end.y).abs() < EPSILON);
        assert_eq!(g.control1, dvec2(120.0, 50.0));
        assert_eq!(g.control2, dvec2(80.0, 50.0));
        assert!(g.label_at.y < g.control1.y + 20.0);
        assert!((g.label_at.x - 100.0).abs() < EPSILON);
    }

    #[test]
    fn accepting_initial_state_renders_ring_and_chevron() {
        let style = Style::default();
        let shape = StateShape {
            center: dvec2(0.0, 0.0),
            radius: 28.0,
            label: "q0".to_string(),
            initial: true,
            accepting: true,
        };
        let node = shape.render_svg(&style);
        let kids = children(&node);
        assert_eq!(kids.len(), 4);
        assert!(matches!(kids[1], SvgNode::Circle(Circle { r, .. }) if r == 22.0));
        assert!(matches!(kids[2], SvgNode::Path(_)));
        assert!(matches!(&kids[3], SvgNode::Text(t) if t.content == "q0" && t.y == 48.0));

        let [upper, tip, lower] = shape.initial_chevron(&style);
        assert_eq!(tip, dvec2(-31.0, 0.0));
        assert!((upper.distance(tip) - style.initial_arrow_length).abs() < EPSILON);
        assert!((upper.y + lower.y).abs() < EPSILON);
        assert!(upper.x < tip.x);
    }

    #[test]
    fn tiny_state_ring_has_a_floor() {
        let shape = StateShape {
            center: DVec2::ZERO,
            radius: 5.0,
            label: String::new(),
            initial: false,
            accepting: true,
        };
        assert_eq!(shape.ring_radius(&Style::default()), 4.0);
    }

    #[test]
    fn empty_label_emits_no_text() {
        let mut shape = edge(dvec2(0.0, 0.0), dvec2(100.0, 0.0), 0.24);
        shape.label = Some(String::new());
        let node = ShapeEnum::from(shape).render_svg(&Style::default());
        assert_eq!(children(&node).len(), 1);
    }
}
