//! SVG generation
//!
//! A small typed DOM covering the elements the renderer emits, serialized
//! with `quick-xml` (which escapes attribute values and text content).

use std::fmt;

use glam::DVec2;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::errors::RenderError;
use crate::types::ViewBox;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Debug, Clone)]
pub struct Svg {
    pub width: f64,
    pub height: f64,
    pub view_box: ViewBox,
    pub style: Option<String>,
    pub children: Vec<SvgNode>,
}

/// Any SVG node the renderer produces
#[derive(Debug, Clone)]
pub enum SvgNode {
    Group(Group),
    Defs(Defs),
    Marker(Marker),
    Rect(Rect),
    Circle(Circle),
    Path(Path),
    Text(Text),
}

/// `<g>`; presentation attributes are inherited by the children
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub class: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub fill: Option<String>,
    pub stroke_linecap: Option<String>,
    pub stroke_linejoin: Option<String>,
    pub children: Vec<SvgNode>,
}

impl Group {
    pub fn with_class(class: &str, children: Vec<SvgNode>) -> Self {
        Self {
            class: Some(class.to_string()),
            children,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Defs {
    pub children: Vec<SvgNode>,
}

/// `<marker>`, referenced by id from `marker-end`
#[derive(Debug, Clone)]
pub struct Marker {
    pub id: String,
    pub view_box: String,
    pub ref_x: f64,
    pub ref_y: f64,
    pub marker_width: f64,
    pub marker_height: f64,
    pub orient: String,
    pub children: Vec<SvgNode>,
}

#[derive(Debug, Clone, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<String>,
    pub stroke: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Path {
    pub d: PathData,
    pub fill: Option<String>,
    pub marker_end: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub text_anchor: Option<String>,
    pub font_size: Option<f64>,
    pub font_style: Option<String>,
    pub font_weight: Option<String>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub content: String,
}

/// One path command, absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    QuadTo(DVec2, DVec2),
    CubicTo(DVec2, DVec2, DVec2),
    Close,
}

/// Builder for the `d` attribute
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, p: DVec2) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn l(mut self, p: DVec2) -> Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn q(mut self, control: DVec2, end: DVec2) -> Self {
        self.commands.push(PathCommand::QuadTo(control, end));
        self
    }

    pub fn c(mut self, c1: DVec2, c2: DVec2, end: DVec2) -> Self {
        self.commands.push(PathCommand::CubicTo(c1, c2, end));
        self
    }

    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pt = |p: DVec2| format!("{} {}", fmt_num(p.x), fmt_num(p.y));
        let parts: Vec<String> = self
            .commands
            .iter()
            .map(|cmd| match *cmd {
                PathCommand::MoveTo(p) => format!("M {}", pt(p)),
                PathCommand::LineTo(p) => format!("L {}", pt(p)),
                PathCommand::QuadTo(c, p) => format!("Q {}, {}", pt(c), pt(p)),
                PathCommand::CubicTo(c1, c2, p) => {
                    format!("C {}, {}, {}", pt(c1), pt(c2), pt(p))
                }
                PathCommand::Close => "Z".to_string(),
            })
            .collect();
        f.write_str(&parts.join(" "))
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Attribute list with optional entries dropped at push time
struct Attrs(Vec<(&'static str, String)>);

impl Attrs {
    fn new() -> Self {
        Attrs(Vec::new())
    }

    fn num(mut self, key: &'static str, value: f64) -> Self {
        self.0.push((key, fmt_num(value)));
        self
    }

    fn str(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.0.push((key, value.into()));
        self
    }

    fn opt_str(self, key: &'static str, value: Option<&String>) -> Self {
        match value {
            Some(v) => self.str(key, v.as_str()),
            None => self,
        }
    }

    fn opt_num(self, key: &'static str, value: Option<f64>) -> Self {
        match value {
            Some(v) => self.num(key, v),
            None => self,
        }
    }

    fn start(&self, tag: &'static str) -> BytesStart<'static> {
        let mut el = BytesStart::new(tag);
        for (k, v) in &self.0 {
            el.push_attribute((*k, v.as_str()));
        }
        el
    }
}

fn emit(w: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), RenderError> {
    w.write_event(event)
        .map_err(|e| RenderError::Serialize(e.to_string()))
}

fn emit_container(
    w: &mut Writer<Vec<u8>>,
    tag: &'static str,
    attrs: Attrs,
    children: &[SvgNode],
) -> Result<(), RenderError> {
    if children.is_empty() {
        return emit(w, Event::Empty(attrs.start(tag)));
    }
    emit(w, Event::Start(attrs.start(tag)))?;
    for child in children {
        write_node(w, child)?;
    }
    emit(w, Event::End(BytesEnd::new(tag)))
}

fn write_node(w: &mut Writer<Vec<u8>>, node: &SvgNode) -> Result<(), RenderError> {
    match node {
        SvgNode::Group(g) => {
            let attrs = Attrs::new()
                .opt_str("class", g.class.as_ref())
                .opt_str("stroke", g.stroke.as_ref())
                .opt_num("stroke-width", g.stroke_width)
                .opt_str("fill", g.fill.as_ref())
                .opt_str("stroke-linecap", g.stroke_linecap.as_ref())
                .opt_str("stroke-linejoin", g.stroke_linejoin.as_ref());
            emit_container(w, "g", attrs, &g.children)
        }
        SvgNode::Defs(d) => emit_container(w, "defs", Attrs::new(), &d.children),
        SvgNode::Marker(m) => {
            let attrs = Attrs::new()
                .str("id", m.id.as_str())
                .str("viewBox", m.view_box.as_str())
                .num("refX", m.ref_x)
                .num("refY", m.ref_y)
                .num("markerWidth", m.marker_width)
                .num("markerHeight", m.marker_height)
                .str("orient", m.orient.as_str());
            emit_container(w, "marker", attrs, &m.children)
        }
        SvgNode::Rect(r) => {
            let attrs = Attrs::new()
                .num("x", r.x)
                .num("y", r.y)
                .num("width", r.width)
                .num("height", r.height)
                .opt_str("fill", r.fill.as_ref())
                .opt_str("stroke", r.stroke.as_ref());
            emit(w, Event::Empty(attrs.start("rect")))
        }
        SvgNode::Circle(c) => {
            let attrs = Attrs::new().num("cx", c.cx).num("cy", c.cy).num("r", c.r);
            emit(w, Event::Empty(attrs.start("circle")))
        }
        SvgNode::Path(p) => {
            let attrs = Attrs::new()
                .str("d", p.d.to_string())
                .opt_str("fill", p.fill.as_ref())
                .opt_str("marker-end", p.marker_end.as_ref());
            emit(w, Event::Empty(attrs.start("path")))
        }
        SvgNode::Text(t) => {
            let attrs = Attrs::new()
                .num("x", t.x)
                .num("y", t.y)
                .opt_str("text-anchor", t.text_anchor.as_ref())
                .opt_num("font-size", t.font_size)
                .opt_str("font-style", t.font_style.as_ref())
                .opt_str("font-weight", t.font_weight.as_ref())
                .opt_str("fill", t.fill.as_ref())
                .opt_str("stroke", t.stroke.as_ref());
            emit(w, Event::Start(attrs.start("text")))?;
            emit(w, Event::Text(BytesText::new(&t.content)))?;
            emit(w, Event::End(BytesEnd::new("text")))
        }
    }
}

impl Svg {
    /// Serialize the document to an indented XML string.
    pub fn to_xml(&self) -> Result<String, RenderError> {
        let vb = self.view_box;
        let view_box = format!(
            "{} {} {} {}",
            fmt_num(vb.x),
            fmt_num(vb.y),
            fmt_num(vb.w),
            fmt_num(vb.h)
        );
        let attrs = Attrs::new()
            .str("xmlns", SVG_NS)
            .num("width", self.width)
            .num("height", self.height)
            .str("viewBox", view_box)
            .opt_str("style", self.style.as_ref());

        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        emit_container(&mut writer, "svg", attrs, &self.children)?;
        String::from_utf8(writer.into_inner()).map_err(|e| RenderError::Serialize(e.to_string()))
    }
}

/// Format a number like C's `%g`: 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if s.contains('.') {
        let s = s.trim_end_matches('0');
        let s = s.trim_end_matches('.');
        if s == "-0" { "0".to_string() } else { s.to_string() }
    } else {
        s
    }
}
