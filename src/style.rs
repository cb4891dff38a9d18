//! Visual constants for one render call.
//!
//! [`Style`] is the fully resolved record; [`StyleOverrides`] is the partial
//! form a diagram carries. Nothing here is global: every render resolves its
//! own `Style` from the defaults plus the diagram's overrides.

use crate::errors::RenderError;
use crate::render::defaults;
use crate::types::check_finite;

/// Resolved style
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub state_radius: f64,
    pub stroke_width: f64,
    pub font_family: String,
    pub label_italic: bool,
    pub arrow_size: f64,
    pub padding: f64,
    pub background: String,
    /// Distance a transition label is pushed away from its curve
    pub label_offset: f64,
    /// Distance from a state's circle to its name label baseline
    pub state_label_offset: f64,
    pub state_label_size: f64,
    pub transition_label_size: f64,
    /// Gap between outer circle and inner ring of accepting states
    pub final_ring_gap: f64,
    pub initial_arrow_length: f64,
    pub initial_arrow_spread: f64,
    /// Stroke color, also used as `currentColor` for text and arrowheads
    pub color: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            state_radius: defaults::STATE_RADIUS,
            stroke_width: defaults::STROKE_WIDTH,
            font_family: defaults::FONT_FAMILY.to_string(),
            label_italic: true,
            arrow_size: defaults::ARROW_SIZE,
            padding: defaults::PADDING,
            background: defaults::BACKGROUND.to_string(),
            label_offset: defaults::LABEL_OFFSET,
            state_label_offset: defaults::STATE_LABEL_OFFSET,
            state_label_size: defaults::STATE_LABEL_SIZE,
            transition_label_size: defaults::TRANSITION_LABEL_SIZE,
            final_ring_gap: defaults::FINAL_RING_GAP,
            initial_arrow_length: defaults::INITIAL_ARROW_LENGTH,
            initial_arrow_spread: defaults::INITIAL_ARROW_SPREAD,
            color: defaults::COLOR.to_string(),
        }
    }
}

/// Partial style carried by a diagram; `None` fields keep the default.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StyleOverrides {
    pub state_radius: Option<f64>,
    pub stroke_width: Option<f64>,
    pub font_family: Option<String>,
    pub label_italic: Option<bool>,
    pub arrow_size: Option<f64>,
    pub padding: Option<f64>,
    pub background: Option<String>,
    pub label_offset: Option<f64>,
    pub state_label_offset: Option<f64>,
    pub state_label_size: Option<f64>,
    pub transition_label_size: Option<f64>,
    pub final_ring_gap: Option<f64>,
    pub initial_arrow_length: Option<f64>,
    pub initial_arrow_spread: Option<f64>,
    pub color: Option<String>,
}

impl Style {
    /// Merge overrides onto the defaults.
    pub fn resolve(overrides: Option<&StyleOverrides>) -> Self {
        let mut style = Self::default();
        let Some(o) = overrides else {
            return style;
        };

        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(v) = &o.$field {
                        style.$field = v.clone();
                    }
                )*
            };
        }

        merge! {
            state_radius,
            stroke_width,
            font_family,
            label_italic,
            arrow_size,
            padding,
            background,
            label_offset,
            state_label_offset,
            state_label_size,
            transition_label_size,
            final_ring_gap,
            initial_arrow_length,
            initial_arrow_spread,
            color,
        }
        style
    }

    /// Reject NaN/infinite numeric fields before they reach the output.
    pub fn validate(&self) -> Result<(), RenderError> {
        let fields = [
            ("stateRadius", self.state_radius),
            ("strokeWidth", self.stroke_width),
            ("arrowSize", self.arrow_size),
            ("padding", self.padding),
            ("labelOffset", self.label_offset),
            ("stateLabelOffset", self.state_label_offset),
            ("stateLabelSize", self.state_label_size),
            ("transitionLabelSize", self.transition_label_size),
            ("finalRingGap", self.final_ring_gap),
            ("initialArrowLength", self.initial_arrow_length),
            ("initialArrowSpread", self.initial_arrow_spread),
        ];
        for (field, value) in fields {
            check_finite(value).map_err(|reason| RenderError::NonFiniteStyle { field, reason })?;
        }
        Ok(())
    }

    /// Background fill for the canvas rect; transparent backgrounds stay unfilled.
    pub fn background_fill(&self) -> &str {
        match self.background.trim() {
            "" | "transparent" | "none" => "none",
            other => other,
        }
    }

    pub fn label_font_style(&self) -> &'static str {
        if self.label_italic { "italic" } else { "normal" }
    }
}
