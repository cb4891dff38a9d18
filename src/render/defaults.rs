//! Default sizes and settings (SVG user units)

pub const STATE_RADIUS: f64 = 28.0;
pub const STROKE_WIDTH: f64 = 2.0;
pub const FONT_FAMILY: &str = r#""Times New Roman", Times, serif"#;
pub const ARROW_SIZE: f64 = 8.0;
pub const PADDING: f64 = 56.0;
pub const BACKGROUND: &str = "#ffffff";
pub const LABEL_OFFSET: f64 = 18.0;
pub const STATE_LABEL_OFFSET: f64 = 20.0;
pub const STATE_LABEL_SIZE: f64 = 16.0;
pub const TRANSITION_LABEL_SIZE: f64 = 16.0;
pub const FINAL_RING_GAP: f64 = 6.0;
pub const INITIAL_ARROW_LENGTH: f64 = 20.0;
pub const INITIAL_ARROW_SPREAD: f64 = 12.0;
pub const COLOR: &str = "#000";

/// Curvature used when a transition has no `bend`
pub const BEND: f64 = 0.24;
/// Smallest inner-ring radius for accepting states
pub const MIN_FINAL_RING: f64 = 4.0;
/// Room reserved around each state for stub arrows, loops and labels
pub const STATE_MARGIN: f64 = 70.0;
/// Half-angle of the initial-state chevron (30 degrees)
pub const INITIAL_ARROW_HALF_ANGLE: f64 = std::f64::consts::FRAC_PI_6;

/// Self-loop endpoints on the state circle, angles from +x (Y-down)
pub const LOOP_START_ANGLE: f64 = -std::f64::consts::FRAC_PI_3;
pub const LOOP_END_ANGLE: f64 = -2.0 * std::f64::consts::FRAC_PI_3;
/// Loop control points sit this many radii above the center
pub const LOOP_HEIGHT: f64 = 2.5;

/// Horizontal distance between the two states of a two-state auto-layout
pub const LAYOUT_PAIR_GAP: f64 = 200.0;
/// Ring radius for auto-layout of three or more states
pub const LAYOUT_RING_RADIUS: f64 = 160.0;

pub const ARROW_MARKER_ID: &str = "ad-arrow";
