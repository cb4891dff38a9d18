//! The diagram description the renderer consumes.
//!
//! These are plain data types. Turning YAML/JSON text into them is the
//! caller's business; with the `serde` feature they deserialize directly from
//! the key names the fence format uses (`loopDir`, `stateRadius`, ...).

use indexmap::IndexMap;

use crate::style::StyleOverrides;

/// One automaton state.
///
/// `x`/`y` are optional; when any state lacks them, auto-layout positions
/// every state (see [`crate::render::layout::auto_layout`]).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StateSpec {
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Display text; the state's key is used when absent
    pub label: Option<String>,
    /// Overrides the style's `state_radius`
    pub radius: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial: bool,
    /// Accepting state, drawn with an inner ring
    #[cfg_attr(feature = "serde", serde(default, rename = "final"))]
    pub accepting: bool,
}

impl StateSpec {
    /// A state at an explicit position
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// A state left for auto-layout to place
    pub fn unplaced() -> Self {
        Self::default()
    }

    pub fn initial(mut self) -> Self {
        self.initial = true;
        self
    }

    pub fn accepting(mut self) -> Self {
        self.accepting = true;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Both coordinates, if the state has been placed
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.x?, self.y?))
    }
}

/// Legacy placement hint for self-loops.
///
/// Accepted for compatibility with older descriptions; loops are always drawn
/// as the upper arc regardless of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum LoopDir {
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    North,
    #[cfg_attr(feature = "serde", serde(rename = "E"))]
    East,
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    South,
    #[cfg_attr(feature = "serde", serde(rename = "W"))]
    West,
}

/// One directed edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TransitionSpec {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
    /// Signed curvature as a fraction of the edge length (default 0.24)
    pub bend: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, rename = "loop"))]
    pub is_loop: bool,
    pub loop_dir: Option<LoopDir>,
}

impl TransitionSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            bend: None,
            is_loop: false,
            loop_dir: None,
        }
    }

    /// A self-transition on `state`
    pub fn self_loop(state: impl Into<String>) -> Self {
        let state = state.into();
        Self {
            is_loop: true,
            ..Self::new(state.clone(), state)
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_bend(mut self, bend: f64) -> Self {
        self.bend = Some(bend);
        self
    }
}

/// The root input: states keyed by name, edges in drawing order, and an
/// optional partial style.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DiagramSpec {
    #[cfg_attr(feature = "serde", serde(default))]
    pub states: IndexMap<String, StateSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub transitions: Vec<TransitionSpec>,
    pub style: Option<StyleOverrides>,
}

impl DiagramSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a state
    pub fn state(mut self, name: impl Into<String>, state: StateSpec) -> Self {
        self.states.insert(name.into(), state);
        self
    }

    pub fn transition(mut self, transition: TransitionSpec) -> Self {
        self.transitions.push(transition);
        self
    }

    pub fn with_style(mut self, style: StyleOverrides) -> Self {
        self.style = Some(style);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_insertion_order() {
        let spec = DiagramSpec::new()
            .state("q2", StateSpec::unplaced())
            .state("q0", StateSpec::unplaced().initial())
            .state("q1", StateSpec::unplaced().accepting());
        let names: Vec<_> = spec.states.keys().map(String::as_str).collect();
        assert_eq!(names, ["q2", "q0", "q1"]);
        assert!(spec.states["q0"].initial);
        assert!(spec.states["q1"].accepting);
    }

    #[test]
    fn position_requires_both_coordinates() {
        assert_eq!(StateSpec::at(1.0, 2.0).position(), Some((1.0, 2.0)));
        let half = StateSpec {
            x: Some(1.0),
            ..StateSpec::default()
        };
        assert_eq!(half.position(), None);
    }

    #[test]
    fn self_loop_targets_its_own_state() {
        let t = TransitionSpec::self_loop("q0").with_label("a");
        assert!(t.is_loop);
        assert_eq!(t.from, "q0");
        assert_eq!(t.to, "q0");
        assert_eq!(t.label.as_deref(), Some("a"));
        assert_eq!(t.bend, None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    const THREE_STATES: &str = r#"
states:
  A: { x: 0, y: 0, initial: true }
  B: { x: 200, y: 0 }
  C: { x: 100, y: 150, final: true }
transitions:
  - { from: A, to: B, label: "0" }
  - { from: B, to: C, label: "1", bend: -0.3 }
  - { from: C, to: C, loop: true, loopDir: N, label: "0,1" }
style:
  stateRadius: 30
  labelItalic: false
"#;

    #[test]
    fn deserializes_fence_keys() {
        let spec: DiagramSpec = serde_yaml::from_str(THREE_STATES).unwrap();

        let names: Vec<_> = spec.states.keys().map(String::as_str).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert!(spec.states["A"].initial);
        assert!(!spec.states["A"].accepting);
        assert!(spec.states["C"].accepting);
        assert_eq!(spec.states["C"].position(), Some((100.0, 150.0)));

        assert_eq!(spec.transitions.len(), 3);
        assert!(!spec.transitions[0].is_loop);
        assert_eq!(spec.transitions[1].bend, Some(-0.3));
        let lp = &spec.transitions[2];
        assert!(lp.is_loop);
        assert_eq!(lp.loop_dir, Some(LoopDir::North));
        assert_eq!(lp.label.as_deref(), Some("0,1"));

        let style = spec.style.as_ref().unwrap();
        assert_eq!(style.state_radius, Some(30.0));
        assert_eq!(style.label_italic, Some(false));
        assert_eq!(style.padding, None);
    }

    #[test]
    fn unplaced_states_need_no_coordinates() {
        let spec: DiagramSpec =
            serde_yaml::from_str("states:\n  q0: {}\n  q1: { final: true }\n").unwrap();
        assert_eq!(spec.states["q0"], StateSpec::unplaced());
        assert!(spec.states["q1"].accepting);
        assert!(spec.transitions.is_empty());
        assert!(spec.style.is_none());
    }
}
