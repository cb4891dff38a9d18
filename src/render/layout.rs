//! Fallback placement for states without coordinates.
//!
//! Layout is all-or-nothing: if every state already has `x` and `y` the
//! mapping is untouched, otherwise every state is repositioned by a rule
//! chosen from the state count alone.

use indexmap::IndexMap;

use super::defaults;
use crate::spec::StateSpec;

/// Which placement rule ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStrategy {
    /// Every state already had coordinates
    Preserved,
    /// One state at the origin
    Single,
    /// Two states on the x axis, centered on the origin
    Pair,
    /// States evenly spaced on a ring, clockwise from the top
    Ring,
}

impl std::fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LayoutStrategy::Preserved => "preserved",
            LayoutStrategy::Single => "single",
            LayoutStrategy::Pair => "pair",
            LayoutStrategy::Ring => "ring",
        };
        f.write_str(name)
    }
}

/// Fill in coordinates, returning the rule that was applied.
pub fn auto_layout(states: &mut IndexMap<String, StateSpec>) -> LayoutStrategy {
    if states.values().all(|s| s.position().is_some()) {
        return LayoutStrategy::Preserved;
    }

    let n = states.len();
    let strategy = match n {
        1 => LayoutStrategy::Single,
        2 => LayoutStrategy::Pair,
        _ => LayoutStrategy::Ring,
    };
    crate::log::debug!(states = n, strategy = %strategy, "auto-layout");

    for (i, state) in states.values_mut().enumerate() {
        let (x, y) = slot(strategy, i, n);
        state.x = Some(x);
        state.y = Some(y);
    }
    strategy
}

/// Coordinates of the `i`-th of `n` states under `strategy`.
fn slot(strategy: LayoutStrategy, i: usize, n: usize) -> (f64, f64) {
    match strategy {
        LayoutStrategy::Preserved | LayoutStrategy::Single => (0.0, 0.0),
        LayoutStrategy::Pair => {
            let half = defaults::LAYOUT_PAIR_GAP / 2.0;
            if i == 0 { (-half, 0.0) } else { (half, 0.0) }
        }
        LayoutStrategy::Ring => {
            let step = 360.0 / n as f64;
            let angle = (-90.0 + step * i as f64).to_radians();
            let r = defaults::LAYOUT_RING_RADIUS;
            (r * angle.cos(), r * angle.sin())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unplaced(names: &[&str]) -> IndexMap<String, StateSpec> {
        names
            .iter()
            .map(|n| (n.to_string(), StateSpec::unplaced()))
            .collect()
    }

    #[test]
    fn single_state_at_origin() {
        let mut states = unplaced(&["q0"]);
        assert_eq!(auto_layout(&mut states), LayoutStrategy::Single);
        assert_eq!(states["q0"].position(), Some((0.0, 0.0)));
    }

    #[test]
    fn pair_is_symmetric_on_x_axis() {
        let mut states = unplaced(&["a", "b"]);
        assert_eq!(auto_layout(&mut states), LayoutStrategy::Pair);
        let (ax, ay) = states["a"].position().unwrap();
        let (bx, by) = states["b"].position().unwrap();
        assert_eq!((ay, by), (0.0, 0.0));
        assert_eq!(ax, -bx);
        assert!(ax < bx);
    }

    #[test]
    fn ring_starts_at_top_and_runs_clockwise() {
        let mut states = unplaced(&["a", "b", "c", "d"]);
        assert_eq!(auto_layout(&mut states), LayoutStrategy::Ring);
        let r = defaults::LAYOUT_RING_RADIUS;
        let (x0, y0) = states["a"].position().unwrap();
        assert!(x0.abs() < 1e-9);
        assert!((y0 + r).abs() < 1e-9);
        // Second state is a quarter turn clockwise: the right-hand side.
        let (x1, y1) = states["b"].position().unwrap();
        assert!((x1 - r).abs() < 1e-9);
        assert!(y1.abs() < 1e-9);
    }

    #[test]
    fn explicit_coordinates_are_left_alone() {
        let mut states: IndexMap<String, StateSpec> = IndexMap::new();
        states.insert("a".into(), StateSpec::at(0.1, -7.25));
        states.insert("b".into(), StateSpec::at(1e-300, 42.0));
        let before = states.clone();
        assert_eq!(auto_layout(&mut states), LayoutStrategy::Preserved);
        assert_eq!(states, before);
    }

    #[test]
    fn one_missing_coordinate_repositions_everything() {
        let mut states: IndexMap<String, StateSpec> = IndexMap::new();
        states.insert("a".into(), StateSpec::at(500.0, 500.0));
        states.insert("b".into(), StateSpec::unplaced());
        assert_eq!(auto_layout(&mut states), LayoutStrategy::Pair);
        assert_eq!(states["a"].position(), Some((-100.0, 0.0)));
        assert_eq!(states["b"].position(), Some((100.0, 0.0)));
    }

    #[test]
    fn empty_mapping_is_preserved() {
        let mut states = IndexMap::new();
        assert_eq!(auto_layout(&mut states), LayoutStrategy::Preserved);
    }
}
