// Frozen phasor snapshots
// Freeze appends the live state to the store, reset clears it, the plots iterate it

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::motion::ControlState;

/// Palette used for frozen snapshots, cycled by insertion index.
pub const PALETTE: [colorous::Color; 10] = colorous::CATEGORY10;

/// How much each later snapshot shrinks relative to the one before it.
pub const SCALE_STEP: f64 = 0.08;

pub const DEFAULT_SCALE_FLOOR: f64 = 0.45;

/// Which fields a freeze keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreezeCapture {
    /// Keep A, ω, φ and t, the snapshot never changes afterwards
    #[default]
    FullTuple,
    /// Keep only θ and t, redraw with the live A and ω
    PhaseOnly,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CapturedState {
    Full(ControlState),
    Phase { theta: f64, time: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapshotStyle {
    pub color: Color32,
    pub scale: f64,
}

/// Display attributes for the snapshot at `index`.
///
/// Depends only on the insertion index, so a snapshot keeps its color and
/// size however many are added after it.
pub fn style_for_index(index: usize, floor: f64) -> SnapshotStyle {
    let colorous::Color { r, g, b } = PALETTE[index % PALETTE.len()];
    SnapshotStyle {
        color: Color32::from_rgb(r, g, b),
        scale: (1.0 - SCALE_STEP * index as f64).max(floor),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub index: usize,
    pub captured: CapturedState,
    pub style: SnapshotStyle,
}

impl Snapshot {
    pub fn theta(&self) -> f64 {
        match self.captured {
            CapturedState::Full(state) => state.theta(),
            CapturedState::Phase { theta, .. } => theta,
        }
    }

    pub fn time(&self) -> f64 {
        match self.captured {
            CapturedState::Full(state) => state.time,
            CapturedState::Phase { time, .. } => time,
        }
    }

    /// Parameters to draw this snapshot's wave with.
    ///
    /// Phase-only snapshots reuse the live A, ω and φ at the frozen time, so
    /// any later slider change reshapes their wave.
    pub fn resolve(&self, live: &ControlState) -> ControlState {
        match self.captured {
            CapturedState::Full(state) => state,
            CapturedState::Phase { time, .. } => ControlState { time, ..*live },
        }
    }

    /// Displacement of the frozen phasor tip, A·sin θ with the frozen θ.
    pub fn displacement(&self, live: &ControlState) -> f64 {
        self.resolve(live).amplitude * self.theta().sin()
    }

    pub fn label(&self, live: &ControlState) -> String {
        format!("Frozen {}: φ={:.2}", self.index + 1, self.resolve(live).phi)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreState {
    Empty,
    NonEmpty,
}

/// Ordered history of frozen snapshots for one session.
///
/// No eviction and no dedup: every freeze appends, reset drops everything.
#[derive(Clone, Debug)]
pub struct FrozenStateStore {
    snapshots: Vec<Snapshot>,
    capture: FreezeCapture,
    scale_floor: f64,
}

impl FrozenStateStore {
    pub fn new(capture: FreezeCapture, scale_floor: f64) -> Self {
        Self {
            snapshots: Vec::new(),
            capture,
            scale_floor,
        }
    }

    /// Appends a snapshot of `current`. Never fails.
    pub fn freeze(&mut self, current: &ControlState) -> &Snapshot {
        let index = self.snapshots.len();
        let captured = match self.capture {
            FreezeCapture::FullTuple => CapturedState::Full(*current),
            FreezeCapture::PhaseOnly => CapturedState::Phase {
                theta: current.theta(),
                time: current.time,
            },
        };
        self.snapshots.push(Snapshot {
            index,
            captured,
            style: style_for_index(index, self.scale_floor),
        });
        log::debug!("froze snapshot {} at θ={:.3}", index + 1, current.theta());
        &self.snapshots[index]
    }

    /// Drops every snapshot, returning how many there were.
    pub fn reset(&mut self) -> usize {
        let dropped = self.snapshots.len();
        self.snapshots = Vec::new();
        dropped
    }

    pub fn all(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn state(&self) -> StoreState {
        if self.is_empty() {
            StoreState::Empty
        } else {
            StoreState::NonEmpty
        }
    }
}

impl Default for FrozenStateStore {
    fn default() -> Self {
        Self::new(FreezeCapture::default(), DEFAULT_SCALE_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn freezes_accumulate_in_order() {
        let mut store = FrozenStateStore::default();
        for n in 0..25 {
            assert_eq!(store.len(), n);
            store.freeze(&ControlState::new(1.0, 1.0, 0.0, n as f64 * 0.1));
        }
        let times: Vec<_> = store.all().iter().map(|s| s.time()).collect();
        let mut sorted = times.clone();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(times, sorted);
        let indices: Vec<_> = store.all().iter().map(|s| s.index).collect();
        assert_eq!(indices, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn identical_freezes_are_kept() {
        let mut store = FrozenStateStore::default();
        let state = ControlState::default();
        store.freeze(&state);
        store.freeze(&state);
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].captured, store.all()[1].captured);
    }

    #[test]
    fn reading_does_not_mutate() {
        let mut store = FrozenStateStore::default();
        store.freeze(&ControlState::default());
        store.freeze(&ControlState::new(3.0, 2.0, PI, 1.0));
        let first = store.all().to_vec();
        let second = store.all().to_vec();
        assert_eq!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn reset_clears_everything() {
        let mut store = FrozenStateStore::default();
        assert_eq!(store.reset(), 0);
        for _ in 0..7 {
            store.freeze(&ControlState::default());
        }
        assert_eq!(store.reset(), 7);
        assert_eq!(store.len(), 0);
        assert_eq!(store.state(), StoreState::Empty);
    }

    #[test]
    fn colors_cycle_through_palette() {
        let mut store = FrozenStateStore::default();
        for k in 0..23 {
            // parameters vary wildly, colors must not care
            let k_f = k as f64;
            let state = ControlState::new(0.5 + k_f, 0.1 * k_f, 0.0, 9.0 - k_f * 0.3);
            let snapshot = store.freeze(&state);
            let expected = PALETTE[k % 10];
            assert_eq!(snapshot.style.color, Color32::from_rgb(expected.r, expected.g, expected.b));
        }
        assert_eq!(store.all()[3].style.color, store.all()[13].style.color);
        assert_ne!(store.all()[3].style.color, store.all()[4].style.color);
    }

    #[test]
    fn scale_decays_to_floor() {
        assert_approx_eq!(style_for_index(0, 0.45).scale, 1.0, 1e-12);
        assert_approx_eq!(style_for_index(1, 0.45).scale, 0.92, 1e-12);
        assert_approx_eq!(style_for_index(6, 0.45).scale, 0.52, 1e-12);
        for k in 7..40 {
            assert_approx_eq!(style_for_index(k, 0.45).scale, 0.45, 1e-12);
        }
        assert_approx_eq!(style_for_index(7, 0.4).scale, 0.44, 1e-12);
        assert_approx_eq!(style_for_index(8, 0.4).scale, 0.4, 1e-12);
    }

    #[test]
    fn scale_is_strictly_decreasing_until_floor() {
        let scales: Vec<_> = (0..7).map(|k| style_for_index(k, 0.45).scale).collect();
        assert!(scales.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn state_tracks_emptiness() {
        let mut store = FrozenStateStore::default();
        assert_eq!(store.state(), StoreState::Empty);
        store.freeze(&ControlState::default());
        assert_eq!(store.state(), StoreState::NonEmpty);
        store.freeze(&ControlState::default());
        assert_eq!(store.state(), StoreState::NonEmpty);
        store.reset();
        assert_eq!(store.state(), StoreState::Empty);
    }

    #[test]
    fn freeze_then_reset_scenario() {
        let mut store = FrozenStateStore::default();
        store.freeze(&ControlState::new(2.0, 1.0, 0.0, 0.0));
        store.freeze(&ControlState::new(2.0, 1.0, PI, 2.0));
        assert_eq!(store.len(), 2);
        let [first, second] = store.all() else {
            panic!("expected two snapshots");
        };
        assert_ne!(first.style.color, second.style.color);
        assert_approx_eq!(first.style.scale, 1.0, 1e-12);
        assert_approx_eq!(second.style.scale, 0.92, 1e-12);
        store.reset();
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn full_snapshots_ignore_live_changes() {
        let mut store = FrozenStateStore::new(FreezeCapture::FullTuple, 0.45);
        let frozen = ControlState::new(2.0, 1.0, PI, 2.0);
        store.freeze(&frozen);
        let live = ControlState::new(4.0, 3.0, 0.0, 5.0);
        assert_eq!(store.all()[0].resolve(&live), frozen);
        assert_eq!(store.all()[0].label(&live), "Frozen 1: φ=3.14");
    }

    #[test]
    fn phase_only_snapshots_follow_live_parameters() {
        let mut store = FrozenStateStore::new(FreezeCapture::PhaseOnly, 0.4);
        store.freeze(&ControlState::new(2.0, 1.0, 0.0, 2.0));
        let snapshot = store.all()[0];
        assert_approx_eq!(snapshot.theta(), 2.0, 1e-12);

        let before = snapshot.resolve(&ControlState::new(2.0, 1.0, 0.0, 7.0));
        let after = snapshot.resolve(&ControlState::new(4.0, 3.0, PI, 7.0));
        assert_ne!(before, after);
        assert_eq!(after, ControlState::new(4.0, 3.0, PI, 2.0));
        assert_eq!(snapshot.label(&ControlState::new(4.0, 3.0, PI, 7.0)), "Frozen 1: φ=3.14");

        // the arrow keeps the frozen phase
        assert_approx_eq!(snapshot.theta(), 2.0, 1e-12);
        assert_approx_eq!(snapshot.displacement(&after), 4.0 * 2.0_f64.sin(), 1e-12);
    }

    #[test]
    fn full_snapshot_displacement_uses_frozen_amplitude() {
        let mut store = FrozenStateStore::default();
        store.freeze(&ControlState::new(2.0, 1.0, PI, 2.0));
        let live = ControlState::new(5.0, 2.0, 0.0, 1.0);
        assert_approx_eq!(store.all()[0].displacement(&live), 2.0 * (PI + 2.0).sin(), 1e-12);
    }
}
