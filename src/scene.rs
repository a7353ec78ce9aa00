// Render model
// Everything the two plots draw, computed from a session without touching egui_plot

use egui::Color32;
use std::f64::consts::TAU;

use crate::{
    config::LiveWavePolicy,
    frozen::{Snapshot, StoreState},
    motion::{arc_points, wave_samples, wrap_phase, ControlState},
    session::Session,
};

pub const LIVE_COLOR: Color32 = Color32::from_rgb(220, 20, 60); // crimson
pub const LIVE_WAVE_WIDTH: f32 = 3.0;
pub const FROZEN_WAVE_WIDTH: f32 = 2.0;
pub const FROZEN_OPACITY: f32 = 0.5;
pub const GUIDE_COLOR: Color32 = Color32::from_gray(150);
pub const MARKER_COLOR: Color32 = Color32::BLACK;

const CIRCLE_SEGMENTS: usize = 200;
const ARC_SEGMENTS: usize = 48;
const ARC_RADIUS_FRACTION: f64 = 0.3;
const EXTENT_MARGIN: f64 = 1.15;

#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub name: Option<String>,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
    pub width: f32,
    pub dashed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    pub name: Option<String>,
    pub origin: [f64; 2],
    pub tip: [f64; 2],
    pub color: Color32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: [f64; 2],
    pub color: Color32,
    pub radius: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub position: [f64; 2],
    pub text: String,
    pub color: Color32,
}

/// Rotating-vector diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct PhasorPanel {
    pub circle: Curve,
    pub projections: [Curve; 2],
    pub arc: Curve,
    pub angle_label: Label,
    pub frozen: Vec<Arrow>,
    pub live: Arrow,
    pub tip: Marker,
    /// Half-width of a square view that fits every vector
    pub extent: f64,
}

/// Displacement against time.
#[derive(Clone, Debug, PartialEq)]
pub struct WavePanel {
    pub frozen: Vec<Curve>,
    pub frozen_points: Vec<Marker>,
    pub live: Option<Curve>,
    pub current: Marker,
    pub time_range: (f64, f64),
    pub extent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub phasor: PhasorPanel,
    pub wave: WavePanel,
}

impl Scene {
    pub fn build(session: &Session) -> Self {
        let live = session.controls();
        let config = session.config();
        let snapshots: Vec<(&Snapshot, ControlState)> = session
            .store()
            .all()
            .iter()
            .map(|snapshot| (snapshot, snapshot.resolve(live)))
            .collect();

        let extent = snapshots
            .iter()
            .map(|(_, resolved)| resolved.amplitude)
            .fold(live.amplitude, f64::max)
            * EXTENT_MARGIN;

        let hide_live = config.live_wave == LiveWavePolicy::HideWhenFrozen
            && session.store().state() == StoreState::NonEmpty;
        let dashed_frozen = config.live_wave == LiveWavePolicy::HideWhenFrozen;

        Self {
            phasor: phasor_panel(live, &snapshots, extent),
            wave: wave_panel(
                live,
                &snapshots,
                (config.time.min, config.time.max),
                config.wave_samples,
                hide_live,
                dashed_frozen,
                extent,
            ),
        }
    }
}

fn dimmed(color: Color32) -> Color32 {
    color.gamma_multiply(FROZEN_OPACITY)
}

fn phasor_panel(
    live: &ControlState,
    snapshots: &[(&Snapshot, ControlState)],
    extent: f64,
) -> PhasorPanel {
    let tip = live.phasor();
    let (x, y) = (tip.re, tip.im);
    let guide = |points: Vec<[f64; 2]>| Curve {
        name: None,
        points,
        color: GUIDE_COLOR,
        width: 1.0,
        dashed: true,
    };

    let angle = wrap_phase(live.theta());
    let arc_radius = ARC_RADIUS_FRACTION * live.amplitude;
    let half = angle / 2.0;

    let frozen = snapshots
        .iter()
        .map(|(snapshot, resolved)| {
            let length = resolved.amplitude * snapshot.style.scale;
            let theta = snapshot.theta();
            Arrow {
                name: Some(snapshot.label(live)),
                origin: [0.0, 0.0],
                tip: [length * theta.cos(), length * theta.sin()],
                color: dimmed(snapshot.style.color),
            }
        })
        .collect();

    PhasorPanel {
        circle: Curve {
            name: None,
            points: arc_points(live.amplitude, TAU, CIRCLE_SEGMENTS),
            color: GUIDE_COLOR,
            width: 1.0,
            dashed: false,
        },
        projections: [guide(vec![[x, y], [x, 0.0]]), guide(vec![[x, y], [0.0, y]])],
        arc: Curve {
            name: None,
            points: arc_points(arc_radius, angle, ARC_SEGMENTS),
            color: LIVE_COLOR,
            width: 1.5,
            dashed: false,
        },
        angle_label: Label {
            position: [1.3 * arc_radius * half.cos(), 1.3 * arc_radius * half.sin()],
            text: format!("θ = {angle:.2} rad"),
            color: LIVE_COLOR,
        },
        frozen,
        live: Arrow {
            name: Some("Live phasor".to_owned()),
            origin: [0.0, 0.0],
            tip: [x, y],
            color: LIVE_COLOR,
        },
        tip: Marker {
            position: [x, y],
            color: MARKER_COLOR,
            radius: 4.0,
        },
        extent,
    }
}

fn wave_panel(
    live: &ControlState,
    snapshots: &[(&Snapshot, ControlState)],
    time_range: (f64, f64),
    samples: usize,
    hide_live: bool,
    dashed_frozen: bool,
    extent: f64,
) -> WavePanel {
    let (t_min, t_max) = time_range;

    let frozen = snapshots
        .iter()
        .map(|(snapshot, resolved)| Curve {
            name: Some(snapshot.label(live)),
            points: wave_samples(resolved, t_min, t_max, samples),
            color: dimmed(snapshot.style.color),
            width: FROZEN_WAVE_WIDTH,
            dashed: dashed_frozen,
        })
        .collect();

    let frozen_points = snapshots
        .iter()
        .map(|(snapshot, _)| Marker {
            position: [snapshot.time(), snapshot.displacement(live)],
            color: snapshot.style.color,
            radius: 3.0,
        })
        .collect();

    let live_curve = (!hide_live).then(|| Curve {
        name: Some("Live wave".to_owned()),
        points: wave_samples(live, t_min, t_max, samples),
        color: LIVE_COLOR,
        width: LIVE_WAVE_WIDTH,
        dashed: false,
    });

    WavePanel {
        frozen,
        frozen_points,
        live: live_curve,
        current: Marker {
            position: [live.time, live.displacement()],
            color: MARKER_COLOR,
            radius: 5.0,
        },
        time_range,
        extent,
    }
}
