// Harmonic motion as the projection of a rotating phasor
// Control parameters, derived quantities and wave sampling used by the plots

use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Live slider values. Derived values are recomputed on demand and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub amplitude: f64,
    pub omega: f64,
    pub phi: f64,
    pub time: f64,
}

impl ControlState {
    pub fn new(amplitude: f64, omega: f64, phi: f64, time: f64) -> Self {
        Self {
            amplitude,
            omega,
            phi,
            time,
        }
    }

    /// Instantaneous phase θ = ωt + φ.
    pub fn theta(&self) -> f64 {
        self.omega * self.time + self.phi
    }

    /// Displacement y = A·sin θ.
    pub fn displacement(&self) -> f64 {
        self.amplitude * self.theta().sin()
    }

    /// Horizontal projection x = A·cos θ.
    pub fn horizontal(&self) -> f64 {
        self.amplitude * self.theta().cos()
    }

    /// Tip of the rotating vector, A·e^{iθ}.
    pub fn phasor(&self) -> Complex64 {
        Complex64::from_polar(self.amplitude, self.theta())
    }

    /// Displacement at an arbitrary time with the same A, ω, φ.
    pub fn displacement_at(&self, time: f64) -> f64 {
        self.amplitude * (self.omega * time + self.phi).sin()
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new(2.0, 1.0, 0.0, 0.0)
    }
}

/// Bounds and starting value of one slider.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl ControlRange {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min < self.max
            && self.contains(self.default)
    }
}

/// How the initial phase is entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseInput {
    /// Labeled choice among 0, π/2, π, 3π/2
    #[default]
    Discrete,
    /// Slider over [0, 2π)
    Continuous,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseChoice {
    pub label: &'static str,
    pub value: f64,
}

pub const PHASE_CHOICES: [PhaseChoice; 4] = [
    PhaseChoice { label: "0", value: 0.0 },
    PhaseChoice { label: "π/2", value: FRAC_PI_2 },
    PhaseChoice { label: "π", value: PI },
    PhaseChoice { label: "3π/2", value: 3.0 * FRAC_PI_2 },
];

impl PhaseChoice {
    /// Labeled choice closest to `phi`, measured around the circle.
    pub fn nearest(phi: f64) -> PhaseChoice {
        let distance = |choice: &PhaseChoice| {
            let d = (phi - choice.value).rem_euclid(TAU);
            d.min(TAU - d)
        };
        PHASE_CHOICES
            .iter()
            .copied()
            .min_by(|a, b| distance(a).total_cmp(&distance(b)))
            .unwrap_or(PHASE_CHOICES[0])
    }
}

/// Wraps a phase into [0, 2π).
pub fn wrap_phase(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Samples y(τ) = A·sin(ωτ + φ) on an evenly spaced grid over [t_min, t_max].
pub fn wave_samples(
    params: &ControlState,
    t_min: f64,
    t_max: f64,
    samples: usize,
) -> Vec<[f64; 2]> {
    match samples {
        0 => Vec::new(),
        1 => vec![[t_min, params.displacement_at(t_min)]],
        n => Array1::linspace(t_min, t_max, n)
            .iter()
            .map(|&t| [t, params.displacement_at(t)])
            .collect(),
    }
}

/// Points along an arc of `radius` from angle 0 to `angle`.
pub fn arc_points(radius: f64, angle: f64, segments: usize) -> Vec<[f64; 2]> {
    let segments = segments.max(1);
    Array1::linspace(0.0, angle, segments + 1)
        .iter()
        .map(|&a| [radius * a.cos(), radius * a.sin()])
        .collect()
}
