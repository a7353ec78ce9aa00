// Formula text shown next to the plots

use crate::motion::ControlState;

pub const PHASE_LAW: &str = "θ(t) = ωt + φ";
pub const DISPLACEMENT_LAW: &str = "y(t) = A sin(θ)";

pub const DESCRIPTION: &str = "A vector of length A rotating at angular speed ω traces a circle. \
Its vertical projection oscillates as y(t) = A sin(ωt + φ). Freeze the current configuration \
to keep its phasor and sine wave on the plots and compare it against later ones.";

/// Governing formulas with the live values substituted in.
#[derive(Clone, Debug, PartialEq)]
pub struct Substituted {
    pub phase: String,
    pub displacement: String,
    pub projection: String,
}

impl Substituted {
    pub fn new(state: &ControlState) -> Self {
        let theta = state.theta();
        Self {
            phase: format!(
                "θ = ωt + φ = {:.2} × {:.2} + {:.2} = {:.2}",
                state.omega, state.time, state.phi, theta
            ),
            displacement: format!(
                "y(t) = {:.2} sin({:.2}) = {:.2}",
                state.amplitude,
                theta,
                state.displacement()
            ),
            projection: format!("x = A cos(θ) = {:.2}", state.horizontal()),
        }
    }

    pub fn lines(&self) -> [&str; 3] {
        [&self.phase, &self.displacement, &self.projection]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn substitutes_live_values() {
        let eq = Substituted::new(&ControlState::new(2.0, 1.0, FRAC_PI_2, 0.0));
        assert_eq!(eq.phase, "θ = ωt + φ = 1.00 × 0.00 + 1.57 = 1.57");
        assert_eq!(eq.displacement, "y(t) = 2.00 sin(1.57) = 2.00");
        assert_eq!(eq.projection, "x = A cos(θ) = 0.00");
    }

    #[test]
    fn negative_displacement_keeps_sign() {
        let eq = Substituted::new(&ControlState::new(3.0, 2.0, 0.0, 2.0));
        // sin(4) ≈ -0.7568
        assert_eq!(eq.displacement, "y(t) = 3.00 sin(4.00) = -2.27");
        assert_eq!(eq.lines()[0], "θ = ωt + φ = 2.00 × 2.00 + 0.00 = 4.00");
    }
}
