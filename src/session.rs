// Session state
// One session per window: the live controls, the frozen store and the animation clock

use crate::{
    config::VisualizerConfig,
    frozen::FrozenStateStore,
    motion::{wrap_phase, ControlState, PhaseInput, PhaseChoice},
    status::Status,
};

/// A single user input, applied in the order the widgets produced them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
    SetAmplitude(f64),
    SetOmega(f64),
    SetPhase(f64),
    SetTime(f64),
    Freeze,
    Reset,
    SetAnimate(bool),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Animation {
    running: bool,
    last_step_at: Option<f64>,
}

pub struct Session {
    config: VisualizerConfig,
    controls: ControlState,
    store: FrozenStateStore,
    animation: Animation,
    pub status: Status,
}

impl Session {
    pub fn new(config: VisualizerConfig) -> Self {
        let controls = ControlState::new(
            config.amplitude.default,
            config.omega.default,
            0.0,
            config.time.default,
        );
        let store = FrozenStateStore::new(config.freeze_capture, config.scale_floor);
        Self {
            config,
            controls,
            store,
            animation: Animation::default(),
            status: Status::new(),
        }
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    pub fn store(&self) -> &FrozenStateStore {
        &self.store
    }

    pub fn is_animating(&self) -> bool {
        self.animation.running
    }

    pub fn apply(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::SetAmplitude(a) => {
                self.controls.amplitude = self.config.amplitude.clamp(a)
            }
            Interaction::SetOmega(w) => self.controls.omega = self.config.omega.clamp(w),
            Interaction::SetPhase(phi) => {
                self.controls.phi = match self.config.phase_input {
                    PhaseInput::Discrete => PhaseChoice::nearest(phi).value,
                    PhaseInput::Continuous => wrap_phase(phi),
                }
            }
            Interaction::SetTime(t) => self.controls.time = self.config.time.clamp(t),
            Interaction::Freeze => {
                let snapshot = self.store.freeze(&self.controls);
                let (count, theta) = (snapshot.index + 1, snapshot.theta());
                log::info!("freeze #{count}: {:?}", self.controls);
                self.status.froze(count, theta);
            }
            Interaction::Reset => {
                let dropped = self.store.reset();
                log::info!("cleared {dropped} frozen snapshots");
                self.status.cleared(dropped);
            }
            Interaction::SetAnimate(running) => {
                if running != self.animation.running {
                    log::debug!("animation {}", if running { "started" } else { "stopped" });
                }
                self.animation = Animation {
                    running,
                    last_step_at: None,
                };
            }
        }
    }

    pub fn apply_all(&mut self, interactions: impl IntoIterator<Item = Interaction>) {
        for interaction in interactions {
            self.apply(interaction);
        }
    }

    /// Advances time by one animation step if the delay has passed since the
    /// previous step. `now` is in seconds. Returns true when t changed.
    pub fn tick(&mut self, now: f64) -> bool {
        if !self.animation.running {
            return false;
        }
        let delay = self.config.animation.delay().as_secs_f64();
        match self.animation.last_step_at {
            // first tick after starting only arms the clock
            None => {
                self.animation.last_step_at = Some(now);
                false
            }
            Some(last) if now - last >= delay => {
                self.animation.last_step_at = Some(now);
                let range = self.config.time;
                let next = self.controls.time + self.config.animation.step;
                self.controls.time = if next > range.max { range.min } else { next };
                true
            }
            Some(_) => false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(VisualizerConfig::default())
    }
}
