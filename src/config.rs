// Visualizer configuration
// Everything that differs between visualizer variants lives here

use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

use crate::{
    error::Error,
    frozen::{FreezeCapture, DEFAULT_SCALE_FLOOR},
    motion::{ControlRange, PhaseInput},
};

/// Whether the solid live wave stays visible once snapshots exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveWavePolicy {
    #[default]
    Always,
    /// Show the live wave only while nothing is frozen, frozen traces are dashed
    HideWhenFrozen,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Time advanced per step
    pub step: f64,
    /// Wall-clock delay between steps, in milliseconds
    pub delay_ms: u64,
}

impl AnimationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step: 0.05,
            delay_ms: 50,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub amplitude: ControlRange,
    pub omega: ControlRange,
    pub phase_input: PhaseInput,
    pub time: ControlRange,
    pub freeze_capture: FreezeCapture,
    pub scale_floor: f64,
    pub live_wave: LiveWavePolicy,
    pub wave_samples: usize,
    pub animation: AnimationConfig,
    pub show_equations: bool,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            amplitude: ControlRange::new(0.5, 5.0, 2.0),
            omega: ControlRange::new(0.5, 5.0, 1.0),
            phase_input: PhaseInput::Discrete,
            time: ControlRange::new(0.0, 10.0, 0.0),
            freeze_capture: FreezeCapture::FullTuple,
            scale_floor: DEFAULT_SCALE_FLOOR,
            live_wave: LiveWavePolicy::Always,
            wave_samples: 800,
            animation: AnimationConfig::default(),
            show_equations: true,
        }
    }
}

impl VisualizerConfig {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|error| match error {
            Error::Serialize(source) => Error::ConfigJson {
                path: path.to_owned(),
                source,
            },
            other => other,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let ranges = [
            ("amplitude", self.amplitude),
            ("omega", self.omega),
            ("time", self.time),
        ];
        for (field, range) in ranges {
            if !range.is_valid() {
                return Err(Error::InvalidConfig {
                    field,
                    reason: format!(
                        "expected min < max with default inside, got {}..={} (default {})",
                        range.min, range.max, range.default
                    ),
                });
            }
        }
        if self.amplitude.min <= 0.0 {
            return Err(Error::InvalidConfig {
                field: "amplitude",
                reason: "amplitude must stay positive".to_owned(),
            });
        }
        if self.omega.min <= 0.0 {
            return Err(Error::InvalidConfig {
                field: "omega",
                reason: "angular frequency must stay positive".to_owned(),
            });
        }
        if !(self.scale_floor > 0.0 && self.scale_floor <= 1.0) {
            return Err(Error::InvalidConfig {
                field: "scale_floor",
                reason: format!("{} is outside (0, 1]", self.scale_floor),
            });
        }
        if self.animation.delay_ms == 0 {
            return Err(Error::InvalidConfig {
                field: "animation.delay_ms",
                reason: "delay must be at least 1 ms".to_owned(),
            });
        }
        if !(self.animation.step.is_finite() && self.animation.step > 0.0) {
            return Err(Error::InvalidConfig {
                field: "animation.step",
                reason: format!("{} is not a positive step", self.animation.step),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        VisualizerConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = VisualizerConfig::from_json(
            r#"{
                "freeze_capture": "phase_only",
                "scale_floor": 0.4,
                "live_wave": "hide_when_frozen"
            }"#,
        )
        .unwrap();
        assert_eq!(config.freeze_capture, FreezeCapture::PhaseOnly);
        assert_eq!(config.scale_floor, 0.4);
        assert_eq!(config.live_wave, LiveWavePolicy::HideWhenFrozen);
        assert_eq!(config.amplitude, VisualizerConfig::default().amplitude);
        assert_eq!(config.wave_samples, 800);
    }

    #[test]
    fn json_round_trips_defaults() {
        let config = VisualizerConfig::default();
        let text = config.to_json().unwrap();
        assert_eq!(VisualizerConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn rejects_bad_values() {
        let inverted = r#"{ "time": { "min": 10.0, "max": 0.0, "default": 0.0 } }"#;
        assert!(matches!(
            VisualizerConfig::from_json(inverted),
            Err(Error::InvalidConfig { field: "time", .. })
        ));
        assert!(matches!(
            VisualizerConfig::from_json(r#"{ "scale_floor": 1.5 }"#),
            Err(Error::InvalidConfig { field: "scale_floor", .. })
        ));
        assert!(matches!(
            VisualizerConfig::from_json(r#"{ "animation": { "delay_ms": 0 } }"#),
            Err(Error::InvalidConfig { field: "animation.delay_ms", .. })
        ));
        let zero_omega = r#"{ "omega": { "min": 0.0, "max": 5.0, "default": 1.0 } }"#;
        assert!(matches!(
            VisualizerConfig::from_json(zero_omega),
            Err(Error::InvalidConfig { field: "omega", .. })
        ));
        assert!(matches!(
            VisualizerConfig::from_json("not json"),
            Err(Error::Serialize(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let error = VisualizerConfig::load(Path::new("/nonexistent/phasor.json")).unwrap_err();
        assert!(matches!(error, Error::ConfigIo { .. }));
        assert!(error.to_string().contains("phasor.json"));
    }
}
