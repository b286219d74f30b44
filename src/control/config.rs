use std::fs;
use std::iter::Peekable;
use std::path::Path;
use std::str::SplitWhitespace;

use tracing::{info, warn};

use crate::control::parameters::SimulationParameters;

/// A setting taken over from a configuration file.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigEntry {
    Wind { angle: f32, force: Option<f32> },
    Resolution { width: u32, height: u32 },
    Pps(u32),
    Gravitation(f32),
}

/// Outcome of reading a configuration file. Problems are never fatal; they
/// are counted and the affected settings keep their defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigReport {
    pub found: bool,
    pub applied: Vec<ConfigEntry>,
    /// Malformed entries plus recognized keys that never appeared.
    pub error_count: usize,
}

/// Reads `path` and applies its settings to `params`. A file that cannot be
/// read leaves the parameters untouched.
pub fn load_config(path: &Path, params: &mut SimulationParameters) -> ConfigReport {
    match fs::read_to_string(path) {
        Ok(text) => apply_config(&text, params),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "no config file found - using default values");
            ConfigReport::default()
        }
    }
}

/// Applies the settings found in `text`.
///
/// Recognized keys are `wind <angle> [force]`, `resolution <width> <height>`,
/// `pps <n>` and `gravitation <value>`; each is honored on its first
/// occurrence only and any other token is skipped. A value that is not a
/// number is left in place and read as the next key.
pub fn apply_config(text: &str, params: &mut SimulationParameters) -> ConfigReport {
    let mut tokens = Tokens::new(text);
    let mut report = ConfigReport {
        found: true,
        ..ConfigReport::default()
    };
    let mut malformed = 0;
    let (mut wind_seen, mut resolution_seen, mut pps_seen, mut gravitation_seen) =
        (false, false, false, false);

    while let Some(key) = tokens.next_key() {
        match key {
            "wind" if !wind_seen => {
                wind_seen = true;
                match tokens.next_number() {
                    Some(angle) => {
                        params.wind_angle = angle;
                        let force = tokens.next_number();
                        match force {
                            Some(force) => {
                                params.wind_force = force;
                                info!("wind set to {:.2} degrees with force {:.2}m/s^2", angle, force);
                            }
                            None => info!("wind set to {:.2} degrees", angle),
                        }
                        report.applied.push(ConfigEntry::Wind { angle, force });
                    }
                    None => malformed += 1,
                }
            }
            "resolution" if !resolution_seen => {
                resolution_seen = true;
                let width = tokens.next_number().and_then(dimension);
                let height = width.and_then(|_| tokens.next_number().and_then(dimension));
                match (width, height) {
                    (Some(width), Some(height)) => {
                        params.width = width;
                        params.height = height;
                        info!("resolution set to {}:{}", width, height);
                        report.applied.push(ConfigEntry::Resolution { width, height });
                    }
                    _ => malformed += 1,
                }
            }
            "pps" if !pps_seen => {
                pps_seen = true;
                match tokens.next_number().and_then(dimension) {
                    Some(pps) => {
                        params.pps = pps;
                        info!("pps set to {}", pps);
                        report.applied.push(ConfigEntry::Pps(pps));
                    }
                    None => malformed += 1,
                }
            }
            "gravitation" if !gravitation_seen => {
                gravitation_seen = true;
                match tokens.next_number() {
                    Some(gravitation) => {
                        params.gravitation = gravitation;
                        info!("gravitation set to {:.2}m/s^2", gravitation);
                        report.applied.push(ConfigEntry::Gravitation(gravitation));
                    }
                    None => malformed += 1,
                }
            }
            _ => {}
        }
    }

    let unseen = [wind_seen, resolution_seen, pps_seen, gravitation_seen]
        .iter()
        .filter(|seen| !**seen)
        .count();
    report.error_count = malformed + unseen;
    if report.error_count > 0 {
        warn!(
            "{} missing or incorrect entries - using default values",
            report.error_count
        );
    }
    report
}

/// A whole, positive number that fits the pixel and rate fields.
fn dimension(value: f32) -> Option<u32> {
    (value.fract() == 0.0 && value >= 1.0 && value <= u32::MAX as f32).then(|| value as u32)
}

struct Tokens<'a> {
    inner: Peekable<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Tokens {
            inner: text.split_whitespace().peekable(),
        }
    }

    fn next_key(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    /// Consumes the next token only if it is a finite number.
    fn next_number(&mut self) -> Option<f32> {
        let value = self
            .inner
            .peek()
            .and_then(|token| token.parse::<f32>().ok())
            .filter(|value| value.is_finite())?;
        self.inner.next();
        Some(value)
    }
}
