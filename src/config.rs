use std::env;
use std::sync::Once;

use converter::UnitSystem;
use log::debug;

use crate::comfort::{ComfortAnalyzer, ComfortEnvelope};
use crate::error::*;

pub const ENV_UNIT_SYSTEM: &str = "HVAC_UNIT_SYSTEM";
pub const ENV_COMFORT_TEMP_MIN_C: &str = "HVAC_COMFORT_TEMP_MIN_C";
pub const ENV_COMFORT_TEMP_MAX_C: &str = "HVAC_COMFORT_TEMP_MAX_C";
pub const ENV_COMFORT_RH_MIN_PCT: &str = "HVAC_COMFORT_RH_MIN_PCT";
pub const ENV_COMFORT_RH_MAX_PCT: &str = "HVAC_COMFORT_RH_MAX_PCT";

/// Process-level defaults: preferred unit system and comfort envelope.
///
/// Nothing in the engine reads these implicitly.  They exist so that an
/// application can pick its defaults from the environment (or a `.env`
/// file) and pass them on explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settings {
    pub unit_system: UnitSystem,
    pub comfort: ComfortEnvelope,
}

impl Settings {
    /// Read settings from the process environment, after loading `.env`.
    ///
    /// `.env` is searched in the working directory, then
    /// `CARGO_MANIFEST_DIR`, then next to the executable.  Unset variables
    /// keep their defaults; set but unparsable ones are an error.
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let unit_system = match lookup(ENV_UNIT_SYSTEM) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| EngineError::Config(format!("{ENV_UNIT_SYSTEM}: {e}")))?,
            None => defaults.unit_system,
        };

        let number = |key: &str, fallback: f64| -> Result<f64> {
            match lookup(key) {
                Some(raw) => raw.trim().parse::<f64>().map_err(|_| {
                    EngineError::Config(format!("{key}: expected a number, got {raw:?}"))
                }),
                None => Ok(fallback),
            }
        };

        let comfort = ComfortEnvelope {
            min_temperature_c: number(ENV_COMFORT_TEMP_MIN_C, defaults.comfort.min_temperature_c)?,
            max_temperature_c: number(ENV_COMFORT_TEMP_MAX_C, defaults.comfort.max_temperature_c)?,
            min_relative_humidity_pct: number(
                ENV_COMFORT_RH_MIN_PCT,
                defaults.comfort.min_relative_humidity_pct,
            )?,
            max_relative_humidity_pct: number(
                ENV_COMFORT_RH_MAX_PCT,
                defaults.comfort.max_relative_humidity_pct,
            )?,
        };
        comfort.validate()?;

        let settings = Self { unit_system, comfort };
        debug!("settings: {settings:?}");
        Ok(settings)
    }

    pub fn comfort_analyzer(&self) -> Result<ComfortAnalyzer> {
        ComfortAnalyzer::new(self.comfort)
    }
}

// ── .env loading (once) ──────────────────────────────────────────────

fn load_dotenv() {
    static DOTENV_INIT: Once = Once::new();
    DOTENV_INIT.call_once(|| {
        if dotenvy::dotenv().is_ok() {
            return;
        }
        if let Ok(dir) = env::var("CARGO_MANIFEST_DIR") {
            let p = std::path::PathBuf::from(dir).join(".env");
            if p.exists() {
                let _ = dotenvy::from_path(&p);
                return;
            }
        }
        if let Ok(exe) = env::current_exe() {
            if let Some(dir) = exe.parent() {
                let p = dir.join(".env");
                if p.exists() {
                    let _ = dotenvy::from_path(&p);
                }
            }
        }
    });
}
