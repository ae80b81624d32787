use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::*;
use crate::psychro::AirState;

// ── Envelope ────────────────────────────────────────────────────────

/// Rectangular dry-bulb / relative-humidity comfort zone, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComfortEnvelope {
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
    pub min_relative_humidity_pct: f64,
    pub max_relative_humidity_pct: f64,
}

impl ComfortEnvelope {
    /// ASHRAE 55 style summer/winter overlap: 20–26 °C, 30–60 % RH.
    pub const ASHRAE: Self = Self {
        min_temperature_c: 20.0,
        max_temperature_c: 26.0,
        min_relative_humidity_pct: 30.0,
        max_relative_humidity_pct: 60.0,
    };

    pub fn validate(&self) -> Result<()> {
        let bounds = [
            self.min_temperature_c,
            self.max_temperature_c,
            self.min_relative_humidity_pct,
            self.max_relative_humidity_pct,
        ];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(EngineError::Config("comfort envelope bounds must be finite".into()));
        }
        if self.min_temperature_c > self.max_temperature_c {
            return Err(EngineError::Config(format!(
                "comfort temperature range {}…{} °C is inverted",
                self.min_temperature_c, self.max_temperature_c
            )));
        }
        if self.min_relative_humidity_pct > self.max_relative_humidity_pct {
            return Err(EngineError::Config(format!(
                "comfort humidity range {}…{} % is inverted",
                self.min_relative_humidity_pct, self.max_relative_humidity_pct
            )));
        }
        Ok(())
    }
}

impl Default for ComfortEnvelope {
    fn default() -> Self {
        Self::ASHRAE
    }
}

// ── Verdict ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    Optimal,
    Suboptimal,
}

/// Corrective action for one violated axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    IncreaseHeating,
    IncreaseCooling,
    AddHumidification,
    AddDehumidification,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::IncreaseHeating => "Increase heating - temperature too low",
            Recommendation::IncreaseCooling => "Increase cooling - temperature too high",
            Recommendation::AddHumidification => "Add humidification - air too dry",
            Recommendation::AddDehumidification => "Add dehumidification - air too humid",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComfortVerdict {
    pub classification: Classification,
    /// Temperature first, then humidity.  Empty when optimal, and also on
    /// a suboptimal verdict whose only out-of-envelope input is NaN: NaN
    /// is neither below nor above a bound, so no action can be named.
    pub recommendations: Vec<Recommendation>,
}

impl ComfortVerdict {
    pub fn is_optimal(&self) -> bool {
        self.classification == Classification::Optimal
    }

    pub fn messages(&self) -> Vec<String> {
        self.recommendations.iter().map(ToString::to_string).collect()
    }
}

// ── Analyzer ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComfortAnalyzer {
    envelope: ComfortEnvelope,
}

impl ComfortAnalyzer {
    pub fn new(envelope: ComfortEnvelope) -> Result<Self> {
        envelope.validate()?;
        Ok(Self { envelope })
    }

    pub fn envelope(&self) -> &ComfortEnvelope {
        &self.envelope
    }

    /// Classify a dry bulb (°C) / relative humidity (%) pair.
    ///
    /// Any input is accepted; values that make no physical sense simply
    /// land outside the envelope.  A NaN axis is never inside the envelope
    /// but adds no recommendation; use [`try_classify`](Self::try_classify)
    /// to reject non-finite input instead.
    pub fn classify(&self, dry_bulb_c: f64, relative_humidity_pct: f64) -> ComfortVerdict {
        let env = &self.envelope;
        let mut recommendations = Vec::with_capacity(2);

        if dry_bulb_c < env.min_temperature_c {
            recommendations.push(Recommendation::IncreaseHeating);
        } else if dry_bulb_c > env.max_temperature_c {
            recommendations.push(Recommendation::IncreaseCooling);
        }
        if relative_humidity_pct < env.min_relative_humidity_pct {
            recommendations.push(Recommendation::AddHumidification);
        } else if relative_humidity_pct > env.max_relative_humidity_pct {
            recommendations.push(Recommendation::AddDehumidification);
        }

        let inside = (env.min_temperature_c..=env.max_temperature_c).contains(&dry_bulb_c)
            && (env.min_relative_humidity_pct..=env.max_relative_humidity_pct)
                .contains(&relative_humidity_pct);

        ComfortVerdict {
            classification: if inside {
                Classification::Optimal
            } else {
                Classification::Suboptimal
            },
            recommendations,
        }
    }

    /// [`classify`](Self::classify), but NaN or infinite input is
    /// [`EngineError::InvalidInput`].
    pub fn try_classify(&self, dry_bulb_c: f64, relative_humidity_pct: f64) -> Result<ComfortVerdict> {
        ensure_finite("dry bulb", dry_bulb_c)?;
        ensure_finite("relative humidity", relative_humidity_pct)?;
        Ok(self.classify(dry_bulb_c, relative_humidity_pct))
    }

    /// Classify a computed state, converting an imperial dry bulb first.
    pub fn classify_state(&self, state: &AirState) -> ComfortVerdict {
        self.classify(state.dry_bulb_c(), state.relative_humidity_pct)
    }
}

/// [`ComfortAnalyzer::classify`] against the ASHRAE envelope.
pub fn classify(dry_bulb_c: f64, relative_humidity_pct: f64) -> ComfortVerdict {
    ComfortAnalyzer::default().classify(dry_bulb_c, relative_humidity_pct)
}
