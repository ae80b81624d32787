//! Unit conversion between the metric engine units and field units.
//!
//! The property engine always computes in **°C, kPa, kJ/kg, m³/kg,
//! kg/m³ and m**.  This crate moves values in and out of that system so
//! callers can keep working in whatever their gauges and forms use.
//!
//! # Engine units
//!
//! | Quantity         | Metric   | Imperial |
//! |------------------|----------|----------|
//! | temperature      | °C       | °F       |
//! | pressure         | kPa      | psi      |
//! | enthalpy         | kJ/kg    | BTU/lb   |
//! | specific volume  | m³/kg    | ft³/lb   |
//! | density          | kg/m³    | lb/ft³   |
//! | elevation        | m        | ft       |
//!
//! All functions are total over the reals and never round; display
//! formatting is the caller's business.
//!
//! ```
//! use converter::{Converter, UnitSystem};
//!
//! let conv = Converter::new(UnitSystem::Imperial);
//! let t_c = conv.t_to_metric(77.0);
//! assert!((t_c - 25.0).abs() < 1e-12);
//! ```

use std::fmt;
use std::str::FromStr;

// ────────────────────────────────────────────────────────────────────
//  Conversion factors
// ────────────────────────────────────────────────────────────────────

/// psi per kPa.
pub const PSI_PER_KPA: f64 = 0.145038;
/// Standard atmosphere (kPa), the zero of gauge readings.
pub const STANDARD_ATMOSPHERE_KPA: f64 = 101.325;
/// kW per BTU/h.
pub const KW_PER_BTU_H: f64 = 0.000_293_071;
/// m³/h per CFM.
pub const M3H_PER_CFM: f64 = 1.699_011;
/// ft per m.
pub const FEET_PER_METER: f64 = 3.280_84;
/// BTU/lb per kJ/kg.
pub const BTU_LB_PER_KJ_KG: f64 = 0.4299;
/// ft³/lb per m³/kg.
pub const FT3_LB_PER_M3_KG: f64 = 16.018;
/// lb/ft³ per kg/m³.
pub const LB_FT3_PER_KG_M3: f64 = 0.062428;

// ── Temperature ─────────────────────────────────────────────────────

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Temperature *difference* (superheat, subcooling, approach) °C → °F.
pub fn celsius_delta_to_fahrenheit(dc: f64) -> f64 {
    dc * 9.0 / 5.0
}

pub fn fahrenheit_delta_to_celsius(df: f64) -> f64 {
    df * 5.0 / 9.0
}

// ── Pressure ────────────────────────────────────────────────────────

pub fn kpa_to_psi(kpa: f64) -> f64 {
    kpa * PSI_PER_KPA
}

pub fn psi_to_kpa(psi: f64) -> f64 {
    psi / PSI_PER_KPA
}

/// Absolute kPa → gauge psi (relative to one standard atmosphere).
pub fn kpa_to_psig(kpa_abs: f64) -> f64 {
    kpa_to_psi(kpa_abs - STANDARD_ATMOSPHERE_KPA)
}

/// Gauge psi → absolute kPa.
pub fn psig_to_kpa(psig: f64) -> f64 {
    psi_to_kpa(psig) + STANDARD_ATMOSPHERE_KPA
}

// ── Capacity & airflow ──────────────────────────────────────────────

pub fn btu_h_to_kw(btu_h: f64) -> f64 {
    btu_h * KW_PER_BTU_H
}

pub fn kw_to_btu_h(kw: f64) -> f64 {
    kw / KW_PER_BTU_H
}

pub fn cfm_to_m3h(cfm: f64) -> f64 {
    cfm * M3H_PER_CFM
}

pub fn m3h_to_cfm(m3h: f64) -> f64 {
    m3h / M3H_PER_CFM
}

// ── Length ──────────────────────────────────────────────────────────

pub fn meters_to_feet(m: f64) -> f64 {
    m * FEET_PER_METER
}

pub fn feet_to_meters(ft: f64) -> f64 {
    ft / FEET_PER_METER
}

// ── Moist-air specific quantities ───────────────────────────────────

/// Scale factor only; the 0 °C / 0 °F datum shift is not applied.
pub fn kj_kg_to_btu_lb(h: f64) -> f64 {
    h * BTU_LB_PER_KJ_KG
}

pub fn btu_lb_to_kj_kg(h: f64) -> f64 {
    h / BTU_LB_PER_KJ_KG
}

pub fn m3_kg_to_ft3_lb(v: f64) -> f64 {
    v * FT3_LB_PER_M3_KG
}

pub fn ft3_lb_to_m3_kg(v: f64) -> f64 {
    v / FT3_LB_PER_M3_KG
}

pub fn kg_m3_to_lb_ft3(d: f64) -> f64 {
    d * LB_FT3_PER_KG_M3
}

pub fn lb_ft3_to_kg_m3(d: f64) -> f64 {
    d / LB_FT3_PER_KG_M3
}

// ────────────────────────────────────────────────────────────────────
//  UnitSystem
// ────────────────────────────────────────────────────────────────────

/// Unit system a caller reads and writes values in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnitSystem {
    /// °C, kPa, kJ/kg, m³/kg, kg/m³, m (engine native)
    #[default]
    Metric,
    /// °F, psi, BTU/lb, ft³/lb, lb/ft³, ft
    Imperial,
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => f.write_str("metric"),
            UnitSystem::Imperial => f.write_str("imperial"),
        }
    }
}

/// Returned when a string names no known unit system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUnitSystemError(pub String);

impl fmt::Display for ParseUnitSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit system '{}' (expected 'metric' or 'imperial')", self.0)
    }
}

impl std::error::Error for ParseUnitSystemError {}

impl FromStr for UnitSystem {
    type Err = ParseUnitSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "ip" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(ParseUnitSystemError(s.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  Converter
// ────────────────────────────────────────────────────────────────────

/// Moves values between a caller's [`UnitSystem`] and the metric
/// engine units.  `*_to_metric` goes in, `*_from_metric` comes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Converter {
    pub units: UnitSystem,
}

impl Converter {
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    fn is_metric(&self) -> bool {
        self.units == UnitSystem::Metric
    }

    // ── Temperature ─────────────────────────────────────────────────

    /// User → °C
    pub fn t_to_metric(&self, t: f64) -> f64 {
        if self.is_metric() { t } else { fahrenheit_to_celsius(t) }
    }

    /// °C → User
    pub fn t_from_metric(&self, t: f64) -> f64 {
        if self.is_metric() { t } else { celsius_to_fahrenheit(t) }
    }

    /// Temperature difference °C → User
    pub fn dt_from_metric(&self, dt: f64) -> f64 {
        if self.is_metric() { dt } else { celsius_delta_to_fahrenheit(dt) }
    }

    // ── Pressure (absolute) ─────────────────────────────────────────

    /// User → kPa
    pub fn p_to_metric(&self, p: f64) -> f64 {
        if self.is_metric() { p } else { psi_to_kpa(p) }
    }

    /// kPa → User
    pub fn p_from_metric(&self, p: f64) -> f64 {
        if self.is_metric() { p } else { kpa_to_psi(p) }
    }

    // ── Elevation ───────────────────────────────────────────────────

    /// User → m
    pub fn z_to_metric(&self, z: f64) -> f64 {
        if self.is_metric() { z } else { feet_to_meters(z) }
    }

    /// m → User
    pub fn z_from_metric(&self, z: f64) -> f64 {
        if self.is_metric() { z } else { meters_to_feet(z) }
    }

    // ── Enthalpy / specific volume / density (outputs only) ─────────

    /// kJ/kg → User
    pub fn h_from_metric(&self, h: f64) -> f64 {
        if self.is_metric() { h } else { kj_kg_to_btu_lb(h) }
    }

    /// m³/kg → User
    pub fn v_from_metric(&self, v: f64) -> f64 {
        if self.is_metric() { v } else { m3_kg_to_ft3_lb(v) }
    }

    /// kg/m³ → User
    pub fn d_from_metric(&self, d: f64) -> f64 {
        if self.is_metric() { d } else { kg_m3_to_lb_ft3(d) }
    }
}
