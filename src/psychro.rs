//! Moist-air properties from dry bulb, wet bulb and elevation.
//!
//! The math is metric throughout.  Imperial callers are converted at the
//! boundary: inputs on the way in, every output on the way out.

use std::fmt;

use converter::{Converter, UnitSystem};
use log::{debug, trace};
use serde::Serialize;

use crate::error::*;
use crate::water::{dew_point_c, saturation_vapor_pressure_kpa};

/// Standard-atmosphere sea-level pressure (kPa).
pub const SEA_LEVEL_PRESSURE_KPA: f64 = 101.325;
/// Ratio of molar masses, water / dry air.
pub const MOLAR_MASS_RATIO: f64 = 0.622;
/// Psychrometer coefficient for an aspirated wet bulb (1/K).
pub const PSYCHROMETER_COEFFICIENT: f64 = 0.000662;

const LAPSE_RATE_K_PER_M: f64 = 0.0065;
const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15;
const BAROMETRIC_EXPONENT: f64 = 5.255;

/// Longest series [`saturation_line`] and [`relative_humidity_line`] produce.
pub const MAX_CHART_POINTS: usize = 10_000;

const CP_DRY_AIR: f64 = 1.006; // kJ/(kg·K)
const CP_VAPOR: f64 = 1.86; // kJ/(kg·K)
const LATENT_HEAT_0C: f64 = 2501.0; // kJ/kg
const R_DRY_AIR: f64 = 0.287; // kJ/(kg·K)

// ── AirState ────────────────────────────────────────────────────────

/// Complete psychrometric state, in the caller's unit system.
///
/// | Field               | Metric  | Imperial |
/// |---------------------|---------|----------|
/// | dry_bulb, wet_bulb  | °C      | °F       |
/// | elevation           | m       | ft       |
/// | barometric_pressure | kPa     | psi      |
/// | humidity_ratio      | kg/kg   | lb/lb    |
/// | relative_humidity_pct | %     | %        |
/// | dew_point           | °C      | °F       |
/// | enthalpy            | kJ/kg   | BTU/lb   |
/// | specific_volume     | m³/kg   | ft³/lb   |
/// | density             | kg/m³   | lb/ft³   |
/// | vapor_pressure      | kPa     | psi      |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirState {
    pub unit_system: UnitSystem,
    pub dry_bulb: f64,
    pub wet_bulb: f64,
    pub elevation: f64,
    pub barometric_pressure: f64,
    pub humidity_ratio: f64,
    /// Always within [0, 100].
    pub relative_humidity_pct: f64,
    pub dew_point: f64,
    pub enthalpy: f64,
    pub specific_volume: f64,
    pub density: f64,
    pub vapor_pressure: f64,
}

impl AirState {
    /// Dry bulb in °C whatever the unit system.
    pub fn dry_bulb_c(&self) -> f64 {
        Converter::new(self.unit_system).t_to_metric(self.dry_bulb)
    }
}

impl fmt::Display for AirState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (t, p, h, v, d, z) = match self.unit_system {
            UnitSystem::Metric => ("°C", "kPa", "kJ/kg", "m³/kg", "kg/m³", "m"),
            UnitSystem::Imperial => ("°F", "psi", "BTU/lb", "ft³/lb", "lb/ft³", "ft"),
        };
        writeln!(f, "DB  = {:.2} {t}", self.dry_bulb)?;
        writeln!(f, "WB  = {:.2} {t}", self.wet_bulb)?;
        writeln!(f, "Z   = {:.0} {z}", self.elevation)?;
        writeln!(f, "P   = {:.3} {p}", self.barometric_pressure)?;
        writeln!(f, "W   = {:.5}", self.humidity_ratio)?;
        writeln!(f, "RH  = {:.1} %", self.relative_humidity_pct)?;
        writeln!(f, "DP  = {:.2} {t}", self.dew_point)?;
        writeln!(f, "h   = {:.2} {h}", self.enthalpy)?;
        writeln!(f, "v   = {:.4} {v}", self.specific_volume)?;
        writeln!(f, "rho = {:.4} {d}", self.density)?;
        write!(f, "Pv  = {:.4} {p}", self.vapor_pressure)
    }
}

// ── Barometric pressure ─────────────────────────────────────────────

/// Standard-atmosphere pressure (kPa) at `elevation_m` above sea level.
pub fn barometric_pressure_kpa(elevation_m: f64) -> Result<f64> {
    ensure_finite("elevation", elevation_m)?;
    let base = 1.0 - LAPSE_RATE_K_PER_M * elevation_m / SEA_LEVEL_TEMPERATURE_K;
    if base <= 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "elevation {elevation_m} m is above the standard atmosphere"
        )));
    }
    Ok(SEA_LEVEL_PRESSURE_KPA * base.powf(BAROMETRIC_EXPONENT))
}

// ── Full state ──────────────────────────────────────────────────────

/// Derive every psychrometric property from a psychrometer reading.
///
/// `dry_bulb`, `wet_bulb` and `elevation` are in `unit_system` units
/// (°C and m, or °F and ft) and so is the returned state.
///
/// ```
/// use hvac_props::{compute_air_state, UnitSystem};
///
/// let s = compute_air_state(25.0, 18.0, 0.0, UnitSystem::Metric)?;
/// assert!(s.relative_humidity_pct > 45.0 && s.relative_humidity_pct < 55.0);
/// # Ok::<(), hvac_props::EngineError>(())
/// ```
pub fn compute_air_state(
    dry_bulb: f64,
    wet_bulb: f64,
    elevation: f64,
    unit_system: UnitSystem,
) -> Result<AirState> {
    ensure_finite("dry bulb", dry_bulb)?;
    ensure_finite("wet bulb", wet_bulb)?;
    ensure_finite("elevation", elevation)?;

    let conv = Converter::new(unit_system);
    let db = conv.t_to_metric(dry_bulb);
    let wb = conv.t_to_metric(wet_bulb);

    if wb > db {
        return Err(EngineError::InvalidInput(format!(
            "wet bulb ({wet_bulb}) exceeds dry bulb ({dry_bulb})"
        )));
    }

    let p = barometric_pressure_kpa(conv.z_to_metric(elevation))?;
    let pws_wb = saturation_vapor_pressure_kpa(wb)?;
    let pws_db = saturation_vapor_pressure_kpa(db)?;

    let mut pw = pws_wb - p * (db - wb) * PSYCHROMETER_COEFFICIENT;
    if pw < 0.0 {
        debug!("vapour pressure {pw:.5} kPa clamped to 0 (DB {db} °C, WB {wb} °C)");
        pw = 0.0;
    }
    if pw >= p {
        return Err(EngineError::InvalidInput(format!(
            "wet bulb {wet_bulb} is at or above the boiling point at {p:.3} kPa"
        )));
    }

    let w = (MOLAR_MASS_RATIO * pw / (p - pw)).max(0.0);
    let pv = w * p / (MOLAR_MASS_RATIO + w);

    let rh_raw = 100.0 * pv / pws_db;
    let rh = rh_raw.clamp(0.0, 100.0);
    if rh != rh_raw {
        trace!("relative humidity {rh_raw} % clamped to {rh} %");
    }

    let dew = dew_point_c(pv);
    let h = CP_DRY_AIR * db + w * (LATENT_HEAT_0C + CP_VAPOR * db);
    let v = R_DRY_AIR * (db + 273.15) * (1.0 + 1.608 * w) / p;
    let rho = 1.0 / v;

    Ok(AirState {
        unit_system,
        dry_bulb,
        wet_bulb,
        elevation,
        barometric_pressure: conv.p_from_metric(p),
        humidity_ratio: w,
        relative_humidity_pct: rh,
        dew_point: conv.t_from_metric(dew),
        enthalpy: conv.h_from_metric(h),
        specific_volume: conv.v_from_metric(v),
        density: conv.d_from_metric(rho),
        vapor_pressure: conv.p_from_metric(pv),
    })
}

// ── Chart helpers ───────────────────────────────────────────────────

/// Point on a psychrometric chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub dry_bulb_c: f64,
    /// kg water / kg dry air
    pub humidity_ratio: f64,
}

/// Humidity ratio (kg/kg) of air at `dry_bulb_c` and `rh_pct` %.
pub fn humidity_ratio_from_rh(dry_bulb_c: f64, rh_pct: f64, pressure_kpa: f64) -> Result<f64> {
    ensure_finite("relative humidity", rh_pct)?;
    ensure_finite("pressure", pressure_kpa)?;
    if !(0.0..=100.0).contains(&rh_pct) {
        return Err(EngineError::InvalidInput(format!(
            "relative humidity must be within 0…100 %, got {rh_pct}"
        )));
    }
    if pressure_kpa <= 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "pressure must be > 0 kPa, got {pressure_kpa}"
        )));
    }
    let pv = rh_pct / 100.0 * saturation_vapor_pressure_kpa(dry_bulb_c)?;
    if pv >= pressure_kpa {
        return Err(EngineError::InvalidInput(format!(
            "{dry_bulb_c} °C is at or above the boiling point at {pressure_kpa} kPa"
        )));
    }
    Ok(MOLAR_MASS_RATIO * pv / (pressure_kpa - pv))
}

/// Humidity ratio (kg/kg) of saturated air.
pub fn saturation_humidity_ratio(dry_bulb_c: f64, pressure_kpa: f64) -> Result<f64> {
    humidity_ratio_from_rh(dry_bulb_c, 100.0, pressure_kpa)
}

/// Saturation curve from `min_c` to `max_c` every `step_c`.
pub fn saturation_line(min_c: f64, max_c: f64, step_c: f64, pressure_kpa: f64) -> Result<Vec<ChartPoint>> {
    relative_humidity_line(100.0, min_c, max_c, step_c, pressure_kpa)
}

/// Constant relative-humidity curve from `min_c` to `max_c` every `step_c`.
pub fn relative_humidity_line(
    rh_pct: f64,
    min_c: f64,
    max_c: f64,
    step_c: f64,
    pressure_kpa: f64,
) -> Result<Vec<ChartPoint>> {
    temperature_steps(min_c, max_c, step_c)?
        .into_iter()
        .map(|t| {
            Ok(ChartPoint {
                dry_bulb_c: t,
                humidity_ratio: humidity_ratio_from_rh(t, rh_pct, pressure_kpa)?,
            })
        })
        .collect()
}

fn temperature_steps(min_c: f64, max_c: f64, step_c: f64) -> Result<Vec<f64>> {
    ensure_finite("minimum temperature", min_c)?;
    ensure_finite("maximum temperature", max_c)?;
    ensure_finite("temperature step", step_c)?;
    if step_c <= 0.0 || min_c > max_c {
        return Err(EngineError::InvalidInput(format!(
            "chart range {min_c}…{max_c} °C with step {step_c} is empty"
        )));
    }
    // Small epsilon so that 10…30 step 2 includes 30 despite rounding.
    let intervals = ((max_c - min_c) / step_c + 1e-9).floor();
    if intervals >= MAX_CHART_POINTS as f64 {
        return Err(EngineError::InvalidInput(format!(
            "chart range {min_c}…{max_c} °C with step {step_c} exceeds {MAX_CHART_POINTS} points"
        )));
    }
    let n = intervals as usize;
    Ok((0..=n).map(|i| min_c + i as f64 * step_c).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_include_both_ends() {
        let s = temperature_steps(10.0, 30.0, 2.0).unwrap();
        assert_eq!(s.len(), 11);
        assert_eq!(s[0], 10.0);
        assert_eq!(s[10], 30.0);
    }

    #[test]
    fn steps_reject_empty_ranges() {
        assert!(temperature_steps(30.0, 10.0, 1.0).is_err());
        assert!(temperature_steps(10.0, 30.0, 0.0).is_err());
    }

    #[test]
    fn steps_are_capped() {
        assert_eq!(temperature_steps(0.0, 9_999.0, 1.0).unwrap().len(), MAX_CHART_POINTS);
        assert!(matches!(
            temperature_steps(0.0, 10_000.0, 1.0),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(temperature_steps(-1e6, 1e6, 1e-9).is_err());
    }

    #[test]
    fn sea_level_is_one_atmosphere() {
        assert_eq!(barometric_pressure_kpa(0.0).unwrap(), SEA_LEVEL_PRESSURE_KPA);
    }
}
