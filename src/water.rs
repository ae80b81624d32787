//! Saturation vapour pressure of water and ice.
//!
//! Both phases use the Magnus form `P = P0 · exp(a·T / (b + T))`, kPa
//! against °C, with the same `P0` so the two branches meet exactly at
//! 0 °C:
//!
//! | Branch          | a      | b        | Source                                   |
//! |-----------------|--------|----------|------------------------------------------|
//! | water, T ≥ 0 °C | 17.27  | 237.3    | Magnus–Tetens                            |
//! | ice, T < 0 °C   | 22.5   | 273.15   | Clausius–Clapeyron, L_sub/R_v ≈ 6146 K   |
//!
//! The ice branch is singular exactly at absolute zero, so it is total on
//! `(-273.15, 0)`.  Against Wexler/Hyland it reads within 0.1 % at -20 °C
//! and 0.3 % at -40 °C; the water branch within 0.3 % over 0…50 °C.
//!
//! [`dew_point_c`] always inverts the water branch; [`frost_point_c`]
//! inverts the ice branch below `P0`.

use crate::error::*;

pub const ABSOLUTE_ZERO_C: f64 = -273.15;

/// Vapour pressure at the 0 °C branch point (kPa).
pub const MAGNUS_P0_KPA: f64 = 0.61078;

/// Returned by [`dew_point_c`] for bone-dry air instead of `-∞`.
pub const DEW_POINT_FLOOR_C: f64 = -50.0;

const WATER_A: f64 = 17.27;
const WATER_B: f64 = 237.3;
const ICE_A: f64 = 22.5;
const ICE_B: f64 = 273.15;

fn branch(t_c: f64) -> (f64, f64) {
    if t_c >= 0.0 { (WATER_A, WATER_B) } else { (ICE_A, ICE_B) }
}

/// Saturation vapour pressure (kPa) over water at or above 0 °C, over
/// ice below.
///
/// ```
/// use hvac_props::water::saturation_vapor_pressure_kpa;
///
/// let p = saturation_vapor_pressure_kpa(20.0)?;
/// assert!((p - 2.338).abs() < 0.01);
/// # Ok::<(), hvac_props::EngineError>(())
/// ```
pub fn saturation_vapor_pressure_kpa(t_c: f64) -> Result<f64> {
    ensure_finite("temperature", t_c)?;
    if t_c <= ABSOLUTE_ZERO_C {
        return Err(EngineError::InvalidInput(format!(
            "temperature {t_c} °C is at or below absolute zero"
        )));
    }
    let (a, b) = branch(t_c);
    Ok(MAGNUS_P0_KPA * (a * t_c / (b + t_c)).exp())
}

/// Dew point (°C) of air with vapour pressure `pv_kpa`: the analytic
/// inverse of the liquid-water Magnus branch, at every pressure.
///
/// Below 0 °C this is the dew point over supercooled water, a little
/// colder than [`frost_point_c`].  Zero, negative or NaN pressure gives
/// [`DEW_POINT_FLOOR_C`].
pub fn dew_point_c(pv_kpa: f64) -> f64 {
    if pv_kpa.is_nan() || pv_kpa <= 0.0 {
        return DEW_POINT_FLOOR_C;
    }
    invert_magnus(pv_kpa, WATER_A, WATER_B)
}

/// Frost point (°C): the exact inverse of [`saturation_vapor_pressure_kpa`],
/// switching to the ice branch below [`MAGNUS_P0_KPA`].  Same floor as
/// [`dew_point_c`].
pub fn frost_point_c(pv_kpa: f64) -> f64 {
    if pv_kpa.is_nan() || pv_kpa <= 0.0 {
        return DEW_POINT_FLOOR_C;
    }
    if pv_kpa >= MAGNUS_P0_KPA {
        invert_magnus(pv_kpa, WATER_A, WATER_B)
    } else {
        invert_magnus(pv_kpa, ICE_A, ICE_B)
    }
}

fn invert_magnus(pv_kpa: f64, a: f64, b: f64) -> f64 {
    let gamma = (pv_kpa / MAGNUS_P0_KPA).ln();
    b * gamma / (a - gamma)
}
