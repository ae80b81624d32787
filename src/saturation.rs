//! Refrigerant saturation pressure ↔ temperature.
//!
//! Two models, one convention: **kPa absolute against °C**.
//!
//! * [`AntoineCoefficients`]: `P = 10^(A - B / (C + T))`, defined on
//!   `(-C, T_crit]`.
//! * [`PressureTable`]: piecewise-linear interpolation between the
//!   integer-°C entries, defined on `[T_min, T_max]`.  No extrapolation.
//!
//! Both are strictly increasing on their domain.  Queries outside it
//! return [`EngineError::OutOfRange`] rather than a made-up number.

use converter::{celsius_to_fahrenheit, kpa_to_psig};
use serde::Serialize;

use crate::error::*;
use crate::refrigerant::{AntoineCoefficients, PressureModel, PressureTable, RefrigerantSpec};
use crate::water::ABSOLUTE_ZERO_C;

/// Default number of intervals for [`RefrigerantSpec::pressure_temperature_chart`].
pub const DEFAULT_CHART_STEPS: usize = 60;
/// Upper limit on `steps` for [`RefrigerantSpec::pressure_temperature_chart`].
pub const MAX_CHART_STEPS: usize = 10_000;

// ── Antoine ─────────────────────────────────────────────────────────

impl AntoineCoefficients {
    /// Saturation pressure (kPa), no domain check.
    pub fn pressure_kpa(&self, t_c: f64) -> f64 {
        10f64.powf(self.a - self.b / (self.c + t_c))
    }

    /// Saturation temperature (°C), no domain check.
    pub fn temperature_c(&self, p_kpa: f64) -> f64 {
        self.b / (self.a - p_kpa.log10()) - self.c
    }
}

// ── Table ───────────────────────────────────────────────────────────

impl PressureTable {
    /// Linear interpolation; `None` outside `[T_min, T_max]`.
    pub fn interpolate_pressure(&self, t_c: f64) -> Option<f64> {
        if !(self.min_temperature_c()..=self.max_temperature_c()).contains(&t_c) {
            return None;
        }
        let pts = self.points();
        let hi = pts.partition_point(|&(t, _)| (t as f64) <= t_c);
        if hi == pts.len() {
            return Some(pts[hi - 1].1);
        }
        let (t0, p0) = pts[hi - 1];
        let (t1, p1) = pts[hi];
        let frac = (t_c - t0 as f64) / (t1 - t0) as f64;
        Some(p0 + frac * (p1 - p0))
    }

    /// Inverse interpolation; `None` outside `[P_min, P_max]`.
    pub fn interpolate_temperature(&self, p_kpa: f64) -> Option<f64> {
        if !(self.min_pressure_kpa()..=self.max_pressure_kpa()).contains(&p_kpa) {
            return None;
        }
        let pts = self.points();
        let hi = pts.partition_point(|&(_, p)| p <= p_kpa);
        if hi == pts.len() {
            return Some(pts[hi - 1].0 as f64);
        }
        let (t0, p0) = pts[hi - 1];
        let (t1, p1) = pts[hi];
        let frac = (p_kpa - p0) / (p1 - p0);
        Some(t0 as f64 + frac * (t1 - t0) as f64)
    }
}

// ── PT chart row ────────────────────────────────────────────────────

/// One row of a pressure–temperature chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PtChartPoint {
    pub temperature_c: f64,
    pub temperature_f: f64,
    /// Absolute
    pub pressure_kpa: f64,
    /// Gauge, against one standard atmosphere
    pub pressure_psig: f64,
}

// ── Refrigerant API ─────────────────────────────────────────────────

impl RefrigerantSpec {
    /// Temperature span (°C) on which the saturation model is defined.
    ///
    /// For a correlation the lower end, `-C` or absolute zero whichever is
    /// warmer, is excluded and the upper end is the critical temperature.
    pub fn temperature_range_c(&self) -> (f64, f64) {
        match &self.pressure_model {
            PressureModel::Antoine(k) => ((-k.c).max(ABSOLUTE_ZERO_C), self.critical_temperature_c),
            PressureModel::Table(t) => (t.min_temperature_c(), t.max_temperature_c()),
        }
    }

    /// Saturation (dew-point) pressure in kPa absolute at `t_c` °C.
    ///
    /// ```
    /// # use hvac_props::RefrigerantTable;
    /// let table = RefrigerantTable::builtin()?;
    /// let p = table.lookup("R-134a")?.saturation_pressure_kpa(0.0)?;
    /// assert!((p - 292.8).abs() < 3.0);
    /// # Ok::<(), hvac_props::EngineError>(())
    /// ```
    pub fn saturation_pressure_kpa(&self, t_c: f64) -> Result<f64> {
        ensure_finite("temperature", t_c)?;
        if t_c <= ABSOLUTE_ZERO_C {
            return Err(EngineError::InvalidInput(format!(
                "temperature {t_c} °C is at or below absolute zero"
            )));
        }
        let (min, max) = self.temperature_range_c();
        let out_of_range = || EngineError::OutOfRange {
            refrigerant: self.code.clone(),
            value: t_c,
            min,
            max,
            unit: "°C",
        };

        match &self.pressure_model {
            PressureModel::Antoine(k) => {
                if t_c <= min || t_c > max {
                    return Err(out_of_range());
                }
                Ok(k.pressure_kpa(t_c))
            }
            PressureModel::Table(t) => t.interpolate_pressure(t_c).ok_or_else(out_of_range),
        }
    }

    /// Saturation temperature in °C at `p_kpa` kPa absolute.
    pub fn saturation_temperature_c(&self, p_kpa: f64) -> Result<f64> {
        ensure_finite("pressure", p_kpa)?;
        if p_kpa <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "absolute pressure must be > 0 kPa, got {p_kpa}"
            )));
        }

        match &self.pressure_model {
            PressureModel::Antoine(k) => {
                let (lo, hi) = self.temperature_range_c();
                // P(-C) is zero; P(absolute zero) is not when C > 273.15.
                let min = if lo > -k.c { k.pressure_kpa(lo) } else { 0.0 };
                let max = k.pressure_kpa(hi);
                let out_of_range = || EngineError::OutOfRange {
                    refrigerant: self.code.clone(),
                    value: p_kpa,
                    min,
                    max,
                    unit: "kPa",
                };
                if p_kpa <= min || p_kpa > max {
                    return Err(out_of_range());
                }
                let t = k.temperature_c(p_kpa);
                if t <= lo {
                    return Err(out_of_range());
                }
                Ok(t)
            }
            PressureModel::Table(t) => {
                t.interpolate_temperature(p_kpa).ok_or_else(|| EngineError::OutOfRange {
                    refrigerant: self.code.clone(),
                    value: p_kpa,
                    min: t.min_pressure_kpa(),
                    max: t.max_pressure_kpa(),
                    unit: "kPa",
                })
            }
        }
    }

    /// Suction-line temperature above saturation at suction pressure (K).
    ///
    /// Negative means liquid is reaching the line (no superheat).
    pub fn superheat_c(&self, suction_pressure_kpa: f64, suction_line_temp_c: f64) -> Result<f64> {
        ensure_finite("suction line temperature", suction_line_temp_c)?;
        Ok(suction_line_temp_c - self.saturation_temperature_c(suction_pressure_kpa)?)
    }

    /// Saturation at liquid pressure minus liquid-line temperature (K).
    pub fn subcooling_c(&self, liquid_pressure_kpa: f64, liquid_line_temp_c: f64) -> Result<f64> {
        ensure_finite("liquid line temperature", liquid_line_temp_c)?;
        Ok(self.saturation_temperature_c(liquid_pressure_kpa)? - liquid_line_temp_c)
    }

    /// Evenly spaced PT chart with `steps + 1` rows.
    ///
    /// A correlation is charted from the normal boiling point up to the
    /// critical temperature; a table over its own span.
    pub fn pressure_temperature_chart(&self, steps: usize) -> Result<Vec<PtChartPoint>> {
        if steps == 0 {
            return Err(EngineError::InvalidInput("PT chart needs at least one step".into()));
        }
        if steps > MAX_CHART_STEPS {
            return Err(EngineError::InvalidInput(format!(
                "PT chart limited to {MAX_CHART_STEPS} steps, got {steps}"
            )));
        }
        let (lo, hi) = match &self.pressure_model {
            PressureModel::Antoine(_) => (self.boiling_point_c, self.critical_temperature_c),
            PressureModel::Table(t) => (t.min_temperature_c(), t.max_temperature_c()),
        };

        (0..=steps)
            .map(|i| {
                // Pin the last row to `hi` so rounding never steps past it.
                let t = if i == steps {
                    hi
                } else {
                    lo + (hi - lo) * i as f64 / steps as f64
                };
                let p = self.saturation_pressure_kpa(t)?;
                Ok(PtChartPoint {
                    temperature_c: t,
                    temperature_f: celsius_to_fahrenheit(t),
                    pressure_kpa: p,
                    pressure_psig: kpa_to_psig(p),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PressureTable {
        PressureTable::new(vec![(0, 100.0), (10, 200.0), (20, 400.0)]).unwrap()
    }

    #[test]
    fn table_interpolates_linearly() {
        let t = table();
        assert_eq!(t.interpolate_pressure(0.0), Some(100.0));
        assert_eq!(t.interpolate_pressure(5.0), Some(150.0));
        assert_eq!(t.interpolate_pressure(15.0), Some(300.0));
        assert_eq!(t.interpolate_pressure(20.0), Some(400.0));
        assert_eq!(t.interpolate_pressure(20.5), None);
        assert_eq!(t.interpolate_pressure(-0.1), None);
    }

    #[test]
    fn table_inverse_interpolates() {
        let t = table();
        assert_eq!(t.interpolate_temperature(150.0), Some(5.0));
        assert_eq!(t.interpolate_temperature(400.0), Some(20.0));
        assert_eq!(t.interpolate_temperature(99.0), None);
    }

    #[test]
    fn antoine_inverse_matches_forward() {
        let k = AntoineCoefficients { a: 6.5, b: 950.0, c: 260.0 };
        let p = k.pressure_kpa(12.5);
        assert!((k.temperature_c(p) - 12.5).abs() < 1e-9);
    }
}
