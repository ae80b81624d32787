use std::fmt;

use serde::Serialize;

use crate::error::*;

// ── Safety classification ───────────────────────────────────────────

/// ASHRAE 34 safety group.  Informational only; nothing in the engine
/// branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SafetyClass {
    A1,
    A2,
    A2L,
    A3,
    B1,
    B2,
    B2L,
    B3,
}

impl fmt::Display for SafetyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SafetyClass::A1 => "A1",
            SafetyClass::A2 => "A2",
            SafetyClass::A2L => "A2L",
            SafetyClass::A3 => "A3",
            SafetyClass::B1 => "B1",
            SafetyClass::B2 => "B2",
            SafetyClass::B2L => "B2L",
            SafetyClass::B3 => "B3",
        };
        f.write_str(s)
    }
}

// ── Pressure models ─────────────────────────────────────────────────

/// Coefficients of `log10(P_kPa) = A - B / (C + T_°C)`.
///
/// Every coefficient set in the dataset is calibrated to **kPa absolute
/// and °C**; there is no other calibration convention in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AntoineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Discrete saturation table: integer °C → kPa absolute.
///
/// Only constructible through [`PressureTable::new`], so a value of this
/// type is always sorted and strictly increasing in both columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureTable {
    points: Vec<(i32, f64)>,
}

impl PressureTable {
    /// Build a table from `(temperature °C, pressure kPa)` pairs.
    ///
    /// Pairs may arrive in any order; duplicates, fewer than two points,
    /// non-positive pressures or a pressure that does not rise with
    /// temperature are data-integrity errors.
    pub fn new(mut points: Vec<(i32, f64)>) -> Result<Self> {
        if points.len() < 2 {
            return Err(EngineError::DataIntegrity(format!(
                "pressure table needs at least 2 points, got {}",
                points.len()
            )));
        }
        points.sort_by_key(|&(t, _)| t);

        for &(t, p) in &points {
            if !p.is_finite() || p <= 0.0 {
                return Err(EngineError::DataIntegrity(format!(
                    "pressure table entry {t} °C has invalid pressure {p} kPa"
                )));
            }
        }
        for pair in points.windows(2) {
            let (t0, p0) = pair[0];
            let (t1, p1) = pair[1];
            if t0 == t1 {
                return Err(EngineError::DataIntegrity(format!(
                    "pressure table has duplicate temperature {t0} °C"
                )));
            }
            if p1 <= p0 {
                return Err(EngineError::DataIntegrity(format!(
                    "pressure table is not monotonic: {t0} °C → {p0} kPa, {t1} °C → {p1} kPa"
                )));
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[(i32, f64)] {
        &self.points
    }

    pub fn min_temperature_c(&self) -> f64 {
        self.points[0].0 as f64
    }

    pub fn max_temperature_c(&self) -> f64 {
        self.points[self.points.len() - 1].0 as f64
    }

    pub fn min_pressure_kpa(&self) -> f64 {
        self.points[0].1
    }

    pub fn max_pressure_kpa(&self) -> f64 {
        self.points[self.points.len() - 1].1
    }
}

/// The one saturation model attached to a refrigerant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PressureModel {
    Antoine(AntoineCoefficients),
    Table(PressureTable),
}

// ── RefrigerantSpec ─────────────────────────────────────────────────

/// Physical constants and saturation model of one refrigerant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefrigerantSpec {
    /// Unique code, e.g. `"R-410A"`.
    pub code: String,
    /// Display name, e.g. `"R-410A (HFC blend)"`.
    pub name: String,
    /// Critical temperature (°C)
    pub critical_temperature_c: f64,
    /// Critical pressure (kPa)
    pub critical_pressure_kpa: f64,
    /// Normal boiling point (°C)
    pub boiling_point_c: f64,
    /// Molar mass (g/mol)
    pub molar_mass_g_mol: f64,
    pub safety_class: SafetyClass,
    /// 100-year global warming potential
    pub gwp: f64,
    pub pressure_model: PressureModel,
}

impl RefrigerantSpec {
    /// Check the invariants a table relies on.  Run once per entry when
    /// a [`RefrigerantTable`](crate::RefrigerantTable) is built.
    pub fn validate(&self) -> Result<()> {
        let fail = |what: String| Err(EngineError::DataIntegrity(format!("{}: {what}", self.code)));

        if self.code.trim().is_empty() {
            return Err(EngineError::DataIntegrity("refrigerant with empty code".into()));
        }
        for (field, v) in [
            ("critical temperature", self.critical_temperature_c),
            ("critical pressure", self.critical_pressure_kpa),
            ("molar mass", self.molar_mass_g_mol),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return fail(format!("{field} must be > 0, got {v}"));
            }
        }
        if !self.boiling_point_c.is_finite() || self.boiling_point_c >= self.critical_temperature_c {
            return fail(format!(
                "boiling point {} °C must be below the critical temperature {} °C",
                self.boiling_point_c, self.critical_temperature_c
            ));
        }
        if !self.gwp.is_finite() || self.gwp < 0.0 {
            return fail(format!("GWP must be non-negative, got {}", self.gwp));
        }

        match &self.pressure_model {
            PressureModel::Antoine(k) => {
                if !(k.a.is_finite() && k.b.is_finite() && k.c.is_finite()) {
                    return fail("Antoine coefficients must be finite".into());
                }
                // B > 0 is what makes the correlation rise with temperature.
                if k.b <= 0.0 {
                    return fail(format!("Antoine B must be > 0, got {}", k.b));
                }
                if k.c + self.boiling_point_c <= 0.0 {
                    return fail(format!(
                        "Antoine C = {} leaves the boiling point outside the correlation domain",
                        k.c
                    ));
                }
            }
            PressureModel::Table(t) => {
                if t.max_temperature_c() > self.critical_temperature_c {
                    return fail(format!(
                        "pressure table reaches {} °C, above the critical temperature {} °C",
                        t.max_temperature_c(),
                        self.critical_temperature_c
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn is_table_based(&self) -> bool {
        matches!(self.pressure_model, PressureModel::Table(_))
    }
}

impl fmt::Display for RefrigerantSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.code, self.name)?;
        writeln!(f, "Tc    = {:.2} °C", self.critical_temperature_c)?;
        writeln!(f, "Pc    = {:.1} kPa", self.critical_pressure_kpa)?;
        writeln!(f, "T_nbp = {:.1} °C", self.boiling_point_c)?;
        writeln!(f, "M     = {:.2} g/mol", self.molar_mass_g_mol)?;
        writeln!(f, "class = {}", self.safety_class)?;
        writeln!(f, "GWP   = {}", self.gwp)?;
        match &self.pressure_model {
            PressureModel::Antoine(k) => {
                write!(f, "model = Antoine (A={}, B={}, C={})", k.a, k.b, k.c)
            }
            PressureModel::Table(t) => write!(
                f,
                "model = table, {} points, {} … {} °C",
                t.points().len(),
                t.min_temperature_c(),
                t.max_temperature_c()
            ),
        }
    }
}

/// Canonical form of a refrigerant code for lookups: upper case, no
/// hyphens or whitespace.  `"r-410a"`, `"R410A"` and `"R-410A"` agree.
pub(crate) fn normalize_code(code: &str) -> String {
    code.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_hyphens() {
        assert_eq!(normalize_code("r-410a"), "R410A");
        assert_eq!(normalize_code(" R 1234ze(E) "), "R1234ZE(E)");
    }

    #[test]
    fn table_is_sorted_on_construction() {
        let t = PressureTable::new(vec![(10, 200.0), (-10, 100.0), (0, 150.0)]).unwrap();
        assert_eq!(t.points(), &[(-10, 100.0), (0, 150.0), (10, 200.0)]);
        assert_eq!(t.min_temperature_c(), -10.0);
        assert_eq!(t.max_pressure_kpa(), 200.0);
    }

    #[test]
    fn table_rejects_duplicates_and_single_points() {
        assert!(matches!(
            PressureTable::new(vec![(0, 100.0), (0, 120.0)]),
            Err(EngineError::DataIntegrity(_))
        ));
        assert!(matches!(
            PressureTable::new(vec![(0, 100.0)]),
            Err(EngineError::DataIntegrity(_))
        ));
        assert!(matches!(
            PressureTable::new(vec![(0, -1.0), (10, 100.0)]),
            Err(EngineError::DataIntegrity(_))
        ));
    }
}
