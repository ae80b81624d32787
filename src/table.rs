use std::collections::HashMap;

use log::debug;

use crate::data::{self, Record};
use crate::error::*;
use crate::refrigerant::{normalize_code, PressureModel, PressureTable, RefrigerantSpec};

/// Immutable registry of refrigerants, keyed by code.
///
/// Built once, validated entry by entry, then only read.  To pick up a
/// different dataset construct a new table; there is no mutation API.
///
/// ```
/// use hvac_props::RefrigerantTable;
///
/// let table = RefrigerantTable::builtin()?;
/// let r410a = table.lookup("R-410A")?;
/// let p = r410a.saturation_pressure_kpa(5.0)?;
/// assert!(p > 900.0 && p < 1000.0);
/// # Ok::<(), hvac_props::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RefrigerantTable {
    specs: Vec<RefrigerantSpec>,
    index: HashMap<String, usize>,
}

impl RefrigerantTable {
    // ── Constructors ─────────────────────────────────────────────────

    /// Validate and index a caller-supplied dataset.
    ///
    /// Every entry goes through [`RefrigerantSpec::validate`]; two codes
    /// that normalise to the same key are a data-integrity error.
    pub fn from_specs(specs: Vec<RefrigerantSpec>) -> Result<Self> {
        let mut index = HashMap::with_capacity(specs.len());
        for (i, spec) in specs.iter().enumerate() {
            spec.validate()?;
            if let Some(prev) = index.insert(normalize_code(&spec.code), i) {
                return Err(EngineError::DataIntegrity(format!(
                    "duplicate refrigerant code {} (also {})",
                    spec.code, specs[prev].code
                )));
            }
        }
        debug!("refrigerant table loaded: {} entries", specs.len());
        Ok(Self { specs, index })
    }

    /// The shipped dataset: Antoine correlation where one exists, the
    /// PT table for legacy refrigerants without one.
    pub fn builtin() -> Result<Self> {
        let specs = data::REFRIGERANTS
            .iter()
            .map(|rec| -> Result<RefrigerantSpec> {
                let model = if let Some(k) = data::antoine_for(rec.code) {
                    PressureModel::Antoine(k)
                } else if let Some(points) = data::pt_chart_for(rec.code) {
                    PressureModel::Table(PressureTable::new(points.to_vec())?)
                } else {
                    return Err(EngineError::DataIntegrity(format!(
                        "{}: no pressure model in dataset {}",
                        rec.code,
                        data::DATASET_VERSION
                    )));
                };
                Ok(spec_from_record(rec, model))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_specs(specs)
    }

    /// Discrete PT charts only, for every refrigerant that has one.
    ///
    /// Overlaps [`builtin`](Self::builtin) for the common service
    /// refrigerants, which lets the two models be checked against each
    /// other.
    pub fn service_charts() -> Result<Self> {
        let specs = data::PT_CHARTS
            .iter()
            .map(|(code, points)| -> Result<RefrigerantSpec> {
                let rec = data::record(code).ok_or_else(|| {
                    EngineError::DataIntegrity(format!("PT chart for unlisted refrigerant {code}"))
                })?;
                let model = PressureModel::Table(PressureTable::new(points.to_vec())?);
                Ok(spec_from_record(rec, model))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_specs(specs)
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Find a refrigerant by code.  Case and hyphens are ignored
    /// (`"r410a"` finds `"R-410A"`); anything else that does not match
    /// is an error, never a substitute entry.
    pub fn lookup(&self, code: &str) -> Result<&RefrigerantSpec> {
        self.index
            .get(&normalize_code(code))
            .map(|&i| &self.specs[i])
            .ok_or_else(|| EngineError::UnknownRefrigerant(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(&normalize_code(code))
    }

    /// Codes in dataset order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RefrigerantSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

fn spec_from_record(rec: &Record, pressure_model: PressureModel) -> RefrigerantSpec {
    RefrigerantSpec {
        code: rec.code.to_string(),
        name: rec.name.to_string(),
        critical_temperature_c: rec.critical_temperature_c,
        critical_pressure_kpa: rec.critical_pressure_kpa,
        boiling_point_c: rec.boiling_point_c,
        molar_mass_g_mol: rec.molar_mass_g_mol,
        safety_class: rec.safety_class,
        gwp: rec.gwp,
        pressure_model,
    }
}
