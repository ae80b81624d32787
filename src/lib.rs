//! # hvac-props
//!
//! Refrigerant saturation and moist-air psychrometrics for HVAC field
//! tools: PT charts, superheat and subcooling, and the state of the air
//! from a sling-psychrometer reading.
//!
//! ## Highlights
//!
//! * **Refrigerant table**: fifteen refrigerants, each with exactly one
//!   saturation model (Antoine correlation or discrete PT table)
//! * **Hard domains**: queries outside a model's range are
//!   [`EngineError::OutOfRange`], never extrapolated
//! * **Psychrometrics**: dry bulb + wet bulb + elevation → humidity ratio,
//!   RH, dew point, enthalpy, specific volume, density
//! * **Metric or imperial** at the boundary, metric inside
//! * **Comfort check** against a configurable envelope
//!
//! ## Quick example
//!
//! ```
//! use hvac_props::{compute_air_state, classify, RefrigerantTable, UnitSystem};
//!
//! let table = RefrigerantTable::builtin()?;
//! let r410a = table.lookup("R-410A")?;
//! let psat = r410a.saturation_pressure_kpa(5.0)?;
//! let sh = r410a.superheat_c(psat, 12.0)?;
//! assert!((sh - 7.0).abs() < 1e-6);
//!
//! let air = compute_air_state(75.0, 62.0, 500.0, UnitSystem::Imperial)?;
//! let verdict = classify(air.dry_bulb_c(), air.relative_humidity_pct);
//! println!("{air}\n{:?}", verdict.messages());
//! # Ok::<(), hvac_props::EngineError>(())
//! ```
//!
//! ## Units
//!
//! Refrigerant functions take and return °C and kPa absolute.
//! [`compute_air_state`] takes a [`UnitSystem`] and answers in it.  The
//! [`converter`] crate holds the conversion factors.
//!
//! ## Configuration
//!
//! [`Settings::from_env`] reads `HVAC_UNIT_SYSTEM` and the
//! `HVAC_COMFORT_*` bounds from the environment or a `.env` file.

// ── Modules ──────────────────────────────────────────────────────────
pub mod comfort;
pub mod config;
mod data;
pub mod error;
pub mod psychro;
pub mod refrigerant;
pub mod saturation;
pub mod table;
pub mod water;

// ── Public re-exports ────────────────────────────────────────────────
pub use error::{EngineError, Result};

pub use comfort::{
    classify, Classification, ComfortAnalyzer, ComfortEnvelope, ComfortVerdict, Recommendation,
};
pub use config::Settings;
pub use data::DATASET_VERSION;
pub use psychro::{barometric_pressure_kpa, compute_air_state, AirState, ChartPoint};
pub use refrigerant::{AntoineCoefficients, PressureModel, PressureTable, RefrigerantSpec, SafetyClass};
pub use saturation::{PtChartPoint, DEFAULT_CHART_STEPS, MAX_CHART_STEPS};
pub use table::RefrigerantTable;
pub use water::{dew_point_c, frost_point_c, saturation_vapor_pressure_kpa};

pub use converter::{self, Converter, UnitSystem};
