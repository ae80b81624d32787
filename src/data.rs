//! Static refrigerant dataset.
//!
//! Physical constants are the values the HVAC field tools have always
//! shown.  Saturation data is absolute pressure in kPa against °C; PT
//! tables for zeotropic blends (R-404A, R-407C, R-502) carry the
//! bubble/dew midpoint.  Antoine coefficients are least-squares fits of
//! `log10(P_kPa) = A - B / (C + T_°C)` to the same reference points over
//! -40…60 °C (R-744: -40…30 °C) and stay within 0.4 % of them (R-1234ze(E):
//! 1.2 %).  Outside the fitted span the correlation is an extrapolation
//! with no stated accuracy.

use crate::refrigerant::{AntoineCoefficients, SafetyClass};

/// Bumped whenever a number below changes.
pub const DATASET_VERSION: &str = "2024.2";

pub(crate) struct Record {
    pub code: &'static str,
    pub name: &'static str,
    pub critical_temperature_c: f64,
    pub critical_pressure_kpa: f64,
    pub boiling_point_c: f64,
    pub molar_mass_g_mol: f64,
    pub safety_class: SafetyClass,
    pub gwp: f64,
}

#[allow(clippy::too_many_arguments)]
const fn rec(
    code: &'static str,
    name: &'static str,
    critical_temperature_c: f64,
    critical_pressure_kpa: f64,
    boiling_point_c: f64,
    molar_mass_g_mol: f64,
    safety_class: SafetyClass,
    gwp: f64,
) -> Record {
    Record {
        code,
        name,
        critical_temperature_c,
        critical_pressure_kpa,
        boiling_point_c,
        molar_mass_g_mol,
        safety_class,
        gwp,
    }
}

use SafetyClass::*;

#[rustfmt::skip]
pub(crate) const REFRIGERANTS: &[Record] = &[
    // Legacy
    rec("R-12",        "R-12 (CFC-12)",          111.97,  4136.0, -29.8, 120.91, A1,  10900.0),
    rec("R-22",        "R-22 (HCFC-22)",          96.15,  4990.0, -40.8,  86.47, A1,   1810.0),
    rec("R-502",       "R-502 (CFC blend)",       80.20,  4075.0, -45.3, 111.60, A1,   4657.0),
    // HFC
    rec("R-134a",      "R-134a (HFC-134a)",      101.06,  4059.0, -26.3, 102.03, A1,   1430.0),
    rec("R-404A",      "R-404A (HFC blend)",      72.13,  3734.0, -46.6,  97.60, A1,   3922.0),
    rec("R-407C",      "R-407C (HFC blend)",      86.74,  4631.0, -43.6,  86.20, A1,   1774.0),
    rec("R-410A",      "R-410A (HFC blend)",      71.34,  4901.0, -51.6,  72.58, A1,   2088.0),
    // A2L
    rec("R-32",        "R-32 (HFC-32)",           78.11,  5782.0, -51.7,  52.02, A2L,   675.0),
    rec("R-454B",      "R-454B (HFO blend)",      77.26,  4760.0, -46.1,  72.30, A2L,   466.0),
    rec("R-1234yf",    "R-1234yf (HFO-1234yf)",   94.70,  3382.0, -29.5, 114.04, A2L,     4.0),
    rec("R-1234ze(E)", "R-1234ze(E) (HFO-1234ze)",109.40, 3636.0, -19.0, 114.04, A2L,     7.0),
    // Natural
    rec("R-290",       "R-290 (propane)",         96.74,  4251.0, -42.1,  44.10, A3,      3.0),
    rec("R-600a",      "R-600a (isobutane)",     134.66,  3629.0, -11.7,  58.12, A3,      3.0),
    rec("R-717",       "R-717 (ammonia)",        132.25, 11333.0, -33.3,  17.03, B2L,     0.0),
    rec("R-744",       "R-744 (carbon dioxide)",  30.98,  7377.0, -78.5,  44.01, A1,      1.0),
];

const fn antoine(a: f64, b: f64, c: f64) -> AntoineCoefficients {
    AntoineCoefficients { a, b, c }
}

/// Refrigerants with a correlation.  Anything in [`REFRIGERANTS`] not
/// listed here falls back to its PT table.
#[rustfmt::skip]
pub(crate) const ANTOINE: &[(&str, AntoineCoefficients)] = &[
    ("R-134a",      antoine(6.2840,  923.89, 242.0)),
    ("R-404A",      antoine(6.5312, 1020.16, 271.8)),
    ("R-407C",      antoine(6.3240,  929.71, 254.4)),
    ("R-410A",      antoine(6.5343,  948.05, 261.0)),
    ("R-32",        antoine(6.5636,  954.72, 261.3)),
    ("R-454B",      antoine(6.5682,  968.65, 262.4)),
    ("R-1234yf",    antoine(6.2389,  948.17, 253.5)),
    ("R-1234ze(E)", antoine(6.4062, 1044.24, 256.4)),
    ("R-290",       antoine(6.1319,  897.52, 259.7)),
    ("R-600a",      antoine(5.9916,  934.25, 246.1)),
    ("R-717",       antoine(6.6254,  980.58, 245.6)),
    ("R-744",       antoine(6.8440,  940.59, 284.9)),
];

/// Service PT charts, °C → kPa absolute, 10 K steps.
#[rustfmt::skip]
pub(crate) const PT_CHARTS: &[(&str, &[(i32, f64)])] = &[
    ("R-12", &[
        (-40, 64.2), (-30, 100.3), (-20, 150.9), (-10, 219.1), (0, 308.6), (10, 423.3),
        (20, 567.2), (30, 744.6), (40, 960.7), (50, 1219.6), (60, 1526.0),
    ]),
    ("R-22", &[
        (-40, 105.2), (-30, 163.9), (-20, 245.3), (-10, 354.6), (0, 497.6), (10, 680.7),
        (20, 909.9), (30, 1191.9), (40, 1533.6), (50, 1942.3), (60, 2426.6),
    ]),
    ("R-502", &[
        (-40, 129.0), (-30, 196.0), (-20, 288.0), (-10, 409.0), (0, 569.0), (10, 768.0),
        (20, 1013.0), (30, 1310.0), (40, 1664.0), (50, 2082.0), (60, 2573.0),
    ]),
    ("R-134a", &[
        (-40, 51.2), (-30, 84.4), (-20, 132.8), (-10, 200.7), (0, 292.8), (10, 414.6),
        (20, 571.7), (30, 770.2), (40, 1016.6), (50, 1317.9), (60, 1681.8),
    ]),
    ("R-404A", &[
        (-40, 135.0), (-30, 205.0), (-20, 302.0), (-10, 431.0), (0, 600.0), (10, 815.0),
        (20, 1085.0), (30, 1415.0), (40, 1815.0), (50, 2295.0), (60, 2865.0),
    ]),
    ("R-407C", &[
        (-40, 97.0), (-30, 152.0), (-20, 228.0), (-10, 332.0), (0, 467.0), (10, 641.0),
        (20, 861.0), (30, 1133.0), (40, 1464.0), (50, 1862.0), (60, 2334.0),
    ]),
    ("R-410A", &[
        (-40, 175.0), (-30, 269.6), (-20, 399.6), (-10, 573.1), (0, 798.7), (10, 1085.7),
        (20, 1444.2), (30, 1885.0), (40, 2419.5), (50, 3060.2), (60, 3822.0),
    ]),
    ("R-32", &[
        (-40, 177.0), (-30, 273.4), (-20, 405.9), (-10, 582.3), (0, 813.1), (10, 1106.9),
        (20, 1474.3), (30, 1927.8), (40, 2478.4), (50, 3139.1), (60, 3923.0),
    ]),
    ("R-290", &[
        (-40, 111.1), (-30, 167.8), (-20, 244.6), (-10, 345.4), (0, 474.5), (10, 636.6),
        (20, 836.5), (30, 1079.0), (40, 1369.4), (50, 1713.2), (60, 2116.0),
    ]),
];

pub(crate) fn record(code: &str) -> Option<&'static Record> {
    REFRIGERANTS.iter().find(|r| r.code == code)
}

pub(crate) fn antoine_for(code: &str) -> Option<AntoineCoefficients> {
    ANTOINE.iter().find(|(c, _)| *c == code).map(|(_, k)| *k)
}

pub(crate) fn pt_chart_for(code: &str) -> Option<&'static [(i32, f64)]> {
    PT_CHARTS.iter().find(|(c, _)| *c == code).map(|(_, t)| *t)
}
