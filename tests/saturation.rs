use approx::assert_relative_eq;
use hvac_props::{EngineError, RefrigerantTable, DEFAULT_CHART_STEPS, MAX_CHART_STEPS};
use proptest::prelude::*;

fn builtin() -> RefrigerantTable {
    RefrigerantTable::builtin().unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Pression de saturation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn r134a_saturation_pressure_at_25c() {
    let table = builtin();
    let p = table.lookup("R-134a").unwrap().saturation_pressure_kpa(25.0).unwrap();

    // R-134a: Psat(25 °C) ≈ 665.8 kPa
    assert!(
        (p - 665.8).abs() < 5.0,
        "Psat(25 °C) expected ≈ 665.8 kPa, got {:.4}",
        p
    );
}

#[test]
fn r134a_boils_near_one_atmosphere_at_normal_boiling_point() {
    let table = builtin();
    let r134a = table.lookup("R-134a").unwrap();
    let p = r134a.saturation_pressure_kpa(r134a.boiling_point_c).unwrap();

    assert!(
        (p - 101.325).abs() < 3.0,
        "Psat(T_nbp) expected ≈ 101.3 kPa, got {:.4}",
        p
    );
}

#[test]
fn r410a_correlation_agrees_with_service_chart() {
    let antoine = builtin();
    let charts = RefrigerantTable::service_charts().unwrap();

    let p_model = antoine.lookup("R-410A").unwrap().saturation_pressure_kpa(25.0).unwrap();
    let p_chart = charts.lookup("R-410A").unwrap().saturation_pressure_kpa(25.0).unwrap();

    // Chart interpolates 20 °C → 1444.2 and 30 °C → 1885.0
    assert_relative_eq!(p_chart, 1664.6, epsilon = 1e-9);
    assert!(
        (p_model - p_chart).abs() / p_chart < 0.05,
        "R-410A Psat(25 °C): correlation {:.1} vs chart {:.1}",
        p_model,
        p_chart
    );
}

#[test]
fn legacy_refrigerants_use_their_chart() {
    let table = builtin();
    let r22 = table.lookup("R-22").unwrap();
    assert!(r22.is_table_based());

    // Exact chart entry, then midpoint of 0 °C → 497.6 and 10 °C → 680.7
    assert_eq!(r22.saturation_pressure_kpa(0.0).unwrap(), 497.6);
    assert_relative_eq!(r22.saturation_pressure_kpa(5.0).unwrap(), 589.15, epsilon = 1e-9);
}

// ═══════════════════════════════════════════════════════════════════
//  Hors domaine
// ═══════════════════════════════════════════════════════════════════

#[test]
fn correlation_stops_at_critical_temperature() {
    let table = builtin();
    let r410a = table.lookup("R-410A").unwrap();

    assert!(r410a.saturation_pressure_kpa(r410a.critical_temperature_c).is_ok());
    match r410a.saturation_pressure_kpa(80.0) {
        Err(EngineError::OutOfRange { refrigerant, value, max, unit, .. }) => {
            assert_eq!(refrigerant, "R-410A");
            assert_eq!(value, 80.0);
            assert_eq!(max, r410a.critical_temperature_c);
            assert_eq!(unit, "°C");
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn table_does_not_extrapolate() {
    let table = builtin();
    let r22 = table.lookup("R-22").unwrap();

    for t in [-40.5, 60.5, 95.0] {
        match r22.saturation_pressure_kpa(t) {
            Err(EngineError::OutOfRange { min, max, .. }) => {
                assert_eq!((min, max), (-40.0, 60.0));
            }
            other => panic!("R-22 at {t} °C: expected OutOfRange, got {other:?}"),
        }
    }
    assert!(matches!(
        r22.saturation_temperature_c(3000.0),
        Err(EngineError::OutOfRange { unit: "kPa", .. })
    ));
}

#[test]
fn nonsense_inputs_are_invalid() {
    let table = builtin();
    let r32 = table.lookup("R-32").unwrap();

    assert!(matches!(r32.saturation_pressure_kpa(f64::NAN), Err(EngineError::InvalidInput(_))));
    assert!(matches!(r32.saturation_pressure_kpa(-300.0), Err(EngineError::InvalidInput(_))));
    assert!(matches!(r32.saturation_temperature_c(0.0), Err(EngineError::InvalidInput(_))));
    assert!(matches!(r32.saturation_temperature_c(-5.0), Err(EngineError::InvalidInput(_))));
    assert!(matches!(
        r32.saturation_temperature_c(f64::INFINITY),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn correlation_never_goes_below_absolute_zero() {
    let table = builtin();
    let r744 = table.lookup("R-744").unwrap();

    // C = 284.9 puts the singularity below absolute zero
    let (lo, _) = r744.temperature_range_c();
    assert_eq!(lo, -273.15);

    match r744.saturation_temperature_c(1e-80) {
        Err(EngineError::OutOfRange { unit, min, .. }) => {
            assert_eq!(unit, "kPa");
            assert!(min > 0.0, "lower pressure bound should be P(-273.15 °C), got {min}");
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }

    let t = r744.saturation_temperature_c(1e-60).unwrap();
    assert!(t > -273.15 && t < -260.0, "Tsat(1e-60 kPa) got {:.3}", t);
}

#[test]
fn pressure_above_critical_is_out_of_range() {
    let table = builtin();
    let r410a = table.lookup("R-410A").unwrap();
    assert!(matches!(
        r410a.saturation_temperature_c(6000.0),
        Err(EngineError::OutOfRange { unit: "kPa", .. })
    ));
}

// ═══════════════════════════════════════════════════════════════════
//  Surchauffe / sous-refroidissement
// ═══════════════════════════════════════════════════════════════════

#[test]
fn superheat_and_subcooling_on_r410a() {
    let table = builtin();
    let r410a = table.lookup("R-410A").unwrap();

    let suction = r410a.saturation_pressure_kpa(5.0).unwrap();
    let liquid = r410a.saturation_pressure_kpa(40.0).unwrap();

    let sh = r410a.superheat_c(suction, 12.0).unwrap();
    let sc = r410a.subcooling_c(liquid, 35.0).unwrap();

    assert!((sh - 7.0).abs() < 1e-6, "superheat expected 7 K, got {:.4}", sh);
    assert!((sc - 5.0).abs() < 1e-6, "subcooling expected 5 K, got {:.4}", sc);
}

#[test]
fn superheat_propagates_pressure_errors() {
    let table = builtin();
    let r22 = table.lookup("R-22").unwrap();
    assert!(r22.superheat_c(10.0, 5.0).is_err());
    assert!(matches!(r22.subcooling_c(900.0, f64::NAN), Err(EngineError::InvalidInput(_))));
}

// ═══════════════════════════════════════════════════════════════════
//  Diagramme PT
// ═══════════════════════════════════════════════════════════════════

#[test]
fn pt_chart_spans_the_model_domain() {
    let table = builtin();

    let r22 = table.lookup("R-22").unwrap();
    let chart = r22.pressure_temperature_chart(DEFAULT_CHART_STEPS).unwrap();
    assert_eq!(chart.len(), DEFAULT_CHART_STEPS + 1);
    assert_eq!(chart[0].temperature_c, -40.0);
    assert_eq!(chart[DEFAULT_CHART_STEPS].temperature_c, 60.0);

    let r134a = table.lookup("R-134a").unwrap();
    let chart = r134a.pressure_temperature_chart(10).unwrap();
    assert_eq!(chart[0].temperature_c, r134a.boiling_point_c);
    assert_eq!(chart[10].temperature_c, r134a.critical_temperature_c);

    for row in &chart {
        assert_relative_eq!(row.temperature_f, row.temperature_c * 1.8 + 32.0, epsilon = 1e-9);
        assert_relative_eq!(
            row.pressure_psig,
            (row.pressure_kpa - 101.325) * 0.145038,
            epsilon = 1e-9
        );
    }
    assert!(chart.windows(2).all(|w| w[1].pressure_kpa > w[0].pressure_kpa));
}

#[test]
fn pt_chart_needs_a_step() {
    let table = builtin();
    assert!(matches!(
        table.lookup("R-32").unwrap().pressure_temperature_chart(0),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn pt_chart_step_count_is_bounded() {
    let table = builtin();
    let r32 = table.lookup("R-32").unwrap();

    assert_eq!(r32.pressure_temperature_chart(MAX_CHART_STEPS).unwrap().len(), MAX_CHART_STEPS + 1);
    assert!(matches!(
        r32.pressure_temperature_chart(usize::MAX),
        Err(EngineError::InvalidInput(_))
    ));
}

// ═══════════════════════════════════════════════════════════════════
//  Propriétés
// ═══════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn saturation_pressure_rises_with_temperature(t in -60.0f64..120.0, dt in 0.01f64..15.0) {
        for table in [builtin(), RefrigerantTable::service_charts().unwrap()] {
            for spec in table.iter() {
                let (lo, hi) = spec.temperature_range_c();
                if t <= lo || t + dt > hi {
                    continue;
                }
                let p1 = spec.saturation_pressure_kpa(t).unwrap();
                let p2 = spec.saturation_pressure_kpa(t + dt).unwrap();
                prop_assert!(p2 > p1, "{}: P({}) = {} !< P({}) = {}", spec.code, t, p1, t + dt, p2);
            }
        }
    }

    #[test]
    fn saturation_temperature_inverts_pressure(t in -40.0f64..30.0) {
        for table in [builtin(), RefrigerantTable::service_charts().unwrap()] {
            for spec in table.iter() {
                let p = spec.saturation_pressure_kpa(t).unwrap();
                let back = spec.saturation_temperature_c(p).unwrap();
                prop_assert!((back - t).abs() < 1e-6, "{}: {} → {} kPa → {}", spec.code, t, p, back);
            }
        }
    }
}
