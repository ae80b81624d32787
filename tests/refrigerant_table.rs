use hvac_props::{
    AntoineCoefficients, EngineError, PressureModel, PressureTable, RefrigerantSpec,
    RefrigerantTable, SafetyClass,
};

fn spec(code: &str, model: PressureModel) -> RefrigerantSpec {
    RefrigerantSpec {
        code: code.to_string(),
        name: format!("{code} (test)"),
        critical_temperature_c: 80.0,
        critical_pressure_kpa: 4500.0,
        boiling_point_c: -40.0,
        molar_mass_g_mol: 80.0,
        safety_class: SafetyClass::A1,
        gwp: 1000.0,
        pressure_model: model,
    }
}

fn antoine() -> PressureModel {
    PressureModel::Antoine(AntoineCoefficients { a: 6.5, b: 950.0, c: 260.0 })
}

// ═══════════════════════════════════════════════════════════════════
//  Jeu de données intégré
// ═══════════════════════════════════════════════════════════════════

#[test]
fn builtin_table_loads() {
    let table = RefrigerantTable::builtin().unwrap();
    assert_eq!(table.len(), 15);
    assert!(!table.is_empty());

    for code in ["R-22", "R-134a", "R-410A", "R-32", "R-1234yf", "R-290", "R-717", "R-744"] {
        assert!(table.contains(code), "{code} missing from the builtin table");
    }
    // Legacy refrigerants have no correlation
    for code in ["R-12", "R-22", "R-502"] {
        assert!(table.lookup(code).unwrap().is_table_based(), "{code} should use its chart");
    }
    assert!(!table.lookup("R-410A").unwrap().is_table_based());
}

#[test]
fn service_charts_are_all_tables() {
    let charts = RefrigerantTable::service_charts().unwrap();
    assert!(charts.len() >= 9);
    assert!(charts.iter().all(RefrigerantSpec::is_table_based));
    assert!(charts.contains("R-410A"));
    assert!(!charts.contains("R-744"));
}

#[test]
fn codes_keep_dataset_order() {
    let table = RefrigerantTable::builtin().unwrap();
    let codes: Vec<&str> = table.codes().collect();
    assert_eq!(codes.first(), Some(&"R-12"));
    assert_eq!(codes.last(), Some(&"R-744"));
}

#[test]
fn r410a_constants() {
    let table = RefrigerantTable::builtin().unwrap();
    let r410a = table.lookup("R-410A").unwrap();

    // Tc ≈ 71.3 °C, Pc ≈ 4901 kPa
    assert!((r410a.critical_temperature_c - 71.34).abs() < 0.01);
    assert!((r410a.critical_pressure_kpa - 4901.0).abs() < 1.0);
    assert_eq!(r410a.safety_class, SafetyClass::A1);
    assert!(r410a.boiling_point_c < r410a.critical_temperature_c);
}

// ═══════════════════════════════════════════════════════════════════
//  Recherche
// ═══════════════════════════════════════════════════════════════════

#[test]
fn lookup_ignores_case_and_hyphens() {
    let table = RefrigerantTable::builtin().unwrap();
    let expected = table.lookup("R-410A").unwrap();

    for alias in ["r410a", "R410A", "r-410a", " R-410A "] {
        assert_eq!(table.lookup(alias).unwrap().code, expected.code, "alias {alias:?}");
    }
    assert_eq!(table.lookup("r1234ze(e)").unwrap().code, "R-1234ze(E)");
}

#[test]
fn unknown_code_is_an_error_not_a_neighbour() {
    let table = RefrigerantTable::builtin().unwrap();

    match table.lookup("R-999-FAKE") {
        Err(EngineError::UnknownRefrigerant(code)) => assert_eq!(code, "R-999-FAKE"),
        other => panic!("expected UnknownRefrigerant, got {other:?}"),
    }
    // Close but not equal
    assert!(table.lookup("R-410").is_err());
    assert!(table.lookup("").is_err());
}

// ═══════════════════════════════════════════════════════════════════
//  Intégrité des données
// ═══════════════════════════════════════════════════════════════════

#[test]
fn custom_dataset_is_validated() {
    let table = RefrigerantTable::from_specs(vec![spec("R-TEST", antoine())]).unwrap();
    assert_eq!(table.len(), 1);
    assert!(table.lookup("r-test").is_ok());
}

#[test]
fn duplicate_codes_are_rejected() {
    let err = RefrigerantTable::from_specs(vec![spec("R-TEST", antoine()), spec("rtest", antoine())])
        .unwrap_err();
    assert!(matches!(err, EngineError::DataIntegrity(_)), "got {err:?}");
}

#[test]
fn inconsistent_entries_are_rejected() {
    let mut hot_boil = spec("R-A", antoine());
    hot_boil.boiling_point_c = 90.0;

    let mut flat = spec("R-B", antoine());
    flat.pressure_model = PressureModel::Antoine(AntoineCoefficients { a: 6.5, b: -1.0, c: 260.0 });

    let mut supercritical_chart = spec("R-C", antoine());
    supercritical_chart.pressure_model =
        PressureModel::Table(PressureTable::new(vec![(0, 500.0), (90, 5000.0)]).unwrap());

    let mut weightless = spec("R-D", antoine());
    weightless.molar_mass_g_mol = 0.0;

    let mut blank = spec("R-E", antoine());
    blank.code = "  ".into();

    for bad in [hot_boil, flat, supercritical_chart, weightless, blank] {
        let label = bad.code.clone();
        assert!(
            matches!(RefrigerantTable::from_specs(vec![bad]), Err(EngineError::DataIntegrity(_))),
            "{label:?} should fail validation"
        );
    }
}

#[test]
fn non_monotonic_chart_is_rejected() {
    assert!(matches!(
        PressureTable::new(vec![(-10, 300.0), (0, 250.0), (10, 400.0)]),
        Err(EngineError::DataIntegrity(_))
    ));
    assert!(matches!(
        PressureTable::new(vec![(0, 300.0), (10, f64::NAN)]),
        Err(EngineError::DataIntegrity(_))
    ));
}

// ═══════════════════════════════════════════════════════════════════
//  Affichage / sérialisation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn display_and_json() {
    let table = RefrigerantTable::builtin().unwrap();
    let r22 = table.lookup("R-22").unwrap();

    let text = r22.to_string();
    assert!(text.starts_with("R-22"));
    assert!(text.contains("model = table, 11 points"));

    let json = serde_json::to_value(r22).unwrap();
    assert_eq!(json["code"], "R-22");
    assert_eq!(json["safety_class"], "A1");
    assert_eq!(json["pressure_model"]["kind"], "table");
}
