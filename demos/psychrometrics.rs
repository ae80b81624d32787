use hvac_props::psychro::saturation_line;
use hvac_props::{compute_air_state, Settings, UnitSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // HVAC_UNIT_SYSTEM and HVAC_COMFORT_* from the environment or .env
    let settings = Settings::from_env()?;
    let analyzer = settings.comfort_analyzer()?;

    let (db, wb, z) = match settings.unit_system {
        UnitSystem::Metric => (24.0, 17.0, 300.0),
        UnitSystem::Imperial => (75.0, 62.0, 1000.0),
    };

    let state = compute_air_state(db, wb, z, settings.unit_system)?;
    println!("{state}\n");

    let verdict = analyzer.classify_state(&state);
    println!("Comfort: {:?}", verdict.classification);
    for msg in verdict.messages() {
        println!("  - {msg}");
    }

    // ── Saturation curve at sea level ───────────────────────────────
    println!("\n{:>6} {:>10}", "DB °C", "Ws kg/kg");
    for pt in saturation_line(0.0, 40.0, 5.0, 101.325)? {
        println!("{:>6.1} {:>10.5}", pt.dry_bulb_c, pt.humidity_ratio);
    }

    Ok(())
}
