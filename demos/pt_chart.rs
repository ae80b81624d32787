use hvac_props::RefrigerantTable;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let code = std::env::args().nth(1).unwrap_or_else(|| "R-410A".to_string());

    // ── Correlation: boiling point → critical point ─────────────────
    let table = RefrigerantTable::builtin()?;
    let refrigerant = table.lookup(&code)?;
    println!("{refrigerant}\n");

    println!("{:>8} {:>8} {:>10} {:>9}", "°C", "°F", "kPa abs", "psig");
    for row in refrigerant.pressure_temperature_chart(12)? {
        println!(
            "{:>8.1} {:>8.1} {:>10.1} {:>9.1}",
            row.temperature_c, row.temperature_f, row.pressure_kpa, row.pressure_psig
        );
    }

    // ── Field check: 5 °C evaporator, 12 °C suction line ────────────
    let suction = refrigerant.saturation_pressure_kpa(5.0)?;
    let sh = refrigerant.superheat_c(suction, 12.0)?;
    println!("\nSuction {suction:.1} kPa, line 12.0 °C → superheat {sh:.1} K");

    // ── Same point read off the service chart, when there is one ────
    let charts = RefrigerantTable::service_charts()?;
    if let Ok(chart) = charts.lookup(&code) {
        let p = chart.saturation_pressure_kpa(5.0)?;
        println!("Service chart at 5 °C: {p:.1} kPa ({:+.2} %)", 100.0 * (p - suction) / suction);
    }

    Ok(())
}
