use lunar_phase::{compute_moon_phase, UTC};

fn main() {
    // --- A single lunation, week by week ---
    // Starting at the reference new moon, the phase walks through all four
    // principal phases and back.

    println!("=== One Lunation ===\n");

    let new_moon = UTC::from_calendar(2024, 1, 11, 11, 57, 0.0);

    for (label, days) in [
        ("New moon", 0.0),
        ("First quarter", 7.38),
        ("Full moon", 14.765),
        ("Last quarter", 22.15),
        ("Next new moon", 29.53),
    ] {
        let record = compute_moon_phase(&new_moon.add_days(days));
        println!("{label} (+{days:.2} d):");
        println!(
            "  {} {}  {:.1}% lit, age {:.2} d",
            record.phase_name.symbol(),
            record.phase_name,
            record.illumination_percent,
            record.age_days
        );
        println!(
            "  {:.0} km away, Moon in {}",
            record.distance_km, record.zodiac_sign
        );
        if let Some(name) = record.special_name {
            println!("  Traditional name: {}", name);
        }
        println!();
    }

    // --- Full moons of 2024 ---
    // Each calendar month's full moon carries a traditional name; distance
    // at the time decides whether it counts as a supermoon or micromoon.

    println!("=== Full Moons and Distance ===\n");

    let mut epoch = new_moon.add_days(14.765);
    for _ in 0..12 {
        let record = compute_moon_phase(&epoch);
        let tag = if record.is_supermoon() {
            " — supermoon"
        } else if record.is_micromoon() {
            " — micromoon"
        } else {
            ""
        };
        println!(
            "{}  {}  {:.0} km{}",
            epoch.to_iso8601(),
            record.special_name.unwrap_or("(not quite full)"),
            record.distance_km,
            tag
        );
        epoch = epoch.add_days(29.53058867);
    }

    // --- The Moon through the zodiac ---
    // One sidereal month later the Moon is back in the same sign; in
    // between it visits all twelve.

    println!("\n=== Zodiac Transit ===\n");

    let step = 27.321661 / 12.0;
    for k in 0..12 {
        let epoch = new_moon.add_days(step / 2.0 + k as f64 * step);
        let record = compute_moon_phase(&epoch);
        println!("{}  Moon in {}", epoch.to_iso8601(), record.zodiac_sign);
    }
}
