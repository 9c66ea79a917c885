use chrono::{TimeZone, Utc};
use chrono_tz::America::Los_Angeles;

use sun_path::{
    calculate_solar_path, generate_sun_path_samples, Coordinate, DaySolarReference,
    DEFAULT_POINT_COUNT,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let coordinate = Coordinate::new(37.7749, -122.4194)?;
    let zone = "America/Los_Angeles";

    // Sunrise and sunset as a weather provider would report them.
    let day = DaySolarReference::from_sunrise_sunset(
        Los_Angeles
            .with_ymd_and_hms(2024, 6, 21, 5, 48, 0)
            .single()
            .ok_or("ambiguous sunrise")?
            .with_timezone(&Utc),
        Los_Angeles
            .with_ymd_and_hms(2024, 6, 21, 20, 35, 0)
            .single()
            .ok_or("ambiguous sunset")?
            .with_timezone(&Utc),
    );
    let now = Los_Angeles
        .with_ymd_and_hms(2024, 6, 21, 10, 0, 0)
        .single()
        .ok_or("ambiguous instant")?
        .with_timezone(&Utc);

    let data = calculate_solar_path(
        &now,
        coordinate,
        zone,
        day.sunrise,
        day.sunset,
        day.solar_noon,
    )?;

    println!("=== Sun Path Example ===");
    println!(
        "Location: San Francisco, CA ({:.4}°N, {:.4}°W)",
        coordinate.latitude(),
        -coordinate.longitude()
    );
    println!("Now: {}", now.with_timezone(&Los_Angeles));
    println!();
    println!("--- Positions ---");
    println!(
        "Current:  altitude {:6.2}°  azimuth {:6.2}°",
        data.current_position.altitude, data.current_position.azimuth
    );
    println!(
        "Sunrise:  altitude {:6.2}°  azimuth {:6.2}°",
        data.sunrise_position.altitude, data.sunrise_position.azimuth
    );
    println!(
        "Noon:     altitude {:6.2}°  azimuth {:6.2}°",
        data.solar_noon_position.altitude, data.solar_noon_position.azimuth
    );
    println!(
        "Sunset:   altitude {:6.2}°  azimuth {:6.2}°",
        data.sunset_position.altitude, data.sunset_position.azimuth
    );
    println!();
    println!("--- Progress ---");
    println!("Sun progress: {:.3}", data.sun_progress);
    println!("Altitude progress: {:.3}", data.altitude_progress);
    println!("Peak altitude: {:.2}°", data.max_daily_altitude);
    println!(
        "True solar noon: {}",
        data.true_solar_noon.with_timezone(&Los_Angeles)
    );
    println!();

    let samples = generate_sun_path_samples(
        coordinate,
        zone,
        day.sunrise,
        day.sunset,
        day.solar_noon,
        DEFAULT_POINT_COUNT,
    )?;
    println!("--- Path ({} points) ---", samples.len());
    for (x, y, pos) in samples.iter().step_by(5) {
        println!("x={x:.3} y={y:.3}  altitude {:6.2}°", pos.altitude);
    }

    Ok(())
}
