use chrono::Utc;
use julian_period::{gregorian_to_jd, CivilDateTime, CycleIndex, JulianDay, UtcOffset};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // `RUST_LOG=julian_period=trace` shows every conversion step.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("julian_period=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let now = JulianDay::from_utc(Utc::now());
    let today = now.to_civil(UtcOffset::UTC)?;
    println!("Now:    {now} ({today} UT)");
    println!("Cycles: {}", today.cycles());

    let offset = UtcOffset::from_hours(5.5)?;
    let date = CivilDateTime::new(1582, 10, 15)?.with_time(9, 30, 0.0)?;
    let pair = gregorian_to_jd(&date, offset);
    println!(
        "{date} {offset} ({} calendar) -> {} (JDN {})",
        date.calendar(),
        pair.julian_day,
        pair.julian_day_number
    );
    println!("Back:   {}", pair.julian_day.to_civil(offset)?);

    for year in [-4712, 1, 2025, 3268] {
        println!("{year:>6}: {}", CycleIndex::of(year));
    }
    Ok(())
}
