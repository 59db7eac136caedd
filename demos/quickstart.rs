use chrono::{FixedOffset, NaiveDate, TimeZone};
use soltime::{
    solar_time, solar_time_with_interval, EquationOfTime, SolarTimeCalculator, SolarTimeConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> soltime::Result<()> {
    // RUST_LOG=soltime=debug shows each correction.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let reading = NaiveDate::from_ymd_opt(2023, 10, 6)
        .and_then(|date| date.and_hms_opt(15, 30, 0))
        .ok_or(soltime::SolarTimeError::OutOfRange)?;
    println!("Naive (UTC) 15:30, Bochum: {}", solar_time(reading, 51.481, 7.217)?);
    println!(
        "Hourly mean ending 15:30:    {}",
        solar_time_with_interval(reading, 51.481, 7.217, 3_600)?
    );

    let adelaide = FixedOffset::east_opt(34_200)
        .and_then(|acst| acst.with_ymd_and_hms(2023, 10, 6, 15, 30, 0).single())
        .ok_or(soltime::SolarTimeError::OutOfRange)?;
    println!("ACST 15:30, Adelaide:        {}", solar_time(adelaide, -34.885, 138.579)?);

    let harmonic = SolarTimeCalculator::new(SolarTimeConfig {
        equation_of_time: EquationOfTime::Harmonic,
        ..SolarTimeConfig::default()
    });
    println!(
        "Harmonic model, Bochum:      {}",
        harmonic.solar_time(reading, 51.481, 7.217, 0)?
    );

    if let Err(err) = solar_time(reading, -91, 7.217) {
        println!("Rejected:                    {err}");
    }
    Ok(())
}
