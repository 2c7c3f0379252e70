use appliance_import::{collect_all, Settings};
use log::{info, warn};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional config path, then an optional --json flag
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let settings = match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => Settings::load_from(path, true)?,
        None => Settings::load()?,
    };

    if settings.jobs.is_empty() {
        warn!("No jobs configured. Add [[jobs]] entries to appliance.toml");
        return Ok(());
    }

    let reports = collect_all(&settings);
    let written: usize = reports.iter().map(|r| r.files_written().len()).sum();
    info!(
        "Collected {} of {} products, {} file(s) written",
        reports.len(),
        settings.jobs.len(),
        written
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}
