use std::env;

use openweather_query::{Client, ClientOptions, Endpoint, Query};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "Usage:\n  cargo run --example cli -- weather <city> [units]\n  cargo run --example cli -- forecast <city> [units]\n  cargo run --example cli -- raw <city> [units]\n\nExample:\n  OPENWEATHER_API_KEY=... cargo run --example cli -- weather Berlin,de imperial\n\nNotes:\n- Requires an API key in OPENWEATHER_API_KEY (https://home.openweathermap.org/users/sign_up).\n- Set RUST_LOG=debug to see the requests being made.";

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("{USAGE}");
        return;
    }

    let api_key = match env::var("OPENWEATHER_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("OPENWEATHER_API_KEY is not set.\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let mut query = Query::for_city(api_key, &args[2]);
    if let Some(units) = args.get(3) {
        query = query.with_unit(units);
    }

    let client = Client::new(ClientOptions::default()).expect("create client");

    match args[1].as_str() {
        "weather" => match client.weather(&query) {
            Ok(w) => {
                println!("{} ({})", w.name, w.system.country);
                println!(
                    "  {} {}, min {} / max {}",
                    w.main.temp, query.unit(), w.main.temp_min, w.main.temp_max
                );
                for c in &w.conditions {
                    println!("  {}: {} ({})", c.main, c.description, c.icon_url());
                }
                println!("  wind {} @ {}°, clouds {}%", w.wind.speed, w.wind.degree, w.clouds.coverage_percent);
                if let Some(observed) = w.observed_at() {
                    println!("  observed at {observed}");
                }
            }
            Err(e) => {
                eprintln!("weather failed: {e}");
                std::process::exit(1);
            }
        },

        "forecast" => match client.daily_forecast(&query) {
            Ok(f) => {
                println!("{} ({}), {} days", f.city.name, f.city.country, f.count);
                if !f.count_matches_entries() {
                    eprintln!("warning: service reported {} days but sent {}", f.count, f.entries.len());
                }
                for day in &f.entries {
                    let date = day
                        .date()
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| day.timestamp.to_string());
                    let summary = day
                        .conditions
                        .first()
                        .map(|c| c.description.as_str())
                        .unwrap_or("-");
                    println!("  {date}: {} .. {}, {summary}", day.temp.min, day.temp.max);
                }
            }
            Err(e) => {
                eprintln!("forecast failed: {e}");
                std::process::exit(1);
            }
        },

        "raw" => match client.fetch_raw(&query, Endpoint::CurrentWeather) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("raw fetch failed: {e}");
                std::process::exit(1);
            }
        },

        _ => {
            eprintln!("Unknown command. Use: weather|forecast|raw");
            std::process::exit(2);
        }
    }
}
