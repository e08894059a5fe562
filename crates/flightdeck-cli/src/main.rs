//! Flightdeck CLI — exercises the SDK surface from a terminal.
//!
//! `lookup` resolves a flight (live → mock → placeholder), `voice` runs the
//! transcript parser, `board` renders the offline catalogue through the
//! board container, and `key` manages the stored provider API key.

use chrono::Utc;
use clap::{Parser, Subcommand};
use flightdeck_models::{parse_flight_number, schedule, Flight};
use flightdeck_sdk::{
    credentials, mock_flights, resolve_flight, AviationStackClient, FlightBoard,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "flightdeck")]
#[command(about = "Flight tracker: look up flights live or from mock data")]
#[command(author, version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up one flight by IATA number and date.
    Lookup {
        /// IATA flight number (e.g. KL692).
        #[arg(long)]
        flight: String,

        /// Flight date, YYYY-MM-DD. Defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Provider API key. Falls back to AVIATIONSTACK_API_KEY, then to
        /// the stored key.
        #[arg(long)]
        api_key: Option<String>,

        /// Skip the live provider and use mock data only.
        #[arg(long)]
        offline: bool,
    },

    /// Extract a flight number from a speech transcript.
    Voice {
        /// The transcript, e.g. "KL six nine two".
        transcript: String,
    },

    /// Show the mock catalogue as a sorted, archive-filtered board.
    Board,

    /// Manage the stored provider API key.
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
}

#[derive(Subcommand, Debug)]
enum KeyAction {
    /// Save an API key to the config directory.
    Set {
        /// The provider access key.
        api_key: String,
    },
    /// Show whether a key is stored.
    Show,
    /// Remove the stored key.
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging, controlled via the RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup {
            flight,
            date,
            api_key,
            offline,
        } => {
            let date = date.unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());
            let client = if offline {
                None
            } else {
                resolve_api_key(api_key)
                    .map(|key| AviationStackClient::new(&key))
                    .transpose()?
            };
            if client.is_none() {
                println!("(no API key configured, using mock data)");
            }

            let resolved = resolve_flight(client.as_ref(), &flight, &date).await;
            print_flight(&resolved);
        }

        Commands::Voice { transcript } => match parse_flight_number(&transcript) {
            Some(number) => println!("{number}"),
            None => {
                // Same contract as the UI: no guess means the raw transcript
                // becomes the flight-number field.
                println!("{}", transcript.trim());
            }
        },

        Commands::Board => {
            let board = FlightBoard::from_flights(mock_flights(Utc::now().date_naive()));
            let active = board.active();
            if active.is_empty() {
                println!("No flights to show");
            }
            for flight in &active {
                let when = schedule::time_difference_label(&flight.date, &flight.departure.time);
                println!(
                    "{:<8} {:<28} {} {} → {}  [{}]  {}",
                    flight.flight_number,
                    flight.airline,
                    flight.date,
                    flight.departure.airport,
                    flight.arrival.airport,
                    flight.status,
                    when,
                );
            }
            let archived = board.len() - active.len();
            if archived > 0 {
                println!("({archived} archived flight(s) hidden)");
            }
        }

        Commands::Key { action } => match action {
            KeyAction::Set { api_key } => {
                credentials::save_api_key(&api_key);
                println!("API key saved");
            }
            KeyAction::Show => match credentials::load_api_key() {
                Some(key) => println!("API key stored ({} chars)", key.len()),
                None => println!("No API key stored"),
            },
            KeyAction::Clear => {
                credentials::clear_api_key();
                println!("API key cleared");
            }
        },
    }

    Ok(())
}

/// CLI flag, then environment, then the stored key.
fn resolve_api_key(flag: Option<String>) -> Option<String> {
    let env = std::env::var("AVIATIONSTACK_API_KEY").ok();
    let (key, source) = pick_api_key(flag, env, credentials::load_api_key())?;
    debug!(source, "resolved API key");
    Some(key)
}

/// Pure precedence rule behind [`resolve_api_key`]; empty candidates are
/// skipped.
fn pick_api_key(
    flag: Option<String>,
    env: Option<String>,
    stored: Option<String>,
) -> Option<(String, &'static str)> {
    let non_empty = |k: &String| !k.is_empty();
    flag.filter(non_empty)
        .map(|k| (k, "flag"))
        .or_else(|| env.filter(non_empty).map(|k| (k, "env")))
        .or_else(|| stored.filter(non_empty).map(|k| (k, "stored")))
}

fn print_flight(flight: &Flight) {
    println!("{}  {}", flight.flight_number, flight.airline);
    println!("Date:      {}", flight.date);
    println!(
        "Route:     {} ({}) → {} ({})",
        flight.departure.city,
        flight.departure.airport,
        flight.arrival.city,
        flight.arrival.airport,
    );
    println!(
        "Departure: {} (actual {})  gate {}",
        flight.departure.time, flight.departure.actual_time, flight.departure.gate,
    );
    println!(
        "Arrival:   {} (actual {})  gate {}",
        flight.arrival.time, flight.arrival.actual_time, flight.arrival.gate,
    );
    match &flight.delay {
        Some(delay) => println!("Status:    {} ({delay})", flight.status),
        None => println!("Status:    {}", flight.status),
    }
    println!("Now:       {}", flight.current_status);
    if let Some(reason) = &flight.reason {
        println!("Note:      {reason}");
    }
    println!("Aircraft:  {}", flight.aircraft);
    for change in &flight.gate_changes {
        println!("Gate change: {} → {} at {}", change.from, change.to, change.time);
    }
}
