//! tgo - command line client for event registration
//!
//! Talks to a running `tgo-api` server.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tgo_client::{ApiClient, ParticipantList, RegistrationSession, RosterPoller, ViewModel};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// tgo - tactical game organizer client
#[derive(Parser, Debug)]
#[command(name = "tgo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Server root URL
    #[arg(long, env = "TGO_API_URL", default_value = "http://127.0.0.1:8080")]
    url: String,

    /// Bearer token for authenticated commands
    #[arg(long, env = "TGO_TOKEN")]
    token: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the roster and refresh it periodically
    Watch {
        /// Event id
        event_id: u64,

        /// Seconds between refreshes
        #[arg(short, long, default_value = "30")]
        interval: u64,
    },

    /// Register for an event (or update the registration)
    Register {
        /// Event id
        event_id: u64,

        #[arg(long)]
        callsign: String,

        /// Role key; defaults to the preselected role for the event
        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        team: String,
    },

    /// Cancel your registration
    Cancel {
        /// Event id
        event_id: u64,
    },

    /// List every role
    Roles,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut client = ApiClient::new(&cli.url).context("failed to build HTTP client")?;
    if let Some(token) = cli.token {
        client = client.with_token(token);
    }

    match cli.command {
        Commands::Watch { event_id, interval } => watch(client, event_id, interval).await,
        Commands::Register {
            event_id,
            callsign,
            role,
            team,
        } => {
            let mut session = RegistrationSession::new(client, event_id, "Event is full");
            session.refresh().await?;

            let role = role
                .or_else(|| session.view().selected_role().map(str::to_string))
                .unwrap_or_default();
            session.view_mut().inputs.callsign = callsign;
            session.view_mut().inputs.team = team;

            let message = session.register(&role).await?;
            println!("{message}");
            print_view(session.view());
            Ok(())
        }
        Commands::Cancel { event_id } => {
            let mut session = RegistrationSession::new(client, event_id, "Event is full");
            let message = session.cancel().await?;
            println!("{message}");
            print_view(session.view());
            Ok(())
        }
        Commands::Roles => {
            let roles = client.roles().await?;
            for (key, label) in roles.roles.iter() {
                let marker = if key == roles.default_role { " (default)" } else { "" };
                println!("{key:<12} {label}{marker}");
            }
            Ok(())
        }
    }
}

async fn watch(client: ApiClient, event_id: u64, interval: u64) -> Result<()> {
    let poller = RosterPoller::new(client, event_id).with_interval(Duration::from_secs(interval.max(1)));
    let mut view = ViewModel::new("Event is full");

    poller
        .run(
            |result: Result<ParticipantList, _>| match result {
                Ok(list) => {
                    view.apply_listing(&list);
                    print_view(&view);
                }
                Err(e) => eprintln!("refresh failed: {e}"),
            },
            async {
                let _ = tokio::signal::ctrl_c().await;
            },
        )
        .await;

    Ok(())
}

fn print_view(view: &ViewModel) {
    match view.counter() {
        Some(counter) => println!("Participants ({counter})"),
        None => println!("Participants"),
    }
    if view.rows.is_empty() {
        println!("  no participants yet");
    }
    for row in &view.rows {
        let mine = if row.can_cancel { " *" } else { "" };
        println!("  {:<16} {:<12} {}{mine}", row.callsign, row.role_label, row.team);
    }
    if let Some(percent) = view.progress_percent() {
        println!("  {percent:.0}% full");
    }
    if let Some(notice) = &view.notice {
        println!("{}", notice.text);
    }
}
