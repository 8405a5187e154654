//! OCPI hub
//!
//! ```sh
//! # Run with default config (~/.config/ocpi-hub/config.toml)
//! ocpi-hub
//!
//! # Custom config path and port
//! ocpi-hub --config /etc/ocpi-hub/config.toml --port 9090 serve
//!
//! # Register a party and print its token
//! ocpi-hub register --name "Example CPO" --country-code NL --party-id EXA --role CPO
//!
//! # Validate config without starting
//! ocpi-hub check
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use ocpi_hub::application::{PartyRegistry, RegisterParty};
use ocpi_hub::config::AppConfig;
use ocpi_hub::domain::Role;
use ocpi_hub::server::{init_tracing, ServerHandle, ServerOptions};
use ocpi_hub::{default_config_path, init_and_migrate, SeaOrmRepositoryProvider};

/// OCPI 2.3.0 hub for CPO / eMSP data exchange.
#[derive(Parser, Debug)]
#[command(name = "ocpi-hub", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "OCPI_HUB_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Skip database migrations on startup.
    #[arg(long, global = true)]
    no_migrate: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the hub (default).
    Serve,
    /// Register a party against the configured database and print its token.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        country_code: String,
        #[arg(long)]
        party_id: String,
        /// CPO, EMSP or HUB
        #[arg(long, value_parser = parse_role)]
        role: Role,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        logo: Option<String>,
    },
    /// Validate the configuration and exit.
    Check,
}

fn parse_role(s: &str) -> Result<Role, String> {
    s.to_ascii_uppercase().parse()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            if matches!(cli.command, Some(Command::Check)) {
                eprintln!("Configuration is invalid: {}", e);
                std::process::exit(1);
            }
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config from {}: {}", config_path.display(), e);
            return Err(e.into());
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Check => {
            println!("Configuration is valid");
            println!("   Config file : {}", config_path.display());
            println!("   API address : {}", config.server.address());
            println!("   Public URL  : {}", config.hub.public_url);
            println!("   Database    : {}", config.database.url);
            println!("   Page limit  : {}", config.hub.page_limit);
            println!("   Log level   : {}", config.logging.level);
            Ok(())
        }
        Command::Register {
            name,
            country_code,
            party_id,
            role,
            website,
            logo,
        } => {
            init_tracing(&config);
            let db = init_and_migrate(&config.database_config()).await?;
            let registry = PartyRegistry::new(Arc::new(SeaOrmRepositoryProvider::new(db.clone())));

            let result = registry
                .register(RegisterParty {
                    name,
                    website,
                    logo,
                    country_code,
                    party_id,
                    role,
                    business_details: None,
                })
                .await;
            db.close().await?;

            let registration = result?;
            let org = &registration.organization;
            println!("Registered {} {}/{} ({})", org.role, org.country_code, org.party_id, org.id);
            println!("Token (shown once): {}", registration.token);
            Ok(())
        }
        Command::Serve => {
            init_tracing(&config);
            info!("Configuration loaded from {}", config_path.display());

            let handle = ServerHandle::start(ServerOptions {
                config,
                auto_migrate: !cli.no_migrate,
            })
            .await?;

            handle.install_signal_handler();
            info!("Press Ctrl+C to shutdown gracefully.");

            handle.shutdown_signal().wait().await;
            handle.wait().await;
            Ok(())
        }
    }
}
