use anyhow::Result;
use clap::{Parser, Subcommand};
use petmap_application::GatewaySelector;
use petmap_core::auth::SessionCredentials;
use petmap_infrastructure::ConfigService;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "petmap")]
#[command(about = "PetMap CLI - report and browse lost-and-found pets", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/petmap/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Serve every call from the in-process mock API
    #[arg(long, global = true)]
    mock: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Bearer token of the current session
    #[arg(long, global = true, env = "PETMAP_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and print the session token
    Signin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Browse and report pet sightings
    Points {
        #[command(subcommand)]
        action: PointsAction,
    },
    /// Show the profile card
    Profile {
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Show the full email instead of the masked one
        #[arg(long)]
        show_email: bool,
    },
}

#[derive(Subcommand)]
enum PointsAction {
    /// List every reported pet
    List {
        /// Only pets reported by you
        #[arg(long)]
        mine: bool,
        /// Print markers as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report a pet at the given position
    Add {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        #[arg(long)]
        description: String,
        /// Marker color as hex, e.g. #000000
        #[arg(long)]
        color: Option<String>,
        /// Photo of the pet
        #[arg(long)]
        image: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_service = match &cli.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new(),
    };
    let mut config = config_service.get_config()?;
    if cli.mock {
        config.mock_api = true;
    }

    // Composition root: the gateway mode is fixed from here on.
    let gateways = GatewaySelector::select(&config);
    let credentials = SessionCredentials::from_token(cli.token);

    match cli.command {
        Commands::Signin { email, password } => {
            commands::auth::sign_in(&gateways, &email, &password).await?
        }
        Commands::Signup {
            name,
            email,
            password,
        } => commands::auth::sign_up(&gateways, &name, &email, &password).await?,
        Commands::Points { action } => match action {
            PointsAction::List { mine, json } => {
                commands::points::list(&gateways, &credentials, mine, json).await?
            }
            PointsAction::Add {
                lat,
                lng,
                description,
                color,
                image,
            } => {
                let input = commands::points::NewPointInput {
                    lat,
                    lng,
                    description,
                    color,
                    image,
                };
                commands::points::add(&gateways, &credentials, input).await?
            }
        },
        Commands::Profile {
            email,
            description,
            show_email,
        } => commands::profile::show(&email, &description, show_email),
    }

    Ok(())
}
