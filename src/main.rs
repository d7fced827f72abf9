mod geo;
mod iss;
mod system;
mod web;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::iss::GuideRequest;
use crate::web::{AppState, Config, Providers};

#[derive(Parser)]
#[command(name = "skywatch")]
#[command(about = "Personal dashboard with host statistics and an ISS viewing guide")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard web server
    Serve {
        #[arg(long)]
        config: Option<String>,
    },
    /// Print the ISS viewing guide for a place
    Lookup {
        #[arg(long, default_value = "")]
        city: String,
        #[arg(long, default_value = "")]
        state: String,
        #[arg(long, default_value = "")]
        country: String,
        #[arg(long)]
        config: Option<String>,
    },
    /// Validate a config file
    ValidateConfig { config: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()).await,
        Commands::Lookup {
            city,
            state,
            country,
            config,
        } => {
            let request = GuideRequest {
                city,
                state,
                country,
            };
            lookup(config.as_deref(), request).await
        }
        Commands::ValidateConfig { config } => validate_config(&config),
    }
}

fn load_config(path: Option<&str>) -> Option<Config> {
    match Config::load(path) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            None
        }
    }
}

async fn serve(path: Option<&str>) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn lookup(path: Option<&str>, request: GuideRequest) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };

    if config.api_key.is_none() {
        log::warn!(
            "{} is not set; ISS position and passes will be unavailable",
            web::config::API_KEY_ENV
        );
    }

    let providers = match Providers::live(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error creating HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(config, providers);
    let report = state.guide.run(&request).await;
    print!("{}", report);
    ExitCode::SUCCESS
}

fn validate_config(path: &str) -> ExitCode {
    match Config::from_file(path) {
        Ok(config) => {
            println!("Config is valid");
            println!("  bind: {}", config.web.bind);
            println!("  http timeout: {:?}", config.http.timeout);
            println!(
                "  tracking: satellite {} via {}",
                config.tracking.satellite_id, config.tracking.base_url
            );
            println!("  geocoding: {}", config.geocoding.base_url);
            println!(
                "  default location: {} ({}, {}) in {}",
                config.defaults.location.display_name,
                config.defaults.location.latitude,
                config.defaults.location.longitude,
                config.defaults.timezone
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {}", e);
            ExitCode::FAILURE
        }
    }
}
