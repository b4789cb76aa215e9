use clap::Parser;
use resv_cli::cli::dispatcher::Dispatcher;
use resv_cli::cli::main_types::Cli;
use resv_cli::core::facade::{ApiMode, BookingApi};
use resv_cli::api::client::ApiClient;
use resv_cli::storage::config::{Config, Profile};
use resv_cli::storage::session::SessionStore;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.patilassociates.in/api";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let mut config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    // Determine the profile to use
    let profile_name = cli
        .profile
        .or(config.default_profile.clone())
        .unwrap_or_else(|| "default".to_string());

    // Create a default profile if it doesn't exist
    if config.get_profile(&profile_name).is_none() {
        if cli.verbose {
            println!("Creating default profile: {}", profile_name);
        }

        let default_profile = Profile {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: None,
            mode: None,
        };
        config.set_profile(profile_name.clone(), default_profile);

        // Set as default if no default is set
        if config.default_profile.is_none() {
            config.default_profile = Some(profile_name.clone());
        }

        // Save the updated config
        if let Err(err) = config.save(config_path.clone()) {
            if cli.verbose {
                println!("Warning: Failed to save config: {}", err);
            }
        }
    }

    let profile = match config.get_profile(&profile_name) {
        Some(profile) => profile.clone(),
        None => Profile {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: None,
            mode: None,
        },
    };

    // Mode resolution: flag (and API_MODE env, via clap) wins over the
    // profile; live is the default.
    let mode_source = cli.mode.clone().or_else(|| profile.mode.clone());
    let mode = match mode_source.as_deref() {
        Some(raw) => match raw.parse::<ApiMode>() {
            Ok(mode) => mode,
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        },
        None => ApiMode::Live,
    };

    if cli.verbose {
        println!("Verbose mode is enabled");
        println!("Using profile: {}", profile_name);
        println!("Using mode: {}", mode);

        if let Some(config_dir) = &cli.config_dir {
            println!("Using config directory: {}", config_dir);
        }
    }

    let client = match profile.timeout_seconds {
        Some(seconds) => {
            ApiClient::with_timeout(profile.api_url.clone(), Duration::from_secs(seconds))
        }
        None => ApiClient::new(profile.api_url.clone()),
    };
    let client = match client {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let store = SessionStore::new(profile_name.clone());
    let api = BookingApi::new(mode, client, store);

    // Create dispatcher and execute the command
    let mut dispatcher = Dispatcher::new(api, config, config_path, profile_name, cli.verbose);
    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("Error: {}", e.display_friendly());
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }

    Ok(())
}
