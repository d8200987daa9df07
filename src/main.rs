use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use rspotty::cli::{self, Cli, Outcome};
use rspotty::clients::{AppCredentials, SpotifyClient};
use rspotty::terminal::StdinInput;

#[tokio::main]
async fn main() -> ExitCode {
    // Values already in the environment take precedence over .env
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let credentials = match AppCredentials::from_env() {
        Ok(credentials) => credentials,
        Err(missing) => {
            // Nothing can be done without credentials
            missing.write_guidance(&mut io::stdout()).ok();
            std::process::exit(1);
        }
    };

    debug!("Building Spotify client ...");
    let spotify = SpotifyClient::from_credentials(&credentials);

    let mut input = StdinInput;
    let mut out = io::stdout();
    let mut err = io::stderr();
    match cli::dispatch(&cli, &spotify, &mut input, &mut out, &mut err).await {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Usage) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
