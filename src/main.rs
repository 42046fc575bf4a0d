use crate::config::Config;
use crate::data::source::load_or_sample;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use astra::Server;
use log::{error, info};
use std::net::SocketAddr;

mod config;
mod data;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    // 1️⃣ Load the dataset (falls back to the built-in sample on failure)
    let data = load_or_sample(&config);
    let state = AppState::new(data, &config);

    // 2️⃣ Start the server
    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("❌ Invalid bind address {:?}: {e}", config.bind_addr);
            std::process::exit(1);
        }
    };
    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing the shared state into the closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
