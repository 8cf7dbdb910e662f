use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, LoggerHandle, WriteMode};
use noughts::prelude::*;

fn main() -> Result<()>
{
    // RUST_LOG may come from a .env file.
    dotenvy::dotenv().ok();

    let options = ServerOptions::parse();
    let _logger = start_logger(&options.log_level)?;

    log::info!("starting {} server v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    log::debug!("engine plays {} with {:?}; send `newgame` to begin", options.engine, options.strategy);

    Server::new(options).run().inspect_err(|e| log::error!("fatal error: {}", e))
}

/// Starts logging to stderr, leaving stdout to the protocol.
fn start_logger(level: &str) -> Result<LoggerHandle>
{
    let handle = Logger::try_with_env_or_str(level)?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::WithThread)
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;
    Ok(handle)
}
