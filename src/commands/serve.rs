//! Runs the countdown web server.
//!
//! Captures the environment into an immutable configuration, reports the
//! target state to the operator, and hands off to the accept loop. The
//! server keeps running until the process is stopped; a missing or invalid
//! target is not fatal, it just serves the invalid-configuration page until
//! the process is restarted with a corrected value.

use crate::libs::config::{Config, Target};
use crate::libs::formatter::format_target;
use crate::libs::messages::Message;
use crate::libs::server::Server;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long, help = "Port to listen on (overrides the PORT variable)")]
    port: Option<u16>,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let mut config = Config::from_env();
    if let Some(port) = args.port {
        config.port = port;
    }

    match &config.target {
        Target::At { instant, .. } => msg_info!(Message::TargetConfigured(format_target(instant))),
        Target::Missing => msg_warning!(Message::TargetMissing),
        Target::Invalid(raw) => msg_warning!(Message::TargetInvalid(raw.clone())),
    }

    let server = Server::bind(("0.0.0.0", config.port), &config).await?;
    msg_print!(Message::ServerStarted(config.port));
    server.run().await
}
