// verifyflow/src/lib.rs
//! # VerifyFlow CLI Application
//!
//! Terminal front end for the document audit workflow. Argument parsing,
//! configuration resolution and rendering live here; everything the report
//! means is decided in `verifyflow-core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use verifyflow_core::{ClientConfig, HttpAuditClient};

use crate::cli::{Cli, Commands};
use crate::ui::theme::ThemeMap;

/// Effective configuration: file and environment layers, then `--service-url`.
pub fn resolve_config(config_path: Option<&Path>, service_url: Option<&str>) -> Result<ClientConfig> {
    let mut config = ClientConfig::resolve(config_path).context("Failed to load client configuration")?;
    if let Some(url) = service_url.map(str::trim).filter(|u| !u.is_empty()) {
        debug!("--service-url overrides service_url");
        config.service_url = url.to_string();
    }
    config.validate()?;
    Ok(config)
}

/// Dispatches the parsed command line.
pub fn run(cli: &Cli, theme_map: &ThemeMap) -> Result<()> {
    match &cli.command {
        Commands::ValidateOrder { text } => commands::validate::run(text, theme_map),
        Commands::Export(cmd) => commands::export::run_export(cmd, theme_map),
        Commands::Check(cmd) => {
            let config = resolve_config(cli.config.as_deref(), cli.service_url.as_deref())?;
            let client = HttpAuditClient::new(&config.service_url).context("Failed to build the HTTP client")?;
            commands::check::run_check(cmd, &config, &client, theme_map)
        }
        Commands::Health => {
            let config = resolve_config(cli.config.as_deref(), cli.service_url.as_deref())?;
            let client = HttpAuditClient::new(&config.service_url).context("Failed to build the HTTP client")?;
            commands::health::run_health(&client, theme_map)
        }
    }
}
