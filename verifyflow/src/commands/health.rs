// verifyflow/src/commands/health.rs
//! `health` command: probe the audit service.

use anyhow::{Context, Result};
use log::info;

use verifyflow_core::{AuditClient, HttpAuditClient};

use crate::commands::{info_msg, CommandError};
use crate::ui::theme::ThemeMap;

pub fn run_health(client: &HttpAuditClient, theme_map: &ThemeMap) -> Result<()> {
    info!("Probing audit service at {}", client.base_url());
    let healthy = client
        .health()
        .with_context(|| format!("Audit service at {} is unreachable", client.base_url()))?;
    if healthy {
        info_msg(format!("Audit service at {} is healthy.", client.base_url()), theme_map);
        Ok(())
    } else {
        Err(CommandError::Unhealthy(client.base_url().to_string()).into())
    }
}
