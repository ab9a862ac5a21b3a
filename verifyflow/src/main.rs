// verifyflow/src/main.rs
//! VerifyFlow entry point.
//!
//! Loads `.env`, parses arguments, initializes logging and the theme, then
//! hands over to the selected command. Any failure ends with exit code 1.

use clap::Parser;
use log::info;
use std::process;

use verifyflow::cli::Cli;
use verifyflow::commands::error_msg;
use verifyflow::logger;
use verifyflow::ui::theme::{build_theme_map, ThemeStyle};

fn main() {
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    let cli = Cli::parse();

    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));
    info!("verifyflow started. Version: {}", env!("CARGO_PKG_VERSION"));
    if dotenv_loaded {
        info!("Loaded environment from .env");
    }

    let theme_map = match build_theme_map(cli.theme.as_ref()) {
        Ok(theme) => theme,
        Err(e) => {
            error_msg(format!("{:#}", e), &ThemeStyle::default_theme_map());
            process::exit(1);
        }
    };

    if let Err(e) = verifyflow::run(&cli, &theme_map) {
        error_msg(format!("{:#}", e), &theme_map);
        process::exit(1);
    }
}
