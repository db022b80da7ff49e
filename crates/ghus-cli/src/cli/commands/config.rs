//! `ghus config` – show config path and effective settings.

use anyhow::Result;
use ghus_core::config::{self, GhusConfig};
use std::path::Path;

pub fn run_config(cfg: &GhusConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", config::to_toml_string(cfg)?);
    let token = if config::token_from_env().is_some() {
        "set"
    } else {
        "not set"
    };
    println!("# {}: {}", config::TOKEN_ENV, token);
    Ok(())
}
