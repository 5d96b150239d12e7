//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("dir", &ctx.config.store.dir);
    ctx.output.kv("key", &ctx.config.store.key);

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output
        .kv("feed_paths", &ctx.config.catalog.feed_paths.join(", "));
    ctx.output
        .kv("recommended", &ctx.config.catalog.recommended.to_string());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("glow.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();

    if ctx.config.store.key.is_empty() {
        errors.push("store.key must not be empty".to_string());
    }

    if ctx.config.catalog.feed_paths.is_empty() {
        errors.push("catalog.feed_paths must list at least one path".to_string());
    }

    if ctx.config.catalog.recommended == 0 {
        errors.push("catalog.recommended must be at least 1".to_string());
    }

    if errors.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(error);
    }
    bail!("Configuration has {} error(s)", errors.len())
}
