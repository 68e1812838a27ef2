use super::app::config_service;
use crate::GlobalOpts;
use anyhow::{Context, Result};
use colored::Colorize;
use notekeep_application::screen::Outcome;
use notekeep_core::config::ApiEndpoints;
use notekeep_infrastructure::config_service::API_URL_ENV;

pub fn show(opts: &GlobalOpts) -> Result<Outcome> {
    let service = config_service(opts)?;
    let config = service.get_config().context("Failed to load configuration")?;

    println!("{} {}", "file:".dimmed(), service.path().display());
    println!("api_base_url = {}", config.api_base_url);
    match config.request_timeout_secs {
        Some(secs) => println!("request_timeout_secs = {}", secs),
        None => println!("request_timeout_secs = {}", "(none)".dimmed()),
    }
    println!("log_level = {}", config.log_level);

    if std::env::var(API_URL_ENV).is_ok_and(|v| !v.trim().is_empty()) {
        println!("{} api_base_url overridden by {}", "note:".yellow(), API_URL_ENV);
    }
    Ok(Outcome::Done)
}

pub fn set_api_url(opts: &GlobalOpts, url: &str) -> Result<Outcome> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        anyhow::bail!("API URL must start with http:// or https://, got `{}`", url);
    }

    let service = config_service(opts)?;
    let mut config = service
        .get_file_config()
        .context("Failed to load configuration")?;
    config.api_base_url = ApiEndpoints::new(url).base().to_string();
    service.save(&config).context("Failed to save configuration")?;

    println!("✅ API URL set to {}", config.api_base_url.bold());
    Ok(Outcome::Done)
}
