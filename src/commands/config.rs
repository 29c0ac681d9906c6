//! `roster config show` and `roster config path`

use owo_colors::OwoColorize;

use crate::config::{CONFIG_ENV, Config, FEED_URL_ENV};
use crate::error::Result;

/// Print the effective configuration as YAML
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path();

    println!("{}", "Configuration:".cyan().bold());
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };
    println!("{} {}\n", "file:".dimmed(), source.dimmed());
    print!("{}", config.to_yaml()?);

    if std::env::var_os(FEED_URL_ENV).is_some() {
        println!("\n{}", format!("feed_url overridden by {FEED_URL_ENV}").yellow());
    }
    Ok(())
}

/// Print the config file location
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path().display());
    if std::env::var_os(CONFIG_ENV).is_some() {
        eprintln!("{}", format!("(set by {CONFIG_ENV})").dimmed());
    }
    Ok(())
}
