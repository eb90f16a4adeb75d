use dnsock_domain::{CliOverrides, Config};

/// Loads and validates configuration; runs before logging is set up since
/// the log level comes from it.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
