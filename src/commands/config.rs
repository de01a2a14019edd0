use crate::config::Config;
use crate::error::Result;

/// Show the full configuration
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", serde_yaml_ng::to_string(&config)?);
    Ok(())
}

/// Set a configuration value and persist it
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("{key} = {value}");
    Ok(())
}

/// Get a single configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}
