use anyhow::Result;
use apptbook_core::AppConfig;
use owo_colors::OwoColorize;

pub fn run(config: &AppConfig) -> Result<()> {
    let config_path = AppConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Source:  {}", config.data_source()?);
    println!();
    println!("{}", "Effective settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {line}");
    }

    Ok(())
}
