use anyhow::{Context, Result};

use aule_core::AuleConfig;

/// Create the config file if it does not exist yet and print where it is.
pub fn run() -> Result<()> {
    let path = AuleConfig::config_path()?;

    if !path.exists() {
        AuleConfig::create_default_config(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        println!("Created {}", path.display());
    } else {
        println!("{}", path.display());
    }

    Ok(())
}
