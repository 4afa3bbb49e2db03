use crate::config::CONFIG_FILE;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Egogram Configuration

# Display locale for report labels: "ko" or "ja"
locale = "ko"

[output]
default_format = "terminal"

# Uncomment to score against the earlier questionnaire revision.
# [thresholds]
# midpoint = 5
# secondary_cutoff = 10
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE} configuration file");

    Ok(())
}
