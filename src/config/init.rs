use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, Config};
use crate::criteria::default_criteria;

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Write a commented starter config with the built-in criterion set,
/// prompting before overwriting an existing file.
pub fn write_starter_config(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(get_config_path);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!("{} already exists. Overwrite?", config_path.display()),
            false,
        )?;
        if !overwrite {
            println!("Left existing config untouched.");
            return Ok(());
        }
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory at {}", parent.display())
        })?;
    }

    let config = Config {
        criteria: Some(default_criteria()),
        theme: Some("auto".to_string()),
    };
    let yaml = serde_saphyr::to_string(&config).context("Failed to serialize starter config")?;

    let contents = format!(
        "# grantlaunch configuration\n\
         #\n\
         # theme: dark | light | auto\n\
         #\n\
         # The criteria below may be reworded to fit your organization's\n\
         # voice. The set must stay at exactly six entries with unique ids;\n\
         # the ids are what `grantlaunch score --yes <id>` accepts.\n\
         {}",
        yaml
    );

    std::fs::write(&config_path, contents)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!("Wrote starter config to {}", config_path.display());
    Ok(())
}
