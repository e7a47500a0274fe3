//! Init command implementation.
//!
//! Writes an example scry.config.json, or prints its JSON Schema.

use crate::cli::InitArgs;
use crate::commands::utils;
use crate::config::{CONFIG_FILE_NAME, ScryConfig};
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Execute the init command.
///
/// # Errors
///
/// Fails when the config file already exists and `--force` is not set.
pub fn execute(args: InitArgs) -> Result<()> {
    if args.schema {
        println!("{}", serde_json::to_string_pretty(&ScryConfig::json_schema())?);
        return Ok(());
    }

    let path = utils::get_cwd()?.join(CONFIG_FILE_NAME);
    if path.exists() && !args.force {
        return Err(CliError::InvalidArgument(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let mut content = ScryConfig::example_config();
    content.push('\n');
    utils::write_output(&path, &content)
        .with_hint("Run init from a writable directory or print the schema with --schema")?;
    ui::success(&format!("Created {}", CONFIG_FILE_NAME));

    Ok(())
}
