use super::resolve_editor;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            if !path.exists() {
                warning("No configuration file yet, run `pushlog init` first.");
                return Ok(());
            }

            let editor_to_use = resolve_editor(editor);
            let status = Command::new(&editor_to_use)
                .arg(&path)
                .status()
                .map_err(|e| AppError::Editor(format!("cannot start '{editor_to_use}': {e}")))?;

            if !status.success() {
                return Err(AppError::Editor(format!(
                    "'{editor_to_use}' exited with {status}"
                )));
            }

            // reject an edit that no longer parses
            Config::load()?;
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
        }
    }

    Ok(())
}
