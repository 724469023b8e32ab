use crate::output::{Output, OutputFormat};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use diary_sentiment_config::Config;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

pub fn run_config(cmd: crate::ConfigCommands, config: Config, config_file: &Path, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show => show_config(&config, config_file, output),
        crate::ConfigCommands::Init { force } => init_config(config_file, force, output),
    }
}

fn show_config(config: &Config, config_file: &Path, output: &Output) -> Result<()> {
    let exists = config_file.exists();

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            if !exists {
                output.warn(format!(
                    "Configuration file not found at: {} (showing defaults)",
                    config_file.display()
                ));
                output.info("Run 'reelfeel config init' to create it.");
            }

            let mut info_table = Table::new();
            info_table.set_header(vec![
                Cell::new("Config File").add_attribute(comfy_table::Attribute::Bold),
                Cell::new(config_file.display().to_string()),
            ]);
            println!("{}", styled(info_table));
            println!();

            println!("{}", section("Feed", vec![
                ("Base URL", config.feed.base_url.clone()),
                ("Timeout", format!("{} seconds", config.feed.timeout_seconds)),
            ]));
            println!();

            let analysis = &config.analysis;
            println!("{}", section("Analysis", vec![
                ("Newline Mode", format!("{:?}", analysis.newline_mode)),
                ("Min Token Length", analysis.min_token_length.to_string()),
                (
                    "Word Cloud Limit",
                    analysis
                        .word_cloud_limit
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "unlimited".to_string()),
                ),
                ("Negation", check_mark(analysis.negation)),
                ("Stop Words", resource_path(analysis.stop_words_file.as_deref())),
                ("Lexicon", resource_path(analysis.lexicon_file.as_deref())),
            ]));
            println!();

            println!("{}", section("Logging", vec![
                (
                    "Log File",
                    config
                        .logging
                        .file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "stderr".bright_black().to_string()),
                ),
            ]));
            println!();
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": config_file.display().to_string(),
                "exists": exists,
                "config": config,
            }));
        }
    }

    Ok(())
}

fn init_config(config_file: &Path, force: bool, output: &Output) -> Result<()> {
    if config_file.exists() && !force {
        output.warn(format!(
            "Configuration file already exists at: {} (use --force to overwrite)",
            config_file.display()
        ));
        return Ok(());
    }

    Config::default()
        .save_to_file(config_file)
        .map_err(|e| eyre!("Failed to write config to {}: {}", config_file.display(), e))?;

    tracing::info!(path = %config_file.display(), "Wrote default configuration");
    output.success(format!("Configuration written to {}", config_file.display()));
    Ok(())
}

fn section(title: &str, rows: Vec<(&str, String)>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(format!("{} Configuration", title))
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
    ]);
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    styled(table)
}

fn styled(mut table: Table) -> Table {
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn check_mark(enabled: bool) -> String {
    if enabled {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

fn resource_path(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "bundled".bright_black().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let output = Output::new(OutputFormat::Json, true);

        init_config(&path, false, &output).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[feed]\ntimeout_seconds = 5\n").unwrap();
        let output = Output::new(OutputFormat::Json, true);

        init_config(&path, false, &output).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap().feed.timeout_seconds, 5);

        init_config(&path, true, &output).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap().feed.timeout_seconds, 30);
    }
}
