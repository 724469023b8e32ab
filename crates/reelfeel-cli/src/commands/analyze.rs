use super::build_pipeline;
use super::export::write_word_cloud_csv;
use super::progress::FetchSpinner;
use super::render::print_report;
use crate::output::{Output, OutputFormat};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use diary_sentiment_config::Config;
use diary_sentiment_sources::{create_source, SourceSelection};
use serde_json::json;
use std::path::PathBuf;

pub async fn run_analyze(
    mut config: Config,
    username: Option<String>,
    file: Option<PathBuf>,
    word_cloud_csv: Option<PathBuf>,
    limit: Option<usize>,
    output: &Output,
) -> Result<()> {
    tracing::debug!("Analyze command started");

    if limit.is_some() {
        config.analysis.word_cloud_limit = limit;
    }
    let pipeline = build_pipeline(&config)?;

    let (selection, label) = match file {
        Some(path) => {
            let label = path.display().to_string();
            (SourceSelection::File(path), label)
        }
        None => {
            let username = username.clone().unwrap_or_default();
            (SourceSelection::Feed, username)
        }
    };
    let source = create_source(&selection, &config);

    let spinner = FetchSpinner::start(output.is_human(), format!("Fetching diary for {}...", label));
    let entries = source
        .fetch_diary(username.as_deref().unwrap_or_default())
        .await
        .map_err(|e| eyre!("{}", e))?;

    spinner.set_message(format!("Analyzing {} diary entries...", entries.len()));
    let report = pipeline.run(&entries)?;
    spinner.finish();

    if let Some(ref path) = word_cloud_csv {
        write_word_cloud_csv(path, &report.word_cloud)?;
    }

    match output.report_format() {
        Some(OutputFormat::Human) => {
            if report.reviews.is_empty() {
                output.warn(format!("No reviewed diary entries found for {}", label));
            }
            print_report(&label, &report, pipeline.resources().scorer.as_ref());
        }
        Some(OutputFormat::Json | OutputFormat::JsonPretty) => {
            output.json(&json!({
                "source": source.source_name(),
                "subject": label,
                "report": report,
            }));
        }
        None => {}
    }

    let duplicates = report.duplicate_keys();
    if !duplicates.is_empty() {
        output.warn(format!(
            "{} reviews share a title and publish time with another review",
            duplicates.len()
        ));
    }

    if let Some(path) = word_cloud_csv {
        output.success(format!("Word cloud written to {}", path.display()));
    }

    Ok(())
}
