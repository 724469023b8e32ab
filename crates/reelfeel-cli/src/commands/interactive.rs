use super::build_pipeline;
use super::render::print_report;
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use diary_sentiment_config::Config;
use diary_sentiment_core::{AnalysisSession, RequestToken, ReviewPipeline};
use diary_sentiment_models::AnalysisReport;
use diary_sentiment_sources::{create_source, DiarySource, SourceSelection};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

type Completion = (RequestToken, Result<AnalysisReport, String>);

/// Fetch and analyze one user's diary, flattening every failure to the
/// message shown to the user
async fn analyze_user(source: &dyn DiarySource, pipeline: &ReviewPipeline, username: &str) -> Result<AnalysisReport, String> {
    let entries = source.fetch_diary(username).await.map_err(|e| e.to_string())?;
    pipeline.run(&entries).map_err(|e| e.to_string())
}

pub async fn run_interactive(config: Config, file: Option<PathBuf>, output: &Output) -> Result<()> {
    let pipeline = Arc::new(build_pipeline(&config)?);
    let selection = match file {
        Some(path) => SourceSelection::File(path),
        None => SourceSelection::Feed,
    };
    let source = create_source(&selection, &config);

    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
    let mut session = AnalysisSession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    output.info("Enter a username per line, Ctrl-D to quit.");

    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    stdin_open = false;
                    if !session.is_loading() {
                        break;
                    }
                    continue;
                };

                let username = line.trim().to_string();
                if username.is_empty() {
                    continue;
                }

                // Supersedes whatever is still in flight; its result will be discarded
                let token = session.begin(username.clone());
                tracing::info!(token = %token, username = %username, "Starting analysis");

                let source = Arc::clone(&source);
                let pipeline = Arc::clone(&pipeline);
                let tx = tx.clone();
                tokio::spawn(async move {
                    let outcome = analyze_user(source.as_ref(), &pipeline, &username).await;
                    let _ = tx.send((token, outcome));
                });
            }
            Some((token, outcome)) = rx.recv() => {
                if session.complete(token, outcome) {
                    show_outcome(&session, &pipeline, output);
                }
                if !stdin_open && !session.is_loading() {
                    break;
                }
            }
            else => break,
        }
    }

    Ok(())
}

fn show_outcome(session: &AnalysisSession, pipeline: &ReviewPipeline, output: &Output) {
    let query = session.query().unwrap_or_default();

    if let Some(message) = session.error() {
        output.error(format!("{}: {}", query, message));
        return;
    }

    let Some(report) = session.report() else {
        return;
    };

    match output.report_format() {
        Some(OutputFormat::Human) => print_report(query, report, pipeline.resources().scorer.as_ref()),
        Some(OutputFormat::Json | OutputFormat::JsonPretty) => {
            output.json(&json!({
                "subject": query,
                "report": report,
            }));
        }
        None => {}
    }
}
