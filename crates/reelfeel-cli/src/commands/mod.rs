pub mod analyze;
pub mod config;
pub mod export;
pub mod interactive;
pub mod progress;
pub mod render;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use diary_sentiment_config::Config;
use diary_sentiment_core::{AnalysisResources, PipelineOptions, ReviewPipeline};

/// Validate the configuration and load the pipeline it describes
pub(crate) fn build_pipeline(config: &Config) -> Result<ReviewPipeline> {
    config
        .validate()
        .map_err(|e| eyre!("Invalid configuration: {}", e))?;

    let resources = AnalysisResources::from_config(&config.analysis)?;
    Ok(ReviewPipeline::new(resources, PipelineOptions::from(&config.analysis)))
}
