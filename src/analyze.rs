//! Per-request analysis pipeline.

use crate::client::{self, VisionError};
use crate::encode::jpeg_data_url;
use crate::parser::{self, ParseError};
use crate::prompt::build_instruction;
use crate::types::{AnalysisResult, VisionConfig};
use reqwest::Client;

/// Failures from the analysis pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("{0}")]
    Vision(#[from] VisionError),

    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Run the full pipeline on one uploaded JPEG: encode it as a data URL,
/// call the provider once with the detection instruction, and validate
/// the response.
///
/// # Errors
///
/// Returns an error if the provider call fails or the response text is
/// not valid JSON.
pub async fn analyze_jpeg(
    client: &Client,
    config: &VisionConfig,
    jpeg: &[u8],
) -> Result<AnalysisResult, AnalyzeError> {
    let data_url = jpeg_data_url(jpeg);
    let raw = client::analyze_image(client, config, build_instruction(), &data_url).await?;
    Ok(parser::parse_analysis(&raw)?)
}
