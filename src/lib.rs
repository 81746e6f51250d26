//! # vision-inventory
//!
//! JPEG upload server that inventories visible objects with a vision LLM.
//!
//! ## Features
//!
//! - **Multipart upload endpoint** (`POST /upload`) that accepts one JPEG,
//!   validates the declared content type, and returns a plain-text report
//! - **One provider call per upload** — the image travels as a base64 data
//!   URL alongside a fixed JSON-schema instruction; no retries, no caching
//! - **Defensive response validation** that defaults absent or mistyped
//!   object fields instead of rejecting the whole response
//! - **Confidence-sorted report** with normalized bounding boxes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vision_inventory::{AppState, VisionConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = VisionConfig::new(std::env::var("OPENAI_API_KEY")?);
//!     let app = vision_inventory::router(AppState::new(config));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8487").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Validation Leniency
//!
//! The provider's schema is enforced only by prompt, so the parser treats
//! the payload as untrusted:
//!
//! ```rust
//! use vision_inventory::parse_analysis;
//!
//! // Missing fields default instead of failing
//! let result = parse_analysis(r#"{"objects": [{"label": "cup"}]}"#).unwrap();
//! assert_eq!(result.objects[0].confidence, 0.0);
//!
//! // Malformed JSON is the one hard failure
//! assert!(parse_analysis("I see a cup.").is_err());
//! ```

pub mod analyze;
pub mod client;
pub mod encode;
pub mod parser;
pub mod prompt;
pub mod report;
pub mod server;
pub mod types;

// Re-export main types at crate root
pub use analyze::{analyze_jpeg, AnalyzeError};
pub use client::{analyze_image, VisionError};
pub use encode::jpeg_data_url;
pub use parser::{parse_analysis, ParseError};
pub use prompt::build_instruction;
pub use report::format_report;
pub use server::{router, AppState};
pub use types::{AnalysisResult, DetectedObject, VisionConfig};
