//! LLM-powered outline generation for mindgraph
//!
//! This crate owns the outbound side of the pipeline. It has no rendering
//! or persistence dependencies - graph building and storage stay upstream.
//!
//! ## Architecture
//!
//! ```text
//! GenerationSettings → Prompt Synthesizer → ChatCompletionClient
//!                                                  │
//!                    MindMapOutline ← Validator ← reply (fence-stripped JSON)
//! ```
//!
//! ## Backend
//!
//! The `ChatCompletionClient` trait is the seam; `DeepseekClient` is the
//! production implementation (`DEEPSEEK_API_KEY` / `DEEPSEEK_MODEL`).

pub mod client;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod validator;

// Re-exports for convenience
pub use client::{ChatCompletionClient, ChatParams, DeepseekClient};
pub use error::GenerationError;
pub use generator::{strip_code_fences, OutlineGenerator};
pub use prompt::build_system_prompt;
pub use validator::validate_outline;
