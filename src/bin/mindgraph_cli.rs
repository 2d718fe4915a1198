//! Mind-map generation CLI
//!
//! Generates a mind map for a prompt and prints the resulting document as
//! JSON. Requires `DEEPSEEK_API_KEY` (a `.env` file is honored).
//!
//! ```text
//! cargo run --features cli --bin mindgraph_cli -- "history of the telescope" --cross-references
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mindgraph::{InMemoryStore, MindMapService};
use mindgraph_types::{DetailLevel, PromptStyle, SettingsOverrides, TopicDepth};

#[derive(Parser, Debug)]
#[command(name = "mindgraph_cli", about = "Generate a mind map from a prompt")]
struct Args {
    /// The topic or question to map
    prompt: String,

    /// Detail level: normal, detailed, extreme
    #[arg(long, value_enum)]
    detail: Option<DetailLevelArg>,

    /// Tree shape: balanced, deep, broad
    #[arg(long, value_enum)]
    depth: Option<TopicDepthArg>,

    /// Writing style: academic, professional, creative
    #[arg(long, value_enum)]
    style: Option<StyleArg>,

    /// Maximum main topics (clamped to 1-100)
    #[arg(long)]
    max_topics: Option<u32>,

    /// Sampling temperature (clamped to 0-1)
    #[arg(long)]
    temperature: Option<f32>,

    /// Ask for cross-topic relationship edges
    #[arg(long)]
    cross_references: bool,

    /// Ask for concrete examples and case studies
    #[arg(long)]
    examples: bool,

    /// Output language (e.g. "German")
    #[arg(long)]
    language: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum DetailLevelArg {
    Normal,
    Detailed,
    Extreme,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum TopicDepthArg {
    Balanced,
    Deep,
    Broad,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum StyleArg {
    Academic,
    Professional,
    Creative,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let overrides = SettingsOverrides {
        detail_level: args.detail.map(|d| match d {
            DetailLevelArg::Normal => DetailLevel::Normal,
            DetailLevelArg::Detailed => DetailLevel::Detailed,
            DetailLevelArg::Extreme => DetailLevel::Extreme,
        }),
        topic_depth: args.depth.map(|d| match d {
            TopicDepthArg::Balanced => TopicDepth::Balanced,
            TopicDepthArg::Deep => TopicDepth::Deep,
            TopicDepthArg::Broad => TopicDepth::Broad,
        }),
        style: args.style.map(|s| match s {
            StyleArg::Academic => PromptStyle::Academic,
            StyleArg::Professional => PromptStyle::Professional,
            StyleArg::Creative => PromptStyle::Creative,
        }),
        max_topics: args.max_topics,
        temperature: args.temperature,
        cross_topic_relations: args.cross_references.then_some(true),
        include_examples: args.examples.then_some(true),
        language: args.language,
        ..Default::default()
    };

    let store = Arc::new(InMemoryStore::new());
    let service =
        MindMapService::from_env(store, "cli").context("failed to configure Deepseek client")?;

    let document = service
        .generate(&args.prompt, None, Some(overrides))
        .await
        .context("generation failed")?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    println!("{json}");
    Ok(())
}
