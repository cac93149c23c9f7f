use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use vidrec::request::{ErrorResponse, RecommendRequest, RecommendResponse};
use vidrec::store::MongoVideoStore;
use vidrec::{rank_videos, Config, VideoStore};

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Recommend videos for a grade and subject", long_about = None)]
struct Cli {
    /// Database holding the video catalog
    #[arg(long)]
    database: Option<String>,

    /// Collection holding video documents
    #[arg(long)]
    collection: Option<String>,

    /// Maximum number of recommendations
    #[arg(long)]
    limit: Option<usize>,
}

fn main() {
    if let Err(err) = run() {
        // Structured failure on stdout, human-readable chain on stderr.
        let payload = ErrorResponse {
            error: format!("{err:#}"),
        };
        if let Ok(json) = serde_json::to_string(&payload) {
            println!("{json}");
        }
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read request from stdin")?;
    let request: RecommendRequest =
        serde_json::from_str(&input).context("Request is not valid JSON")?;

    let config = Config::from_env()?.with_overrides(cli.database, cli.collection, cli.limit);
    let store = MongoVideoStore::connect(&config)?;

    let grade = request.grade.unwrap_or(serde_json::Value::Null);
    let subject = request.subject.as_deref();

    let records = store.find_by_grade_and_subject(&grade, subject)?;
    let recommendations = rank_videos(&records, subject.unwrap_or(""), config.top_k);

    let response = RecommendResponse { recommendations };
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
