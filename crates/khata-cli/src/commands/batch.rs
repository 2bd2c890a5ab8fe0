//! Batch command - parse multiple documents, one JSON object per line.

use std::fs;

use clap::Args;
use glob::glob;
use serde_json::json;
use tracing::{error, info};

use khata_core::{classify, parse_receipt, parse_statement, DocumentKind};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "scans/*.txt")
    #[arg(required = true)]
    input: String,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let mut processed = 0usize;
    let mut failed = 0usize;

    for entry in glob(&args.input)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                error!("unreadable glob entry: {e}");
                failed += 1;
                if args.continue_on_error {
                    continue;
                }
                return Err(e.into());
            }
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                error!("failed to read {}: {e}", path.display());
                failed += 1;
                if args.continue_on_error {
                    continue;
                }
                return Err(e.into());
            }
        };

        let kind = classify(&text);
        let record = match kind {
            DocumentKind::MobilePayment => {
                json!(parse_receipt(&text, &config))
            }
            _ => json!(parse_statement(&text, &config)),
        };

        let line = json!({
            "file": path.display().to_string(),
            "kind": kind,
            "result": record,
        });
        println!("{line}");
        processed += 1;
    }

    info!("batch finished: {processed} parsed, {failed} failed");
    if processed == 0 && failed == 0 {
        anyhow::bail!("no files matched pattern: {}", args.input);
    }
    Ok(())
}
