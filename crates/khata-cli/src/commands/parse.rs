//! Parse command - extract records from a single document.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use khata_core::{classify, parse_receipt, parse_statement, DocumentKind};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extraction profile
    #[arg(short, long, value_enum, default_value = "auto")]
    profile: Profile,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Profile {
    /// Pick a profile from the document classifier
    Auto,
    /// Bank-statement ledger
    Ledger,
    /// Mobile-payment receipt
    Receipt,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let text = if args.input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !args.input.exists() {
            anyhow::bail!("Input file not found: {}", args.input.display());
        }
        fs::read_to_string(&args.input)?
    };

    let profile = match args.profile {
        Profile::Auto => match classify(&text) {
            DocumentKind::MobilePayment => Profile::Receipt,
            _ => Profile::Ledger,
        },
        explicit => explicit,
    };

    info!("parsing {} with {:?} profile", args.input.display(), profile);

    let json = match profile {
        Profile::Receipt => to_json(&parse_receipt(&text, &config), args.pretty)?,
        _ => to_json(&parse_statement(&text, &config), args.pretty)?,
    };

    match args.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}
