use anyhow::Result;
use clap::Parser;
use lexis::{LexisConfig, OutputStyle, run};

#[derive(Parser, Debug)]
#[command(author, version, about = "Self/group reference and keyword sentiment analysis", long_about = None)]
struct Args {
    /// Text to analyze
    text: String,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,

    /// Print the journal insight (themes, sentiment label, feedback) instead
    #[arg(long)]
    insight: bool,

    /// Verbose output (stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load from file or default
    let mut config = LexisConfig::load_from_file()?.unwrap_or_default();

    // 2. Override with CLI args
    if args.pretty {
        config.output_style = OutputStyle::Pretty;
    }
    if args.insight {
        config.insight = true;
    }
    if args.verbose {
        config.verbose = true;
    }

    let output = run(&config, &args.text)?;
    println!("{}", output);

    Ok(())
}
