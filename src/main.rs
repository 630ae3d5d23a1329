use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Render a structured legal analysis and its plain-language explanation
/// into a paginated PDF report.
#[derive(Parser)]
#[command(name = "lexreport-pdf", version, about)]
struct Args {
    /// Structured analysis JSON file
    analysis: PathBuf,

    /// Plain-language explanation text file (lightweight markup)
    explanation: PathBuf,

    /// Output PDF path
    #[arg(short, long, default_value = "legal-analysis-report.pdf")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let analysis_json = match std::fs::read_to_string(&args.analysis) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}: {e}", args.analysis.display());
            return ExitCode::FAILURE;
        }
    };
    let explanation = match std::fs::read_to_string(&args.explanation) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}: {e}", args.explanation.display());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = lexreport_pdf::write_report(&analysis_json, &explanation, &args.output) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    println!("Wrote {}", args.output.display());
    ExitCode::SUCCESS
}
