//! src/main.rs
use clap::Parser;
use search_keyword_performance::configuration::get_configuration;
use search_keyword_performance::error::PipelineError;
use search_keyword_performance::startup::run_report;
use search_keyword_performance::telemetry::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;

/// Revenue per search engine domain and keyword from hit-level data.
#[derive(Parser, Debug)]
#[command(name = "search-keyword-performance", version, about)]
struct Cli {
    /// Tab-separated hit-level data file with `product_list` and `referrer` columns
    input: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match get_configuration() {
        Ok(settings) => settings,
        Err(e) => return fail(PipelineError::from(e)),
    };
    let tracer_provider =
        match init_tracing("search-keyword-performance", &settings.telemetry) {
            Ok(provider) => provider,
            Err(e) => {
                eprintln!("Failed to initialise tracing: {e:?}");
                return ExitCode::FAILURE;
            }
        };

    let code = match run_report(&cli.input, &settings).await {
        Ok(path) => {
            tracing::info!(output = %path.display(), "search keyword performance report complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(stage = e.stage(), error = %e, "search keyword performance run failed");
            fail(e)
        }
    };

    if let Some(provider) = tracer_provider {
        if let Err(e) = provider.shutdown() {
            eprintln!("Failed to flush spans: {e}");
        }
    }
    code
}

fn fail(e: PipelineError) -> ExitCode {
    eprintln!("{} stage failed: {e:?}", e.stage());
    ExitCode::from(e.exit_code())
}
