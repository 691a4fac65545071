use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use taxform::{
    DEFAULT_SUMMARY_LIMIT, ExecutorImpl, PipelineError, RendererBuilder, generate_to_file,
};

/// Fill a tax form: bind an annotation to tax data and write the PDF overlay.
#[derive(Parser, Debug)]
#[command(name = "taxform", version)]
struct Cli {
    /// Path to the form annotation JSON.
    annotation: PathBuf,
    /// Path to the tax data JSON.
    data: PathBuf,
    /// Where to write the generated PDF.
    output: PathBuf,
    /// Stroke every field box in light gray.
    #[arg(long)]
    debug_boxes: bool,
    /// Evaluate fields on the calling thread only.
    #[arg(long)]
    sequential: bool,
    /// How many errors and warnings to list in the summary.
    #[arg(long, default_value_t = DEFAULT_SUMMARY_LIMIT)]
    summary_limit: usize,
}

fn run(cli: Cli) -> Result<bool, PipelineError> {
    log::info!("Loading annotation from {}", cli.annotation.display());
    log::info!("Loading data from {}", cli.data.display());

    let mut builder = RendererBuilder::new()
        .with_annotation_file(&cli.annotation)?
        .with_data_file(&cli.data)?
        .with_debug_boxes(cli.debug_boxes)
        .with_summary_limit(cli.summary_limit);
    if cli.sequential {
        builder = builder.with_executor(ExecutorImpl::sequential());
    }
    let renderer = builder.build()?;

    let report = generate_to_file(&renderer, &cli.output)?;
    println!("PDF generated: {}", cli.output.display());
    print!("{}", report.summary(renderer.config().summary_limit));
    Ok(report.errors.is_empty())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
