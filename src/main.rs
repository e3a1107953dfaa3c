use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graphite::models::SketchConfig;
use graphite::rendering;

#[derive(Parser)]
#[command(name = "graphite")]
#[command(about = "Graphite - pencil-sketch renderer for color photographs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a photograph to a pencil-sketch image file
    Render {
        /// Input photograph (any format the image crate can decode)
        #[arg(short, long)]
        input: PathBuf,

        /// Output image file path (format inferred from extension)
        #[arg(short, long)]
        output: PathBuf,

        /// Background texture to composite the sketch onto
        #[arg(long)]
        canvas: Option<PathBuf>,

        /// Blur kernel size; larger values soften the pencil strokes
        #[arg(short, long)]
        kernel_size: Option<u32>,

        /// Gaussian spread; 0 derives it from the kernel size
        #[arg(short, long)]
        sigma: Option<f32>,

        /// YAML config file with defaults for the flags above
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            canvas,
            kernel_size,
            sigma,
            config,
        }) => run_render_command(&input, &output, canvas, kernel_size, sigma, config),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Render a photograph to a sketch file.
fn run_render_command(
    input: &PathBuf,
    output: &PathBuf,
    canvas: Option<PathBuf>,
    kernel_size: Option<u32>,
    sigma: Option<f32>,
    config_file: Option<PathBuf>,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graphite=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // Config file first, then flag overrides
    let mut config = match config_file {
        Some(path) => SketchConfig::load(&path)?,
        None => SketchConfig::default(),
    };
    if let Some(k) = kernel_size {
        config.kernel_size = k;
    }
    if let Some(s) = sigma {
        config.sigma = s;
    }
    if canvas.is_some() {
        config.canvas = canvas;
    }

    let report = rendering::render_file(input, output, &config)?;
    println!(
        "Rendered {} ({}x{}, {} bytes)",
        output.display(),
        report.width,
        report.height,
        report.bytes
    );

    Ok(())
}

/// Display version and usage information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Graphite v{VERSION} - pencil-sketch renderer");
    println!("Turns color photographs into pencil-sketch renderings.\n");

    println!("Commands:");
    println!("  graphite render   Render a photograph to a sketch file");
    println!("\nRun 'graphite --help' for more details.");
}
