use anyhow::{Context, Result};
use clap::Parser;
use gemini_ocr::app::App;
use gemini_ocr::config::{self, Config};
use gemini_ocr::{sample, Error};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "gemini-ocr")]
#[command(about = "Extract text from an image or PDF using Google Gemini")]
struct CliArgs {
    /// Image (jpg, png, gif, bmp, webp, tiff) or PDF file to read.
    #[arg(value_name = "FILE", required_unless_present = "create_test_image")]
    file: Option<PathBuf>,

    /// Also save the extracted text to this file.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Write a PNG containing known text for testing, then exit.
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = sample::DEFAULT_PATH,
        conflicts_with_all = ["file", "output"]
    )]
    create_test_image: Option<PathBuf>,
}

async fn run(args: CliArgs) -> Result<()> {
    if let Some(path) = args.create_test_image {
        sample::write_png(&path).await?;
        println!("Test image created: {}", path.display());
        return Ok(());
    }

    let Some(file) = args.file else {
        anyhow::bail!("Please provide the path to an image or PDF file.");
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(Error::MissingApiKey(key_file)) => {
            if let Err(e) = config::write_key_template(&key_file) {
                warn!("Could not create API key template file: {}", e);
            }
            return Err(Error::MissingApiKey(key_file).into());
        }
        Err(e) => return Err(e.into()),
    };
    info!("Loaded configuration: {:?}", config);

    let app = App::new(&config);
    let text = app.process_file(&file).await?;

    println!("Extracted Text:");
    println!("{}", text);

    if let Some(output) = args.output {
        let written = app
            .save_text(&output, &text)
            .await
            .context("Failed to save extracted text")?;
        println!("Text saved to {}", written.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_ocr=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    // Failures are reported on stdout; the exit status stays zero.
    if let Err(e) = run(args).await {
        error!("OCR run failed: {:#}", e);
        println!("Error: {:#}", e);
    }

    Ok(())
}
