//! Terminal card grid demo.
//!
//! Paints the deck as a 4 x 13 grid and reshuffles it on request.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use cardgrid::{
    AssetResolver, DisplayController, DisplayOptions, MissingAssetPolicy, ShuffleButton,
    TextRenderer,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Display a 52-card deck as a grid and shuffle it")]
struct Args {
    /// Shuffle seed; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Directory holding `{rank}_of_{suit}` card images.
    #[arg(long, default_value = "cards")]
    assets: String,
    /// Card image file extension.
    #[arg(long, default_value = "png")]
    extension: String,
    /// Fail instead of drawing placeholders for missing images.
    #[arg(long)]
    strict_assets: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let policy = if args.strict_assets {
        MissingAssetPolicy::Fail
    } else {
        MissingAssetPolicy::Placeholder
    };
    let options = DisplayOptions::default()
        .with_asset_dir(args.assets)
        .with_asset_extension(&args.extension)
        .with_missing_assets(policy);

    let resolver = AssetResolver::from_options(&options);
    let mut button = ShuffleButton::new(options.shuffle_label.clone());
    let renderer = TextRenderer::new(io::stdout(), options).with_assets(resolver);
    let controller = Arc::new(DisplayController::new(renderer, seed));

    if let Err(err) = controller.initialize(&mut button) {
        eprintln!("Failed to display deck: {err}");
        return ExitCode::FAILURE;
    }

    loop {
        let Some(input) = prompt_line(&format!(
            "Enter/s to {}, q to quit: ",
            button.label().to_lowercase()
        )) else {
            break;
        };

        match input.as_str() {
            "" | "s" | "shuffle" => {
                if let Err(err) = button.press() {
                    eprintln!("Render error: {err}");
                    return ExitCode::FAILURE;
                }
            }
            "q" | "quit" => break,
            _ => println!("Unknown command."),
        }
    }

    println!("Shuffled {} time(s). Goodbye.", controller.shuffle_count());
    ExitCode::SUCCESS
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}
