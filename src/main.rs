use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use storefront_nav::core::config::{load_config, resolve};
use storefront_nav::core::content::{DEMO_CONTENT, load_content, parse_content};
use storefront_nav::{logging, tui};

#[derive(Parser)]
#[command(name = "storefront-nav", about = "Storefront navigation header in the terminal")]
struct Args {
    /// Navigation content document (JSON). Defaults to the bundled demo.
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Pin the viewport width in pixels instead of following the terminal
    #[arg(short, long)]
    width: Option<u32>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to storefront-nav.log in current directory
    if let Ok(log_file) = File::create(logging::LOG_FILE) {
        let _ = logging::init(log_file);
    }

    let file_config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            eprintln!("storefront-nav: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config = resolve(&file_config, args.content.as_deref(), args.width);

    log::set_max_level(config.log_level);

    log::info!("storefront-nav starting up: {:?}", config);

    let presence = match &config.content_path {
        Some(path) => load_content(path),
        None => parse_content(DEMO_CONTENT),
    };
    let presence = match presence {
        Ok(presence) => presence,
        Err(e) => {
            log::error!("Failed to load content: {}", e);
            eprintln!("storefront-nav: {e}");
            return ExitCode::FAILURE;
        }
    };

    match tui::run(config, presence) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("storefront-nav: {e}");
            ExitCode::FAILURE
        }
    }
}
