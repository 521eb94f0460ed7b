#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Esoteric Knowledge Hub - static archive browser
#[derive(Parser, Debug)]
#[command(name = "esoteric-desktop")]
#[command(about = "Esoteric Knowledge Hub - browse laws, entities, rituals and pixel art")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Log filter directive (overrides RUST_LOG), e.g. "esoteric=debug"
    #[arg(short, long)]
    log_filter: Option<String>,
}

impl Args {
    fn env_filter(&self) -> EnvFilter {
        match &self.log_filter {
            Some(directive) => EnvFilter::new(directive),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        }
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.env_filter())
        .init();

    tracing::info!("Starting archive with window {}x{}", args.width, args.height);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(esoteric_core::content::SITE_TITLE)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_size() {
        let args = Args::try_parse_from(["esoteric-desktop"]).unwrap();
        assert_eq!(args.width, 1100.0);
        assert_eq!(args.height, 900.0);
        assert!(args.log_filter.is_none());
    }

    #[test]
    fn custom_flags() {
        let args = Args::try_parse_from([
            "esoteric-desktop",
            "--width",
            "640",
            "--height",
            "480",
            "-l",
            "esoteric=debug",
        ])
        .unwrap();
        assert_eq!(args.width, 640.0);
        assert_eq!(args.height, 480.0);
        assert_eq!(args.log_filter.as_deref(), Some("esoteric=debug"));
    }

    #[test]
    fn rejects_non_numeric_width() {
        assert!(Args::try_parse_from(["esoteric-desktop", "--width", "wide"]).is_err());
    }
}
