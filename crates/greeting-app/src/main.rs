//! Entry point for the birthday greeting app.
//!
//! This Dioxus desktop application plays a timed greeting sequence and
//! ends on a surprise message card.

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use greeting_app::components::{App, AppConfig};
use greeting_core::Timings;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Global storage for the parsed launch configuration.
static LAUNCH_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "birthday-greeting")]
#[command(about = "Animated birthday greeting")]
struct Args {
    /// Recipient name shown in the greeting
    #[arg(short, long, default_value = "Khadijah")]
    name: String,

    /// Skip the celebration chime
    #[arg(long)]
    muted: bool,

    /// Run the whole flow at 10x speed
    #[arg(long)]
    quick: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Starting birthday greeting");

    let args = Args::parse();
    let timings = if args.quick {
        Timings::quick()
    } else {
        Timings::default()
    };

    LAUNCH_CONFIG
        .set(AppConfig {
            recipient: args.name,
            muted: args.muted,
            timings,
        })
        .ok();

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Happy Birthday")
                        .with_inner_size(LogicalSize::new(960, 720))
                        .with_resizable(true),
                )
                .with_custom_head(format!(r#"<style>{}</style>"#, STYLES_CSS)),
        )
        .launch(Root);
}

/// Root component bridging the launch configuration into the app.
#[component]
fn Root() -> Element {
    let config = LAUNCH_CONFIG.get().cloned().unwrap_or_default();

    rsx! {
        App { config }
    }
}
