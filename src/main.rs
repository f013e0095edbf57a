#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;
use valentine_core::{Capabilities, UnlockOverride, Viewport};

/// Startup options, set once from the command line
static LAUNCH: OnceLock<Launch> = OnceLock::new();

/// Everything the window needs from the command line.
#[derive(Clone, Debug, Default)]
pub struct Launch {
    pub data_dir: PathBuf,
    pub preview: UnlockOverride,
    pub prefers_dark: bool,
    pub capabilities: Capabilities,
}

/// Get the startup options (defaults if the window was launched without them)
pub fn launch_options() -> Launch {
    LAUNCH.get().cloned().unwrap_or_else(|| Launch {
        data_dir: default_data_dir(),
        ..Launch::default()
    })
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("valentine")
}

/// Valentine - an interactive greeting card
#[derive(Parser, Debug)]
#[command(name = "valentine-desktop")]
#[command(about = "Will you be my Valentine? A countdown card for your desktop")]
struct Args {
    /// Data directory for the theme preference and card.json
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Page query string, e.g. "?unlock=1" to preview the unlocked location
    #[arg(short, long)]
    query: Option<String>,

    /// Shorthand for --query "?unlock=1"
    #[arg(long)]
    unlock: bool,

    /// System color-scheme hint used when no theme is stored
    #[arg(long)]
    prefers_dark: bool,

    /// Skip confetti and hearts
    #[arg(long)]
    reduced_motion: bool,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;

    let from_query = args
        .query
        .as_deref()
        .map(UnlockOverride::from_query)
        .unwrap_or_default();
    let preview = UnlockOverride::from(args.unlock || from_query.is_active());

    let launch = Launch {
        data_dir: data_dir.clone(),
        preview,
        prefers_dark: args.prefers_dark,
        capabilities: Capabilities {
            haptics: false,
            reduced_motion: args.reduced_motion,
        },
    };
    let _ = LAUNCH.set(launch);

    tracing::info!(?data_dir, preview = preview.is_active(), "starting valentine card");

    // Portrait window sized like a phone held upright
    let viewport = Viewport::default();
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Will you be my Valentine?")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                f64::from(viewport.width),
                f64::from(viewport.height),
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);
    Ok(())
}
