use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scrollwork::{Progress, Route, SceneKind, SiteConfig};

#[derive(Parser, Debug)]
#[command(name = "scrollwork", version)]
struct Cli {
    /// Scene tuning JSON. Omitted fields keep their defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log engine decisions to stderr at debug level, overriding RUST_LOG.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a site path and print its view model as JSON.
    Route {
        /// Absolute path, e.g. `/works/void`.
        path: String,
    },
    /// Sample one scene at a scroll progress and print the frame as JSON.
    Sample {
        /// hero, profile, service, expression or footer.
        scene: String,

        /// Scroll progress in `[0, 1]`; values outside are clamped.
        #[arg(long, default_value_t = 0.0)]
        progress: f64,
    },
    /// Print the expression window allocation as JSON.
    Timeline,
    /// Print the footer block, with the contact-location clock, as JSON.
    Footer {
        /// Unix timestamp in seconds; defaults to now.
        #[arg(long)]
        at: Option<i64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `--verbose` wins over RUST_LOG.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cfg = match &cli.config {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => SiteConfig::default(),
    };

    let out = match cli.cmd {
        Command::Route { path } => {
            let route = Route::parse(&path).with_context(|| format!("parse route '{path}'"))?;
            serde_json::to_string_pretty(&scrollwork::render(&route))?
        }
        Command::Sample { scene, progress } => {
            let kind: SceneKind = scene
                .parse()
                .with_context(|| format!("unknown scene '{scene}'"))?;
            let scene = kind
                .build(&cfg)
                .with_context(|| format!("build scene '{kind}'"))?;
            serde_json::to_string_pretty(&scene.sample(Progress::new(progress)))?
        }
        Command::Timeline => {
            let alloc = cfg
                .expression
                .windows
                .allocate()
                .context("allocate expression windows")?;
            if alloc.overruns() {
                eprintln!("warning: expression windows run past the end of the scroll range");
            }
            serde_json::to_string_pretty(&alloc)?
        }
        Command::Footer { at } => {
            let unix_secs = match at {
                Some(t) => t,
                None => std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .context("system clock before 1970")?
                    .as_secs() as i64,
            };
            serde_json::to_string_pretty(&scrollwork::site::view::footer(unix_secs))?
        }
    };
    println!("{out}");
    Ok(())
}
