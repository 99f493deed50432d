mod commands;
mod model;
mod util;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use model::{ManifestConfig, DEFAULT_MODPACK_NAME};

/// Generate a manifest.json file for a BG3 modpack
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing mod files
    #[arg(long, default_value = "./mods")]
    mods_dir: PathBuf,

    /// Base URL where mods will be hosted (e.g. https://username.github.io/bg3-modpack/mods/)
    #[arg(long)]
    base_url: String,

    /// Output file path
    #[arg(long, default_value = "./manifest.json")]
    output: PathBuf,

    /// Name of the modpack
    #[arg(long, default_value = DEFAULT_MODPACK_NAME)]
    name: String,

    /// Order mods by file name instead of directory order
    #[arg(long)]
    sort: bool,
}

impl From<Args> for ManifestConfig {
    fn from(args: Args) -> Self {
        ManifestConfig {
            mods_dir: args.mods_dir,
            base_url: args.base_url,
            output: args.output,
            name: args.name,
            sort: args.sort,
        }
    }
}

fn main() -> Result<()> {
    util::init_logging();
    info!(
        "Starting modpack-manifest version {}",
        env!("CARGO_PKG_VERSION")
    );
    let config: ManifestConfig = Args::parse().into();
    if !commands::generate(&config, &util::SystemClock)? {
        std::process::exit(1);
    }
    Ok(())
}
