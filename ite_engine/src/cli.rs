use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

/// Inspector for an ITE data root.
#[derive(Parser, Debug)]
#[command(
    about = "Inspect an ITE data root: savefiles, config, data tables and RSC volumes",
    version
)]
pub struct Args {
    /// Path to the game data root
    #[arg(long, default_value = ".")]
    pub data_root: PathBuf,

    /// JSON settings file backing the config registry
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding savefiles (default: the data root)
    #[arg(long)]
    pub save_dir: Option<PathBuf>,

    /// List savefiles matching a glob pattern (`*`, `?`, `#`)
    #[arg(long, value_name = "PATTERN")]
    pub list_saves: Option<String>,

    /// Print the config registry as JSON
    #[arg(long)]
    pub dump_config: bool,

    /// Print the actor spawn table as JSON
    #[arg(long)]
    pub dump_actors: bool,

    /// Print the object table as JSON
    #[arg(long)]
    pub dump_objects: bool,

    /// Print the sound effect table as JSON
    #[arg(long)]
    pub dump_sfx: bool,

    /// List the resources of an RSC volume
    #[arg(long, value_name = "PATH")]
    pub list_rsc: Option<PathBuf>,

    /// Read config.lua through an embedded Lua VM and write it back
    #[arg(long)]
    pub lua_roundtrip: bool,
}

impl Args {
    /// Whether any inspection flag was given; without one the binary falls
    /// back to summarizing the data root.
    pub fn has_request(&self) -> bool {
        self.list_saves.is_some()
            || self.dump_config
            || self.dump_actors
            || self.dump_objects
            || self.dump_sfx
            || self.list_rsc.is_some()
            || self.lua_roundtrip
    }
}

pub fn parse() -> Result<Args> {
    let args = Args::parse();
    if args.lua_roundtrip && args.config.is_none() {
        bail!("--lua-roundtrip needs --config to have somewhere to store settings");
    }
    Ok(args)
}
