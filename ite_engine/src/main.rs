use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use mlua::Lua;

use ite_engine::archive::{Archive, DirectoryArchive};
use ite_engine::config::ConfigManager;
use ite_engine::data;
use ite_engine::lua_host::install_config_io;
use ite_engine::save::{DirectorySaveFileManager, SaveFileManager};
use ite_formats::RscArchive;
use ite_vfs::FsNode;

mod cli;

fn main() -> Result<()> {
    env_logger::init();
    let args = cli::parse()?;

    let mut config = ConfigManager::from_json_file(args.config.as_deref())
        .context("loading the config registry")?;

    if !args.has_request() {
        return summarize_data_root(&args.data_root);
    }

    if let Some(pattern) = &args.list_saves {
        let save_dir = args.save_dir.as_deref().unwrap_or(&args.data_root);
        list_saves(save_dir, pattern)?;
    }

    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&config.to_json()?)?);
    }

    if args.dump_actors {
        println!("{}", serde_json::to_string_pretty(&data::ACTOR_TABLE[..])?);
    }

    if args.dump_objects {
        println!("{}", serde_json::to_string_pretty(&data::OBJECT_TABLE[..])?);
    }

    if args.dump_sfx {
        println!("{}", serde_json::to_string_pretty(&data::SFX_TABLE[..])?);
    }

    if let Some(path) = &args.list_rsc {
        list_rsc(path)?;
    }

    if args.lua_roundtrip {
        lua_roundtrip(&mut config)?;
    }

    Ok(())
}

/// Default action: show what the search path would see under the data root.
fn summarize_data_root(data_root: &Path) -> Result<()> {
    let root = node_for(data_root)?;
    let archive = DirectoryArchive::new(&root, 2)
        .with_context(|| format!("indexing data root {}", root.path()))?;

    println!("{}: {} members", root.path(), archive.member_count());
    for volume in archive.list_members("*.rsc") {
        println!("  volume {volume}");
    }
    Ok(())
}

fn list_saves(save_dir: &Path, pattern: &str) -> Result<()> {
    let node = node_for(save_dir)?;
    let mut manager = DirectorySaveFileManager::new(node)
        .with_context(|| format!("opening save directory {}", save_dir.display()))?;

    let names = manager.list_savefiles(pattern);
    if let Some(desc) = manager.pop_error_desc() {
        anyhow::bail!("listing savefiles: {desc}");
    }
    println!("{} savefile(s) match '{pattern}'", names.len());
    for name in names {
        println!("  {name}");
    }
    Ok(())
}

fn list_rsc(path: &Path) -> Result<()> {
    let archive = RscArchive::open(path)?;
    println!(
        "{}: {} resource(s)",
        archive.path().display(),
        archive.resource_count()
    );
    for entry in archive.entries() {
        println!("  {:5}  offset {:8}  size {:8}", entry.id, entry.offset, entry.size);
    }
    Ok(())
}

/// Read config.lua through the proxy the way the game scripts do, then feed
/// the same text back through a write handle. Settings land in the registry
/// and, via the proxy's close, in the backing file.
fn lua_roundtrip(config: &mut ConfigManager) -> Result<()> {
    let shared = Rc::new(RefCell::new(std::mem::take(config)));
    let lua = Lua::new();
    install_config_io(&lua, shared.clone())?;

    let text: String = lua
        .load(
            r#"
            local f = openfile("config.lua", "r")
            local text = f:read()
            closefile(f)

            local w = openfile("config.lua", "w")
            w:write("-- rewritten by the inspector\r\n")
            w:write(text)
            closefile(w)
            return text
            "#,
        )
        .eval()
        .context("running the config.lua roundtrip script")?;

    print!("{text}");
    *config = shared.borrow().clone();
    Ok(())
}

fn node_for(path: &Path) -> Result<FsNode> {
    let text = path
        .to_str()
        .with_context(|| format!("path {} is not valid UTF-8", path.display()))?;
    Ok(FsNode::new(text)?)
}
