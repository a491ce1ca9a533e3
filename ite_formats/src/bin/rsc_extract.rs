use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use ite_formats::RscArchive;
use serde::Serialize;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(about = "Extract resources from ITE RSC volumes", version)]
struct Args {
    /// RSC volume to extract (may be passed multiple times)
    #[arg(long = "rsc", value_name = "PATH", conflicts_with = "root")]
    volumes: Vec<PathBuf>,

    /// Directory containing RSC volumes (recursively scanned when --rsc is not used)
    #[arg(long = "root", value_name = "DIR", conflicts_with = "volumes")]
    root: Option<PathBuf>,

    /// Destination directory to materialise resources
    #[arg(long, value_name = "DIR", default_value = "extracted")]
    dest: PathBuf,

    /// Path to write a JSON manifest of the extracted resources
    #[arg(long, value_name = "FILE")]
    manifest_json: Option<PathBuf>,

    /// Overwrite existing files instead of skipping them
    #[arg(long)]
    overwrite: bool,
}

#[derive(Debug, Serialize)]
struct ManifestEntry {
    volume: String,
    resource: u32,
    offset: u64,
    size: u32,
    path: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let volumes = resolve_volume_paths(&args)?;
    if volumes.is_empty() {
        bail!("no RSC volumes to extract");
    }

    fs::create_dir_all(&args.dest)
        .with_context(|| format!("creating destination {}", args.dest.display()))?;

    let mut manifest = Vec::new();
    for path in &volumes {
        let archive = RscArchive::open(path)?;
        extract_volume(&archive, &args, &mut manifest)?;
    }

    if let Some(manifest_path) = &args.manifest_json {
        let serialized = serde_json::to_string_pretty(&manifest)
            .context("serializing extraction manifest")?;
        fs::write(manifest_path, serialized)
            .with_context(|| format!("writing manifest {}", manifest_path.display()))?;
    }

    println!(
        "extracted {} resources from {} volume(s) into {}",
        manifest.len(),
        volumes.len(),
        args.dest.display()
    );
    Ok(())
}

fn resolve_volume_paths(args: &Args) -> Result<Vec<PathBuf>> {
    if !args.volumes.is_empty() {
        return Ok(args.volumes.clone());
    }

    let Some(root) = &args.root else {
        bail!("pass either --rsc or --root");
    };

    let mut found = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("scanning {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_rsc = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("rsc"))
            .unwrap_or(false);
        if is_rsc {
            found.push(entry.into_path());
        }
    }
    found.sort();
    Ok(found)
}

fn extract_volume(
    archive: &RscArchive,
    args: &Args,
    manifest: &mut Vec<ManifestEntry>,
) -> Result<()> {
    let volume_stem = archive
        .path()
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("volume")
        .to_ascii_lowercase();

    let volume_dir = args.dest.join(&volume_stem);
    fs::create_dir_all(&volume_dir)
        .with_context(|| format!("creating {}", volume_dir.display()))?;

    for entry in archive.entries() {
        let file_name = format!("{:05}.bin", entry.id);
        let dest = volume_dir.join(&file_name);
        if dest.exists() && !args.overwrite {
            continue;
        }
        archive.extract_entry(entry, &dest)?;
        manifest.push(ManifestEntry {
            volume: display_path(archive.path()),
            resource: entry.id,
            offset: entry.offset,
            size: entry.size,
            path: display_path(&dest),
        });
    }

    Ok(())
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}
