//! Scene-object state written through the savefile layer end to end.

use anyhow::{Context, Result};
use tempfile::tempdir;

use ite_engine::objects::{ObjectMessage, SceneObject, SeasonalAdjustment};
use ite_engine::save::{DirectorySaveFileManager, SaveFileManager};
use ite_vfs::FsNode;

fn manager_in(dir: &std::path::Path) -> Result<DirectorySaveFileManager> {
    let node = FsNode::new(dir.to_str().context("save dir path")?)?;
    Ok(DirectorySaveFileManager::new(node)?)
}

#[test]
fn mid_transition_state_survives_a_save() -> Result<()> {
    let dir = tempdir()?;
    let mut manager = manager_in(dir.path())?;

    // Pull the lever and save while the transition movie is still running.
    let mut lever = SeasonalAdjustment::new();
    lever.handle(&ObjectMessage::TurnOn);
    lever.handle(&ObjectMessage::StatusChange { new_status: 1 });
    assert!(lever.is_switching());

    let mut out = manager
        .open_for_saving("season.000", true)
        .context("opening the savefile")?;
    lever.save(&mut out)?;
    out.finalize()?;

    // The blob went through the compressor, not to disk verbatim.
    let raw = std::fs::read(dir.path().join("season.000"))?;
    assert_eq!(&raw[..2], &[0x1f, 0x8b]);

    let mut stream = manager
        .open_for_loading("SEASON.000")
        .context("reopening the savefile")?;
    let mut restored = SeasonalAdjustment::new();
    restored.load(&mut stream)?;

    assert!(restored.is_switching());
    assert!(restored.is_enabled());

    // The restored lever finishes the transition exactly like the live one.
    assert!(restored.handle(&ObjectMessage::MovieEnd));
    assert!(!restored.is_switching());
    Ok(())
}

#[test]
fn scene_saves_show_up_in_the_listing() -> Result<()> {
    let dir = tempdir()?;
    let mut manager = manager_in(dir.path())?;

    for name in ["season.000", "season.001", "other.sav"] {
        let mut out = manager.open_for_saving(name, true).context("opening")?;
        SeasonalAdjustment::new().save(&mut out)?;
        out.finalize()?;
    }

    assert_eq!(
        manager.list_savefiles("season.###"),
        vec!["season.000", "season.001"]
    );
    Ok(())
}
