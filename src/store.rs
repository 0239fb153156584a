// src/store.rs
//
// Local snapshot of the scraped reference.
//
// <project dir>/rawData.json   JSON array of services (format fixed externally)
// <project dir>/version.txt    tag of the build that wrote the snapshot
//
// A snapshot is stale when either file is missing or the tag differs from
// ours; the caller then re-crawls and overwrites both.

use std::fs;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::config::consts::{RAW_DATA_FILE, VERSION_FILE, VERSION_TAG};
use crate::error::Result;

pub fn snapshot_path(dir: &Path) -> PathBuf { dir.join(RAW_DATA_FILE) }
pub fn version_path(dir: &Path) -> PathBuf { dir.join(VERSION_FILE) }

fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub fn save_snapshot(path: &Path, catalog: &Catalog) -> Result<()> {
    ensure_parent(path)?;
    let mut w = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer(&mut w, catalog)?;
    w.flush()?;
    tracing::info!(path = %path.display(), services = catalog.len(), "snapshot saved");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<Catalog> {
    let r = BufReader::new(fs::File::open(path)?);
    let catalog: Catalog = serde_json::from_reader(r)?;
    tracing::info!(path = %path.display(), services = catalog.len(), "snapshot loaded");
    Ok(catalog)
}

pub fn save_version(dir: &Path, tag: &str) -> Result<()> {
    let path = version_path(dir);
    ensure_parent(&path)?;
    fs::write(path, tag)?;
    Ok(())
}

/// Tag stored next to the snapshot, if any.
pub fn stored_version(dir: &Path) -> Result<Option<String>> {
    match fs::read_to_string(version_path(dir)) {
        Ok(text) => Ok(Some(text.trim_matches(|c| c == ' ' || c == '\n').to_string())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Whether the snapshot in `dir` has to be (re)built.
pub fn needs_refresh(dir: &Path) -> Result<bool> {
    if !snapshot_path(dir).is_file() {
        tracing::debug!(dir = %dir.display(), "no snapshot");
        return Ok(true);
    }
    let stale = stored_version(dir)?.as_deref() != Some(VERSION_TAG);
    if stale {
        tracing::debug!(dir = %dir.display(), "snapshot version mismatch");
    }
    Ok(stale)
}

/// Write snapshot and version tag together.
pub fn save(dir: &Path, catalog: &Catalog) -> Result<()> {
    save_snapshot(&snapshot_path(dir), catalog)?;
    save_version(dir, VERSION_TAG)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("iam_store_{}", name));
        let _ = fs::remove_dir_all(&p);
        p
    }

    #[test]
    fn missing_files_need_refresh() {
        let dir = tmp_dir("missing");
        assert!(needs_refresh(&dir).unwrap());
        assert_eq!(stored_version(&dir).unwrap(), None);
    }

    #[test]
    fn version_tag_is_trimmed_and_compared() {
        let dir = tmp_dir("version");
        save(&dir, &Catalog::default()).unwrap();
        assert!(!needs_refresh(&dir).unwrap());

        fs::write(version_path(&dir), format!("{VERSION_TAG}\n")).unwrap();
        assert!(!needs_refresh(&dir).unwrap());

        save_version(&dir, "v0.0.9").unwrap();
        assert!(needs_refresh(&dir).unwrap());
    }
}
