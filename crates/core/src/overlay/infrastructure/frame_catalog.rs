use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::{FRAME_EXTENSIONS, FRAME_URL_PREFIX};

#[derive(Error, Debug)]
pub enum FrameCatalogError {
    #[error("failed to list frames in {path}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Lists the eyewear overlay assets available in `dir`.
///
/// Entries are returned as `frames/<file name>`, sorted by name. A missing
/// directory means no frames are installed and yields an empty list.
pub fn list_frames(dir: &Path) -> Result<Vec<String>, FrameCatalogError> {
    if !dir.exists() {
        log::debug!("Frame directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }
    let to_err = |source: std::io::Error| FrameCatalogError::List {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(to_err)? {
        let path = entry.map_err(to_err)?.path();
        if path.is_file() && is_frame_asset(&path) {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names
        .into_iter()
        .map(|name| format!("{FRAME_URL_PREFIX}/{name}"))
        .collect())
}

fn is_frame_asset(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FRAME_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
