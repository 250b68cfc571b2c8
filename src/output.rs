//! Output target preparation and page writing.
//!
//! The target directory is removed and recreated in full before any page is
//! written, so a successful run always leaves a complete, self-consistent
//! directory and a failed preparation leaves the previous contents' removal
//! as the only side effect. Preparation happens only after the document
//! model has been fully built.

use std::fs;
use std::path::Path;

use crate::error::{DocError, DocResult};
use crate::render::Page;

/// Delete and recreate the output directory.
pub fn prepare_dir(dir: &Path) -> DocResult<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|source| DocError::OutputTarget {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::create_dir_all(dir).map_err(|source| DocError::OutputTarget {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write every rendered page into the prepared directory.
pub fn write_pages(dir: &Path, pages: &[Page]) -> DocResult<()> {
    for page in pages {
        let path = dir.join(&page.file_name);
        fs::write(&path, &page.contents).map_err(|source| DocError::OutputTarget {
            path,
            source,
        })?;
    }
    log::info!("wrote {} pages to {}", pages.len(), dir.display());
    Ok(())
}
