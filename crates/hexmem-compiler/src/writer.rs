//! Artifact writer: materializes a compiled memory image on disk.

use std::io;
use std::path::Path;

use crate::MemoryImage;

/// Writes every artifact in `image` into `dir`, creating the directory
/// first if needed.
///
/// Compilation fully precedes writing, so a configuration error can never
/// leave partial artifacts behind; an I/O failure mid-write surfaces as
/// the error it is.
pub fn write_image(image: &MemoryImage, dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir)?;
    for artifact in &image.artifacts {
        let path = dir.join(&artifact.file_name);
        std::fs::write(&path, &artifact.contents)?;
        log::debug!("wrote {} ({} records)", path.display(), artifact.records);
    }
    Ok(())
}
