//! Workspace management for a single conversion.
//!
//! A [`Workspace`] owns the intermediate palette image for the lifetime of one
//! conversion. The palette file is deleted when the workspace is dropped, so
//! it never outlives the conversion, whether that conversion succeeded or
//! bailed out early with an error.

use std::path::Path;
use tempfile::TempPath;

use vtg_core::Result;

/// Workspace for one video-to-GIF conversion.
///
/// # Example
///
/// ```no_run
/// use vtg_av::Workspace;
///
/// let workspace = Workspace::new()?;
/// // ... write the palette to workspace.palette(), read it back ...
/// workspace.cleanup();
/// # Ok::<(), vtg_core::Error>(())
/// ```
pub struct Workspace {
    palette: TempPath,
}

impl Workspace {
    /// Create a workspace, reserving a uniquely named palette file in the
    /// system temp directory.
    pub fn new() -> Result<Self> {
        Self::new_in(std::env::temp_dir())
    }

    /// Create a workspace whose palette file lives in `dir`.
    pub fn new_in(dir: impl AsRef<Path>) -> Result<Self> {
        let palette = tempfile::Builder::new()
            .prefix("vtg-palette-")
            .suffix(".png")
            .tempfile_in(dir)?
            // Keep only the path; the engine opens the file itself.
            .into_temp_path();

        tracing::debug!("palette artifact at {}", palette.display());

        Ok(Self { palette })
    }

    /// The intermediate palette image.
    pub fn palette(&self) -> &Path {
        &self.palette
    }

    /// Delete the palette file now, logging (not returning) any failure.
    pub fn cleanup(self) {
        let path = self.palette.to_path_buf();
        if let Err(e) = self.palette.close() {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("failed to remove palette {}: {e}", path.display());
            }
        }
    }
}
