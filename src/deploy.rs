//! Deploy runner
//!
//! Orchestrates a single deployment:
//! 1. Resolve the local artifact path and check it exists
//! 2. Locate the SD card by volume label
//! 3. Copy the artifact to `CODE.S19` at the card root
//!
//! One attempt, no retries: the fix for any failure (insert the card,
//! rebuild the app) is a user action.

use crate::error::{DeployError, DeployResult};
use crate::platform::PlatformKind;
use crate::volume::{self, VolumeDiscovery};
use std::path::{Path, PathBuf};

/// Volume label the Proteus card is formatted with
pub const SD_CARD_LABEL: &str = "FEHSD";

/// Directory the build drops `.s19` images into
pub const BUILD_DIR: &str = "Build";

/// Build artifact extension (Motorola S-record)
pub const ARTIFACT_EXT: &str = "s19";

/// Filename the controller boots from at the card root
pub const DEST_FILENAME: &str = "CODE.S19";

/// Outcome of a successful deploy
#[derive(Debug, Clone)]
pub struct DeployOutcome {
    /// The artifact that was copied
    pub source: PathBuf,
    /// Where it landed on the card
    pub dest: PathBuf,
}

/// Path the build system leaves the image at for `app_name`
pub fn artifact_path(app_name: &str) -> PathBuf {
    Path::new(BUILD_DIR).join(format!("{}.{}", app_name, ARTIFACT_EXT))
}

/// Deploy `app_name` to the card found on the current platform
pub fn deploy(app_name: &str) -> DeployResult<DeployOutcome> {
    let platform = PlatformKind::current()?;
    deploy_with(app_name, volume::locator_for(platform).as_ref())
}

/// Deploy `app_name` using the given volume locator
///
/// The locator is a parameter so the copy path can be exercised without a
/// mounted card.
pub fn deploy_with(app_name: &str, locator: &dyn VolumeDiscovery) -> DeployResult<DeployOutcome> {
    let source = artifact_path(app_name);
    if !source.is_file() {
        return Err(DeployError::ArtifactNotFound { path: source });
    }

    let volume_root = locator.discover(SD_CARD_LABEL)?;
    let dest = volume_root.join(DEST_FILENAME);

    copy_replacing(&source, &dest)?;

    Ok(DeployOutcome { source, dest })
}

/// Copy `source` over `dest`, replacing whatever is there.
///
/// A symlink at `dest` is removed first so the copy replaces the link
/// itself instead of writing through to its target.
fn copy_replacing(source: &Path, dest: &Path) -> DeployResult<()> {
    let copy_err = |source| DeployError::CopyFailed {
        dest: dest.to_path_buf(),
        source,
    };

    match std::fs::symlink_metadata(dest) {
        Ok(meta) if meta.file_type().is_symlink() => {
            std::fs::remove_file(dest).map_err(copy_err)?;
        }
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(copy_err(e)),
    }

    std::fs::copy(source, dest).map_err(copy_err)?;
    Ok(())
}
