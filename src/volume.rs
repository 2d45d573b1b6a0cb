//! Volume discovery - find the SD card's filesystem root by volume label.
//!
//! Each platform gets its own discovery strategy: Windows enumerates all
//! mounted volumes through `wmic` and matches on the label, while macOS and
//! Linux check the conventional mount root for a directory named after the
//! label. An absent card is an expected, user-facing condition, so every
//! strategy reports `VolumeNotFound` rather than panicking on whatever the
//! host gives back.

use crate::error::{DeployError, DeployResult};
use crate::platform::PlatformKind;
use std::path::PathBuf;
use std::process::Command;

/// Strategy for locating a mounted volume by its label
pub trait VolumeDiscovery {
    /// Get the name of this discovery method (for messages)
    fn name(&self) -> &'static str;

    /// Find the filesystem root of the volume carrying `label`
    fn discover(&self, label: &str) -> DeployResult<PathBuf>;
}

/// Return the discovery strategy for a platform
pub fn locator_for(platform: PlatformKind) -> Box<dyn VolumeDiscovery> {
    match platform {
        PlatformKind::Windows => Box::new(WmicVolumes),
        PlatformKind::MacOs => Box::new(MountPointVolumes::new("/Volumes")),
        PlatformKind::Linux => Box::new(MountPointVolumes::new("/media")),
    }
}

/// Locate the volume labeled `label` on `platform`
pub fn locate(label: &str, platform: PlatformKind) -> DeployResult<PathBuf> {
    locator_for(platform).discover(label)
}

/// One volume as reported by the Windows enumeration
///
/// A volume without a drive letter (unmounted, or mounted on a folder) can
/// still carry a label; such records are kept but never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeRecord {
    pub drive_letter: Option<String>,
    pub label: Option<String>,
}

/// Windows discovery via `wmic volume get DriveLetter,Label /value`
///
/// wmic prints one `Key=Value` block per volume, blocks separated by blank
/// lines. The records are parsed into typed `VolumeRecord`s and searched by
/// label, so nothing depends on the ordering of lines within a block.
pub struct WmicVolumes;

impl WmicVolumes {
    fn enumerate(&self) -> std::io::Result<Vec<VolumeRecord>> {
        let output = Command::new("wmic")
            .args(["volume", "get", "DriveLetter,Label", "/value"])
            .output()?;
        Ok(parse_volume_records(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }
}

impl VolumeDiscovery for WmicVolumes {
    fn name(&self) -> &'static str {
        "wmic"
    }

    fn discover(&self, label: &str) -> DeployResult<PathBuf> {
        // A host where wmic cannot run looks the same to the user as an
        // uninserted card: nothing to deploy to.
        let records = self.enumerate().unwrap_or_default();
        find_volume_root(&records, label).ok_or_else(|| DeployError::VolumeNotFound {
            label: label.to_string(),
        })
    }
}

/// Parse wmic `/value` output into volume records.
///
/// Tolerates CRLF line endings and the stray NUL bytes wmic emits when its
/// UTF-16 output is read as bytes. Lines that are not `Key=Value` are
/// skipped.
pub fn parse_volume_records(output: &str) -> Vec<VolumeRecord> {
    let mut records = Vec::new();
    let mut current = VolumeRecord {
        drive_letter: None,
        label: None,
    };
    let mut saw_field = false;

    for raw in output.lines() {
        let line: String = raw.chars().filter(|c| *c != '\0' && *c != '\r').collect();
        let line = line.trim();

        if line.is_empty() {
            if saw_field {
                records.push(current.clone());
                current = VolumeRecord {
                    drive_letter: None,
                    label: None,
                };
                saw_field = false;
            }
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "DriveLetter" if !value.is_empty() => {
                current.drive_letter = Some(value.to_string());
                saw_field = true;
            }
            "Label" if !value.is_empty() => {
                current.label = Some(value.to_string());
                saw_field = true;
            }
            // Empty values still delimit a field within the record.
            "DriveLetter" | "Label" => saw_field = true,
            _ => {}
        }
    }
    if saw_field {
        records.push(current);
    }
    records
}

/// Search records for `label` and build the volume root path (`E:\`)
pub fn find_volume_root(records: &[VolumeRecord], label: &str) -> Option<PathBuf> {
    records.iter().find_map(|record| {
        if record.label.as_deref() != Some(label) {
            return None;
        }
        let letter = record.drive_letter.as_deref()?;
        Some(PathBuf::from(format!("{}\\", letter)))
    })
}

/// Unix-style discovery: the card mounts at `<root>/<label>`
///
/// The mount root is injectable so each platform's strategy can be tested
/// against a scratch directory.
pub struct MountPointVolumes {
    root: PathBuf,
}

impl MountPointVolumes {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl VolumeDiscovery for MountPointVolumes {
    fn name(&self) -> &'static str {
        "mount-point"
    }

    fn discover(&self, label: &str) -> DeployResult<PathBuf> {
        let candidate = self.root.join(label);
        if candidate.is_dir() {
            Ok(candidate)
        } else {
            Err(DeployError::VolumeNotFound {
                label: label.to_string(),
            })
        }
    }
}
