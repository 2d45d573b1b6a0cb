//! Error types for proteus-deploy
//!
//! Uses `thiserror` for library errors. Every variant is terminal: the tool
//! makes a single attempt and reports, since the remedy (insert the card,
//! rebuild the artifact) always requires user action.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// The local build artifact does not exist
    #[error("<{}> does not exist", .path.display())]
    ArtifactNotFound { path: PathBuf },

    /// No mounted volume carries the expected label
    #[error("SD card is not inserted (no volume labeled '{label}')")]
    VolumeNotFound { label: String },

    /// Host OS is not one we know how to enumerate volumes on
    #[error("unknown platform '{os}'")]
    UnsupportedPlatform { os: String },

    /// The copy to the card failed (permissions, device removed, disk full)
    #[error("failed to copy to the SD card at {}: {}", .dest.display(), .source)]
    CopyFailed {
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_artifact_not_found() {
        let err = DeployError::ArtifactNotFound {
            path: PathBuf::from("Build/robot.s19"),
        };
        assert_eq!(err.to_string(), "<Build/robot.s19> does not exist");
    }

    #[test]
    fn test_error_display_volume_not_found() {
        let err = DeployError::VolumeNotFound {
            label: "FEHSD".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "SD card is not inserted (no volume labeled 'FEHSD')"
        );
    }

    #[test]
    fn test_error_display_unsupported_platform() {
        let err = DeployError::UnsupportedPlatform {
            os: "freebsd".to_string(),
        };
        assert_eq!(err.to_string(), "unknown platform 'freebsd'");
    }
}
