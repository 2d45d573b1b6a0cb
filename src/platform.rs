//! Platform kind value object - which host OS we are enumerating volumes on.

use crate::error::{DeployError, DeployResult};

/// Host platform kind.
///
/// Each variant has its own volume-discovery strategy; anything else is
/// rejected before discovery is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    /// Windows - volumes enumerated by drive letter and label
    Windows,
    /// macOS - removable volumes mount under /Volumes
    MacOs,
    /// Linux - removable volumes mount under /media
    Linux,
}

impl PlatformKind {
    /// Detect the platform this process is running on.
    pub fn current() -> DeployResult<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier (as reported by `std::env::consts::OS`) to a
    /// platform kind.
    pub fn from_os(os: &str) -> DeployResult<Self> {
        match os {
            "windows" => Ok(Self::Windows),
            "macos" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            other => Err(DeployError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }
}
