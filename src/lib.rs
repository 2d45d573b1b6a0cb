//! proteus-deploy - install a built application image onto the Proteus SD card
//!
//! The Proteus controller boots whatever `CODE.S19` it finds at the root of
//! its SD card. This crate locates the inserted card by its volume label,
//! checks that the local build artifact exists, and copies it over.

pub mod deploy;
pub mod error;
pub mod platform;
pub mod volume;

// Re-exports for convenience
pub use deploy::{deploy, deploy_with, DeployOutcome};
pub use error::{DeployError, DeployResult};
pub use platform::PlatformKind;
pub use volume::{locate, locator_for, VolumeDiscovery};
