#[cfg(feature = "binary-io")]
mod binary;

#[cfg(feature = "script-io")]
mod script;

#[cfg(feature = "binary-io")]
pub use binary::HEADER_LEN;

use crate::errors::VoxelError;

/// Generic I/O and format‑conversion errors.
///
/// The encoders are behind cargo feature‑flags (`binary-io`, `script-io`).
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    MalformedInput(String),

    /// The decoded header describes a grid that cannot exist.
    Voxel(VoxelError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),
            Voxel(error) => write!(f, "Invalid voxel model: {error}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) => Some(error),
            IoError::Voxel(error) => Some(error),
            IoError::MalformedInput(_) => None,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<VoxelError> for IoError {
    fn from(value: VoxelError) -> Self {
        Self::Voxel(value)
    }
}
