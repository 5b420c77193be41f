use glam::Vec3;
use thiserror::Error;

/// Failures the simulation core can report. All of them are programmer or
/// configuration errors; nothing here is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid world object registration: {0}")]
    InvalidRegistration(String),

    #[error("Non-finite ocean vertex at index {index}")]
    NonFiniteVertex { index: usize },

    #[error("Non-finite ocean mesh position: {0}")]
    NonFiniteMeshPosition(Vec3),

    #[error("Non-finite elapsed time: {0}")]
    NonFiniteTime(f32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown world object handle: {0}")]
    UnknownObject(usize),
}

pub type SimResult<T> = std::result::Result<T, SimError>;
