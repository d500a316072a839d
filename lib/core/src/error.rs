use crate::graph::Coordinate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Node not found: {0}")]
    UnknownNode(Coordinate),

    #[error("Node already exists: {0}")]
    DuplicateNode(Coordinate),

    #[error("Self-loop on node: {0}")]
    SelfLoop(Coordinate),

    #[error("Unknown land use: {0}")]
    UnknownLandUse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
