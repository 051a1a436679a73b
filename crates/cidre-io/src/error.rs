use std::path::PathBuf;

use thiserror::Error;

use crate::container::MetadataError;

/// Which dimension field disagreed between descriptors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionField {
    FullWidth,
    FullHeight,
    ReducedWidth,
    ReducedHeight,
}

impl std::fmt::Display for DimensionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullWidth => write!(f, "width"),
            Self::FullHeight => write!(f, "height"),
            Self::ReducedWidth => write!(f, "reduced width"),
            Self::ReducedHeight => write!(f, "reduced height"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ModelWriteError {
    #[error("empty descriptor list: at least one channel model is required")]
    EmptyDescriptorList,

    #[error("descriptor {index} disagrees on {field}: expected {expected}, got {actual}")]
    DimensionMismatch {
        field: DimensionField,
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("metadata error for series {series}: {source}")]
    Metadata {
        series: usize,
        #[source]
        source: MetadataError,
    },

    #[error("failed to create output {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to select series {series}: {source}")]
    SelectSeries {
        series: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write plane (series {series}, channel {channel}): {source}")]
    WritePlane {
        series: usize,
        channel: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to close output: {source}")]
    Close {
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ModelWriteError>;
