use std::io;
use std::path::Path;

use thiserror::Error;

use crate::writer::SeriesMetadata;

/// Pixel byte order mandated by a container format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    pub fn is_little_endian(self) -> bool {
        matches!(self, Endianness::Little)
    }
}

/// Error reported by the metadata collaborator, carried verbatim.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct MetadataError(pub String);

/// A multi-series image container able to hold the model planes.
///
/// The container's binary structure (directory layout, compression, tag
/// encoding) lives behind this trait; the core only plans per-series
/// metadata and hands over serialized plane bytes.
pub trait ModelContainer {
    /// Schema object describing every series before the output is opened.
    type Metadata;
    type Writer: PlaneSink;

    /// Byte order the container expects for pixel data.
    fn byte_order(&self) -> Endianness;

    fn create_empty_metadata(&self) -> Self::Metadata;

    /// Register one series description with the schema.
    fn populate(
        &self,
        metadata: &mut Self::Metadata,
        series: &SeriesMetadata,
    ) -> Result<(), MetadataError>;

    /// Create the output resource at `path` with the fully populated schema.
    fn open(&self, path: &Path, metadata: Self::Metadata) -> io::Result<Self::Writer>;
}

/// Write side of an open container.
pub trait PlaneSink {
    /// Direct subsequent plane writes at the given series.
    fn select_series(&mut self, series: usize) -> io::Result<()>;

    /// Store one plane at `plane_index` within the selected series.
    fn write_plane(&mut self, plane_index: usize, bytes: &[u8]) -> io::Result<()>;

    /// Flush and release the output resource.
    ///
    /// Takes `&mut self` so a writer that already failed can still be
    /// released on the error path.
    fn close(&mut self) -> io::Result<()>;
}
