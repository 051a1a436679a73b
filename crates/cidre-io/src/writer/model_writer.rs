use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::container::{Endianness, ModelContainer, PlaneSink};
use crate::error::{ModelWriteError, Result};
use crate::model::{ImageSize, ModelDescriptor};

use super::plan::{plan_series, SERIES_TABLE};
use super::plane::serialize_plane;
use super::validate::check_dimensions;

/// Writes one batch of per-channel model descriptors into a multi-series
/// container.
///
/// One instance corresponds to one output file. `save` consumes the
/// writer, so validation, metadata construction, plane writes and release
/// always run in that order, and a second save on the same instance
/// cannot be expressed.
pub struct ModelWriter<C: ModelContainer> {
    container: C,
    path: PathBuf,
    descriptors: Vec<ModelDescriptor>,
}

impl<C: ModelContainer> ModelWriter<C> {
    /// Single-channel model (channel count 1).
    pub fn new(container: C, path: impl Into<PathBuf>, descriptor: ModelDescriptor) -> Self {
        Self::with_descriptors(container, path, vec![descriptor])
    }

    /// Multi-channel model: channel count is the batch length, and plane
    /// indices within each series follow batch order.
    pub fn with_descriptors(
        container: C,
        path: impl Into<PathBuf>,
        descriptors: Vec<ModelDescriptor>,
    ) -> Self {
        Self {
            container,
            path: path.into(),
            descriptors,
        }
    }

    /// Validate, build the per-series metadata, write every plane and
    /// close the output.
    ///
    /// Planes are written series-major, channel-minor; within a series the
    /// plane index equals the descriptor's position in the batch. Any
    /// failure aborts the remaining writes, releases the output
    /// best-effort and surfaces the original error.
    pub fn save(self) -> Result<()> {
        let (full, reduced) = check_dimensions(&self.descriptors)?;
        let size_c = self.descriptors.len();
        let order = self.container.byte_order();

        let mut metadata = self.container.create_empty_metadata();
        for series in plan_series(full, reduced, size_c, order) {
            let index = series.series;
            self.container
                .populate(&mut metadata, &series)
                .map_err(|source| ModelWriteError::Metadata {
                    series: index,
                    source,
                })?;
        }

        info!(
            path = %self.path.display(),
            channels = size_c,
            width = full.width,
            height = full.height,
            "Writing illumination model"
        );
        let mut writer =
            self.container
                .open(&self.path, metadata)
                .map_err(|source| ModelWriteError::Open {
                    path: self.path.clone(),
                    source,
                })?;

        match write_planes(&mut writer, &self.descriptors, full, reduced, order) {
            Ok(()) => {
                writer
                    .close()
                    .map_err(|source| ModelWriteError::Close { source })?;
                debug!(
                    planes = SERIES_TABLE.len() * size_c,
                    "Model write complete"
                );
                Ok(())
            }
            Err(error) => {
                // Release the handle but keep the write error as primary.
                if let Err(close_error) = writer.close() {
                    warn!(error = %close_error, "Failed to release output after write error");
                }
                Err(error)
            }
        }
    }
}

fn write_planes<W: PlaneSink>(
    writer: &mut W,
    descriptors: &[ModelDescriptor],
    full: ImageSize,
    reduced: ImageSize,
    order: Endianness,
) -> Result<()> {
    for (series, spec) in SERIES_TABLE.iter().enumerate() {
        writer
            .select_series(series)
            .map_err(|source| ModelWriteError::SelectSeries { series, source })?;
        let size = spec.size(full, reduced);
        for (channel, descriptor) in descriptors.iter().enumerate() {
            let bytes = serialize_plane(spec.plane(descriptor), size.width, size.height, order);
            writer
                .write_plane(channel, &bytes)
                .map_err(|source| ModelWriteError::WritePlane {
                    series,
                    channel,
                    source,
                })?;
        }
    }
    Ok(())
}
