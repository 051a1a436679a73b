use crate::error::{DimensionField, ModelWriteError, Result};
use crate::model::{ImageSize, ModelDescriptor};

/// Check that every descriptor agrees with the first on both resolution
/// levels and return the common (full, reduced) sizes.
///
/// Runs before any metadata or output exists, so a mismatch aborts the
/// save with nothing created. An empty batch is rejected outright.
pub fn check_dimensions(descriptors: &[ModelDescriptor]) -> Result<(ImageSize, ImageSize)> {
    let first = descriptors
        .first()
        .ok_or(ModelWriteError::EmptyDescriptorList)?;
    let full = first.image_size;
    let reduced = first.image_size_small;

    for (index, descriptor) in descriptors.iter().enumerate() {
        let checks = [
            (
                DimensionField::FullWidth,
                full.width,
                descriptor.image_size.width,
            ),
            (
                DimensionField::FullHeight,
                full.height,
                descriptor.image_size.height,
            ),
            (
                DimensionField::ReducedWidth,
                reduced.width,
                descriptor.image_size_small.width,
            ),
            (
                DimensionField::ReducedHeight,
                reduced.height,
                descriptor.image_size_small.height,
            ),
        ];
        for (field, expected, actual) in checks {
            if expected != actual {
                return Err(ModelWriteError::DimensionMismatch {
                    field,
                    index,
                    expected,
                    actual,
                });
            }
        }
    }

    Ok((full, reduced))
}
