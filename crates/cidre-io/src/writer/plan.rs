use crate::container::Endianness;
use crate::model::{ImageSize, ModelDescriptor};

/// Dimension order advertised for every series: X and Y vary fastest,
/// then channel, with Z and T fixed at 1.
pub const DIMENSION_ORDER: &str = "XYZCT";

/// Number of series in the output container.
pub const SERIES_COUNT: usize = 5;

/// Resolution level a series draws its planes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionLevel {
    Full,
    Reduced,
}

/// Descriptor field a series draws its planes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelField {
    V,
    Z,
    VSmall,
    ZSmall,
    MinImage,
}

/// One fixed slot in the output container.
#[derive(Clone, Copy, Debug)]
pub struct SeriesSpec {
    pub name: &'static str,
    pub resolution: ResolutionLevel,
    pub field: ModelField,
}

/// The fixed series layout. Adding a series is a one-line edit here;
/// series indices follow table order.
pub const SERIES_TABLE: [SeriesSpec; SERIES_COUNT] = [
    SeriesSpec {
        name: "Model_V",
        resolution: ResolutionLevel::Full,
        field: ModelField::V,
    },
    SeriesSpec {
        name: "Model_Z",
        resolution: ResolutionLevel::Full,
        field: ModelField::Z,
    },
    SeriesSpec {
        name: "Model_V_small",
        resolution: ResolutionLevel::Reduced,
        field: ModelField::VSmall,
    },
    SeriesSpec {
        name: "Model_Z_small",
        resolution: ResolutionLevel::Reduced,
        field: ModelField::ZSmall,
    },
    SeriesSpec {
        name: "minImage",
        resolution: ResolutionLevel::Full,
        field: ModelField::MinImage,
    },
];

impl SeriesSpec {
    /// Spatial extent of this series given the validated common sizes.
    pub fn size(&self, full: ImageSize, reduced: ImageSize) -> ImageSize {
        match self.resolution {
            ResolutionLevel::Full => full,
            ResolutionLevel::Reduced => reduced,
        }
    }

    /// The column-major pixel array this series stores for one channel.
    pub fn plane<'a>(&self, descriptor: &'a ModelDescriptor) -> &'a [f64] {
        match self.field {
            ModelField::V => &descriptor.v,
            ModelField::Z => &descriptor.z,
            ModelField::VSmall => &descriptor.v_small,
            ModelField::ZSmall => &descriptor.z_small,
            ModelField::MinImage => &descriptor.min_image,
        }
    }
}

/// Pixel encoding of every plane. Only 64-bit float models are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelType {
    Double,
}

impl PixelType {
    pub fn name(self) -> &'static str {
        match self {
            PixelType::Double => "double",
        }
    }

    pub fn bytes_per_sample(self) -> usize {
        match self {
            PixelType::Double => std::mem::size_of::<f64>(),
        }
    }
}

/// Description of one series, handed to the metadata collaborator.
#[derive(Clone, Debug)]
pub struct SeriesMetadata {
    pub series: usize,
    pub name: &'static str,
    pub little_endian: bool,
    pub dimension_order: &'static str,
    pub pixel_type: PixelType,
    pub width: usize,
    pub height: usize,
    pub size_z: usize,
    pub size_c: usize,
    pub size_t: usize,
    pub samples_per_pixel: usize,
}

/// Build the metadata plan for the fixed series layout.
///
/// Pure: performs no I/O and touches no collaborator.
pub fn plan_series(
    full: ImageSize,
    reduced: ImageSize,
    size_c: usize,
    order: Endianness,
) -> Vec<SeriesMetadata> {
    SERIES_TABLE
        .iter()
        .enumerate()
        .map(|(series, spec)| {
            let size = spec.size(full, reduced);
            SeriesMetadata {
                series,
                name: spec.name,
                little_endian: order.is_little_endian(),
                dimension_order: DIMENSION_ORDER,
                pixel_type: PixelType::Double,
                width: size.width,
                height: size.height,
                size_z: 1,
                size_c,
                size_t: 1,
                samples_per_pixel: 1,
            }
        })
        .collect()
}
