mod model_writer;
mod plan;
mod plane;
mod validate;

pub use model_writer::ModelWriter;
pub use plan::{
    plan_series, ModelField, PixelType, ResolutionLevel, SeriesMetadata, SeriesSpec,
    DIMENSION_ORDER, SERIES_COUNT, SERIES_TABLE,
};
pub use plane::serialize_plane;
pub use validate::check_dimensions;
