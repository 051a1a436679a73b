/// Spatial extent of one resolution level, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    pub width: usize,
    pub height: usize,
}

impl ImageSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of pixels at this size.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Per-channel bundle of derived illumination-correction images at two
/// resolution levels.
///
/// All pixel arrays are column-major: `values[x * height + y]` holds
/// pixel (x, y). Array lengths must match the pixel count of their
/// resolution level.
#[derive(Clone, Debug)]
pub struct ModelDescriptor {
    /// Native resolution of `v`, `z` and `min_image`.
    pub image_size: ImageSize,
    /// Reduced resolution of `v_small` and `z_small`.
    pub image_size_small: ImageSize,
    /// Additive correction model, full resolution.
    pub v: Vec<f64>,
    /// Multiplicative correction model, full resolution.
    pub z: Vec<f64>,
    /// Additive model at reduced resolution.
    pub v_small: Vec<f64>,
    /// Multiplicative model at reduced resolution.
    pub z_small: Vec<f64>,
    /// Per-pixel minimum intensity across the source stack, full resolution.
    pub min_image: Vec<f64>,
}
