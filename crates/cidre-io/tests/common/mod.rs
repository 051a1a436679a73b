use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use cidre_io::container::{Endianness, MetadataError, ModelContainer, PlaneSink};
use cidre_io::model::{ImageSize, ModelDescriptor};
use cidre_io::writer::SeriesMetadata;

/// One recorded call against the container, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerEvent {
    Open { path: PathBuf },
    SelectSeries { series: usize },
    WritePlane { series: usize, plane: usize, len: usize },
    Close,
}

#[derive(Default)]
pub struct RecordingState {
    pub events: Vec<ContainerEvent>,
    pub metadata: Vec<SeriesMetadata>,
    pub open_calls: usize,
    pub closed: bool,
}

/// In-memory stand-in for the metadata and container collaborators.
///
/// Records every call so tests can assert the exact
/// populate/open/select/write/close sequence, and can inject an I/O
/// failure at a chosen plane (counted across all series).
#[derive(Clone)]
pub struct RecordingContainer {
    state: Arc<Mutex<RecordingState>>,
    order: Endianness,
    fail_at_plane: Option<usize>,
    fail_populate: bool,
}

impl RecordingContainer {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(RecordingState::default())),
            order: Endianness::Big,
            fail_at_plane: None,
            fail_populate: false,
        }
    }

    pub fn little_endian() -> Self {
        Self {
            order: Endianness::Little,
            ..Self::new()
        }
    }

    /// Fail the n-th plane write (0-based, counted across all series).
    pub fn failing_at_plane(n: usize) -> Self {
        Self {
            fail_at_plane: Some(n),
            ..Self::new()
        }
    }

    pub fn failing_populate() -> Self {
        Self {
            fail_populate: true,
            ..Self::new()
        }
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, RecordingState> {
        self.state.lock().unwrap()
    }
}

impl ModelContainer for RecordingContainer {
    type Metadata = Vec<SeriesMetadata>;
    type Writer = RecordingSink;

    fn byte_order(&self) -> Endianness {
        self.order
    }

    fn create_empty_metadata(&self) -> Self::Metadata {
        Vec::new()
    }

    fn populate(
        &self,
        metadata: &mut Self::Metadata,
        series: &SeriesMetadata,
    ) -> Result<(), MetadataError> {
        if self.fail_populate {
            return Err(MetadataError("schema rejected series".into()));
        }
        metadata.push(series.clone());
        Ok(())
    }

    fn open(&self, path: &Path, metadata: Self::Metadata) -> io::Result<Self::Writer> {
        let mut state = self.state.lock().unwrap();
        state.open_calls += 1;
        state.metadata = metadata;
        state.events.push(ContainerEvent::Open {
            path: path.to_path_buf(),
        });
        Ok(RecordingSink {
            state: Arc::clone(&self.state),
            fail_at_plane: self.fail_at_plane,
            current_series: 0,
            planes_written: 0,
        })
    }
}

pub struct RecordingSink {
    state: Arc<Mutex<RecordingState>>,
    fail_at_plane: Option<usize>,
    current_series: usize,
    planes_written: usize,
}

impl PlaneSink for RecordingSink {
    fn select_series(&mut self, series: usize) -> io::Result<()> {
        self.current_series = series;
        self.state
            .lock()
            .unwrap()
            .events
            .push(ContainerEvent::SelectSeries { series });
        Ok(())
    }

    fn write_plane(&mut self, plane_index: usize, bytes: &[u8]) -> io::Result<()> {
        if self.fail_at_plane == Some(self.planes_written) {
            return Err(io::Error::other("injected write failure"));
        }
        self.planes_written += 1;
        self.state.lock().unwrap().events.push(ContainerEvent::WritePlane {
            series: self.current_series,
            plane: plane_index,
            len: bytes.len(),
        });
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.closed = true;
        state.events.push(ContainerEvent::Close);
        Ok(())
    }
}

fn ramp(len: usize, base: f64) -> Vec<f64> {
    (0..len).map(|i| base + i as f64).collect()
}

/// Build a descriptor with distinct ramp values per field so tests can
/// tell the arrays apart.
pub fn descriptor(full: ImageSize, reduced: ImageSize) -> ModelDescriptor {
    descriptor_with_base(full, reduced, 0.0)
}

pub fn descriptor_with_base(full: ImageSize, reduced: ImageSize, base: f64) -> ModelDescriptor {
    let n = full.pixel_count();
    let n_small = reduced.pixel_count();
    ModelDescriptor {
        image_size: full,
        image_size_small: reduced,
        v: ramp(n, base),
        z: ramp(n, base + 1000.0),
        v_small: ramp(n_small, base + 2000.0),
        z_small: ramp(n_small, base + 3000.0),
        min_image: ramp(n, base + 4000.0),
    }
}
