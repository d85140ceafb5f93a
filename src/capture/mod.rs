//! Frame acquisition.
//!
//! The physical camera is an external collaborator; anything that yields
//! frames can sit behind the [`FrameSource`] trait. The crate ships a
//! directory-replay source so the pipeline runs without camera hardware.

mod directory;

pub use directory::DirectorySource;

use crate::error::Result;
use image::DynamicImage;

/// One captured frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Decoded image data.
    pub image: DynamicImage,
    /// Stable identifier for the frame (file stem for replayed frames).
    pub tag: String,
}

impl Frame {
    /// Create a frame from decoded image data.
    pub fn new(image: DynamicImage, tag: impl Into<String>) -> Self {
        Self {
            image,
            tag: tag.into(),
        }
    }

    /// Tiny solid frame for tests.
    #[doc(hidden)]
    pub fn test_frame(tag: &str) -> Self {
        Self::new(DynamicImage::new_rgb8(4, 4), tag)
    }
}

/// Outcome of one frame read.
#[derive(Debug)]
pub enum FrameRead {
    /// A frame was captured.
    Frame(Frame),
    /// The read failed transiently; retry after a short backoff.
    Transient,
    /// The source is exhausted; the capture loop should stop.
    End,
}

/// A source of camera-style frames.
///
/// Opening the source is the only terminal failure: a source that cannot be
/// acquired at all surfaces an error to the operator, while individual read
/// failures are reported as [`FrameRead::Transient`] and retried.
pub trait FrameSource {
    /// Read the next frame.
    fn next_frame(&mut self) -> Result<FrameRead>;
}
