//! Directory-replay frame source.
//!
//! Plays back image files from a directory in sorted order, standing in for a
//! live camera. An unreadable or empty directory at open time is the
//! "camera could not be opened" terminal condition; an undecodable file mid-run
//! is a transient read, reported once and skipped.

use crate::capture::{Frame, FrameRead, FrameSource};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Image file extensions accepted as frames.
const FRAME_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "webp"];

/// Frame source that replays image files from a directory.
#[derive(Debug)]
pub struct DirectorySource {
    files: Vec<PathBuf>,
    next: usize,
    loop_frames: bool,
}

impl DirectorySource {
    /// Open a directory of image files.
    ///
    /// With `loop_frames` the playback wraps around indefinitely, which
    /// mimics a camera that never runs dry.
    pub fn open(dir: &Path, loop_frames: bool) -> Result<Self> {
        let entries = std::fs::read_dir(dir).map_err(|e| Error::SourceOpen {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| {
                        FRAME_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
                    })
            })
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(Error::NoFrames {
                path: dir.to_path_buf(),
            });
        }

        debug!("Opened frame directory {} ({} frames)", dir.display(), files.len());
        Ok(Self {
            files,
            next: 0,
            loop_frames,
        })
    }

    /// Number of frame files found at open time.
    pub fn frame_count(&self) -> usize {
        self.files.len()
    }
}

impl FrameSource for DirectorySource {
    fn next_frame(&mut self) -> Result<FrameRead> {
        if self.next >= self.files.len() {
            if !self.loop_frames {
                return Ok(FrameRead::End);
            }
            self.next = 0;
        }

        let path = self.files[self.next].clone();
        self.next += 1;

        match image::open(&path) {
            Ok(image) => {
                let tag = path
                    .file_stem()
                    .map_or_else(|| path.display().to_string(), |stem| {
                        stem.to_string_lossy().into_owned()
                    });
                Ok(FrameRead::Frame(Frame::new(image, tag)))
            }
            Err(e) => {
                warn!("Failed to decode frame {}: {e}", path.display());
                Ok(FrameRead::Transient)
            }
        }
    }
}
