// SPDX-License-Identifier: GPL-3.0-only

//! Snapshot encoding and file naming
//!
//! Snapshots are written as PNG. Each capture gets a name from the local
//! timestamp plus a per-session counter, so rapid captures within the same
//! second never collide.

use crate::constants::output::{FILE_EXTENSION, FILE_PREFIX};
use crate::errors::PhotoError;
use chrono::{DateTime, Local};
use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Hands out unique snapshot paths inside one directory
#[derive(Debug, Clone)]
pub struct SnapshotNamer {
    output_dir: PathBuf,
    counter: u32,
}

impl SnapshotNamer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            counter: 0,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Number of paths handed out so far
    pub fn count(&self) -> u32 {
        self.counter
    }

    /// Next unused path for a capture taken at `now`.
    ///
    /// The counter always advances; names already present on disk (from an
    /// earlier session) are skipped.
    pub fn next_path(&mut self, now: DateTime<Local>) -> PathBuf {
        let stamp = now.format("%Y%m%d_%H%M%S");
        loop {
            self.counter += 1;
            let filename = format!(
                "{}_{}_{:04}.{}",
                FILE_PREFIX, stamp, self.counter, FILE_EXTENSION
            );
            let path = self.output_dir.join(filename);
            if !path.exists() {
                return path;
            }
            debug!(path = %path.display(), "Snapshot name taken, advancing counter");
        }
    }
}

/// Encode an RGBA image as PNG
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, PhotoError> {
    let mut buffer = Vec::new();
    image.write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)?;
    debug!(size = buffer.len(), "PNG encoding complete");
    Ok(buffer)
}

/// Encode and write a snapshot, blocking the current thread
pub fn write_snapshot(image: &RgbaImage, path: &Path) -> Result<(), PhotoError> {
    let data = encode_png(image)?;
    std::fs::write(path, data)?;
    Ok(())
}

/// Encode and write a snapshot on the blocking pool
pub async fn save_snapshot(image: RgbaImage, path: PathBuf) -> Result<PathBuf, PhotoError> {
    info!(path = %path.display(), "Saving snapshot");

    let target = path.clone();
    tokio::task::spawn_blocking(move || write_snapshot(&image, &target))
        .await
        .map_err(|e| PhotoError::FileWriteFailure(format!("save task error: {}", e)))??;

    info!(path = %path.display(), "Snapshot saved successfully");
    Ok(path)
}
