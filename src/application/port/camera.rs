// SPDX-License-Identifier: MPL-2.0
//! Camera acquisition port definition.
//!
//! A [`CameraProvider`] hands out live [`VideoStream`]s. Streams are owned
//! by exactly one capture session (see `media::camera`), which stops them
//! on every exit path.

use crate::error::DeviceError;
use async_trait::async_trait;

/// Which physical camera to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// Front-facing camera (selfie).
    #[default]
    User,
    /// Rear camera.
    Environment,
}

/// One decoded RGBA frame at the device's native resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 pixels (`width * height * 4` bytes).
    pub rgba: Vec<u8>,
}

impl CameraFrame {
    /// Returns true when the pixel buffer matches the declared size.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.rgba.len() == self.width as usize * self.height as usize * 4
    }
}

/// A running device stream.
pub trait VideoStream: Send {
    /// Returns the most recent frame.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] when the device stopped delivering frames.
    fn current_frame(&mut self) -> Result<CameraFrame, DeviceError>;

    /// Stops every track of the stream. Must be idempotent.
    fn stop(&mut self);
}

/// Port for acquiring camera streams.
#[async_trait]
pub trait CameraProvider: Send + Sync {
    /// Whether this provider can ever hand out a stream. Capture controls
    /// are hidden when it cannot.
    fn is_available(&self) -> bool {
        true
    }

    /// Opens a stream for the requested camera.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::PermissionDenied`] or [`DeviceError::NoDevice`]
    /// when acquisition is refused or impossible.
    async fn acquire(&self, facing: Facing) -> Result<Box<dyn VideoStream>, DeviceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_must_match_pixels() {
        let frame = CameraFrame {
            width: 2,
            height: 1,
            rgba: vec![0; 8],
        };
        assert!(frame.is_well_formed());

        let short = CameraFrame {
            width: 2,
            height: 2,
            rgba: vec![0; 8],
        };
        assert!(!short.is_well_formed());
    }
}
