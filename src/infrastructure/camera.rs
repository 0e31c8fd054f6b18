// SPDX-License-Identifier: MPL-2.0
//! Camera provider used when no capture backend is compiled in.
//!
//! The provider reports itself unavailable, so the upload steps offer file
//! upload only. An acquisition that still reaches it fails with
//! [`DeviceError::NoDevice`].

use crate::application::port::camera::{CameraProvider, Facing, VideoStream};
use crate::error::DeviceError;
use async_trait::async_trait;

/// A provider with no devices.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableCamera;

#[async_trait]
impl CameraProvider for UnavailableCamera {
    fn is_available(&self) -> bool {
        false
    }

    async fn acquire(&self, facing: Facing) -> Result<Box<dyn VideoStream>, DeviceError> {
        tracing::debug!(?facing, "camera requested but no capture backend is available");
        Err(DeviceError::NoDevice)
    }
}
