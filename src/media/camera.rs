// SPDX-License-Identifier: MPL-2.0
//! Camera capture sessions.
//!
//! A [`CaptureSession`] exclusively owns one device stream for the lifetime
//! of the capture overlay. The stream is stopped exactly once, whichever
//! way the overlay closes: [`CaptureSession::snapshot`],
//! [`CaptureSession::cancel`], or the session being dropped (teardown).

use super::ingest::{CaptureOrigin, RawCapture};
use crate::application::port::camera::{CameraFrame, CameraProvider, Facing, VideoStream};
use crate::error::{DeviceError, IngestionError};
use image_rs::{DynamicImage, ImageFormat, RgbaImage};
use std::fmt;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

/// An open camera stream owned by the capture overlay.
pub struct CaptureSession {
    stream: Option<Box<dyn VideoStream>>,
    facing: Facing,
}

impl fmt::Debug for CaptureSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureSession")
            .field("facing", &self.facing)
            .field("active", &self.is_active())
            .finish()
    }
}

impl CaptureSession {
    /// Acquires a stream from `provider`.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`DeviceError`] unchanged; nothing is held on
    /// failure.
    pub async fn open(provider: &dyn CameraProvider, facing: Facing) -> Result<Self, DeviceError> {
        let stream = provider.acquire(facing).await?;
        tracing::info!(?facing, "camera stream acquired");
        Ok(Self::from_stream(stream, facing))
    }

    #[must_use]
    pub fn from_stream(stream: Box<dyn VideoStream>, facing: Facing) -> Self {
        Self {
            stream: Some(stream),
            facing,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.stream.is_some()
    }

    /// Latest frame for the live preview.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] when the stream failed or was released.
    pub fn preview(&mut self) -> Result<CameraFrame, DeviceError> {
        match self.stream.as_mut() {
            Some(stream) => stream.current_frame(),
            None => Err(DeviceError::Other("camera stream already released".into())),
        }
    }

    /// Grabs the current frame, releases the device and returns the frame
    /// encoded as a JPEG capture named `capture-<unix-millis>.jpg`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestionError::Device`] when no frame could be read and
    /// [`IngestionError::ReadFailure`] when encoding fails. The device is
    /// released in both cases.
    pub fn snapshot(mut self) -> Result<RawCapture, IngestionError> {
        let frame = self.preview();
        self.release();
        let frame = frame?;

        let bytes = encode_jpeg(frame)?;
        let name = format!("capture-{}.jpg", chrono::Utc::now().timestamp_millis());
        Ok(RawCapture::from_bytes(
            CaptureOrigin::Camera,
            Some(name),
            bytes,
            Some("image/jpeg".to_string()),
        ))
    }

    /// Closes the overlay without capturing.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            tracing::info!(facing = ?self.facing, "camera stream released");
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.release();
    }
}

/// Renders a frame at its native resolution and encodes it as JPEG.
fn encode_jpeg(frame: CameraFrame) -> Result<Vec<u8>, IngestionError> {
    let CameraFrame {
        width,
        height,
        rgba,
    } = frame;
    let raster = RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
        IngestionError::ReadFailure(format!("camera frame does not match {width}x{height}"))
    })?;

    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgba8(raster).to_rgb8();
    let mut out = Cursor::new(Vec::new());
    rgb.write_to(&mut out, ImageFormat::Jpeg)
        .map_err(|err| IngestionError::ReadFailure(err.to_string()))?;
    Ok(out.into_inner())
}

/// A session that can travel inside a cloneable message.
///
/// The first receiver takes ownership; later clones see `None`.
#[derive(Clone, Default)]
pub struct SessionSlot(Arc<Mutex<Option<CaptureSession>>>);

impl SessionSlot {
    #[must_use]
    pub fn new(session: CaptureSession) -> Self {
        Self(Arc::new(Mutex::new(Some(session))))
    }

    /// Takes the session out of the slot.
    #[must_use]
    pub fn take(&self) -> Option<CaptureSession> {
        match self.0.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}

impl fmt::Debug for SessionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSlot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ingest::ingest;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Probe {
        stops: AtomicUsize,
    }

    struct FakeStream {
        probe: Arc<Probe>,
        frame: Option<CameraFrame>,
    }

    impl VideoStream for FakeStream {
        fn current_frame(&mut self) -> Result<CameraFrame, DeviceError> {
            self.frame
                .clone()
                .ok_or_else(|| DeviceError::Other("stalled".into()))
        }

        fn stop(&mut self) {
            self.probe.stops.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct FakeProvider {
        probe: Arc<Probe>,
        frame: Option<CameraFrame>,
        refuse: Option<DeviceError>,
    }

    #[async_trait]
    impl CameraProvider for FakeProvider {
        async fn acquire(&self, _facing: Facing) -> Result<Box<dyn VideoStream>, DeviceError> {
            if let Some(err) = &self.refuse {
                return Err(err.clone());
            }
            Ok(Box::new(FakeStream {
                probe: Arc::clone(&self.probe),
                frame: self.frame.clone(),
            }))
        }
    }

    fn frame(width: u32, height: u32) -> CameraFrame {
        CameraFrame {
            width,
            height,
            rgba: vec![128; (width * height * 4) as usize],
        }
    }

    fn provider(frame: Option<CameraFrame>) -> (FakeProvider, Arc<Probe>) {
        let probe = Arc::new(Probe::default());
        (
            FakeProvider {
                probe: Arc::clone(&probe),
                frame,
                refuse: None,
            },
            probe,
        )
    }

    fn stops(probe: &Probe) -> usize {
        probe.stops.load(Ordering::SeqCst)
    }

    #[tokio::test]
    async fn snapshot_encodes_native_resolution_jpeg_and_releases() {
        let (provider, probe) = provider(Some(frame(6, 4)));
        let session = CaptureSession::open(&provider, Facing::User)
            .await
            .expect("open");

        let capture = session.snapshot().expect("snapshot");
        assert_eq!(stops(&probe), 1);

        let name = capture.name().expect("named capture").to_string();
        assert!(name.starts_with("capture-") && name.ends_with(".jpg"));

        let record = ingest(capture).expect("ingest");
        assert_eq!(record.media_type().as_str(), "image/jpeg");
        assert_eq!(record.dimensions(), Some((6, 4)));
    }

    #[tokio::test]
    async fn cancel_releases_the_stream() {
        let (provider, probe) = provider(Some(frame(2, 2)));
        let session = CaptureSession::open(&provider, Facing::User)
            .await
            .expect("open");
        session.cancel();
        assert_eq!(stops(&probe), 1);
    }

    #[tokio::test]
    async fn drop_releases_the_stream_once() {
        let (provider, probe) = provider(Some(frame(2, 2)));
        {
            let mut session = CaptureSession::open(&provider, Facing::User)
                .await
                .expect("open");
            assert!(session.preview().is_ok());
        }
        assert_eq!(stops(&probe), 1);
    }

    #[tokio::test]
    async fn failed_snapshot_still_releases() {
        let (provider, probe) = provider(None);
        let session = CaptureSession::open(&provider, Facing::User)
            .await
            .expect("open");
        let result = session.snapshot();
        assert!(matches!(result, Err(IngestionError::Device(_))));
        assert_eq!(stops(&probe), 1);
    }

    #[tokio::test]
    async fn refused_acquisition_holds_nothing() {
        let (mut provider, probe) = provider(None);
        provider.refuse = Some(DeviceError::PermissionDenied);
        let result = CaptureSession::open(&provider, Facing::User).await;
        assert!(matches!(result, Err(DeviceError::PermissionDenied)));
        assert_eq!(stops(&probe), 0);
    }

    #[tokio::test]
    async fn session_slot_hands_out_the_session_once() {
        let (provider, probe) = provider(Some(frame(2, 2)));
        let session = CaptureSession::open(&provider, Facing::User)
            .await
            .expect("open");
        let slot = SessionSlot::new(session);
        let copy = slot.clone();

        let taken = slot.take();
        assert!(taken.is_some());
        assert!(copy.take().is_none());
        drop(taken);
        assert_eq!(stops(&probe), 1);
    }
}
