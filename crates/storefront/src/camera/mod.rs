//! Camera color sampler.
//!
//! Device access is a single suspend point: [`CameraDevice::acquire`] either
//! grants a [`VideoStream`] or fails with a [`CameraError`]. There is no
//! timeout and no retry; a denied request stays denied until the shopper
//! triggers the sampler again.
//!
//! [`CameraSession`] owns an open stream, reads the center pixel of the
//! current frame on demand, and toggles the torch where the hardware allows.

mod still;

use std::future::Future;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use trueshade_core::Rgb;

use crate::color::SampledColor;
use crate::error::Notice;

pub use still::{StillImageCamera, StillImageStream};

/// Errors from camera acquisition and control.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("camera unavailable: {0}")]
    Unavailable(String),

    #[error("torch not supported on this device")]
    TorchUnsupported,

    #[error("torch control failed: {0}")]
    Torch(String),

    #[error("frame buffer has {actual} bytes, expected {expected}")]
    InvalidFrame { expected: usize, actual: usize },
}

impl CameraError {
    /// The message shown to the shopper for this failure.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::PermissionDenied | Self::Unavailable(_) | Self::InvalidFrame { .. } => {
                Notice::new("Camera access denied or unavailable.")
            }
            Self::TorchUnsupported => Notice::new("Torch not supported on this device."),
            Self::Torch(_) => Notice::new("Unable to toggle torch."),
        }
    }
}

/// A single RGBA video frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Frame {
    /// Wrap a tightly packed RGBA buffer.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::InvalidFrame` if the buffer length does not
    /// match `width * height * 4`.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, CameraError> {
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() != expected {
            return Err(CameraError::InvalidFrame {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// A frame filled with one color.
    #[must_use]
    pub fn solid(width: u32, height: u32, rgb: Rgb) -> Self {
        let pixels = (width as usize) * (height as usize);
        let rgba = [rgb.r, rgb.g, rgb.b, u8::MAX].repeat(pixels);
        Self {
            width,
            height,
            rgba,
        }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Whether the frame has no pixels (the video has not started yet).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Color at `(x, y)`, ignoring alpha.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.rgba.get(offset..offset + 3)?;
        match *px {
            [r, g, b] => Some(Rgb::new(r, g, b)),
            _ => None,
        }
    }

    /// Color at `(floor(width / 2), floor(height / 2))`.
    #[must_use]
    pub fn center_pixel(&self) -> Option<Rgb> {
        self.pixel(self.width / 2, self.height / 2)
    }
}

/// An open video stream.
pub trait VideoStream: Send {
    /// The latest frame, or `None` before the first frame arrives or after
    /// the stream is stopped.
    fn current_frame(&self) -> Option<Frame>;

    /// Whether the device reports a controllable torch.
    fn torch_supported(&self) -> bool;

    /// Current torch state.
    fn torch_enabled(&self) -> bool;

    /// Switch the torch on or off.
    fn set_torch(&mut self, on: bool) -> impl Future<Output = Result<(), CameraError>> + Send;

    /// Stop all tracks. Idempotent.
    fn stop(&mut self);
}

/// Something that can grant access to a camera.
pub trait CameraDevice {
    type Stream: VideoStream;

    /// Request the rear camera, suspending until the device grants or
    /// denies it.
    fn acquire(&self) -> impl Future<Output = Result<Self::Stream, CameraError>> + Send;
}

/// An open sampler session.
#[derive(Debug)]
pub struct CameraSession<S: VideoStream> {
    stream: Option<S>,
    last_sample: Option<SampledColor>,
}

impl<S: VideoStream> CameraSession<S> {
    /// Acquire the rear camera from `device`.
    ///
    /// # Errors
    ///
    /// Returns the device's `CameraError` unchanged; use
    /// [`CameraError::notice`] for the shopper-facing message.
    #[instrument(skip(device))]
    pub async fn open<D>(device: &D) -> Result<Self, CameraError>
    where
        D: CameraDevice<Stream = S> + Sync,
    {
        match device.acquire().await {
            Ok(stream) => {
                info!("Camera opened");
                Ok(Self {
                    stream: Some(stream),
                    last_sample: None,
                })
            }
            Err(e) => {
                warn!(error = %e, "Camera acquisition failed");
                Err(e)
            }
        }
    }

    /// Whether the stream is still open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Sample the center pixel of the current frame.
    ///
    /// Returns `None` (and keeps the previous sample) when no frame is
    /// available yet. A successful sample replaces the previous one.
    pub fn sample(&mut self) -> Option<&SampledColor> {
        let frame = self.stream.as_ref()?.current_frame()?;
        if frame.is_empty() {
            return None;
        }
        let rgb = frame.center_pixel()?;
        let sample = SampledColor::analyze(rgb);
        debug!(hex = %sample.hex, hue = %sample.hue, "Sampled color");
        self.last_sample = Some(sample);
        self.last_sample.as_ref()
    }

    /// The most recent sample, if any.
    #[must_use]
    pub const fn last_sample(&self) -> Option<&SampledColor> {
        self.last_sample.as_ref()
    }

    /// Flip the torch. Returns the new torch state.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::TorchUnsupported` when the device has no torch
    /// (or the session is closed), or the device's error if switching fails.
    pub async fn toggle_torch(&mut self) -> Result<bool, CameraError> {
        let stream = self.stream.as_mut().ok_or(CameraError::TorchUnsupported)?;
        if !stream.torch_supported() {
            return Err(CameraError::TorchUnsupported);
        }
        let on = !stream.torch_enabled();
        stream.set_torch(on).await?;
        debug!(on, "Torch toggled");
        Ok(on)
    }

    /// Stop the stream and discard the last sample.
    pub fn close(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            info!("Camera closed");
        }
        self.last_sample = None;
    }
}

impl<S: VideoStream> Drop for CameraSession<S> {
    fn drop(&mut self) {
        self.close();
    }
}
