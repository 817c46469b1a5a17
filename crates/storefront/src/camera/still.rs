//! A camera that "films" a single PNG image.
//!
//! Used by the CLI to run the sampler against a photo instead of live video.

use std::io::Cursor;
use std::path::PathBuf;

use png::{ColorType, Transformations};
use tracing::debug;

use super::{CameraDevice, CameraError, Frame, VideoStream};

/// Camera device backed by a PNG file on disk.
#[derive(Debug, Clone)]
pub struct StillImageCamera {
    path: PathBuf,
}

impl StillImageCamera {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CameraDevice for StillImageCamera {
    type Stream = StillImageStream;

    async fn acquire(&self) -> Result<StillImageStream, CameraError> {
        debug!(path = %self.path.display(), "Opening still image");
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CameraError::Unavailable(format!("{}: {e}", self.path.display())))?;
        let frame = decode_png(bytes)?;
        Ok(StillImageStream { frame: Some(frame) })
    }
}

/// Stream that keeps returning the decoded image until stopped.
///
/// Still images have no torch.
#[derive(Debug)]
pub struct StillImageStream {
    frame: Option<Frame>,
}

impl VideoStream for StillImageStream {
    fn current_frame(&self) -> Option<Frame> {
        self.frame.clone()
    }

    fn torch_supported(&self) -> bool {
        false
    }

    fn torch_enabled(&self) -> bool {
        false
    }

    async fn set_torch(&mut self, _on: bool) -> Result<(), CameraError> {
        Err(CameraError::TorchUnsupported)
    }

    fn stop(&mut self) {
        self.frame = None;
    }
}

/// Decode any 8-bit-normalizable PNG into an RGBA frame.
fn decode_png(bytes: Vec<u8>) -> Result<Frame, CameraError> {
    let unavailable = |e: png::DecodingError| CameraError::Unavailable(e.to_string());

    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder.read_info().map_err(unavailable)?;

    let (color_type, _) = reader.output_color_type();
    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let samples = color_type.samples();
    let mut buf = vec![0u8; (width as usize) * (height as usize) * samples];
    reader.next_frame(&mut buf).map_err(unavailable)?;

    let rgba = to_rgba(color_type, &buf);
    Frame::new(width, height, rgba)
}

fn to_rgba(color_type: ColorType, buf: &[u8]) -> Vec<u8> {
    match color_type {
        ColorType::Rgba => buf.to_vec(),
        ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| match *px {
                [r, g, b] => [r, g, b, u8::MAX],
                _ => [0; 4],
            })
            .collect(),
        ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| match *px {
                [v, a] => [v, v, v, a],
                _ => [0; 4],
            })
            .collect(),
        // Grayscale, and Indexed which `normalize_to_color8` has already expanded.
        _ => buf.iter().flat_map(|&v| [v, v, v, u8::MAX]).collect(),
    }
}
