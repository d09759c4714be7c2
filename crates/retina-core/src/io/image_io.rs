use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat};
use ndarray::{Array2, Array3};
use tracing::debug;

use crate::error::{Result, RetinaError};
use crate::frame::Frame;

fn to_array(raw: Vec<u16>, width: u32, height: u32, channels: usize) -> Result<Array3<u16>> {
    Array3::from_shape_vec((height as usize, width as usize, channels), raw)
        .map_err(|e| RetinaError::InvalidInput(format!("pixel buffer does not match image size: {e}")))
}

/// Decode an image file into a [`Frame`], keeping its channel count and
/// 8/16-bit sample depth. Floating-point images are rejected.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    let (width, height) = (img.width(), img.height());
    let channels = img.color().channel_count() as usize;

    let (raw, bit_depth): (Vec<u16>, u8) = match img {
        DynamicImage::ImageLuma8(buf) => (buf.into_raw().into_iter().map(u16::from).collect(), 8),
        DynamicImage::ImageLumaA8(buf) => (buf.into_raw().into_iter().map(u16::from).collect(), 8),
        DynamicImage::ImageRgb8(buf) => (buf.into_raw().into_iter().map(u16::from).collect(), 8),
        DynamicImage::ImageRgba8(buf) => (buf.into_raw().into_iter().map(u16::from).collect(), 8),
        DynamicImage::ImageLuma16(buf) => (buf.into_raw(), 16),
        DynamicImage::ImageLumaA16(buf) => (buf.into_raw(), 16),
        DynamicImage::ImageRgb16(buf) => (buf.into_raw(), 16),
        DynamicImage::ImageRgba16(buf) => (buf.into_raw(), 16),
        other => {
            return Err(RetinaError::InvalidInput(format!(
                "{}: unsupported pixel format {:?}",
                path.display(),
                other.color()
            )))
        }
    };

    debug!(
        path = %path.display(),
        width,
        height,
        channels,
        bit_depth,
        "Loaded frame"
    );
    Ok(Frame::new(to_array(raw, width, height, channels)?, bit_depth))
}

/// Save a binary (or any 8-bit) image as grayscale PNG.
pub fn save_binary(binary: &Array2<u8>, path: &Path) -> Result<()> {
    let (h, w) = binary.dim();
    let pixels: Vec<u8> = binary.iter().copied().collect();
    let img = GrayImage::from_raw(w as u32, h as u32, pixels).ok_or_else(|| {
        RetinaError::InvalidInput("binary buffer does not match image size".into())
    })?;
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
