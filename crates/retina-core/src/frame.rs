use ndarray::{Array2, Array3, ArrayView2, Axis};

use crate::consts::SUPPORTED_BIT_DEPTHS;
use crate::error::{Result, RetinaError};

/// A raw integer image as handed over by an image-I/O collaborator.
///
/// Samples are stored as `u16` regardless of the declared bit depth, with
/// shape = (height, width, channels).
#[derive(Clone, Debug)]
pub struct Frame {
    pub data: Array3<u16>,
    /// Declared bit depth of the samples (8 or 16 for supported frames).
    pub bit_depth: u8,
}

impl Frame {
    pub fn new(data: Array3<u16>, bit_depth: u8) -> Self {
        Self { data, bit_depth }
    }

    /// Wrap a single-channel array.
    pub fn from_gray(data: Array2<u16>, bit_depth: u8) -> Self {
        Self {
            data: data.insert_axis(Axis(2)),
            bit_depth,
        }
    }

    /// Wrap an 8-bit single-channel array.
    pub fn from_gray8(data: &Array2<u8>) -> Self {
        Self::from_gray(data.mapv(u16::from), 8)
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of representable gray levels, `2^bit_depth`.
    pub fn gray_levels(&self) -> usize {
        1usize << self.bit_depth
    }

    /// Check that this is a non-empty, single-channel 8- or 16-bit frame.
    ///
    /// `operation` names the caller in the error message.
    pub fn ensure_grayscale(&self, operation: &str) -> Result<()> {
        if self.is_empty() {
            return Err(RetinaError::InvalidInput(format!(
                "{operation}: empty image"
            )));
        }
        if self.channels() != 1 {
            return Err(RetinaError::InvalidInput(format!(
                "{operation}: unsupported number of channels ({}), only single-channel images are supported",
                self.channels()
            )));
        }
        if !SUPPORTED_BIT_DEPTHS.contains(&self.bit_depth) {
            return Err(RetinaError::InvalidInput(format!(
                "{operation}: unsupported bit depth ({}), only 8- and 16-bit grayscale images are supported",
                self.bit_depth
            )));
        }
        Ok(())
    }

    /// View of the single gray channel. Call [`Frame::ensure_grayscale`] first.
    pub fn gray_view(&self) -> ArrayView2<'_, u16> {
        self.data.index_axis(Axis(2), 0)
    }
}

/// Rescale sample values from `bits_in` to `bits_out` significant bits.
///
/// Each sample becomes `round(v * (2^out - 1) / (2^in - 1))`, clamped to
/// `2^out - 1`. Fails when `bits_out` exceeds the frame's storage depth.
pub fn rescale(frame: &Frame, bits_in: u8, bits_out: u8) -> Result<Frame> {
    if !SUPPORTED_BIT_DEPTHS.contains(&frame.bit_depth) {
        return Err(RetinaError::InvalidInput(format!(
            "rescale: unsupported bit depth ({})",
            frame.bit_depth
        )));
    }
    if bits_out > frame.bit_depth {
        return Err(RetinaError::InvalidInput(format!(
            "Cannot rescale image: bits_out ({bits_out}) > stored bits ({})",
            frame.bit_depth
        )));
    }
    if bits_in == 0 || bits_in > 16 {
        return Err(RetinaError::InvalidInput(format!(
            "Cannot rescale image: bits_in ({bits_in}) must be in 1..=16"
        )));
    }

    let max_out = ((1u32 << bits_out) - 1) as f32;
    let factor = max_out / ((1u32 << bits_in) - 1) as f32;
    let data = frame
        .data
        .mapv(|v| (v as f32 * factor).round().min(max_out) as u16);
    Ok(Frame::new(data, frame.bit_depth))
}
