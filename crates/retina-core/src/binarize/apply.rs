use ndarray::{Array2, Zip};

use crate::consts::{BACKGROUND_LEVEL, FOREGROUND_LEVEL, PARALLEL_PIXEL_THRESHOLD};
use crate::error::Result;
use crate::frame::Frame;

/// Two-level image: 255 where the sample exceeds `threshold`, 0 elsewhere.
///
/// The comparison is strict and the output is always 8-bit single-channel,
/// whatever the input depth. Frames with at least
/// [`PARALLEL_PIXEL_THRESHOLD`] pixels are processed on the rayon pool.
pub fn binarize(frame: &Frame, threshold: u32) -> Result<Array2<u8>> {
    frame.ensure_grayscale("binarize")?;

    let gray = frame.gray_view();
    let level = |v: &u16| {
        if u32::from(*v) > threshold {
            FOREGROUND_LEVEL
        } else {
            BACKGROUND_LEVEL
        }
    };

    if gray.len() >= PARALLEL_PIXEL_THRESHOLD {
        let mut out = Array2::<u8>::zeros(gray.dim());
        Zip::from(&mut out)
            .and(&gray)
            .par_for_each(|o, v| *o = level(v));
        Ok(out)
    } else {
        Ok(gray.map(level))
    }
}
