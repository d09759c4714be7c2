use crate::histogram::moments::{cumulative_first_moment, cumulative_mass};
use crate::histogram::Histogram;

/// Mean gray level of the histogram, floored.
///
/// C. A. Glasbey, "An analysis of histogram-based thresholding algorithms",
/// CVGIP: Graphical Models and Image Processing 55 (1993) 532-537.
pub fn mean_threshold(histogram: &Histogram) -> Option<usize> {
    let mass = cumulative_mass(histogram.bins(), None);
    if mass == 0.0 {
        return None;
    }
    let centroid = cumulative_first_moment(histogram.bins(), None) / mass;
    Some(centroid.floor() as usize)
}
