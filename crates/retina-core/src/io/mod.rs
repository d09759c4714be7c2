pub mod image_io;
pub mod scores;

pub use image_io::{load_frame, save_binary};
pub use scores::read_scores;
