//! Volumes that strokes can be cropped against.

pub use self::ball::{Ball, CropSphere, ParseBallError};
pub use self::crop_volume::CropVolume;

mod ball;
mod crop_volume;
