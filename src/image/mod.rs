pub mod buffer;
pub mod io;
pub mod ppm;
pub mod traits;

pub use self::buffer::PixelBuffer;
pub use self::traits::{ImageView, ImageViewMut, Rows};
