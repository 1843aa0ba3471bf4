//! Decoding the source image for extraction.
//!
//! The browser displays the image with EXIF orientation applied, and crop
//! rectangles are measured on that display. Decoding therefore applies the
//! same orientation so pixel space and display space line up.
//!
//! Supported formats are JPEG and PNG; the format is sniffed from the bytes.

mod source;
mod types;

pub use source::{decode_image, read_orientation};
pub use types::{DecodeError, DecodedImage, Orientation};
