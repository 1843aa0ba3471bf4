//! Re-encoding extracted crops.
//!
//! Confirmed crops are handed back to the host as JPEG bytes, the same
//! artifact the browser produced with `canvas.toBlob("image/jpeg", 1)`.

mod jpeg;

pub use jpeg::{encode_image, encode_jpeg, EncodeError};
