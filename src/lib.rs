//! # Placeholder PNG icons for a web app manifest
//!
//! This crate writes solid colour square PNG icons without an image library.
//! The PNG stream is assembled by hand: the 8 byte signature, an IHDR chunk, one zlib compressed IDAT chunk
//! and an empty IEND chunk. Every chunk is a big-endian length, a 4 byte tag, the payload and a CRC-32
//! over tag and payload.
//!
//! The layout follows the [PNG specification].
//! Only 8bit RGBA, non-interlaced images are produced and every scanline uses filter type `0` (None).
//! The same subset can be read back with [`PngDecoder`], which checks every CRC on the way.
//!
//! ## Usage
//!
//! ### Writing the manifest icons
//!
//! The `generate-web-icons` binary takes no arguments and writes four files below `web/icons` in the
//! current directory: `Icon-192.png`, `Icon-maskable-192.png`, `Icon-512.png` and `Icon-maskable-512.png`,
//! all filled with RGBA (108, 99, 255, 255). The same is available from the library:
//!
//! ```no_run
//! # fn main() -> Result<(), web_icons::PngError> {
//! let written = web_icons::IconSet::web().generate()?;
//! assert_eq!(written.len(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! ### Writing a single icon
//!
//! Parent directories are created and an existing file is overwritten.
//!
//! ```no_run
//! # fn main() -> Result<(), web_icons::PngError> {
//! use std::path::Path;
//! use web_icons::{generate_icon, Pixel};
//! generate_icon(Path::new("assets/red.png"), 48, Pixel::new(255, 0, 0, 255))?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Encoding other scanline data
//!
//! [`PngEncoder`] accepts any filtered scanline data of the right length.
//! Each row starts with the filter type byte followed by `width * 4` bytes of RGBA pixels.
//!
//! ```
//! # fn main() -> Result<(), web_icons::PngError> {
//! use web_icons::{PngDecoder, PngEncoder, Pixel};
//! let encoder = PngEncoder::new(2, 1)?;
//! let png = encoder.encode_scanlines(&[0, 255, 0, 0, 255, 0, 0, 255, 255])?;
//! let decoded = PngDecoder::decode(&png)?;
//! assert_eq!(decoded.pixel(1, 0), Some(Pixel::new(0, 0, 255, 255)));
//! # Ok(())
//! # }
//! ```
//!
//! [PNG specification]: <https://www.w3.org/TR/png/>
#![forbid(unsafe_code)]

mod chunk;
mod consts;
mod decoder;
mod encoder;
mod error;
mod header;
mod icon;
mod pixel;
mod utils;

pub use crate::chunk::{encode_chunk, Chunk};
pub use crate::consts::{ICON_COLOR, ICON_DIR, ICON_SIZES, SIGNATURE};
pub use crate::decoder::{DecodedPng, PngDecoder};
pub use crate::encoder::PngEncoder;
pub use crate::error::PngError;
pub use crate::header::PngHeader;
pub use crate::icon::{generate_icon, render_icon, solid_scanlines, IconSet};
pub use crate::pixel::Pixel;
