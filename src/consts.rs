use crate::pixel::Pixel;

pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
pub const IHDR: [u8; 4] = *b"IHDR";
pub const IDAT: [u8; 4] = *b"IDAT";
pub const IEND: [u8; 4] = *b"IEND";
pub const HEADER_SIZE: usize = 13;
pub const BIT_DEPTH: u8 = 8;
pub const COLOR_TYPE_RGBA: u8 = 6;
pub const MAX_CHUNK_LEN: usize = i32::MAX as usize; // lengths above 2^31-1 are invalid PNG
pub const NO_FILTER: u8 = 0;
pub const ICON_DIR: &str = "web/icons";
pub const ICON_SIZES: [u32; 2] = [192, 512];
pub const ICON_COLOR: Pixel = Pixel::new(108, 99, 255, 255);
