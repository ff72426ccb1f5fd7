use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    consts::{ICON_COLOR, ICON_DIR, ICON_SIZES, NO_FILTER},
    encoder::PngEncoder,
    error::PngError,
    header::PngHeader,
    pixel::Pixel,
};

/// Builds the raw bitmap of a `size` by `size` square filled with `color`.
///
/// Every scanline is the filter type byte `0` followed by `size` copies of the colour.
///
/// # Errors
///
/// Will return `Err` if `size` is `0` or the bitmap would not fit in memory.
pub fn solid_scanlines(size: u32, color: Pixel) -> Result<Vec<u8>, PngError> {
    PngHeader::new(size, size).validate()?;
    Ok(fill(size as usize, color))
}

// callers validate size through PngHeader::validate first
fn fill(size: usize, color: Pixel) -> Vec<u8> {
    let mut row = Vec::with_capacity(1 + size * 4);
    row.push(NO_FILTER);
    for _ in 0..size {
        row.extend_from_slice(&color.to_bytes());
    }
    row.repeat(size)
}

/// Encodes a solid colour square icon and returns the PNG file bytes.
///
/// # Errors
///
/// Will return `Err` if `size` is `0` or the image is too large to encode.
pub fn render_icon(size: u32, color: Pixel) -> Result<Vec<u8>, PngError> {
    let scanlines = solid_scanlines(size, color)?;
    PngEncoder::new(size, size)?.encode_scanlines(&scanlines)
}

/// Encodes a solid colour square icon and writes it to `path`, overwriting any existing file.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Will return `Err` if encoding fails or the directory or file cannot be written.
pub fn generate_icon(path: &Path, size: u32, color: Pixel) -> Result<(), PngError> {
    let bytes = render_icon(size, color)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
        debug!(dir = %parent.display(), "ensured output directory");
    }
    fs::write(path, &bytes)?;
    info!(path = %path.display(), size, bytes = bytes.len(), "wrote icon");
    Ok(())
}

/// A set of manifest icons: every size in a plain and a maskable variant, one colour.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconSet {
    pub dir: PathBuf,
    pub sizes: Vec<u32>,
    pub color: Pixel,
}

impl IconSet {
    /// The web manifest icons: `web/icons`, sizes 192 and 512, colour (108, 99, 255, 255).
    #[must_use]
    pub fn web() -> Self {
        Self {dir: PathBuf::from(ICON_DIR), sizes: ICON_SIZES.to_vec(), color: ICON_COLOR}
    }
    /// File names for one size, plain variant first.
    #[must_use]
    pub fn file_names(size: u32) -> [String; 2] {
        [format!("Icon-{size}.png"), format!("Icon-maskable-{size}.png")]
    }
    /// Every path the set writes, relative to the current directory, in generation order.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.sizes
            .iter()
            .flat_map(|&size| Self::file_names(size))
            .map(|name| self.dir.join(name))
            .collect()
    }
    /// Writes every icon of the set relative to the current directory and returns the written paths.
    ///
    /// # Errors
    ///
    /// Will return `Err` on the first icon that fails to encode or write.
    pub fn generate(&self) -> Result<Vec<PathBuf>, PngError> {
        self.generate_in(Path::new(""))
    }
    /// Same as [`IconSet::generate`] but with the set's directory taken relative to `base`.
    ///
    /// # Errors
    ///
    /// Will return `Err` on the first icon that fails to encode or write.
    pub fn generate_in(&self, base: &Path) -> Result<Vec<PathBuf>, PngError> {
        let dir = base.join(&self.dir);
        fs::create_dir_all(&dir)?;
        let mut written = Vec::with_capacity(self.sizes.len() * 2);
        for &size in &self.sizes {
            for name in Self::file_names(size) {
                let path = dir.join(name);
                generate_icon(&path, size, self.color)?;
                written.push(path);
            }
        }
        Ok(written)
    }
}
