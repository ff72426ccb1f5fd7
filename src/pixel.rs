/// An 8bit per channel RGBA colour.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    /// Creates a pixel from its four channel values.
    #[inline]
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {red, green, blue, alpha}
    }
    /// The channels in scanline order: red, green, blue, alpha.
    #[inline]
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
    // panics if index + 4 > input.len(). used only in decoder.
    #[inline]
    pub(crate) const fn from_input(input: &[u8], index: usize) -> Self {
        Self::new(input[index], input[index + 1], input[index + 2], input[index + 3])
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::is_identical;
    use super::Pixel;
    #[test]
    const fn infallible_to_bytes() {
        assert!(is_identical(&Pixel::new(108, 99, 255, 255).to_bytes(), &[108, 99, 255, 255]));
        assert!(is_identical(&Pixel::new(0, 0, 0, 0).to_bytes(), &[0, 0, 0, 0]));
    }
    #[test]
    const fn infallible_from_input() {
        let input = [0, 255, 0, 0, 255, 7];
        let pixel = Pixel::from_input(&input, 1);
        assert!(is_identical(&pixel.to_bytes(), &[255, 0, 0, 255]));
        let pixel = Pixel::from_input(&input, 2);
        assert!(pixel.red == 0 && pixel.green == 0 && pixel.blue == 255 && pixel.alpha == 7);
    }
}
