use std::path::Path;

/// A single camera frame as 8-bit grayscale pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Image {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Creates a frame where every pixel has the same brightness.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        let len = width as usize * height as usize;
        Self::new(width, height, vec![value; len])
    }

    /// Loads a raw grayscale dump. The file is treated as a single row.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let pixels = std::fs::read(path)?;
        let width = u32::try_from(pixels.len())?;
        Ok(Self::new(width, 1, pixels))
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}
