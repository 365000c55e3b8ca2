use glam::Vec3;
use image::{Rgb, RgbImage};

/// Rendered, gamma-corrected pixels. Rows are stored bottom to top so that
/// `pixel(0, 0)` is the bottom-left corner, matching fragment coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Vec3>,
}

impl Frame {
    pub(crate) fn from_rows(width: u32, height: u32, pixels: Vec<Vec3>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y as usize * self.width as usize) + x as usize]
    }

    pub fn pixels(&self) -> &[Vec3] {
        &self.pixels
    }

    /// Row `y` (bottom-up) as a slice.
    pub fn row(&self, y: u32) -> &[Vec3] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    /// 8-bit image with the top row first, values clamped to [0, 1].
    pub fn to_rgb_image(&self) -> RgbImage {
        let mut image = RgbImage::new(self.width, self.height);
        for y in 0..self.height {
            let image_row = self.height - 1 - y;
            for x in 0..self.width {
                image.put_pixel(x, image_row, to_rgb(self.pixel(x, y)));
            }
        }
        image
    }
}

fn to_rgb(color: Vec3) -> Rgb<u8> {
    let c = color.clamp(Vec3::ZERO, Vec3::ONE);
    let r = (c.x * 255.999) as u8;
    let g = (c.y * 255.999) as u8;
    let b = (c.z * 255.999) as u8;
    Rgb([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_is_flipped_to_top_down() {
        let frame = Frame::from_rows(
            1,
            2,
            vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)],
        );
        let image = frame.to_rgb_image();
        assert_eq!(image.get_pixel(0, 0), &Rgb([0, 0, 255]));
        assert_eq!(image.get_pixel(0, 1), &Rgb([255, 0, 0]));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(to_rgb(Vec3::new(7.0, -1.0, 0.5)), Rgb([255, 0, 127]));
    }
}
