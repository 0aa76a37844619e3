//! Synthetic glyph atlases.
//!
//! All builders return a 128x128 image: 16x16 cells of 8x8 pixels, white on transparent.

use std::io::Cursor;

use craftfont_render::{Color, Pixmap};
use image::{ImageFormat, RgbaImage};

/// Edge length of a synthetic atlas.
pub const ATLAS_SIZE: u32 = 128;

const CELL: u32 = 8;

fn cell_origin(index: usize) -> (u32, u32) {
    ((index % 16) as u32 * CELL, (index / 16) as u32 * CELL)
}

/// An atlas where `paint(index, x, y)` decides, per cell-local pixel, whether it is inked.
pub fn patterned_atlas(mut paint: impl FnMut(usize, u32, u32) -> bool) -> RgbaImage {
    let mut image = RgbaImage::new(ATLAS_SIZE, ATLAS_SIZE);
    for index in 0..256 {
        let (ox, oy) = cell_origin(index);
        for y in 0..CELL {
            for x in 0..CELL {
                if paint(index, x, y) {
                    image.put_pixel(ox + x, oy + y, Color::WHITE.into());
                }
            }
        }
    }
    image
}

/// Every cell fully inked.
pub fn solid_atlas() -> RgbaImage {
    patterned_atlas(|_, _, _| true)
}

/// Only the listed cells are fully inked.
pub fn solid_cells_atlas(indices: &[usize]) -> RgbaImage {
    patterned_atlas(|index, _, _| indices.contains(&index))
}

/// Every cell inked in its leftmost pixel column only. Blits then show up as thin columns
/// whose positions are easy to assert on.
pub fn column_atlas() -> RgbaImage {
    patterned_atlas(|_, x, _| x == 0)
}

/// Nothing inked.
pub fn blank_atlas() -> RgbaImage {
    RgbaImage::new(ATLAS_SIZE, ATLAS_SIZE)
}

/// Encode an atlas as PNG bytes, for exercising decode paths.
pub fn encode_png(image: &RgbaImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("encoding an in-memory PNG should not fail");
    bytes.into_inner()
}

/// Columns of `pixmap` holding at least one non-transparent pixel in row `y`.
pub fn inked_columns(pixmap: &Pixmap, y: u32) -> Vec<u32> {
    (0..pixmap.width())
        .filter(|&x| pixmap.pixel(x, y).is_some_and(|c| !c.is_transparent()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atlas_size() {
        assert_eq!(solid_atlas().dimensions(), (ATLAS_SIZE, ATLAS_SIZE));
        assert_eq!(blank_atlas().dimensions(), (ATLAS_SIZE, ATLAS_SIZE));
    }

    #[test]
    fn test_solid_cells() {
        let image = solid_cells_atlas(&[17]);
        // Index 17 is column 1, row 1.
        assert_eq!(image.get_pixel(8, 8).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(15, 15).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(16, 8).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_column_atlas() {
        let pixmap = Pixmap::from_image(column_atlas());
        let columns = inked_columns(&pixmap, 3);
        assert_eq!(columns.len(), 16);
        assert_eq!(columns[1], 8);
    }

    #[test]
    fn test_png_round_trip_dimensions() {
        let bytes = encode_png(&column_atlas());
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, column_atlas());
    }
}
