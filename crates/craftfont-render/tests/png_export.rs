//! PNG export round trip through the filesystem.

use craftfont_core::geometry::Rect;
use craftfont_render::{Color, Pixmap, RasterSurface, SurfaceError};

#[test]
fn test_save_png_writes_readable_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out.png");

    let mut pixmap = Pixmap::new(8, 4);
    pixmap.fill_rect(Rect::new(2, 1, 3, 2), Color::from_hex(0xFFAA00));
    pixmap.save_png(&path).expect("save");

    let decoded = image::open(&path).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (8, 4));
    assert_eq!(decoded.get_pixel(3, 2).0, [0xFF, 0xAA, 0x00, 0xFF]);
    assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0]);
}

#[test]
fn test_save_empty_pixmap_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pixmap = Pixmap::new(0, 3);

    let err = pixmap.save_png(dir.path().join("empty.png")).unwrap_err();
    assert_eq!(err, SurfaceError::InvalidDimensions { width: 0, height: 3 });
}

#[test]
fn test_from_raw_rejects_short_buffer() {
    let result = Pixmap::from_raw(2, 2, vec![0; 3]);
    assert!(matches!(result, Err(SurfaceError::InvalidDimensions { .. })));
}
