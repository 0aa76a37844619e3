//! Integer rectangle tests used by the raster clipping code.

use craftfont_core::geometry::{Pos, Rect, Size};

#[test]
fn test_intersect_overlapping() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 10, 10);

    assert_eq!(a.intersect(&b), Some(Rect::new(5, 5, 5, 5)));
}

#[test]
fn test_intersect_disjoint() {
    let a = Rect::new(0, 0, 4, 4);
    let b = Rect::new(4, 0, 4, 4);

    // Touching edges do not overlap
    assert_eq!(a.intersect(&b), None);
}

#[test]
fn test_negative_origin_is_clipped() {
    let surface = Rect::new(0, 0, 8, 8);
    let rect = Rect::new(-3, -2, 5, 5);

    assert_eq!(rect.intersect(&surface), Some(Rect::new(0, 0, 2, 3)));
}

#[test]
fn test_from_origin_size() {
    let rect = Rect::from_origin_size(Pos::new(2, 3), Size::new(4u32, 5u32));
    assert_eq!(rect, Rect::new(2, 3, 4, 5));
    assert_eq!(rect.right(), 6);
    assert_eq!(rect.bottom(), 8);
}

#[test]
fn test_empty_rect() {
    assert!(Rect::new(0, 0, 0, 5).is_empty());
    assert!(Rect::new(0, 0, 5, -1).is_empty());
    assert!(!Rect::new(0, 0, 1, 1).is_empty());
}

#[test]
fn test_size_scale() {
    let cell = Size::new(8u32, 9u32) * 3;
    assert_eq!(cell, Size::new(24, 27));
}

#[test]
fn test_translate_saturates() {
    let rect = Rect::new(i32::MAX - 1, i32::MIN + 1, 4, 4);
    let moved = rect.translate(8, -8);

    assert_eq!(moved, Rect::new(i32::MAX, i32::MIN, 4, 4));
    assert_eq!(moved.intersect(&Rect::new(0, 0, 64, 64)), None);
}
