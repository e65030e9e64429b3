// Host-side tests for CPU image handling.

use card_core::*;
use glam::{Vec2, Vec4};

#[test]
fn rejects_empty_and_mismatched_buffers() {
    assert_eq!(
        ImageRgba::new(0, 4, vec![]),
        Err(ImageError::Empty {
            width: 0,
            height: 4
        })
    );
    assert_eq!(
        ImageRgba::new(2, 2, vec![0; 15]),
        Err(ImageError::SizeMismatch {
            expected: 16,
            actual: 15
        })
    );
}

#[test]
fn oversized_dimensions_are_rejected_without_overflow() {
    // Byte count overflows usize on every target
    assert_eq!(
        ImageRgba::new(u32::MAX, u32::MAX, Vec::new()),
        Err(ImageError::TooLarge {
            width: u32::MAX,
            height: u32::MAX,
        })
    );
}

#[test]
fn sampling_clamps_to_edge() {
    let mut pixels = vec![0u8; 8];
    pixels[4..].copy_from_slice(&[0, 0, 255, 255]);
    let image = ImageRgba::new(2, 1, pixels).unwrap();
    assert_eq!(image.sample(Vec2::new(-3.0, 0.5)), Vec4::new(0.0, 0.0, 0.0, 0.0));
    assert_eq!(image.sample(Vec2::new(7.0, 0.5)), Vec4::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(image.sample(Vec2::ONE), Vec4::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(image.pixel(99, 99), [0, 0, 255, 255]);
}

#[test]
fn demo_pattern_is_opaque_and_sized() {
    let image = ImageRgba::demo_pattern(DEMO_IMAGE_WIDTH / 8, DEMO_IMAGE_HEIGHT / 8);
    assert_eq!(image.size(), (DEMO_IMAGE_WIDTH / 8, DEMO_IMAGE_HEIGHT / 8));
    assert_eq!(
        image.as_bytes().len(),
        (image.width() * image.height() * 4) as usize
    );
    assert!(image.as_bytes().chunks(4).all(|px| px[3] == 255));
    assert!(image.aspect() > 1.0);
    // Warm at the top, dark at the bottom
    let top = image.sample(Vec2::new(0.05, 0.02));
    let bottom = image.sample(Vec2::new(0.05, 0.98));
    assert!(top.x > bottom.x);
}

#[test]
fn constant_color_samples_everywhere() {
    let c = Vec4::new(0.1, 0.2, 0.3, 0.4);
    assert_eq!(c.sample(Vec2::ZERO), c);
    assert_eq!(c.sample(Vec2::new(0.7, 0.2)), c);
}
