// Host-side tests for card composition and pointer picking.

use card_core::*;
use glam::{Mat4, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::PI;

fn masked(image_size: Option<(u32, u32)>) -> FaceSpec {
    let mask = MaskCompositor::with_rng(MaskConfig::default(), &mut StdRng::seed_from_u64(1))
        .unwrap();
    FaceSpec {
        material: FaceMaterial::Masked(mask),
        image_size,
    }
}

fn mask_of(card: &Card, side: FaceSide) -> &MaskCompositor {
    match &card.face(side).unwrap().material {
        FaceMaterial::Masked(mask) => mask,
        FaceMaterial::Image => panic!("expected a masked face"),
    }
}

#[test]
fn front_plane_fits_card_width_and_image_aspect() {
    let layout = CardLayout::default();
    let placement = layout.front_plane(Some((1024, 1365)));
    let width = CARD_WIDTH - 2.0 * IMAGE_MARGIN;
    assert!((placement.size.width - width).abs() < 1e-6);
    assert!((placement.size.height - width * 1365.0 / 1024.0).abs() < 1e-5);
    assert!((placement.offset.z - (CARD_DEPTH / 2.0 + IMAGE_Z_OFFSET)).abs() < 1e-7);
    assert_eq!(placement.rotation_y, 0.0);
}

#[test]
fn unknown_image_size_falls_back_to_square() {
    let placement = CardLayout::default().front_plane(None);
    assert_eq!(placement.size.width, placement.size.height);
    assert_eq!(image_aspect(Some((0, 10)), 1.0), 1.0);
    assert_eq!(image_aspect(Some((200, 100)), 1.0), 0.5);
}

#[test]
fn back_plane_faces_away_and_reuses_front_aspect() {
    let layout = CardLayout::default();
    let back = layout.back_plane(None, 1.5);
    assert!((back.size.aspect() - 1.5).abs() < 1e-6);
    assert!(back.offset.z < 0.0);
    assert_eq!(back.rotation_y, PI);

    let own = layout.back_plane(Some((100, 50)), 1.5);
    assert!((own.size.aspect() - 0.5).abs() < 1e-6);
}

#[test]
fn missing_faces_are_omitted() {
    let layout = CardLayout::default();
    let card = Card::new(&layout, None, None);
    assert_eq!(card.faces().count(), 0);

    let card = Card::new(&layout, Some(masked(None)), None);
    assert!(card.face(FaceSide::Front).is_some());
    assert!(card.face(FaceSide::Back).is_none());
    assert_eq!(card.faces().count(), 1);
}

#[test]
fn faces_are_listed_back_to_front() {
    let card = Card::new(
        &CardLayout::default(),
        Some(masked(Some((1024, 1365)))),
        Some(FaceSpec {
            material: FaceMaterial::Image,
            image_size: None,
        }),
    );
    let sides: Vec<_> = card.faces().map(|f| f.side).collect();
    assert_eq!(sides, vec![FaceSide::Back, FaceSide::Front]);
    // Back face without its own size matches the front artwork
    let front = card.face(FaceSide::Front).unwrap().aspect();
    let back = card.face(FaceSide::Back).unwrap().aspect();
    assert!((front - back).abs() < 1e-6);
}

#[test]
fn only_the_front_face_reacts_to_hover() {
    let mut card = Card::new(
        &CardLayout::default(),
        Some(masked(Some((1024, 1365)))),
        Some(masked(None)),
    );
    for _ in 0..30 {
        card.tick(1.0 / 60.0, true);
    }
    let front = mask_of(&card, FaceSide::Front);
    let back = mask_of(&card, FaceSide::Back);
    assert!(front.is_hovered());
    assert!(front.state().current.size > 1.5);
    assert!(!back.is_hovered());
    assert_eq!(back.state().current, Multipliers::IDLE);
    // Both keep orbiting
    assert!(back.state().elapsed_time > 0.0);
}

#[test]
fn tick_forwards_plane_aspect_to_the_mask() {
    let mut card = Card::new(&CardLayout::default(), Some(masked(Some((1000, 1500)))), None);
    card.tick(1.0 / 60.0, false);
    let aspect = mask_of(&card, FaceSide::Front).uniforms().aspect;
    assert!((aspect - 1.5).abs() < 1e-5);
}

#[test]
fn new_artwork_size_refits_plane_and_reaches_the_mask() {
    let mut card = Card::new(
        &CardLayout::default(),
        Some(masked(Some((1024, 1365)))),
        Some(masked(None)),
    );
    card.tick(1.0 / 60.0, false);
    let before = mask_of(&card, FaceSide::Front).uniforms().aspect;
    assert!((before - 1365.0 / 1024.0).abs() < 1e-5);

    // Landscape replacement; the back has no size of its own and follows
    assert!(card.set_image_size(FaceSide::Front, Some((2000, 1000))));
    for _ in 0..3 {
        card.tick(1.0 / 60.0, false);
    }
    let front = card.face(FaceSide::Front).unwrap();
    assert_eq!(front.image_size, Some((2000, 1000)));
    assert!((front.aspect() - 0.5).abs() < 1e-6);
    assert!((mask_of(&card, FaceSide::Front).uniforms().aspect - 0.5).abs() < 1e-6);
    assert!((mask_of(&card, FaceSide::Back).uniforms().aspect - 0.5).abs() < 1e-6);
    // Width stays fitted to the card
    let width = CARD_WIDTH - 2.0 * IMAGE_MARGIN;
    assert!((front.placement.size.width - width).abs() < 1e-6);
}

#[test]
fn back_with_its_own_size_ignores_front_refit() {
    let mut card = Card::new(
        &CardLayout::default(),
        Some(masked(Some((1024, 1365)))),
        Some(masked(Some((100, 300)))),
    );
    card.set_image_size(FaceSide::Front, Some((100, 100)));
    card.tick(1.0 / 60.0, false);
    assert!((mask_of(&card, FaceSide::Back).uniforms().aspect - 3.0).abs() < 1e-5);

    // Clearing the back size falls back to the front again
    assert!(card.set_image_size(FaceSide::Back, None));
    card.tick(1.0 / 60.0, false);
    assert!((mask_of(&card, FaceSide::Back).uniforms().aspect - 1.0).abs() < 1e-6);
}

#[test]
fn resizing_a_missing_face_is_refused() {
    let mut card = Card::new(&CardLayout::default(), Some(masked(None)), None);
    assert!(!card.set_image_size(FaceSide::Back, Some((10, 20))));
    assert!(card.face(FaceSide::Back).is_none());
    assert_eq!(card.face(FaceSide::Front).unwrap().aspect(), 1.0);
}

#[test]
fn face_feather_is_tunable_through_the_card() {
    let mut card = Card::new(&CardLayout::default(), Some(masked(None)), None);
    if let Some(CardFace {
        material: FaceMaterial::Masked(mask),
        ..
    }) = card.face_mut(FaceSide::Front)
    {
        mask.set_edge_feather(0.02).unwrap();
    }
    card.tick(1.0 / 60.0, false);
    assert_eq!(mask_of(&card, FaceSide::Front).uniforms().edge_feather, 0.02);
    assert!(card.face_mut(FaceSide::Back).is_none());
}

#[test]
fn ray_hits_plane_with_top_left_uv_origin() {
    let size = PlaneSize {
        width: 2.0,
        height: 2.0,
    };
    let down = Vec3::NEG_Z;
    let center = Ray {
        origin: Vec3::new(0.0, 0.0, 5.0),
        dir: down,
    };
    let uv = ray_plane_uv(center, Mat4::IDENTITY, size).unwrap();
    assert!((uv - Vec2::splat(0.5)).length() < 1e-6);

    let upper_right = Ray {
        origin: Vec3::new(0.5, 0.5, 5.0),
        dir: down,
    };
    let uv = ray_plane_uv(upper_right, Mat4::IDENTITY, size).unwrap();
    assert!((uv - Vec2::new(0.75, 0.25)).length() < 1e-6);
}

#[test]
fn ray_misses_outside_behind_or_parallel() {
    let size = PlaneSize {
        width: 1.0,
        height: 1.0,
    };
    let outside = Ray {
        origin: Vec3::new(2.0, 0.0, 5.0),
        dir: Vec3::NEG_Z,
    };
    assert!(ray_plane_uv(outside, Mat4::IDENTITY, size).is_none());
    let away = Ray {
        origin: Vec3::new(0.0, 0.0, 5.0),
        dir: Vec3::Z,
    };
    assert!(ray_plane_uv(away, Mat4::IDENTITY, size).is_none());
    let parallel = Ray {
        origin: Vec3::new(0.0, 0.0, 5.0),
        dir: Vec3::X,
    };
    assert!(ray_plane_uv(parallel, Mat4::IDENTITY, size).is_none());
    // Hits from behind still count
    let behind = Ray {
        origin: Vec3::new(0.0, 0.0, -5.0),
        dir: Vec3::Z,
    };
    assert!(ray_plane_uv(behind, Mat4::IDENTITY, size).is_some());
}

#[test]
fn pointer_over_card_center_hovers_front() {
    let (w, h) = (800.0, 600.0);
    let camera = Camera::looking_at_card(w / h);
    let card = Card::new(&CardLayout::default(), Some(masked(Some((1024, 1365)))), None);

    let ray = screen_to_world_ray(&camera, w, h, w / 2.0, h / 2.0);
    assert!((ray.dir - Vec3::NEG_Z).length() < 1e-4);
    assert!(card.front_hit(ray));

    let corner = screen_to_world_ray(&camera, w, h, 0.0, 0.0);
    assert!(!card.front_hit(corner));
}

#[test]
fn card_without_front_is_never_hovered() {
    let (w, h) = (800.0, 600.0);
    let camera = Camera::looking_at_card(w / h);
    let card = Card::new(&CardLayout::default(), None, Some(masked(None)));
    let ray = screen_to_world_ray(&camera, w, h, w / 2.0, h / 2.0);
    assert!(!card.front_hit(ray));
}
