// Host-side tests for circle field generation.
// Individual samples are random; only ranges and distribution shape are checked.

use card_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn generated_values_stay_within_configured_ranges() {
    let cfg = MaskConfig::showcase().field;
    let mut rng = rng();
    for _ in 0..20 {
        let field = CircleField::generate_with_rng(MAX_CIRCLES, &cfg, &mut rng).unwrap();
        assert_eq!(field.count(), MAX_CIRCLES);
        for c in field.iter() {
            assert!(c.size >= cfg.min_size && c.size <= cfg.max_size, "size {}", c.size);
            assert!(
                c.opacity >= cfg.min_opacity && c.opacity <= cfg.max_opacity,
                "opacity {}",
                c.opacity
            );
            assert!(
                c.distance >= cfg.min_distance_ratio && c.distance <= cfg.max_distance_ratio,
                "distance {}",
                c.distance
            );
            assert!(c.base_angle >= 0.0 && c.base_angle < TAU, "angle {}", c.base_angle);
            let (lo, hi) = (
                cfg.slow_speed_min.min(cfg.slow_speed_max),
                cfg.slow_speed_min.max(cfg.slow_speed_max),
            );
            assert!(c.speed >= lo && c.speed <= hi, "speed {}", c.speed);
        }
    }
}

#[test]
fn circles_near_center_are_larger_on_average() {
    let cfg = MaskConfig::default().field;
    let mid = 0.5 * (cfg.min_distance_ratio + cfg.max_distance_ratio);
    let mut rng = rng();
    let (mut near_sum, mut near_n) = (0.0f64, 0usize);
    let (mut far_sum, mut far_n) = (0.0f64, 0usize);
    for _ in 0..40 {
        let field = CircleField::generate_with_rng(MAX_CIRCLES, &cfg, &mut rng).unwrap();
        for c in field.iter() {
            if c.distance < mid {
                near_sum += c.size as f64;
                near_n += 1;
            } else if c.distance > mid {
                far_sum += c.size as f64;
                far_n += 1;
            }
        }
    }
    assert!(near_n > 0 && far_n > 0);
    let near_mean = near_sum / near_n as f64;
    let far_mean = far_sum / far_n as f64;
    assert!(
        near_mean > far_mean,
        "near mean {near_mean} should exceed far mean {far_mean}"
    );
}

#[test]
fn size_decreases_with_distance_within_a_field() {
    let cfg = MaskConfig::default().field;
    let field = CircleField::generate_with_rng(MAX_CIRCLES, &cfg, &mut rng()).unwrap();
    let mut circles = field.active().to_vec();
    circles.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    for pair in circles.windows(2) {
        assert!(pair[0].size >= pair[1].size);
    }
}

#[test]
fn count_above_capacity_is_clamped() {
    let cfg = FieldConfig::default();
    let field = CircleField::generate_with_rng(MAX_CIRCLES + 50, &cfg, &mut rng()).unwrap();
    assert_eq!(field.count(), MAX_CIRCLES);
    assert_eq!(field.capacity(), MAX_CIRCLES);
}

#[test]
fn zero_count_yields_empty_field() {
    let field = CircleField::generate(0, &FieldConfig::default()).unwrap();
    assert!(field.is_empty());
    assert!(field.get(0).is_none());
}

#[test]
fn degenerate_ranges_collapse_to_a_fixed_point() {
    let cfg = FieldConfig {
        min_distance_ratio: 0.5,
        max_distance_ratio: 0.5,
        min_size: 0.1,
        max_size: 0.1,
        ..FieldConfig::default()
    };
    let field = CircleField::generate(1, &cfg).unwrap();
    assert_eq!(field.count(), 1);
    let c = field.get(0).unwrap();
    assert_eq!(c.distance, 0.5);
    assert_eq!(c.size, 0.1);
}

#[test]
fn invalid_ranges_are_rejected() {
    let cfg = FieldConfig {
        min_size: 0.3,
        max_size: 0.1,
        ..FieldConfig::default()
    };
    assert!(matches!(
        CircleField::generate(10, &cfg),
        Err(ConfigError::InvertedRange { field: "size", .. })
    ));

    let cfg = FieldConfig {
        min_distance_ratio: 0.8,
        max_distance_ratio: 0.2,
        ..FieldConfig::default()
    };
    assert!(CircleField::generate(10, &cfg).is_err());
}

#[test]
fn separate_generations_are_independent() {
    let cfg = FieldConfig::default();
    let mut rng = rng();
    let a = CircleField::generate_with_rng(16, &cfg, &mut rng).unwrap();
    let b = CircleField::generate_with_rng(16, &cfg, &mut rng).unwrap();
    assert_ne!(a, b);
}

#[test]
fn seeded_generation_is_reproducible() {
    let cfg = FieldConfig::default();
    let a = CircleField::generate_with_rng(32, &cfg, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = CircleField::generate_with_rng(32, &cfg, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn from_circles_truncates_to_capacity() {
    let circles = vec![
        CircleDescriptor {
            base_angle: 0.0,
            distance: 0.2,
            size: 0.05,
            speed: 0.0,
            opacity: 1.0,
        };
        MAX_CIRCLES + 3
    ];
    let field = CircleField::from_circles(&circles);
    assert_eq!(field.count(), MAX_CIRCLES);
    assert_eq!(field.get(MAX_CIRCLES - 1), Some(&circles[0]));
}

#[test]
fn packed_uniforms_mirror_the_field() {
    let field =
        CircleField::generate_with_rng(37, &FieldConfig::default(), &mut rng()).unwrap();
    let packed = CircleUniforms::from_field(&field);
    for (i, c) in field.iter().enumerate() {
        assert_eq!(packed.params[i], [c.base_angle, c.distance, c.size, c.speed]);
        assert_eq!(packed.opacity(i), c.opacity);
    }
    // Inactive slots stay zeroed
    assert_eq!(packed.params[37], [0.0; 4]);
    assert_eq!(packed.opacity(37), 0.0);
}
