//! Layout algorithm - radial tier positioning
//!
//! Pure function mapping (tier, sibling index, sibling count) to a plane
//! coordinate. Each tier sits on a ring whose radius grows super-linearly
//! with depth, keeping descendants visually separated from ancestors.
//! Deterministic by construction: the anti-overlap perturbation is a
//! function of the index only, never randomness.

use std::f32::consts::PI;

use mindgraph_types::Position;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Base unit for radius calculations
const BASE_RADIUS: f32 = 200.0;

/// Controls how quickly radius grows with tiers
const SPACING_MULTIPLIER: f32 = 1.2;

/// Per-tier ring configuration
#[derive(Debug, Clone, Copy)]
struct TierConfig {
    radius: f32,
    y_offset: f32,
    spread_angle: f32,
}

/// Main topics: full circle around the root
const TIER_TOPIC: TierConfig = TierConfig {
    radius: BASE_RADIUS,
    y_offset: 0.0,
    spread_angle: 2.0 * PI,
};

/// Subtopics: 90 degree fan
const TIER_SUBTOPIC: TierConfig = TierConfig {
    radius: BASE_RADIUS * SPACING_MULTIPLIER * 1.4,
    y_offset: BASE_RADIUS * 0.4,
    spread_angle: PI / 2.0,
};

/// Points: 60 degree fan
const TIER_POINT: TierConfig = TierConfig {
    radius: BASE_RADIUS * SPACING_MULTIPLIER * 1.8,
    y_offset: BASE_RADIUS * 0.8,
    spread_angle: PI / 3.0,
};

/// Subpoints: 45 degree fan, furthest from center
const TIER_SUBPOINT: TierConfig = TierConfig {
    radius: BASE_RADIUS * SPACING_MULTIPLIER * 2.2,
    y_offset: BASE_RADIUS * 1.2,
    spread_angle: PI / 4.0,
};

fn config_for_tier(tier: usize) -> TierConfig {
    match tier {
        1 => TIER_TOPIC,
        2 => TIER_SUBTOPIC,
        3 => TIER_POINT,
        // Unknown tiers fall back to the subpoint ring
        _ => TIER_SUBPOINT,
    }
}

// =============================================================================
// POSITIONING
// =============================================================================

/// Compute the canvas position for a node.
///
/// `index` is the node's zero-based position among its siblings,
/// `sibling_count` the size of that sibling set. Tier 0 is always the
/// origin. A lone sibling (`sibling_count == 1`) is safe: the angle step
/// divisor is clamped to 1.
pub fn node_position(tier: usize, index: usize, sibling_count: usize) -> Position {
    if tier == 0 {
        return Position::ZERO;
    }

    let config = config_for_tier(tier);

    let angle_step = config.spread_angle / (sibling_count.saturating_sub(1)).max(1) as f32;
    let base_angle = -config.spread_angle / 2.0 + angle_step * index as f32;

    // Slight index-keyed variation to keep nodes off exact shared rays
    let radius_variation = (index as f32 * 2.5).sin() * (config.radius * 0.05);
    let angle_variation = (index as f32 * 1.5).cos() * 0.1;

    let final_radius = config.radius + radius_variation;
    let final_angle = base_angle + angle_variation;

    Position::new(
        final_radius * final_angle.cos(),
        final_radius * final_angle.sin() + config.y_offset,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_always_at_origin() {
        assert_eq!(node_position(0, 0, 1), Position::ZERO);
        assert_eq!(node_position(0, 3, 10), Position::ZERO);
    }

    #[test]
    fn test_deterministic() {
        for tier in 1..=4 {
            for index in 0..6 {
                let a = node_position(tier, index, 6);
                let b = node_position(tier, index, 6);
                assert_eq!(a, b, "tier {tier} index {index} not reproducible");
            }
        }
    }

    #[test]
    fn test_single_sibling_is_finite_every_tier() {
        for tier in 0..=4 {
            let pos = node_position(tier, 0, 1);
            assert!(pos.is_finite(), "tier {tier} produced {pos:?}");
        }
    }

    #[test]
    fn test_siblings_get_distinct_positions() {
        let positions: Vec<Position> = (0..5).map(|i| node_position(1, i, 5)).collect();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                assert_ne!(positions[i], positions[j], "siblings {i} and {j} collide");
            }
        }
    }

    #[test]
    fn test_radius_grows_with_tier() {
        // Measure ring distance at index 0 (y_offset removed) per tier.
        let ring = |tier: usize| {
            let config_offset = match tier {
                1 => 0.0,
                2 => 80.0,
                3 => 160.0,
                _ => 240.0,
            };
            let p = node_position(tier, 0, 1);
            (p.x.powi(2) + (p.y - config_offset).powi(2)).sqrt()
        };
        assert!(ring(1) < ring(2));
        assert!(ring(2) < ring(3));
        assert!(ring(3) < ring(4));
    }

    #[test]
    fn test_unknown_tier_uses_subpoint_config() {
        assert_eq!(node_position(7, 2, 5), node_position(4, 2, 5));
    }

    #[test]
    fn test_perturbation_is_index_keyed_only() {
        // Same index, different sibling totals: radius perturbation and
        // angle perturbation depend on index alone, so positions differ
        // only through the angle step.
        let a = node_position(2, 0, 1);
        let b = node_position(2, 0, 2);
        // index 0 keeps base_angle = -spread/2 ± the same variation
        assert_eq!(a, b);
    }
}
