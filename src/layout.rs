//! Fan layout for a hand of cards.
//!
//! Cards radiate from a pivot below the hand's anchor: each card sits half a
//! card height out from the anchor, rotated by its own fan angle, so the hand
//! forms a circular arc centred on the anchor rotation.

use crate::geometry::{Pose, Vec3};
use serde::Deserialize;

/// Height of a card in table units.
pub const CARD_HEIGHT: f32 = 3.5;
/// Depth offset per hand index; keeps hit regions of stacked cards apart.
pub const Z_STAGGER: f32 = -0.5;
/// Sort order spacing between neighbouring cards in a fan.
pub const SORT_ORDER_STEP: i32 = 4;

/// Where a seat's hand lives on the table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HandLayout {
    pub position: Vec3,
    /// Anchor rotation about the viewing axis, in degrees.
    #[serde(default)]
    pub rotation: f32,
    /// Display layer the hand's cards rest on.
    pub layer_name: String,
}

impl HandLayout {
    pub fn new(position: Vec3, rotation: f32, layer_name: impl Into<String>) -> Self {
        Self { position, rotation, layer_name: layer_name.into() }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite()
    }
}

/// Target of one card in a fanned hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanSlot {
    pub pose: Pose,
    pub sort_order: i32,
}

/// Rotation of the first (leftmost) card in an `n`-card fan.
pub fn fan_start_rotation(n: usize, layout: &HandLayout, fan_degrees: f32) -> f32 {
    let mut start = layout.rotation;
    if n > 1 {
        start += fan_degrees * (n - 1) as f32 / 2.0;
    }
    start
}

/// Compute the fan slot for every index of an `n`-card hand.
///
/// ```
/// use bartok_rs::geometry::Vec3;
/// use bartok_rs::layout::{fan_slots, HandLayout};
///
/// let layout = HandLayout::new(Vec3::ZERO, 0.0, "Hand");
/// let rotations: Vec<f32> =
///     fan_slots(3, &layout, 10.0).iter().map(|s| s.pose.rotation).collect();
/// assert_eq!(rotations, vec![10.0, 0.0, -10.0]);
/// ```
pub fn fan_slots(n: usize, layout: &HandLayout, fan_degrees: f32) -> Vec<FanSlot> {
    let start = fan_start_rotation(n, layout, fan_degrees);
    (0..n)
        .map(|i| {
            let rotation = start - fan_degrees * i as f32;
            let mut position = (Vec3::UP * (CARD_HEIGHT / 2.0)).rotate_z(rotation);
            position = position + layout.position;
            position.z = layout.position.z + Z_STAGGER * i as f32;
            FanSlot { pose: Pose::new(position, rotation), sort_order: SORT_ORDER_STEP * i as i32 }
        })
        .collect()
}
