//! Geometry capability of the host surface and the layout derived from it.

use serde::{Deserialize, Serialize};

use crate::config::Orientation;

/// What the core needs from the rendering surface.
pub trait Geometry {
    /// Full extent of one item along the scroll axis, margins included.
    fn item_extent(&self) -> f32;
    /// Position the track at `offset` immediately.
    fn apply_offset(&mut self, offset: f32);
}

/// Fixed-extent geometry that records the last applied offset.
/// Handy for headless hosts and tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedGeometry {
    pub extent: f32,
    pub offset: f32,
}

impl FixedGeometry {
    pub fn new(extent: f32) -> Self {
        Self {
            extent,
            offset: 0.0,
        }
    }
}

impl Geometry for FixedGeometry {
    fn item_extent(&self) -> f32 {
        self.extent
    }

    fn apply_offset(&mut self, offset: f32) {
        self.offset = offset;
    }
}

/// Sizes the host applies to the track and viewport at mount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub orientation: Orientation,
    pub item_extent: f32,
    /// Length of the whole track (all items, padding included, per row).
    pub track_extent: f32,
    /// Length of the viewport; `None` when resizing is left to the host.
    pub viewport_extent: Option<f32>,
    pub initial_offset: f32,
}

/// Track offset that shows `index` as the first visible item.
#[inline]
pub fn offset_for(index: i32, item_extent: f32) -> f32 {
    -(index as f32 * item_extent)
}
