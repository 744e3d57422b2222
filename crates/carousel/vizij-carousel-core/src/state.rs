//! Mutable per-widget carousel state.

use serde::{Deserialize, Serialize};

use crate::config::CarouselConfig;
use crate::ids::AnimationTicket;
use crate::outputs::VisibleItem;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarouselState {
    /// First visible slot in the extended sequence.
    pub current_index: i32,
    /// Slots in the extended sequence, clone padding included.
    pub item_count: i32,
    /// Items supplied by the host.
    pub real_count: i32,
    /// `min(visible, real_count)`; may be fractional.
    pub visible_count: f32,
    /// Integral window used for index arithmetic: `ceil(visible_count)`.
    pub window: i32,
    /// Clones on each side of the real items (0 unless circular single-row).
    pub padding: i32,
    /// Starting slot, shifted by `padding`.
    pub start: i32,
    /// Animation in flight, if any.
    pub running: Option<AnimationTicket>,
}

impl CarouselState {
    /// Build the initial state for `real_count` items. Circular single-row
    /// carousels virtually prepend `window` clones of the tail and append
    /// `window` clones of the head.
    pub fn new(cfg: &CarouselConfig, real_count: usize) -> Self {
        let real_count = real_count as i32;
        let visible_count = cfg.visible.min(real_count as f32);
        let window = visible_count.ceil() as i32;
        let padding = if cfg.circular && cfg.rows() == 1 {
            window
        } else {
            0
        };
        let start = cfg.start + padding;
        Self {
            current_index: start,
            item_count: real_count + 2 * padding,
            real_count,
            visible_count,
            window,
            padding,
            start,
            running: None,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Highest first-visible slot that still fills the window.
    #[inline]
    pub fn last_index(&self) -> i32 {
        self.item_count - self.window
    }

    /// Real item shown in `slot`.
    pub fn item_for_slot(&self, slot: i32) -> Option<usize> {
        if slot < 0 || slot >= self.item_count || self.real_count == 0 {
            return None;
        }
        let item = if self.padding > 0 {
            (slot - self.padding).rem_euclid(self.real_count)
        } else {
            slot
        };
        Some(item as usize)
    }

    /// Items in the window starting at `current_index`, clipped to the track.
    pub fn visible_items(&self) -> Vec<VisibleItem> {
        let from = self.current_index.max(0);
        let to = (self.current_index + self.window).min(self.item_count);
        (from..to)
            .filter_map(|slot| {
                self.item_for_slot(slot).map(|item| VisibleItem {
                    slot: slot as usize,
                    item,
                })
            })
            .collect()
    }
}
