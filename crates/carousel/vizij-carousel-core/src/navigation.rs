//! Target resolution: turns a raw navigation target into the next index.
//!
//! Everything here is pure; the controller applies the result and turns it
//! into host commands.

use serde::{Deserialize, Serialize};

use crate::config::CarouselConfig;
use crate::state::CarouselState;

/// Why a navigation input produced no move.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// An animation is already in flight.
    Running,
    /// Non-circular carousel with fewer items than the window.
    InsufficientItems,
    /// The input's trigger or feature is not configured.
    NotWired,
    /// Completion for an animation that is not the one in flight.
    StaleTicket,
    /// Tick from a timer that is no longer live.
    StaleTimer,
}

/// Which clone block a circular move jumped across.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wrap {
    ToEnd,
    ToStart,
}

/// Outcome of [`resolve_target`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// New first-visible slot.
    pub index: i32,
    /// Slot to jump to, unanimated, before sliding to `index`.
    pub reposition: Option<i32>,
    pub wrap: Option<Wrap>,
}

impl Resolution {
    fn direct(index: i32) -> Self {
        Self {
            index,
            reposition: None,
            wrap: None,
        }
    }
}

/// Resolve `raw` against the current state.
///
/// Drops the request while an animation is running, or when a non-circular
/// carousel cannot fill its window.
pub fn resolve_target(
    state: &CarouselState,
    cfg: &CarouselConfig,
    raw: i32,
) -> Result<Resolution, IgnoreReason> {
    if state.is_running() {
        return Err(IgnoreReason::Running);
    }
    if !cfg.circular && (state.item_count as f32) < state.visible_count {
        return Err(IgnoreReason::InsufficientItems);
    }

    if cfg.rows() > 1 {
        let index = if cfg.circular {
            raw
        } else {
            clamp_linear(state, raw)
        };
        return Ok(Resolution::direct(snap_rows(state, cfg, index)));
    }

    if cfg.circular {
        Ok(resolve_circular(state, cfg, raw))
    } else {
        Ok(Resolution::direct(clamp_linear(state, raw)))
    }
}

fn clamp_linear(state: &CarouselState, raw: i32) -> i32 {
    raw.clamp(0, state.last_index().max(0))
}

fn resolve_circular(state: &CarouselState, cfg: &CarouselConfig, raw: i32) -> Resolution {
    let n = state.item_count;
    let v = state.window;
    let custom = cfg.custom_scroll.is_some();

    let before_first = state.start - v - 1;
    if raw <= before_first {
        let index = if raw == before_first {
            n - 2 * v - 1
        } else {
            n - 2 * v - cfg.scroll
        };
        return Resolution {
            index,
            reposition: Some(if custom { n - v } else { n - 2 * v }),
            wrap: Some(Wrap::ToEnd),
        };
    }

    let past_last = n - v + 1;
    if raw >= past_last {
        let index = if raw == past_last { v } else { v + cfg.scroll };
        return Resolution {
            index,
            reposition: Some(if custom { 0 } else { v }),
            wrap: Some(Wrap::ToStart),
        };
    }

    Resolution::direct(raw)
}

/// Multi-row tracks wrap by snapping to the opposite logical boundary once the
/// index runs off the track (or below zero).
fn snap_rows(state: &CarouselState, cfg: &CarouselConfig, index: i32) -> i32 {
    let rows = cfg.rows() as i32;
    let track_len = state.item_count as f32 / rows as f32;
    if index < 0 {
        (state.real_count as f32 / rows as f32).round() as i32 - rows
    } else if track_len <= index as f32 {
        state.start
    } else {
        index
    }
}

/// Enabled state of the prev/next triggers at `index`: `(prev_disabled, next_disabled)`.
pub fn trigger_states(state: &CarouselState, cfg: &CarouselConfig, index: i32) -> (bool, bool) {
    (
        index - cfg.scroll < 0,
        index + cfg.scroll > state.last_index(),
    )
}

/// Page label shown by the page indicator for `index`.
pub fn page_indicator(index: i32) -> i32 {
    if index > 3 {
        index - 3
    } else if index == 0 {
        index + 3
    } else {
        index
    }
}
