//! Input contracts for the carousel controller.
//!
//! Adapters translate host events (clicks, wheel, pointer enter/leave, timer
//! ticks, animation completion) into these and pass them to
//! `Carousel::dispatch()`.

use serde::{Deserialize, Serialize};

use crate::ids::{AnimationTicket, TimerId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Input {
    /// Previous trigger clicked.
    Prev,
    /// Next trigger clicked.
    Next,
    /// Wheel moved over the viewport; positive delta scrolls backwards.
    Wheel { delta: f32 },
    /// Index link `index` clicked.
    Go { index: usize },
    /// Hover link `index` entered.
    Hover { index: usize },
    /// Navigate to an absolute index in the extended sequence.
    Goto { target: i32 },
    /// The host finished the animation issued under `ticket`.
    AnimationFinished { ticket: AnimationTicket },
    /// Auto-advance timer fired.
    TimerTick { timer: TimerId },
    /// Pointer entered the stop zone.
    EnterStopZone,
    /// Pointer left the start zone. `pause_trigger_shown` reports whether the
    /// explicit pause trigger is currently displayed.
    LeaveStartZone {
        #[serde(default)]
        pause_trigger_shown: bool,
    },
    /// Pause trigger clicked.
    Pause,
    /// Resume trigger clicked.
    Resume,
}
