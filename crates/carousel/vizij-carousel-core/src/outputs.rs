//! Output contracts from the carousel controller.
//!
//! Outputs carry the side-effect instructions for the host surface
//! (`commands`) and the callbacks for the host application (`events`), in
//! the order they must be applied.

use serde::{Deserialize, Serialize};

use crate::ids::{AnimationTicket, TimerId};
use crate::navigation::IgnoreReason;

/// One visible item: `slot` is the position in the extended (padded)
/// sequence, `item` the index of the real item it shows.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VisibleItem {
    pub slot: usize,
    pub item: usize,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTrigger {
    Prev,
    Next,
}

/// Instructions for the rendering surface and timer host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Jump the track to `offset` without animating.
    Reposition { offset: f32 },
    /// Animate the track to `offset`; report completion with `ticket`.
    Animate {
        ticket: AnimationTicket,
        offset: f32,
        duration_ms: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        easing: Option<String>,
    },
    /// Toggle the disabled state of a prev/next trigger.
    SetTriggerDisabled { trigger: NavTrigger, disabled: bool },
    /// Replace the page-indicator text.
    SetPageIndicator { text: String },
    /// Start a recurring timer.
    ArmTimer { timer: TimerId, period_ms: u32 },
    /// Stop a recurring timer.
    CancelTimer { timer: TimerId },
}

/// Callbacks for the host application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum CarouselEvent {
    BeforeStart { items: Vec<VisibleItem> },
    AfterEnd { items: Vec<VisibleItem> },
    NavigationIgnored { reason: IgnoreReason },
}

/// Outputs returned by `Carousel::dispatch()`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub commands: Vec<Command>,
    #[serde(default)]
    pub events: Vec<CarouselEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    #[inline]
    pub fn push_event(&mut self, event: CarouselEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.events.is_empty()
    }

    /// The animation issued this dispatch, if any.
    pub fn animation(&self) -> Option<(AnimationTicket, f32)> {
        self.commands.iter().find_map(|c| match c {
            Command::Animate { ticket, offset, .. } => Some((*ticket, *offset)),
            _ => None,
        })
    }

    /// Reason the dispatch was dropped, if it was.
    pub fn ignored(&self) -> Option<IgnoreReason> {
        self.events.iter().find_map(|e| match e {
            CarouselEvent::NavigationIgnored { reason } => Some(*reason),
            _ => None,
        })
    }
}
