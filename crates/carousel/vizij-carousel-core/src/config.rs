//! Carousel configuration.

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Scroll axis of the track.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Name of the positional property the host animates.
    #[inline]
    pub fn offset_property(&self) -> &'static str {
        match self {
            Self::Horizontal => "left",
            Self::Vertical => "top",
        }
    }

    /// Name of the sizing property for track and viewport.
    #[inline]
    pub fn size_property(&self) -> &'static str {
        match self {
            Self::Horizontal => "width",
            Self::Vertical => "height",
        }
    }
}

/// Host selectors for the navigation triggers. The core only checks whether a
/// trigger is wired; binding the handlers is the adapter's job.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Triggers {
    pub prev: Option<String>,
    pub next: Option<String>,
    /// Index links: entry `i` navigates to item `i`.
    pub go: Vec<String>,
    /// Hover links: like `go`, but fired on pointer enter with the hover speed.
    pub hover: Vec<String>,
    /// Pointer entering this zone pauses auto-advance.
    pub stop_zone: Option<String>,
    /// Pointer leaving this zone resumes auto-advance.
    pub start_zone: Option<String>,
    /// Explicit pause button.
    pub pause: Option<String>,
    /// Explicit resume button.
    pub resume: Option<String>,
}

/// Widget configuration. Immutable once the carousel is built.
///
/// Values are not validated; negative counts and similar are left for the
/// host to avoid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Items visible at once. Fractional values reveal part of the next item.
    pub visible: f32,
    /// Items per row; values above 1 lay the items out in parallel tracks.
    pub lines: u32,
    /// Items advanced per navigation step.
    pub scroll: i32,
    /// Step used by the prev/next triggers instead of `scroll`.
    pub custom_scroll: Option<i32>,
    pub circular: bool,
    pub start: i32,
    /// Slide duration in milliseconds; passed through to the host.
    pub speed_ms: u32,
    /// Slide duration for hover-triggered navigation.
    pub hover_speed_ms: Option<u32>,
    /// Easing identifier; opaque to the core.
    pub easing: Option<String>,
    pub orientation: Orientation,
    /// Auto-advance interval in milliseconds. `None` disables auto-advance.
    pub auto_ms: Option<u32>,
    pub mouse_wheel: bool,
    /// Leave the viewport size to the host stylesheet.
    pub no_resize: bool,
    /// Page-indicator target. When set, every move emits a page label.
    pub page_indicator: Option<String>,
    pub triggers: Triggers,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible: 3.0,
            lines: 1,
            scroll: 1,
            custom_scroll: None,
            circular: true,
            start: 0,
            speed_ms: 200,
            hover_speed_ms: None,
            easing: None,
            orientation: Orientation::Horizontal,
            auto_ms: None,
            mouse_wheel: false,
            no_resize: false,
            page_indicator: None,
            triggers: Triggers::default(),
        }
    }
}

impl CarouselConfig {
    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CarouselError> {
        serde_json::from_str(json).map_err(CarouselError::ConfigParse)
    }

    /// Build a config from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CarouselError> {
        serde_json::from_value(value).map_err(CarouselError::ConfigParse)
    }

    pub fn to_json(&self) -> Result<String, CarouselError> {
        serde_json::to_string(self).map_err(CarouselError::ConfigSerialize)
    }

    /// Step used by the prev/next triggers.
    #[inline]
    pub fn button_step(&self) -> i32 {
        self.custom_scroll.unwrap_or(self.scroll)
    }

    /// Row count, treating 0 as a single row.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.lines.max(1)
    }

    /// Timer period for auto-advance: interval plus slide duration.
    #[inline]
    pub fn auto_period_ms(&self) -> Option<u32> {
        self.auto_ms.map(|ms| ms.saturating_add(self.speed_ms))
    }

    /// Duration for hover-triggered slides.
    #[inline]
    pub fn hover_duration_ms(&self) -> u32 {
        self.hover_speed_ms.unwrap_or(self.speed_ms)
    }
}
