//! Vizij Carousel Core (engine-agnostic)
//!
//! Owns the position/animation state machine of a sliding carousel: it turns
//! navigation inputs into a validated target index, applies circular-wrap
//! corrections and emits host commands (reposition, animate, trigger state,
//! timers) plus `BeforeStart`/`AfterEnd` events. Rendering, DOM wiring and the
//! actual tweening stay with the host adapter (wasm, native UI, tests).

pub mod autoplay;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod inputs;
pub mod navigation;
pub mod outputs;
pub mod state;

// Re-exports for consumers (adapters)
pub use autoplay::AutoAdvance;
pub use config::{CarouselConfig, Orientation, Triggers};
pub use controller::Carousel;
pub use error::CarouselError;
pub use geometry::{FixedGeometry, Geometry, Layout};
pub use ids::{AnimationTicket, TimerId};
pub use inputs::Input;
pub use navigation::{page_indicator, resolve_target, IgnoreReason, Resolution, Wrap};
pub use outputs::{CarouselEvent, Command, NavTrigger, Outputs, VisibleItem};
pub use state::CarouselState;
