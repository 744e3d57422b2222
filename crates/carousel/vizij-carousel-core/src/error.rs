//! Error type for the fallible carousel surface.
//!
//! Navigation itself never fails: dropped intents are reported as
//! [`CarouselEvent::NavigationIgnored`](crate::outputs::CarouselEvent) instead.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CarouselError {
    #[error("carousel config parse error: {0}")]
    ConfigParse(#[source] serde_json::Error),
    #[error("carousel config serialize error: {0}")]
    ConfigSerialize(#[source] serde_json::Error),
}
