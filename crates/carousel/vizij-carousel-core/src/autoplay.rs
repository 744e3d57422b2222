//! Auto-advance timer ownership.
//!
//! The carousel owns at most one live timer. Arming always cancels the live
//! one first; cancelling takes effect before the next tick because ticks
//! from a cancelled id are ignored.

use log::trace;

use crate::ids::{IdAllocator, TimerId};
use crate::outputs::{Command, Outputs};

#[derive(Debug)]
pub struct AutoAdvance {
    period_ms: Option<u32>,
    live: Option<TimerId>,
}

impl AutoAdvance {
    /// `period_ms` is `None` when auto-advance is disabled.
    pub fn new(period_ms: Option<u32>) -> Self {
        Self {
            period_ms,
            live: None,
        }
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.period_ms.is_some()
    }

    #[inline]
    pub fn live(&self) -> Option<TimerId> {
        self.live
    }

    #[inline]
    pub fn is_live(&self, timer: TimerId) -> bool {
        self.live == Some(timer)
    }

    /// Replace the live timer with a fresh one. No-op when disabled.
    pub fn arm(&mut self, ids: &mut IdAllocator, out: &mut Outputs) {
        let Some(period_ms) = self.period_ms else {
            return;
        };
        self.cancel(out);
        let timer = ids.alloc_timer();
        trace!("auto-advance: arm {timer:?} every {period_ms}ms");
        self.live = Some(timer);
        out.push_command(Command::ArmTimer { timer, period_ms });
    }

    /// Cancel the live timer, if any.
    pub fn cancel(&mut self, out: &mut Outputs) {
        if let Some(timer) = self.live.take() {
            trace!("auto-advance: cancel {timer:?}");
            out.push_command(Command::CancelTimer { timer });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rearm_cancels_previous() {
        let mut ids = IdAllocator::new();
        let mut out = Outputs::default();
        let mut auto = AutoAdvance::new(Some(1000));
        auto.arm(&mut ids, &mut out);
        auto.arm(&mut ids, &mut out);
        assert_eq!(
            out.commands,
            vec![
                Command::ArmTimer {
                    timer: TimerId(0),
                    period_ms: 1000
                },
                Command::CancelTimer { timer: TimerId(0) },
                Command::ArmTimer {
                    timer: TimerId(1),
                    period_ms: 1000
                },
            ]
        );
        assert!(auto.is_live(TimerId(1)));
        assert!(!auto.is_live(TimerId(0)));
    }

    #[test]
    fn disabled_never_arms() {
        let mut ids = IdAllocator::new();
        let mut out = Outputs::default();
        let mut auto = AutoAdvance::new(None);
        auto.arm(&mut ids, &mut out);
        assert!(out.is_empty());
        assert!(auto.live().is_none());
    }

    #[test]
    fn cancel_without_timer_is_silent() {
        let mut out = Outputs::default();
        let mut auto = AutoAdvance::new(Some(500));
        auto.cancel(&mut out);
        assert!(out.is_empty());
    }
}
