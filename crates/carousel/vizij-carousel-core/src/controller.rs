//! Carousel: state ownership and the public navigation API.
//!
//! Methods:
//! - new (reads geometry, positions the track), layout, start (auto-advance)
//! - dispatch (inputs → commands/events), navigate (raw target), teardown

use log::debug;

use crate::autoplay::AutoAdvance;
use crate::config::CarouselConfig;
use crate::geometry::{offset_for, Geometry, Layout};
use crate::ids::{AnimationTicket, IdAllocator, TimerId};
use crate::inputs::Input;
use crate::navigation::{page_indicator, resolve_target, trigger_states, IgnoreReason};
use crate::outputs::{CarouselEvent, Command, NavTrigger, Outputs, VisibleItem};
use crate::state::CarouselState;

#[derive(Debug)]
pub struct Carousel {
    cfg: CarouselConfig,
    state: CarouselState,
    item_extent: f32,
    ids: IdAllocator,
    auto: AutoAdvance,

    // Per-dispatch outputs
    outputs: Outputs,
}

impl Carousel {
    /// Build a carousel over `real_count` host items. Reads the item extent
    /// from `geometry` and moves the track to the starting slot.
    pub fn new(cfg: CarouselConfig, real_count: usize, geometry: &mut dyn Geometry) -> Self {
        let state = CarouselState::new(&cfg, real_count);
        let item_extent = geometry.item_extent();
        geometry.apply_offset(offset_for(state.current_index, item_extent));
        debug!(
            "carousel: {} items ({} slots), window {}, start {}, circular {}",
            state.real_count, state.item_count, state.window, state.start, cfg.circular
        );
        Self {
            auto: AutoAdvance::new(cfg.auto_period_ms()),
            cfg,
            state,
            item_extent,
            ids: IdAllocator::new(),
            outputs: Outputs::default(),
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.cfg
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    #[inline]
    pub fn current_index(&self) -> i32 {
        self.state.current_index
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Live auto-advance timer, if any.
    #[inline]
    pub fn live_timer(&self) -> Option<TimerId> {
        self.auto.live()
    }

    pub fn visible_items(&self) -> Vec<VisibleItem> {
        self.state.visible_items()
    }

    /// Track and viewport sizes for the host to apply at mount.
    pub fn layout(&self) -> Layout {
        let e = self.item_extent;
        Layout {
            orientation: self.cfg.orientation,
            item_extent: e,
            track_extent: e * self.state.item_count as f32 / self.cfg.rows() as f32,
            viewport_extent: (!self.cfg.no_resize).then(|| e * self.state.visible_count),
            initial_offset: offset_for(self.state.start, e),
        }
    }

    /// Arm auto-advance if configured.
    pub fn start(&mut self) -> &Outputs {
        self.outputs.clear();
        self.auto.arm(&mut self.ids, &mut self.outputs);
        &self.outputs
    }

    /// Release the timer. An animation in flight is left to finish.
    pub fn teardown(&mut self) -> &Outputs {
        self.outputs.clear();
        self.auto.cancel(&mut self.outputs);
        &self.outputs
    }

    /// Navigate to a raw target with the primary duration.
    pub fn navigate(&mut self, raw_target: i32) -> &Outputs {
        self.outputs.clear();
        self.go(raw_target, self.cfg.speed_ms);
        &self.outputs
    }

    /// Apply one host input and return the resulting commands and events.
    pub fn dispatch(&mut self, input: Input) -> &Outputs {
        self.outputs.clear();
        let current = self.state.current_index;
        let speed = self.cfg.speed_ms;

        match input {
            Input::Prev => self.go(current - self.cfg.button_step(), speed),
            Input::Next => self.go(current + self.cfg.button_step(), speed),
            Input::Wheel { delta } => {
                if !self.cfg.mouse_wheel {
                    self.ignore(IgnoreReason::NotWired);
                } else if delta > 0.0 {
                    self.go(current - self.cfg.scroll, speed);
                } else {
                    self.go(current + self.cfg.scroll, speed);
                }
            }
            Input::Go { index } => self.go(self.link_target(index), speed),
            Input::Hover { index } => {
                self.go(self.link_target(index), self.cfg.hover_duration_ms())
            }
            Input::Goto { target } => self.go(target, speed),
            Input::AnimationFinished { ticket } => self.finish(ticket),
            Input::TimerTick { timer } => {
                if self.auto.is_live(timer) {
                    self.go(current + self.cfg.scroll, speed);
                } else {
                    self.ignore(IgnoreReason::StaleTimer);
                }
            }
            Input::EnterStopZone => {
                if self.auto.enabled() && self.cfg.triggers.stop_zone.is_some() {
                    self.auto.cancel(&mut self.outputs);
                } else {
                    self.ignore(IgnoreReason::NotWired);
                }
            }
            Input::LeaveStartZone {
                pause_trigger_shown,
            } => {
                if !self.auto.enabled() || self.cfg.triggers.start_zone.is_none() {
                    self.ignore(IgnoreReason::NotWired);
                } else if self.cfg.triggers.pause.is_some() && pause_trigger_shown {
                    // The explicit pause/resume pair owns the timer here.
                    debug!("carousel: start zone left while pause trigger shown; not re-arming");
                } else {
                    self.auto.arm(&mut self.ids, &mut self.outputs);
                }
            }
            Input::Pause => {
                if self.auto.enabled() && self.cfg.triggers.pause.is_some() {
                    self.auto.cancel(&mut self.outputs);
                } else {
                    self.ignore(IgnoreReason::NotWired);
                }
            }
            Input::Resume => {
                if self.auto.enabled() && self.cfg.triggers.resume.is_some() {
                    self.auto.arm(&mut self.ids, &mut self.outputs);
                } else {
                    self.ignore(IgnoreReason::NotWired);
                }
            }
        }

        &self.outputs
    }

    /// Raw target for index link `index`.
    fn link_target(&self, index: usize) -> i32 {
        let index = index as i32;
        let rows = self.cfg.rows() as i32;
        if rows > 1 {
            index / rows
        } else {
            self.state.padding + index
        }
    }

    fn ignore(&mut self, reason: IgnoreReason) {
        self.outputs
            .push_event(CarouselEvent::NavigationIgnored { reason });
    }

    fn go(&mut self, raw: i32, duration_ms: u32) {
        let resolution = match resolve_target(&self.state, &self.cfg, raw) {
            Ok(r) => r,
            Err(reason) => {
                debug!("carousel: navigate({raw}) dropped: {reason:?}");
                self.ignore(reason);
                return;
            }
        };

        let from = self.state.current_index;
        let index = resolution.index;
        let ticket = self.ids.alloc_ticket();
        self.state.current_index = index;
        self.state.running = Some(ticket);
        match resolution.wrap {
            Some(wrap) => debug!("carousel: navigate({raw}) {from} -> {index} ({wrap:?})"),
            None => debug!("carousel: navigate({raw}) {from} -> {index}"),
        }

        self.outputs.push_event(CarouselEvent::BeforeStart {
            items: self.state.visible_items(),
        });
        if let Some(slot) = resolution.reposition {
            self.outputs.push_command(Command::Reposition {
                offset: offset_for(slot, self.item_extent),
            });
        }
        self.outputs.push_command(Command::Animate {
            ticket,
            offset: offset_for(index, self.item_extent),
            duration_ms,
            easing: self.cfg.easing.clone(),
        });

        if !self.cfg.circular {
            let (prev_disabled, next_disabled) = trigger_states(&self.state, &self.cfg, index);
            if self.cfg.triggers.prev.is_some() {
                self.outputs.push_command(Command::SetTriggerDisabled {
                    trigger: NavTrigger::Prev,
                    disabled: prev_disabled,
                });
            }
            if self.cfg.triggers.next.is_some() {
                self.outputs.push_command(Command::SetTriggerDisabled {
                    trigger: NavTrigger::Next,
                    disabled: next_disabled,
                });
            }
        }

        if self.cfg.page_indicator.is_some() {
            self.outputs.push_command(Command::SetPageIndicator {
                text: page_indicator(index).to_string(),
            });
        }
    }

    fn finish(&mut self, ticket: AnimationTicket) {
        if self.state.running != Some(ticket) {
            debug!("carousel: completion for {ticket:?} ignored");
            self.ignore(IgnoreReason::StaleTicket);
            return;
        }
        self.state.running = None;
        self.outputs.push_event(CarouselEvent::AfterEnd {
            items: self.state.visible_items(),
        });
    }
}
