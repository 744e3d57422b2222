use std::collections::HashSet;

use vizij_carousel_core::{
    Carousel, CarouselConfig, Command, FixedGeometry, IgnoreReason, Input, Outputs, TimerId,
    Triggers,
};

/// Host-side view of the timers the carousel asked for.
#[derive(Default)]
struct TimerHost {
    live: HashSet<TimerId>,
}

impl TimerHost {
    fn apply(&mut self, out: &Outputs) {
        for cmd in &out.commands {
            match cmd {
                Command::ArmTimer { timer, .. } => {
                    assert!(self.live.is_empty(), "second timer armed while {:?} live", self.live);
                    self.live.insert(*timer);
                }
                Command::CancelTimer { timer } => {
                    assert!(self.live.remove(timer), "cancelled unknown {timer:?}");
                }
                _ => {}
            }
        }
    }
}

fn auto_cfg(triggers: Triggers) -> CarouselConfig {
    CarouselConfig {
        auto_ms: Some(800),
        speed_ms: 200,
        triggers,
        ..Default::default()
    }
}

fn all_triggers() -> Triggers {
    Triggers {
        stop_zone: Some(".over".into()),
        start_zone: Some(".out".into()),
        pause: Some(".stop".into()),
        resume: Some(".play".into()),
        ..Default::default()
    }
}

fn mk(cfg: CarouselConfig) -> Carousel {
    let mut geometry = FixedGeometry::new(100.0);
    Carousel::new(cfg, 5, &mut geometry)
}

#[test]
fn start_arms_one_timer_with_interval_plus_speed() {
    let mut c = mk(auto_cfg(Triggers::default()));
    let out = c.start().clone();
    assert_eq!(
        out.commands,
        vec![Command::ArmTimer {
            timer: TimerId(0),
            period_ms: 1000
        }]
    );
    assert_eq!(c.live_timer(), Some(TimerId(0)));
}

#[test]
fn no_auto_means_no_timer() {
    let mut c = mk(CarouselConfig {
        triggers: all_triggers(),
        ..Default::default()
    });
    assert!(c.start().is_empty());
    let out = c.dispatch(Input::Resume).clone();
    assert_eq!(out.ignored(), Some(IgnoreReason::NotWired));
    assert!(c.live_timer().is_none());
}

#[test]
fn tick_advances_by_scroll() {
    let mut c = mk(CarouselConfig {
        custom_scroll: Some(3),
        ..auto_cfg(Triggers::default())
    });
    c.start();
    let timer = c.live_timer().unwrap();
    let out = c.dispatch(Input::TimerTick { timer }).clone();
    assert!(out.animation().is_some());
    // ticks use `scroll`, not the button step
    assert_eq!(c.current_index(), 4);
}

#[test]
fn pause_resume_sequences_keep_exactly_one_timer() {
    let mut c = mk(auto_cfg(all_triggers()));
    let mut host = TimerHost::default();
    host.apply(c.start());
    assert_eq!(host.live.len(), 1);

    for _ in 0..3 {
        host.apply(c.dispatch(Input::Pause));
        assert!(host.live.is_empty());
        host.apply(c.dispatch(Input::Resume));
        assert_eq!(host.live.len(), 1);
    }
    // resume while already running replaces rather than stacks
    host.apply(c.dispatch(Input::Resume));
    host.apply(c.dispatch(Input::Resume));
    assert_eq!(host.live.len(), 1);
    assert_eq!(c.live_timer().map(|t| host.live.contains(&t)), Some(true));
}

#[test]
fn hover_zones_pause_and_resume() {
    let triggers = Triggers {
        stop_zone: Some(".over".into()),
        start_zone: Some(".out".into()),
        ..Default::default()
    };
    let mut c = mk(auto_cfg(triggers));
    let mut host = TimerHost::default();
    host.apply(c.start());
    host.apply(c.dispatch(Input::EnterStopZone));
    assert!(host.live.is_empty());
    host.apply(c.dispatch(Input::LeaveStartZone {
        pause_trigger_shown: false,
    }));
    assert_eq!(host.live.len(), 1);
}

#[test]
fn shown_pause_trigger_blocks_zone_rearm() {
    let mut c = mk(auto_cfg(all_triggers()));
    let mut host = TimerHost::default();
    host.apply(c.start());
    host.apply(c.dispatch(Input::EnterStopZone));
    let out = c
        .dispatch(Input::LeaveStartZone {
            pause_trigger_shown: true,
        })
        .clone();
    host.apply(&out);
    assert!(out.is_empty());
    assert!(host.live.is_empty());

    host.apply(c.dispatch(Input::LeaveStartZone {
        pause_trigger_shown: false,
    }));
    assert_eq!(host.live.len(), 1);
}

#[test]
fn ticks_from_cancelled_timers_are_ignored() {
    let mut c = mk(auto_cfg(all_triggers()));
    c.start();
    let old = c.live_timer().unwrap();
    c.dispatch(Input::Pause);
    let out = c.dispatch(Input::TimerTick { timer: old }).clone();
    assert_eq!(out.ignored(), Some(IgnoreReason::StaleTimer));
    assert_eq!(c.current_index(), 3);
}

#[test]
fn pause_does_not_interrupt_animation() {
    let mut c = mk(auto_cfg(all_triggers()));
    c.start();
    let timer = c.live_timer().unwrap();
    let (ticket, _) = c.dispatch(Input::TimerTick { timer }).animation().unwrap();
    c.dispatch(Input::Pause);
    assert!(c.is_running());
    let out = c.dispatch(Input::AnimationFinished { ticket }).clone();
    assert!(out.ignored().is_none());
    assert!(!c.is_running());
}

#[test]
fn teardown_releases_timer() {
    let mut c = mk(auto_cfg(Triggers::default()));
    let mut host = TimerHost::default();
    host.apply(c.start());
    host.apply(c.teardown());
    assert!(host.live.is_empty());
    assert!(c.live_timer().is_none());
    assert!(c.teardown().is_empty());
}
