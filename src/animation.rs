//! Frame-stepped spin animation: target computation before a run, the
//! per-frame tick, and edge-triggered crossing callbacks.
//!
//! The engine never schedules itself. A host scheduler calls
//! [`Wheel::tick`] once per display refresh while a run is active; each tick
//! runs to completion before returning, so state is never partial at the
//! frame boundary.

use crate::angle::{self, FULL_TURN, SpinDirection};
use crate::config::{AnimationConfig, AnimationKind, SoundTrigger};
use crate::easing::ResolvedEasing;
use crate::wheel::{Renderer, Wheel};

/// Where the animation is in its lifecycle. A run leaves `Idle` when started
/// and returns to it within the tick (or stop call) that completes it; the
/// completion callback fires on that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
}

/// Host callback with no payload.
pub type Callback = Box<dyn FnMut() + 'static>;

/// Host callback receiving the 1-based trigger index (segment or pin number).
pub type TriggerCallback = Box<dyn FnMut(usize) + 'static>;

#[derive(Default)]
struct Callbacks {
    before: Option<Callback>,
    after: Option<Callback>,
    finished: Option<Callback>,
    sound: Option<TriggerCallback>,
}

/// Configuration plus run-scoped state for the wheel's single animation.
///
/// Owned exclusively by its [`Wheel`]; the run state is recomputed at the
/// start of each run and mutated once per tick.
pub struct Animation {
    config: AnimationConfig,
    callbacks: Callbacks,
    phase: Phase,
    current_step: u32,
    start_angle: f64,
    total_change: f64,
    easing: ResolvedEasing,
    cycle_direction: SpinDirection,
    repeats_left: i32,
    last_trigger: Option<usize>,
}

impl Animation {
    pub(crate) fn new(config: AnimationConfig) -> Self {
        let cycle_direction = config.direction;
        Self {
            config,
            callbacks: Callbacks::default(),
            phase: Phase::Idle,
            current_step: 0,
            start_angle: 0.0,
            total_change: 0.0,
            easing: ResolvedEasing::default(),
            cycle_direction,
            repeats_left: 0,
            last_trigger: None,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Frames advanced in the current run, `0..=duration`.
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    /// Signed-magnitude travel computed for the current run, in degrees.
    pub fn total_change(&self) -> f64 {
        self.total_change
    }

    /// Replaces the callback invoked once when a run starts.
    pub fn on_before(&mut self, f: impl FnMut() + 'static) {
        self.callbacks.before = Some(Box::new(f));
    }

    /// Replaces the callback invoked after each frame's redraw.
    pub fn on_after(&mut self, f: impl FnMut() + 'static) {
        self.callbacks.after = Some(Box::new(f));
    }

    /// Replaces the callback invoked exactly once when a run completes.
    pub fn on_finished(&mut self, f: impl FnMut() + 'static) {
        self.callbacks.finished = Some(Box::new(f));
    }

    /// Replaces the edge-triggered callback invoked whenever the watched
    /// trigger index (segment or pin, per `sound_trigger`) changes.
    pub fn on_sound(&mut self, f: impl FnMut(usize) + 'static) {
        self.callbacks.sound = Some(Box::new(f));
    }
}

/// What one tick did, for hosts that poll instead of registering callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the renderer was asked to redraw.
    pub redrew: bool,
    /// The newly indicated trigger index, when it changed this frame.
    pub crossed: Option<usize>,
    /// Whether the whole run (including repeats) completed this frame.
    pub finished: bool,
}

impl Wheel {
    /// Starts a run. A run already in progress is silently discarded and
    /// restarted, not queued.
    pub fn start_animation(&mut self) {
        if let Some(before) = self.animation.callbacks.before.as_mut() {
            before();
        }
        self.animation.phase = Phase::Running;
        self.animation.cycle_direction = self.animation.config.direction;
        self.animation.repeats_left = self.animation.config.repeat;
        self.prepare_cycle();
    }

    /// Recomputes the run-scoped values: rotation snapshot, total travel,
    /// resolved easing, and the crossing sentinel.
    fn prepare_cycle(&mut self) {
        self.animation.current_step = 0;
        self.animation.start_angle = self.rotation_angle;
        self.animation.last_trigger = None;

        let easing = self.animation.config.easing.resolve();
        self.animation.easing = easing;

        let start = self.animation.start_angle;
        let direction = self.animation.cycle_direction;
        let config = &self.animation.config;
        let total = match config.stop_angle {
            Some(stop) => {
                // A zero spin count still has to reach the target; treat it
                // as one full turn.
                let spins = config.spins.max(1);
                FULL_TURN * spins as f64
                    + angle::signed_delta(
                        angle::normalize(start),
                        angle::normalize(stop),
                        direction,
                    )
            }
            None => {
                if config.kind == AnimationKind::SpinToStop {
                    log::warn!(
                        "spinToStop animation has no stopAngle; spinning {} whole turns",
                        config.spins
                    );
                }
                FULL_TURN * config.spins as f64
            }
        };
        self.animation.total_change = total;
    }

    /// Advances the run by one frame: step the counter, ease the progress,
    /// set the rotation, redraw, and fire whatever callbacks became due.
    ///
    /// No-op while idle.
    pub fn tick(&mut self, renderer: &mut dyn Renderer) -> TickOutcome {
        if self.animation.phase != Phase::Running {
            return TickOutcome::default();
        }

        let duration = self.animation.config.duration;
        self.animation.current_step = (self.animation.current_step + 1).min(duration);
        let t = self.animation.current_step as f64 / duration as f64;
        let progress = self.animation.easing.apply(t);
        self.rotation_angle = self.animation.start_angle
            + self.animation.cycle_direction.sign() * self.animation.total_change * progress;

        renderer.redraw(&self.frame());

        let mut outcome = TickOutcome {
            redrew: true,
            ..TickOutcome::default()
        };

        let trigger = self.trigger_index();
        if self.animation.last_trigger != Some(trigger) {
            self.animation.last_trigger = Some(trigger);
            outcome.crossed = Some(trigger);
            if let Some(sound) = self.animation.callbacks.sound.as_mut() {
                sound(trigger);
            }
        }

        if let Some(after) = self.animation.callbacks.after.as_mut() {
            after();
        }

        if self.animation.current_step == duration {
            outcome.finished = self.finish_cycle();
        }
        outcome
    }

    /// Ends the run immediately, rendering the final frame at the current
    /// rotation. The finished callback fires unless `invoke_callback` is
    /// false. Synchronous: the run is over when this returns.
    pub fn stop_animation(&mut self, invoke_callback: bool, renderer: &mut dyn Renderer) {
        self.animation.current_step = self.animation.config.duration;
        self.animation.phase = Phase::Idle;
        renderer.redraw(&self.frame());

        if invoke_callback
            && let Some(finished) = self.animation.callbacks.finished.as_mut()
        {
            finished();
        }
    }

    /// Ends the current cycle: either rolls into the next repeat or completes
    /// the run. Returns true when the whole run finished.
    fn finish_cycle(&mut self) -> bool {
        if self.animation.repeats_left != 0 {
            if self.animation.repeats_left > 0 {
                self.animation.repeats_left -= 1;
            }
            if self.animation.config.yoyo {
                self.animation.cycle_direction = self.animation.cycle_direction.opposite();
            }
            self.prepare_cycle();
            return false;
        }

        self.animation.phase = Phase::Idle;
        if let Some(finished) = self.animation.callbacks.finished.as_mut() {
            finished();
        }
        true
    }

    /// 1-based index the sound trigger watches: the indicated segment number,
    /// or the pin number under the pointer.
    fn trigger_index(&self) -> usize {
        match self.animation.config.sound_trigger {
            SoundTrigger::Segment => self.indicated_segment_number(),
            SoundTrigger::Pin => {
                let count = self.pins.number;
                if count == 0 {
                    return 0;
                }
                let spacing = FULL_TURN / count as f64;
                (self.rotation_position() / spacing).floor() as usize + 1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::config::{PinConfig, WheelConfig};
    use crate::easing::{Curve, Easing};
    use crate::wheel::frame::Frame;
    use crate::wheel::NullRenderer;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[derive(Default)]
    struct CountingRenderer {
        frames: u32,
    }

    impl Renderer for CountingRenderer {
        fn redraw(&mut self, _frame: &Frame<'_>) {
            self.frames += 1;
        }
    }

    fn wheel(config: WheelConfig) -> Wheel {
        Wheel::new(config).unwrap()
    }

    fn spin_config(segments: usize, f: impl FnOnce(&mut AnimationConfig)) -> WheelConfig {
        let mut config = WheelConfig {
            num_segments: segments,
            ..WheelConfig::default()
        };
        f(&mut config.animation);
        config
    }

    #[test]
    fn target_run_totals_match_both_directions() {
        let mut cw = wheel(WheelConfig {
            rotation_angle: 10.0,
            ..spin_config(4, |animation| {
                animation.stop_angle = Some(100.0);
                animation.spins = 1;
            })
        });
        cw.start_animation();
        assert!(approx(cw.animation.total_change(), 450.0));

        let mut ccw = wheel(WheelConfig {
            rotation_angle: 10.0,
            ..spin_config(4, |animation| {
                animation.stop_angle = Some(100.0);
                animation.spins = 1;
                animation.direction = SpinDirection::Counterclockwise;
            })
        });
        ccw.start_animation();
        assert!(approx(ccw.animation.total_change(), 270.0));
    }

    #[test]
    fn target_runs_land_exactly_on_the_stop_angle() {
        for direction in [SpinDirection::Clockwise, SpinDirection::Counterclockwise] {
            let mut wheel = wheel(WheelConfig {
                rotation_angle: 45.0,
                ..spin_config(8, |animation| {
                    animation.stop_angle = Some(230.0);
                    animation.spins = 4;
                    animation.duration = 60;
                    animation.direction = direction;
                })
            });
            let mut renderer = NullRenderer;

            wheel.start_animation();
            while wheel.animation().is_running() {
                wheel.tick(&mut renderer);
            }
            assert!(
                approx(wheel.rotation_position(), 230.0),
                "{direction}: landed at {}",
                wheel.rotation_position()
            );
        }
    }

    #[test]
    fn zero_spins_with_a_target_behave_like_one_turn() {
        let mut wheel = wheel(WheelConfig {
            rotation_angle: 10.0,
            ..spin_config(4, |animation| {
                animation.stop_angle = Some(100.0);
                animation.spins = 0;
            })
        });
        wheel.start_animation();
        assert!(approx(wheel.animation.total_change(), 450.0));
    }

    #[test]
    fn a_full_run_steps_to_completion_and_fires_finished_once() {
        let mut wheel = wheel(WheelConfig {
            rotation_angle: 10.0,
            ..spin_config(4, |animation| {
                animation.duration = 10;
                animation.spins = 1;
                animation.easing = Easing::Curve(Curve::Linear);
            })
        });
        let finished = Rc::new(Cell::new(0u32));
        let finished_in_callback = finished.clone();
        wheel
            .animation_mut()
            .on_finished(move || finished_in_callback.set(finished_in_callback.get() + 1));

        let mut renderer = CountingRenderer::default();
        wheel.start_animation();

        let mut frames = 0;
        loop {
            let outcome = wheel.tick(&mut renderer);
            assert!(outcome.redrew);
            frames += 1;
            if outcome.finished {
                break;
            }
            assert!(frames < 100, "run never finished");
        }

        assert_eq!(frames, 10);
        assert_eq!(renderer.frames, 10);
        assert!(approx(wheel.rotation_angle(), 370.0));
        assert_eq!(finished.get(), 1);
        assert!(!wheel.animation().is_running());

        // idempotent no-op once idle
        let outcome = wheel.tick(&mut renderer);
        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(renderer.frames, 10);
        assert_eq!(finished.get(), 1);
    }

    #[test]
    fn crossing_callback_fires_once_per_distinct_segment() {
        let mut wheel = wheel(WheelConfig {
            rotation_angle: 0.0,
            ..spin_config(4, |animation| {
                animation.duration = 8;
                animation.spins = 1;
                animation.easing = Easing::Curve(Curve::Linear);
            })
        });
        let crossings: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = crossings.clone();
        wheel
            .animation_mut()
            .on_sound(move |segment| sink.borrow_mut().push(segment));

        let mut renderer = NullRenderer;
        wheel.start_animation();
        while wheel.animation().is_running() {
            wheel.tick(&mut renderer);
        }

        // 45° per frame over segments of 90°: the callback sees each segment
        // change exactly once, boundaries resolving to the earlier segment.
        assert_eq!(*crossings.borrow(), vec![1, 2, 3, 4, 1]);
    }

    #[test]
    fn pin_trigger_watches_pin_boundaries() {
        let mut config = spin_config(2, |animation| {
            animation.duration = 8;
            animation.spins = 1;
            animation.easing = Easing::Curve(Curve::Linear);
            animation.sound_trigger = SoundTrigger::Pin;
        });
        config.pins = PinConfig {
            number: 4,
            ..PinConfig::default()
        };
        let mut wheel = wheel(config);

        let crossings: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = crossings.clone();
        wheel
            .animation_mut()
            .on_sound(move |pin| sink.borrow_mut().push(pin));

        let mut renderer = NullRenderer;
        wheel.start_animation();
        while wheel.animation().is_running() {
            wheel.tick(&mut renderer);
        }

        assert_eq!(*crossings.borrow(), vec![1, 2, 3, 4, 1]);
    }

    #[test]
    fn stop_suppresses_or_fires_the_finished_callback() {
        let finished = Rc::new(Cell::new(0u32));

        let mut wheel = wheel(spin_config(4, |animation| {
            animation.duration = 20;
        }));
        let finished_in_callback = finished.clone();
        wheel
            .animation_mut()
            .on_finished(move || finished_in_callback.set(finished_in_callback.get() + 1));

        let mut renderer = CountingRenderer::default();
        wheel.start_animation();
        wheel.tick(&mut renderer);
        wheel.tick(&mut renderer);

        wheel.stop_animation(false, &mut renderer);
        assert!(!wheel.animation().is_running());
        assert_eq!(wheel.animation().current_step(), 20);
        assert_eq!(finished.get(), 0);
        // the final frame still rendered
        assert_eq!(renderer.frames, 3);

        wheel.start_animation();
        wheel.tick(&mut renderer);
        wheel.stop_animation(true, &mut renderer);
        assert_eq!(finished.get(), 1);
    }

    #[test]
    fn starting_again_discards_the_run_in_progress() {
        let mut wheel = wheel(spin_config(4, |animation| {
            animation.duration = 10;
        }));
        let mut renderer = NullRenderer;

        wheel.start_animation();
        wheel.tick(&mut renderer);
        wheel.tick(&mut renderer);
        wheel.tick(&mut renderer);
        assert_eq!(wheel.animation().current_step(), 3);

        wheel.start_animation();
        assert_eq!(wheel.animation().current_step(), 0);
        assert!(wheel.animation().is_running());
    }

    #[test]
    fn repeat_with_yoyo_swings_back_and_finishes_once() {
        let mut wheel = wheel(spin_config(4, |animation| {
            animation.duration = 4;
            animation.spins = 1;
            animation.repeat = 1;
            animation.yoyo = true;
            animation.easing = Easing::Curve(Curve::Linear);
        }));
        let finished = Rc::new(Cell::new(0u32));
        let finished_in_callback = finished.clone();
        wheel
            .animation_mut()
            .on_finished(move || finished_in_callback.set(finished_in_callback.get() + 1));

        let mut renderer = NullRenderer;
        wheel.start_animation();

        let mut ticks = 0;
        loop {
            let outcome = wheel.tick(&mut renderer);
            ticks += 1;
            if ticks == 4 {
                // first cycle over, run keeps going in the other direction
                assert!(!outcome.finished);
                assert!(wheel.animation().is_running());
                assert!(approx(wheel.rotation_angle(), 360.0));
            }
            if outcome.finished {
                break;
            }
            assert!(ticks < 100, "run never finished");
        }

        assert_eq!(ticks, 8);
        assert!(approx(wheel.rotation_angle(), 0.0));
        assert_eq!(finished.get(), 1);
    }

    #[test]
    fn before_and_after_callbacks_bracket_the_run() {
        let mut wheel = wheel(spin_config(4, |animation| {
            animation.duration = 5;
        }));
        let before = Rc::new(Cell::new(0u32));
        let after = Rc::new(Cell::new(0u32));

        let before_in_callback = before.clone();
        wheel
            .animation_mut()
            .on_before(move || before_in_callback.set(before_in_callback.get() + 1));
        let after_in_callback = after.clone();
        wheel
            .animation_mut()
            .on_after(move || after_in_callback.set(after_in_callback.get() + 1));

        let mut renderer = NullRenderer;
        wheel.start_animation();
        assert_eq!(before.get(), 1);
        assert_eq!(after.get(), 0);

        while wheel.animation().is_running() {
            wheel.tick(&mut renderer);
        }
        assert_eq!(before.get(), 1);
        assert_eq!(after.get(), 5);
    }
}
