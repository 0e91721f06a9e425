//! Headless spin demo: builds an eight-segment wheel, runs a spin-to-stop
//! animation to completion, and logs a line per frame instead of drawing.
//!
//! Run with `RUST_LOG=info cargo run --example spin`.

use spinwheel::{
    AnimationKind, Frame, Renderer, SegmentConfig, SegmentText, SoundTrigger, Wheel, WheelConfig,
    WheelError,
};

struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn redraw(&mut self, frame: &Frame<'_>) {
        log::info!(
            "rotation {:8.3}° over {} segments",
            frame.rotation_angle,
            frame.segments.len()
        );
        if let Some(pins) = frame.pin_positions() {
            log::debug!("{} pins to draw", pins.len());
        }
    }
}

fn main() -> Result<(), WheelError> {
    env_logger::init();

    let prizes = [
        "Toaster", "Again!", "Holiday", "Nothing", "Car", "Again!", "Voucher", "Nothing",
    ];
    let mut config = WheelConfig {
        num_segments: prizes.len(),
        segments: prizes
            .iter()
            .map(|prize| SegmentConfig {
                text: SegmentText::new(*prize),
                ..SegmentConfig::default()
            })
            .collect(),
        outer_radius: Some(200.0),
        ..WheelConfig::default()
    };
    config.animation.kind = AnimationKind::SpinToStop;
    config.animation.duration = 60;
    config.animation.spins = 4;
    config.animation.stop_angle = Some(230.0);
    config.animation.sound_trigger = SoundTrigger::Segment;
    config.pins.visible = true;

    let mut wheel = Wheel::new(config)?;
    wheel
        .animation_mut()
        .on_sound(|segment| log::info!("tick: passed into segment {segment}"));
    wheel
        .animation_mut()
        .on_finished(|| log::info!("wheel stopped"));

    let mut renderer = ConsoleRenderer;
    wheel.start_animation();
    while wheel.animation().is_running() {
        wheel.tick(&mut renderer);
    }

    match wheel.indicated_segment() {
        Some(segment) => println!("you won: {}", segment.text),
        None => println!("the pointer landed between segments"),
    }
    Ok(())
}
