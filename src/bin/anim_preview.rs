//! Play an animation set from a JSON file and log the frames it shows.
//!
//! Usage: cargo run --bin anim_preview -- <set.json> [--steps N] [--dt SECS]
//!
//! Without `--dt` the preview runs in real time at roughly 60 steps per second.

use std::path::PathBuf;
use std::time::Duration;

use wonderlift::animation::{AnimationSetConfig, ClipEvent, SpriteBank};
use wonderlift::core::time::FrameTimer;

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn main() -> wonderlift::core::Result<()> {
    wonderlift::core::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1).filter(|a| !a.starts_with("--")) else {
        eprintln!("Usage: anim_preview <set.json> [--steps N] [--dt SECS]");
        std::process::exit(2);
    };
    let steps: u32 = arg_value(&args, "--steps")
        .and_then(|s| s.parse().ok())
        .unwrap_or(120);
    let fixed_dt: Option<f32> = arg_value(&args, "--dt").and_then(|s| s.parse().ok());

    let config = AnimationSetConfig::load_sync(&PathBuf::from(path))?;

    // One sprite per referenced id, sized to the largest frame any clip uses
    let mut bank = SpriteBank::new();
    let sprite_count = config
        .states
        .iter()
        .filter_map(|s| s.sprite)
        .map(|id| id.0.saturating_add(1))
        .max()
        .unwrap_or(0);
    for id in 0..sprite_count {
        let frames = config
            .states
            .iter()
            .filter(|s| s.sprite.map(|sid| sid.0) == Some(id))
            .map(|s| s.max_frame.saturating_add(1))
            .max()
            .unwrap_or(1);
        bank.add(frames);
    }

    let mut machine = config.build()?;
    for (state, clip_config) in config.states.iter().enumerate() {
        if let Some(clip) = machine.clip(state) {
            log::info!(
                "  {}: {} frames x {:.3}s{}",
                clip_config.name,
                clip.frame_count(),
                clip.frame_duration(),
                if clip.is_looping() { " (loop)" } else { "" }
            );
        }
    }
    if machine.state().is_none() {
        machine.set_state(0)?;
    }

    let mut timer = FrameTimer::with_max_delta(Duration::from_millis(100));
    for step in 0..steps {
        let dt = match fixed_dt {
            Some(dt) => dt,
            None => {
                std::thread::sleep(Duration::from_millis(16));
                timer.tick();
                timer.delta_secs()
            }
        };

        machine.update_with(dt, &mut bank);

        if let Some(event) = machine.last_event() {
            let state = machine.state().unwrap_or_default();
            let name = config.states.get(state).map(|s| s.name.as_str()).unwrap_or("?");
            match event {
                ClipEvent::Advanced => {
                    log::debug!("step {}: {} frame {:?}", step, name, machine.frame())
                }
                other => log::info!("step {}: {:?} -> now in '{}'", step, other, name),
            }
        }

        if !machine.is_playing() {
            log::info!("Animation finished after {} steps", step + 1);
            break;
        }
    }

    if fixed_dt.is_none() {
        log::info!("Preview ran {} frames at {:.1} fps", timer.frame_count(), timer.fps());
    }
    Ok(())
}
