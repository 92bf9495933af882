// What you SEE:
// • A black window; moving the mouse leaves a pulsing, color-cycling trail of dots.
// • Stop moving and the trail shrinks away from its tail.
// • C clears the trail. SPACE pauses/resumes. ESC quits.

use clap::Parser;
use color_trail::config::Args;
use color_trail::draw::Drawer;
use color_trail::{Canvas, Error, Trail, TrailAnimation};
use log::info;
use std::time::{Duration, Instant};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let options = args.trail_options()?;
    info!(
        "trail: {} stops x {} colors, {} points max, width {}..{}",
        options.color_stops.len(),
        options.segment_size,
        options.max_length,
        options.min_width,
        options.max_width
    );

    /* --- Window + canvas ---
       Visual: window opens black; the canvas is what we present each frame. */
    let mut drawer = Drawer::new("Color Trail", args.width, args.height, args.fps)?;
    info!("window {}x{} @ {} fps", args.width, args.height, args.fps);

    let trail = Trail::new(Canvas::new(args.width, args.height), &options, drawer.now_ms())?;
    let mut anim = TrailAnimation::new(trail);
    let now = drawer.now_ms();
    anim.start(&mut drawer.frames, &mut drawer.mouse, now);

    /* --- FPS ---
       Logged once per second. */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Inputs */
        if drawer.c_pressed_once() {
            anim.trail_mut().clear();
            log::debug!("trail cleared");
        }
        if drawer.space_pressed_once() {
            if anim.is_running() {
                anim.stop(&mut drawer.frames, &mut drawer.mouse);
            } else {
                let now = drawer.now_ms();
                anim.resume(&mut drawer.frames, &mut drawer.mouse, now);
            }
        }

        /* 2) Pointer moves, then the frame tick (draws into the canvas and re-arms). */
        for event in drawer.poll_events() {
            anim.handle(&mut drawer.frames, event)?;
        }

        /* 3) Present (paced by minifb; also pumps window input for the next pass). */
        drawer.present(&anim.trail().renderer().frame)?;

        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            info!("FPS: {:.1}, {} points", frames_this_second as f32 / secs, anim.trail().len());
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    anim.stop(&mut drawer.frames, &mut drawer.mouse);
    Ok(())
}
