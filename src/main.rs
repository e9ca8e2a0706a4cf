use std::path::{Path, PathBuf};
use std::time::Duration;

use brochure::CarouselConfig;
use brochure::constants::*;
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod app;
mod slide;
mod texture_loader;
mod view;

use crate::app::PreviewApp;
use crate::slide::HeroSlide;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

const PLACEHOLDER_SLIDES: usize = 3;

/// Desktop preview of the brochure site widgets.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory of hero slide images. Colored panels are shown without one.
    images: Option<PathBuf>,

    /// Testimonial auto-advance interval in milliseconds
    #[arg(
        long,
        default_value_t = AUTO_ADVANCE_INTERVAL.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    interval_ms: u64,

    /// Drag distance in pixels that counts as a swipe
    #[arg(long, default_value_t = SWIPE_THRESHOLD)]
    swipe_threshold: f32,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Show the hero slides in random order
    #[arg(long)]
    shuffle: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "brochure=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!(?args, "starting preview");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Brochure Preview")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Hero Slides ---
    let mut hero_slides = load_hero_slides(&mut rl, &thread, args.images.as_deref());
    if args.shuffle {
        hero_slides.shuffle(&mut rand::rng());
    }

    let config = CarouselConfig {
        swipe_threshold: args.swipe_threshold,
        auto_advance: Duration::from_millis(args.interval_ms),
        ..CarouselConfig::default()
    };
    let mut app = PreviewApp::new(hero_slides, config);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        app.handle_input(&rl);
        app.update(dt);

        let mut d = rl.begin_drawing(&thread);
        app.render_frame(&mut d);
    }
}

/// Photos from `dir`, or placeholder panels when there are none to show.
fn load_hero_slides(rl: &mut RaylibHandle, thread: &RaylibThread, dir: Option<&Path>) -> Vec<HeroSlide> {
    let paths = match dir.map(load_sorted_image_paths) {
        Some(Ok(paths)) => paths,
        Some(Err(e)) => {
            warn!("{:#}, showing placeholder slides", e);
            Vec::new()
        }
        None => Vec::new(),
    };

    let mut slides = Vec::new();
    for path in paths {
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => {
                let caption = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                slides.push(HeroSlide::from_texture(texture, caption));
            }
            Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
        }
    }

    if slides.is_empty() {
        slides = (0..PLACEHOLDER_SLIDES).map(HeroSlide::placeholder).collect();
    }
    info!(count = slides.len(), "hero slides ready");
    slides
}
