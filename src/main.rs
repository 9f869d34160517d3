// bongo-overlay main binary.
//
// Opens the overlay window and runs the render loop until it is closed.

use bongo_overlay::app;
use bongo_overlay::config::OverlayConfig;
use bongo_overlay::util::dialog::show_fatal_error;
use bongo_overlay::util::logging::init_logging;
use macroquad::miniquad::conf::Platform;
use macroquad::prelude::Conf;

fn window_conf() -> Conf {
    let config = OverlayConfig::default();
    Conf {
        window_title: config.title,
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        fullscreen: false,
        platform: Platform {
            swap_interval: Some(1),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging(false);
    tracing::info!("bongo-overlay starting");

    if let Err(e) = app::run(OverlayConfig::default()).await {
        // Textures and the observer thread are already gone at this point.
        show_fatal_error(&e);
        std::process::exit(1);
    }

    tracing::info!("bongo-overlay exiting");
}
