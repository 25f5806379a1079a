// SPDX-License-Identifier: GPL-3.0-only

use caption_camera::app::AppModel;
use caption_camera::constants::capture;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=caption_camera=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    info!(version = env!("GIT_VERSION"), "Starting caption camera");

    // Room for the video canvas plus the control row underneath it
    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(
            capture::FRAME_WIDTH as f32 + 40.0,
            capture::FRAME_HEIGHT as f32 + 160.0,
        ))
        .size_limits(
            cosmic::iced::Limits::NONE
                .min_width(capture::FRAME_WIDTH as f32)
                .min_height(capture::FRAME_HEIGHT as f32),
        );

    // Starts the application's event loop with `()` as the application's flags.
    cosmic::app::run::<AppModel>(settings, ())?;

    Ok(())
}
