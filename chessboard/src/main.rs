mod app;
mod applicator;
mod assets;
mod config;
mod coords;
mod error;
mod gesture;
mod oracle;
mod session;

use app::{ChessBoardApp, CHROME_HEIGHT};
use boardui::BoardTheme;
use config::BoardConfig;
use eframe::NativeOptions;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = BoardConfig::default();
    let title = config.title;
    tracing::info!(
        width = config.width,
        height = config.height,
        images = %config.images_dir.display(),
        "starting chessboard"
    );

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32, config.height as f32 + CHROME_HEIGHT])
            .with_resizable(false)
            .with_title(title),
        ..Default::default()
    };
    eframe::run_native(
        title,
        options,
        Box::new(move |cc| {
            BoardTheme::default().apply(&cc.egui_ctx);
            Box::new(ChessBoardApp::new(cc, config))
        }),
    )
}
