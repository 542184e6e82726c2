/**
 * egui Native Desktop App - Main Entry Point
 *
 * Implements eframe::App for the thread board: polls background work every
 * frame, then draws the top bar and either the name prompt or the board.
 */
use eframe::egui;
use threadify::egui_app::{theme, views, AppState};

fn main() -> Result<(), eframe::Error> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Threadify",
        options,
        Box::new(|cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ThreadifyApp::default()))
        }),
    )
}

/// Main application state
struct ThreadifyApp {
    state: AppState,
}

impl Default for ThreadifyApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for ThreadifyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Live posts arrive without user input.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
