use std::path::{Path, PathBuf};

use eframe::egui;

use crate::state::config::ViewerConfig;
use crate::state::viewer_state::ViewerState;
use crate::ui::graph_view;
use crate::ui::series_list::{self, SeriesListAction};

/// The viewer window: series list on the left, graph canvas on the right.
pub struct ViewerApp {
    pub state: ViewerState,
    /// An error message to display until dismissed.
    pub error_message: Option<String>,
}

impl ViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ViewerConfig, initial: Option<PathBuf>) -> Self {
        cc.egui_ctx.set_visuals(config.theme.visuals());

        let mut state = ViewerState::new(config);
        state.camera.on_click(|click| {
            tracing::debug!(x = click.pos.x, y = click.pos.y, "graph clicked");
        });
        state.camera.on_drag_end(|| tracing::trace!("pan finished"));

        let mut app = Self {
            state,
            error_message: None,
        };
        if let Some(path) = initial {
            app.load_file(&path);
        }
        app
    }

    /// Open a native file dialog and load the chosen file. Cancelling is a no-op.
    fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Select process stats file")
            .pick_file()
        {
            self.load_file(&path);
        }
    }

    fn load_file(&mut self, path: &Path) {
        if let Err(e) = self.state.load_path(path) {
            tracing::error!("{e}");
            self.error_message = Some(e.to_string());
        }
    }

    fn apply(&mut self, ctx: &egui::Context, action: SeriesListAction) {
        let changed = match action {
            SeriesListAction::Load => {
                self.open_file_dialog();
                true
            }
            SeriesListAction::SetVisible { row, visible } => {
                self.state.document.set_visible(row, visible)
            }
            SeriesListAction::MoveUp(row) => self.state.document.move_up(row),
            SeriesListAction::MoveDown(row) => self.state.document.move_down(row),
            SeriesListAction::ToggleTheme => {
                self.state.config.theme = self.state.config.theme.toggle();
                ctx.set_visuals(self.state.config.theme.visuals());
                true
            }
        };
        if changed {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = None;
        egui::SidePanel::left("series_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                action = series_list::show_series_list(
                    ui,
                    &self.state.document,
                    self.state.config.theme,
                );
            });
        if let Some(action) = action {
            self.apply(ctx, action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            graph_view::show_graph_view(ui, &mut self.state);
        });

        if let Some(message) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }
    }
}
