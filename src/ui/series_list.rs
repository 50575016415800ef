use crate::state::config::Theme;
use crate::state::document::Document;

/// Requests the series panel makes of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesListAction {
    Load,
    SetVisible { row: usize, visible: bool },
    MoveUp(usize),
    MoveDown(usize),
    ToggleTheme,
}

/// Render the series list with its load button. Returns at most one action
/// per frame.
pub fn show_series_list(
    ui: &mut egui::Ui,
    document: &Document,
    theme: Theme,
) -> Option<SeriesListAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui
            .add(egui::Button::new("Load").min_size(egui::vec2(0.0, 26.0)))
            .on_hover_text("Select process stats file")
            .clicked()
        {
            action = Some(SeriesListAction::Load);
        }
        if ui
            .button(theme.toggle().label())
            .on_hover_text("Switch theme")
            .clicked()
        {
            action = Some(SeriesListAction::ToggleTheme);
        }
    });

    if let Some(path) = document.source() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        ui.label(egui::RichText::new(name).strong())
            .on_hover_text(path.display().to_string());
        let stats = document.stats();
        ui.small(format!(
            "{} series, {} sections, {} lines skipped",
            document.series().len(),
            document.section_count(),
            stats.skipped
        ));
    }
    ui.separator();

    let last = document.series().len().saturating_sub(1);
    egui::ScrollArea::vertical().show(ui, |ui| {
        for (row, series) in document.series().iter().enumerate() {
            egui::Frame::default()
                .fill(series.color32())
                .inner_margin(egui::Margin::symmetric(6, 2))
                .corner_radius(egui::CornerRadius::same(4))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let mut visible = series.visible;
                        let label = egui::RichText::new(&series.name).color(egui::Color32::BLACK);
                        if ui.checkbox(&mut visible, label).changed() {
                            action = Some(SeriesListAction::SetVisible { row, visible });
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let down = ui.add_enabled(row < last, egui::Button::new("v").small());
                            if down.on_hover_text("Draw further back").clicked() {
                                action = Some(SeriesListAction::MoveDown(row));
                            }
                            let up = ui.add_enabled(row > 0, egui::Button::new("^").small());
                            if up.on_hover_text("Draw further forward").clicked() {
                                action = Some(SeriesListAction::MoveUp(row));
                            }
                        });
                    });
                });
        }
    });

    action
}
