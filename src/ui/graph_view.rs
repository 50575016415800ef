use glam::{IVec2, Vec2, Vec3};

use crate::plot2d::graph_controller::{GraphViewController, MouseButton, MouseEvent};
use crate::render::hit_test::HitTester;
use crate::render::picking::Tooltip;
use crate::state::viewer_state::ViewerState;

fn map_button(button: egui::PointerButton) -> Option<MouseButton> {
    match button {
        egui::PointerButton::Primary => Some(MouseButton::Left),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        _ => None,
    }
}

fn to_local(pos: egui::Pos2, rect: egui::Rect) -> IVec2 {
    IVec2::new(
        (pos.x - rect.left()).round() as i32,
        (pos.y - rect.top()).round() as i32,
    )
}

fn to_screen(camera: &GraphViewController, rect: egui::Rect, world: Vec3) -> egui::Pos2 {
    let local = camera.project(world);
    egui::pos2(rect.left() + local.x, rect.top() + local.y)
}

/// Forward this frame's pointer input to the camera.
fn feed_input(ui: &egui::Ui, response: &egui::Response, rect: egui::Rect, camera: &mut GraphViewController) {
    let (events, double_clicked, scroll) = ui.input(|i| {
        (
            i.events.clone(),
            i.pointer.button_double_clicked(egui::PointerButton::Primary),
            i.raw_scroll_delta.y,
        )
    });

    for event in &events {
        match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                let Some(button) = map_button(*button) else {
                    continue;
                };
                let local = to_local(*pos, rect);
                if *pressed {
                    // Presses outside the canvas belong to other widgets.
                    if rect.contains(*pos) {
                        camera.handle_event(MouseEvent::Press { button, pos: local });
                    }
                } else {
                    camera.handle_event(MouseEvent::Release { button, pos: local });
                }
            }
            egui::Event::PointerMoved(pos) => {
                camera.handle_event(MouseEvent::Move {
                    pos: to_local(*pos, rect),
                });
            }
            egui::Event::PointerGone => camera.handle_event(MouseEvent::Other),
            _ => {}
        }
    }

    if double_clicked {
        if let Some(pos) = response.hover_pos() {
            camera.handle_event(MouseEvent::DoubleClick {
                button: MouseButton::Left,
                pos: to_local(pos, rect),
            });
        }
    }

    if scroll != 0.0 {
        if let Some(pos) = response.hover_pos() {
            camera.handle_event(MouseEvent::Wheel {
                pos: to_local(pos, rect),
                delta: scroll.signum() as i32,
            });
        }
    }
}

/// Paint the plot canvas and handle pan, zoom and hover.
pub fn show_graph_view(ui: &mut egui::Ui, state: &mut ViewerState) {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

    let camera = &mut state.camera;
    camera.resize(rect.width().round() as u32, rect.height().round() as u32);
    feed_input(ui, &response, rect, camera);
    if camera.take_redraw_request() {
        ui.ctx().request_repaint();
    }

    let camera = &state.camera;
    let document = &state.document;
    let theme = state.config.theme;
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, theme.canvas_fill());

    if document.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Load a process stats file",
            egui::FontId::proportional(16.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    // Plot frame: x from 0 to the configured extent, y from 0 to 1.
    let frame = egui::Rect::from_two_pos(
        to_screen(camera, rect, Vec3::ZERO),
        to_screen(camera, rect, Vec3::new(state.config.x_extent, 1.0, 0.0)),
    );
    painter.rect_stroke(
        frame,
        0.0,
        theme.plot_frame_stroke(),
        egui::StrokeKind::Outside,
    );

    for series in document.draw_order() {
        let color = series.color32();
        let line: Vec<egui::Pos2> = series
            .line_strip
            .vertices
            .iter()
            .map(|v| to_screen(camera, rect, *v))
            .collect();
        if line.len() > 1 {
            painter.add(egui::Shape::line(
                line,
                egui::Stroke::new(series.line_strip.width, color),
            ));
        }
        for sprite in &series.point_batch.sprites {
            let center = to_screen(camera, rect, Vec3::from_array(sprite.position));
            painter.circle_filled(center, sprite.radius, color);
        }
    }

    if camera.interaction().active_button.is_some() {
        return;
    }
    if let Some(hover) = response.hover_pos() {
        let tester = HitTester::build(
            document.series(),
            Vec2::new(rect.width(), rect.height()),
            |world| camera.project(world),
        );
        let cursor = Vec2::new(hover.x - rect.left(), hover.y - rect.top());
        if let Some(tooltip) = tester.pick(cursor).and_then(|pick| document.tooltip(&pick)) {
            draw_tooltip(&painter, hover, &tooltip);
        }
    }
}

fn draw_tooltip(painter: &egui::Painter, pos: egui::Pos2, tooltip: &Tooltip) {
    let font = egui::FontId::proportional(12.0);
    let text_color = painter.ctx().style().visuals.text_color();
    let text = tooltip.to_string();
    let galley = painter.layout_no_wrap(text.clone(), font.clone(), text_color);
    let size = galley.rect.size();

    let text_pos = egui::pos2(pos.x + 12.0, pos.y - size.y - 8.0);
    let bg_rect = egui::Rect::from_min_size(
        egui::pos2(text_pos.x - 4.0, text_pos.y - 2.0),
        egui::vec2(size.x + 8.0, size.y + 4.0),
    );

    let bg_color = painter.ctx().style().visuals.window_fill;
    painter.rect_filled(bg_rect, 3.0, bg_color.gamma_multiply(0.9));
    painter.rect_stroke(
        bg_rect,
        3.0,
        egui::Stroke::new(0.5, text_color),
        egui::StrokeKind::Outside,
    );
    painter.text(text_pos, egui::Align2::LEFT_TOP, text, font, text_color);
}
