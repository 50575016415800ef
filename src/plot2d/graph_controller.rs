use glam::{IVec2, Mat4, Vec2, Vec3, Vec4};
use serde_json::{json, Value};

use crate::render::primitives::CameraMatrices;
use crate::state::config::ViewerConfig;

/// Half-extents smaller than this are replaced by 1.0 before use.
const MIN_DISTANCE: f32 = 1e-9;

/// Rotation applied to pan deltas. Kept at zero; the graph is never rotated.
const PAN_ROTATION_RADIANS: f32 = 0.0;

const KEY_FOCAL_POINT: &str = "Focal point";
const KEY_DISTANCE_X: &str = "DistanceX";
const KEY_DISTANCE_Y: &str = "DistanceY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Pointer input in viewport pixels, origin top-left, y down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    Press { button: MouseButton, pos: IVec2 },
    Move { pos: IVec2 },
    Release { button: MouseButton, pos: IVec2 },
    /// Positive delta zooms in, negative zooms out.
    Wheel { pos: IVec2, delta: i32 },
    DoubleClick { button: MouseButton, pos: IVec2 },
    /// Anything the controller does not interpret (pointer left, cancel, ...).
    Other,
}

/// A press and release close enough together to count as a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub button: MouseButton,
    pub pos: IVec2,
}

/// Camera parameters over the normalized plot.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub focal_point: Vec2,
    /// Horizontal half-extent in world units before aspect correction.
    pub distance_x: f32,
    /// Vertical half-extent in world units before aspect correction.
    pub distance_y: f32,
    pub allow_translation: bool,
    pub allow_zoom: bool,
    /// Reserved; the current transform ignores it.
    pub rotation_factor: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            focal_point: Vec2::new(0.0, 0.5),
            distance_x: 10.0,
            distance_y: 1.0,
            allow_translation: true,
            allow_zoom: true,
            rotation_factor: 0.2,
        }
    }
}

/// Latched button and drag bookkeeping between press and release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub active_button: Option<MouseButton>,
    pub drag_start_pos: IVec2,
    pub last_pos: IVec2,
    pub has_moved: bool,
}

type Hook = Box<dyn FnMut()>;
type ClickHook = Box<dyn FnMut(&ClickEvent)>;

#[derive(Default)]
struct Hooks {
    drag_start: Vec<Hook>,
    drag_end: Vec<Hook>,
    click: Vec<ClickHook>,
}

/// Planar orthographic camera with pan, anchor-point zoom and click/drag
/// disambiguation.
pub struct GraphViewController {
    state: CameraState,
    interaction: InteractionState,
    width: u32,
    height: u32,
    click_threshold: i32,
    zoom_in_factor: f32,
    zoom_out_factor: f32,
    matrices: CameraMatrices,
    redraw_requested: bool,
    hooks: Hooks,
}

impl Default for GraphViewController {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl std::fmt::Debug for GraphViewController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphViewController")
            .field("state", &self.state)
            .field("interaction", &self.interaction)
            .field("viewport", &(self.width, self.height))
            .finish_non_exhaustive()
    }
}

impl GraphViewController {
    pub fn new(config: &ViewerConfig) -> Self {
        let state = CameraState {
            focal_point: Vec2::from_array(config.focal_point),
            distance_x: config.distance_x,
            distance_y: config.distance_y,
            ..CameraState::default()
        };
        let mut controller = Self {
            state,
            interaction: InteractionState::default(),
            width: 1,
            height: 1,
            click_threshold: config.click_threshold_px,
            zoom_in_factor: config.zoom_in_factor,
            zoom_out_factor: config.zoom_out_factor,
            matrices: CameraMatrices::default(),
            redraw_requested: false,
            hooks: Hooks::default(),
        };
        controller.update_matrices();
        controller
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn matrices(&self) -> &CameraMatrices {
        &self.matrices
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn focal_point(&self) -> Vec2 {
        self.state.focal_point
    }

    pub fn set_focal_point(&mut self, focal_point: Vec2) {
        self.state.focal_point = focal_point;
        self.update_matrices();
        self.request_redraw();
    }

    pub fn allow_translation(&self) -> bool {
        self.state.allow_translation
    }

    pub fn set_allow_translation(&mut self, allow: bool) {
        self.state.allow_translation = allow;
    }

    pub fn allow_zoom(&self) -> bool {
        self.state.allow_zoom
    }

    pub fn set_allow_zoom(&mut self, allow: bool) {
        self.state.allow_zoom = allow;
    }

    pub fn rotation_factor(&self) -> f32 {
        self.state.rotation_factor
    }

    pub fn set_rotation_factor(&mut self, rotation_factor: f32) {
        self.state.rotation_factor = rotation_factor;
    }

    /// Returns whether a redraw was requested since the last call, and clears it.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    // -----------------------------------------------------------------------
    // Transition hooks
    // -----------------------------------------------------------------------

    /// Called on every press, before the button is latched.
    pub fn on_drag_start(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.drag_start.push(Box::new(hook));
    }

    /// Called when a left-button drag is released.
    pub fn on_drag_end(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.drag_end.push(Box::new(hook));
    }

    /// Called when a press/release pair stays within the click threshold.
    pub fn on_click(&mut self, hook: impl FnMut(&ClickEvent) + 'static) {
        self.hooks.click.push(Box::new(hook));
    }

    // -----------------------------------------------------------------------
    // Projection
    // -----------------------------------------------------------------------

    /// Viewport-aspect scale applied to the horizontal and vertical extents.
    fn aspect_factors(&self) -> (f32, f32) {
        let width = self.width as f32;
        let height = self.height as f32;
        if width > height {
            (width / height, 1.0)
        } else {
            (1.0, height / width)
        }
    }

    fn sanitize_distance(distance: f32) -> f32 {
        if !distance.is_finite() || distance.abs() < MIN_DISTANCE {
            1.0
        } else {
            distance.abs()
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.update_matrices();
    }

    /// Recompute the view and projection from the camera state.
    pub fn update_matrices(&mut self) {
        self.state.distance_x = Self::sanitize_distance(self.state.distance_x);
        self.state.distance_y = Self::sanitize_distance(self.state.distance_y);

        let (fw, fh) = self.aspect_factors();
        let dx = self.state.distance_x;
        let dy = self.state.distance_y;

        let view = Mat4::from_translation(-self.state.focal_point.extend(0.0));
        let projection = Mat4::orthographic_rh_gl(-fw * dx, fw * dx, -fh * dy, fh * dy, -1.0, 1.0);
        let view_projection = projection * view;
        let inverse = view_projection.inverse();

        self.matrices = CameraMatrices {
            projection,
            view,
            view_projection,
            camera_origin_near: inverse.project_point3(Vec3::ZERO),
            camera_origin_far: inverse.project_point3(Vec3::Z),
        };
    }

    /// World point on the plot plane under a viewport pixel.
    pub fn unproject(&self, pos: Vec2) -> Option<Vec2> {
        let ndc = Vec4::new(
            2.0 * pos.x / self.width as f32 - 1.0,
            1.0 - 2.0 * pos.y / self.height as f32,
            0.0,
            1.0,
        );
        let world = self.matrices.view_projection.inverse() * ndc;
        if world.w.abs() <= f32::EPSILON {
            return None;
        }
        let world = world.truncate() / world.w;
        world.is_finite().then(|| world.truncate())
    }

    /// Viewport pixel at which a world point is drawn.
    pub fn project(&self, world: Vec3) -> Vec2 {
        let ndc = self.matrices.view_projection.project_point3(world);
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - ndc.y) * 0.5 * self.height as f32,
        )
    }

    // -----------------------------------------------------------------------
    // Camera moves
    // -----------------------------------------------------------------------

    /// Move the camera so content follows a pointer displacement in pixels.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        if !self.state.allow_translation {
            return;
        }

        let (fw, fh) = self.aspect_factors();
        let dx = dx / self.width as f32 * fw * self.state.distance_x * 2.0;
        let dy = dy / self.height as f32 * fh * self.state.distance_y * 2.0;

        let rotated = Vec2::from_angle(PAN_ROTATION_RADIANS).rotate(Vec2::new(dx, dy));
        self.state.focal_point.x -= rotated.x;
        self.state.focal_point.y += rotated.y;

        self.update_matrices();
    }

    /// Scale one axis around the world point under `cursor`.
    ///
    /// `vertical` picks the y half-extent instead of x. A zero delta does
    /// nothing.
    pub fn zoom(&mut self, delta: i32, cursor: IVec2, vertical: bool) {
        if !self.state.allow_zoom {
            return;
        }

        let factor = match delta.signum() {
            -1 => self.zoom_out_factor,
            1 => self.zoom_in_factor,
            _ => return,
        };

        let cursor = cursor.as_vec2();
        let before = self.unproject(cursor);

        if vertical {
            self.state.distance_y *= factor;
        } else {
            self.state.distance_x *= factor;
        }
        self.update_matrices();

        if let (Some(before), Some(after)) = (before, self.unproject(cursor)) {
            self.state.focal_point += before - after;
            self.update_matrices();
        }

        self.request_redraw();
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    fn within_click_threshold(&self, a: IVec2, b: IVec2) -> bool {
        let offset = (a - b).abs();
        offset.x + offset.y <= self.click_threshold
    }

    pub fn handle_event(&mut self, event: MouseEvent) {
        match event {
            MouseEvent::Press { button, pos } => {
                for hook in &mut self.hooks.drag_start {
                    hook();
                }
                if self.interaction.active_button.is_none() {
                    self.interaction = InteractionState {
                        active_button: Some(button),
                        drag_start_pos: pos,
                        last_pos: pos,
                        has_moved: false,
                    };
                }
            }

            MouseEvent::Move { pos } => {
                let Some(button) = self.interaction.active_button else {
                    return;
                };

                if !self.interaction.has_moved {
                    if self.within_click_threshold(self.interaction.drag_start_pos, pos) {
                        return;
                    }
                    self.interaction.has_moved = true;
                }

                let delta = (pos - self.interaction.last_pos).as_vec2();
                self.interaction.last_pos = pos;

                match button {
                    MouseButton::Left => {
                        self.pan(delta.x, delta.y);
                        self.request_redraw();
                    }
                    MouseButton::Right => self.request_redraw(),
                }
            }

            MouseEvent::Release { button, pos } => {
                if self.interaction.active_button != Some(button) {
                    return;
                }
                self.interaction.active_button = None;

                if !self.interaction.has_moved {
                    if self.within_click_threshold(self.interaction.drag_start_pos, pos) {
                        let click = ClickEvent { button, pos };
                        for hook in &mut self.hooks.click {
                            hook(&click);
                        }
                    }
                } else if button == MouseButton::Left {
                    for hook in &mut self.hooks.drag_end {
                        hook();
                    }
                }
            }

            MouseEvent::Wheel { pos, delta } => {
                let vertical = self.interaction.active_button == Some(MouseButton::Right);
                self.zoom(delta, pos, vertical);
            }

            MouseEvent::DoubleClick { .. } | MouseEvent::Other => {
                self.interaction.active_button = None;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Camera placement as JSON. Behavior flags are not included.
    pub fn save_state(&self) -> Value {
        let focal = self.state.focal_point;
        json!({
            KEY_FOCAL_POINT: [focal.x, focal.y, 0.0],
            KEY_DISTANCE_X: self.state.distance_x,
            KEY_DISTANCE_Y: self.state.distance_y,
        })
    }

    /// Restore what [`save_state`](Self::save_state) wrote. Missing or
    /// malformed fields keep their current values.
    pub fn load_state(&mut self, state: &Value) {
        if let Some(focal) = state.get(KEY_FOCAL_POINT).and_then(read_vec2) {
            self.state.focal_point = focal;
        } else if state.get(KEY_FOCAL_POINT).is_some() {
            tracing::warn!("ignoring malformed \"{KEY_FOCAL_POINT}\" in camera state");
        }
        if let Some(distance) = state.get(KEY_DISTANCE_X).and_then(Value::as_f64) {
            self.state.distance_x = distance as f32;
        }
        if let Some(distance) = state.get(KEY_DISTANCE_Y).and_then(Value::as_f64) {
            self.state.distance_y = distance as f32;
        }

        self.update_matrices();
        self.request_redraw();
    }
}

/// Accepts `[x, y]` or `[x, y, z]`; z is dropped.
fn read_vec2(value: &Value) -> Option<Vec2> {
    let items = value.as_array()?;
    if !(2..=3).contains(&items.len()) {
        return None;
    }
    let x = items[0].as_f64()?;
    let y = items[1].as_f64()?;
    Some(Vec2::new(x as f32, y as f32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller(width: u32, height: u32) -> GraphViewController {
        let mut c = GraphViewController::default();
        c.resize(width, height);
        c
    }

    #[test]
    fn projection_widens_the_longer_axis() {
        let c = controller(800, 400);
        let corner = c.unproject(Vec2::new(800.0, 0.0)).unwrap();
        // fw = 2: x half-extent 20 around 0, y half-extent 1 around 0.5
        assert_relative_eq!(corner.x, 20.0, epsilon = 1e-4);
        assert_relative_eq!(corner.y, 1.5, epsilon = 1e-4);

        let tall = controller(400, 800);
        let corner = tall.unproject(Vec2::new(400.0, 800.0)).unwrap();
        assert_relative_eq!(corner.x, 10.0, epsilon = 1e-4);
        assert_relative_eq!(corner.y, -1.5, epsilon = 1e-4);
    }

    #[test]
    fn near_zero_distances_clamp_to_one() {
        let mut c = controller(100, 100);
        c.load_state(&json!({ "DistanceX": 0.0, "DistanceY": 1e-12 }));
        assert_eq!(c.state().distance_x, 1.0);
        assert_eq!(c.state().distance_y, 1.0);
    }

    #[test]
    fn camera_origins_follow_focal_point() {
        let mut c = controller(200, 100);
        c.set_focal_point(Vec2::new(3.0, -2.0));
        let m = c.matrices();
        assert_relative_eq!(m.camera_origin_near.x, 3.0, epsilon = 1e-5);
        assert_relative_eq!(m.camera_origin_near.y, -2.0, epsilon = 1e-5);
        assert_relative_eq!(m.camera_origin_far.x, 3.0, epsilon = 1e-5);
        assert!(c.take_redraw_request());
        assert!(!c.take_redraw_request());
    }

    #[test]
    fn project_inverts_unproject() {
        let c = controller(640, 480);
        let screen = c.project(Vec3::new(1.0, 0.25, 0.0));
        let world = c.unproject(screen).unwrap();
        assert_relative_eq!(world.x, 1.0, epsilon = 1e-4);
        assert_relative_eq!(world.y, 0.25, epsilon = 1e-4);
    }

    #[test]
    fn pan_moves_content_with_pointer() {
        let mut c = controller(400, 400);
        let grabbed = c.unproject(Vec2::new(100.0, 100.0)).unwrap();
        c.pan(40.0, -20.0);
        let now = c.unproject(Vec2::new(140.0, 80.0)).unwrap();
        assert_relative_eq!(grabbed.x, now.x, epsilon = 1e-4);
        assert_relative_eq!(grabbed.y, now.y, epsilon = 1e-4);
    }

    #[test]
    fn pan_respects_allow_translation() {
        let mut c = controller(400, 400);
        c.set_allow_translation(false);
        c.pan(40.0, 40.0);
        assert_eq!(c.focal_point(), Vec2::new(0.0, 0.5));
    }

    #[test]
    fn wheel_zoom_keeps_cursor_anchor() {
        let mut c = controller(800, 600);
        let cursor = IVec2::new(613, 127);
        let before = c.unproject(cursor.as_vec2()).unwrap();

        c.handle_event(MouseEvent::Wheel { pos: cursor, delta: 120 });
        assert_relative_eq!(c.state().distance_x, 9.0, epsilon = 1e-5);
        let after = c.unproject(cursor.as_vec2()).unwrap();
        assert!((before - after).length() < 1e-4);

        c.handle_event(MouseEvent::Wheel { pos: cursor, delta: -120 });
        assert_relative_eq!(c.state().distance_x, 9.9, epsilon = 1e-5);
        let after = c.unproject(cursor.as_vec2()).unwrap();
        assert!((before - after).length() < 1e-4);
    }

    #[test]
    fn zero_wheel_delta_is_noop() {
        let mut c = controller(800, 600);
        c.handle_event(MouseEvent::Wheel { pos: IVec2::new(10, 10), delta: 0 });
        assert_eq!(*c.state(), CameraState::default());
        assert!(!c.take_redraw_request());
    }

    #[test]
    fn right_button_latches_vertical_zoom() {
        let mut c = controller(800, 600);
        c.handle_event(MouseEvent::Press { button: MouseButton::Right, pos: IVec2::new(5, 5) });
        c.handle_event(MouseEvent::Wheel { pos: IVec2::new(5, 5), delta: 1 });
        assert_relative_eq!(c.state().distance_y, 0.9, epsilon = 1e-6);
        assert_relative_eq!(c.state().distance_x, 10.0);
    }

    #[test]
    fn zoom_disabled_leaves_camera() {
        let mut c = controller(800, 600);
        c.set_allow_zoom(false);
        c.zoom(1, IVec2::new(300, 300), false);
        assert_eq!(c.state().distance_x, 10.0);
    }

    #[test]
    fn small_release_is_click_not_pan() {
        let mut c = controller(800, 600);
        let clicks = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&clicks);
        c.on_click(move |click| sink.borrow_mut().push(*click));

        c.handle_event(MouseEvent::Press { button: MouseButton::Left, pos: IVec2::new(100, 100) });
        c.handle_event(MouseEvent::Move { pos: IVec2::new(103, 102) });
        c.handle_event(MouseEvent::Release { button: MouseButton::Left, pos: IVec2::new(103, 102) });

        assert_eq!(
            clicks.borrow().as_slice(),
            &[ClickEvent { button: MouseButton::Left, pos: IVec2::new(103, 102) }]
        );
        assert_eq!(c.focal_point(), Vec2::new(0.0, 0.5));
        assert_eq!(c.interaction().active_button, None);
    }

    #[test]
    fn drag_past_threshold_pans_and_finishes() {
        let mut c = controller(800, 600);
        let clicks = Rc::new(RefCell::new(0));
        let ends = Rc::new(RefCell::new(0));
        let starts = Rc::new(RefCell::new(0));
        {
            let clicks = Rc::clone(&clicks);
            c.on_click(move |_| *clicks.borrow_mut() += 1);
            let ends = Rc::clone(&ends);
            c.on_drag_end(move || *ends.borrow_mut() += 1);
            let starts = Rc::clone(&starts);
            c.on_drag_start(move || *starts.borrow_mut() += 1);
        }

        c.handle_event(MouseEvent::Press { button: MouseButton::Left, pos: IVec2::new(100, 100) });
        c.handle_event(MouseEvent::Move { pos: IVec2::new(110, 100) });
        assert!(c.interaction().has_moved);
        assert!(c.focal_point().x < 0.0);
        assert!(c.take_redraw_request());
        c.handle_event(MouseEvent::Release { button: MouseButton::Left, pos: IVec2::new(110, 100) });

        assert_eq!(*clicks.borrow(), 0);
        assert_eq!(*ends.borrow(), 1);
        assert_eq!(*starts.borrow(), 1);
    }

    #[test]
    fn moves_use_per_event_delta() {
        let mut c = controller(400, 400);
        c.handle_event(MouseEvent::Press { button: MouseButton::Left, pos: IVec2::new(0, 0) });
        c.handle_event(MouseEvent::Move { pos: IVec2::new(20, 0) });
        let after_first = c.focal_point();
        c.handle_event(MouseEvent::Move { pos: IVec2::new(21, 0) });
        let step = after_first.x - c.focal_point().x;
        // one pixel of a 400px viewport spanning 20 world units
        assert_relative_eq!(step, 0.05, epsilon = 1e-5);
        assert_eq!(c.interaction().last_pos, IVec2::new(21, 0));
    }

    #[test]
    fn right_drag_redraws_without_panning() {
        let mut c = controller(400, 400);
        c.handle_event(MouseEvent::Press { button: MouseButton::Right, pos: IVec2::new(0, 0) });
        c.handle_event(MouseEvent::Move { pos: IVec2::new(50, 50) });
        assert!(c.take_redraw_request());
        assert_eq!(c.focal_point(), Vec2::new(0.0, 0.5));
    }

    #[test]
    fn second_press_does_not_relatch() {
        let mut c = controller(400, 400);
        c.handle_event(MouseEvent::Press { button: MouseButton::Left, pos: IVec2::new(0, 0) });
        c.handle_event(MouseEvent::Press { button: MouseButton::Right, pos: IVec2::new(50, 50) });
        assert_eq!(c.interaction().active_button, Some(MouseButton::Left));
        assert_eq!(c.interaction().drag_start_pos, IVec2::ZERO);

        c.handle_event(MouseEvent::Release { button: MouseButton::Right, pos: IVec2::new(50, 50) });
        assert_eq!(c.interaction().active_button, Some(MouseButton::Left));
    }

    #[test]
    fn double_click_and_unknown_events_reset_button() {
        let mut c = controller(400, 400);
        c.handle_event(MouseEvent::Press { button: MouseButton::Left, pos: IVec2::new(0, 0) });
        c.handle_event(MouseEvent::DoubleClick { button: MouseButton::Left, pos: IVec2::new(0, 0) });
        assert_eq!(c.interaction().active_button, None);

        c.handle_event(MouseEvent::Press { button: MouseButton::Right, pos: IVec2::new(0, 0) });
        c.handle_event(MouseEvent::Other);
        assert_eq!(c.interaction().active_button, None);
    }

    #[test]
    fn state_roundtrip() {
        let mut c = controller(640, 480);
        c.set_focal_point(Vec2::new(2.5, -0.75));
        c.zoom(1, IVec2::new(10, 400), false);
        let saved = c.save_state();
        let before = c.state().clone();

        c.load_state(&saved);
        assert_eq!(*c.state(), before);
        assert!(c.take_redraw_request());
    }

    #[test]
    fn load_state_accepts_two_components_and_keeps_missing() {
        let mut c = controller(640, 480);
        c.load_state(&json!({ "Focal point": [1.0, 2.0] }));
        assert_eq!(c.focal_point(), Vec2::new(1.0, 2.0));
        assert_eq!(c.state().distance_x, 10.0);

        c.load_state(&json!({ "Focal point": "bogus", "DistanceY": 4.0 }));
        assert_eq!(c.focal_point(), Vec2::new(1.0, 2.0));
        assert_eq!(c.state().distance_y, 4.0);
    }

    #[test]
    fn saved_state_uses_documented_keys() {
        let saved = GraphViewController::default().save_state();
        assert_eq!(saved["Focal point"], json!([0.0, 0.5, 0.0]));
        assert_eq!(saved["DistanceX"], json!(10.0));
        assert_eq!(saved["DistanceY"], json!(1.0));
        assert!(saved.get("allow_zoom").is_none());
    }
}
