use glam::{Mat4, Vec3};

/// Opaque reference to one primitive group handed to the renderer.
///
/// The generation changes with every load, so a handle recorded for an
/// earlier document never matches a series of the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimitiveHandle {
    pub generation: u64,
    pub slot: u32,
}

/// Hands out primitive handles for one load.
#[derive(Debug)]
pub struct HandleAllocator {
    generation: u64,
    next_slot: u32,
}

impl HandleAllocator {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            next_slot: 0,
        }
    }

    pub fn next_handle(&mut self) -> PrimitiveHandle {
        let handle = PrimitiveHandle {
            generation: self.generation,
            slot: self.next_slot,
        };
        self.next_slot += 1;
        handle
    }
}

/// One point marker.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointSprite {
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub radius: f32,
}

/// All point markers of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct PointBatch {
    pub handle: PrimitiveHandle,
    pub sprites: Vec<PointSprite>,
}

/// Connected polyline through every sample of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStrip {
    pub handle: PrimitiveHandle,
    pub vertices: Vec<Vec3>,
    pub color: [f32; 4],
    pub width: f32,
}

/// Everything the renderer needs from the camera for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    pub projection: Mat4,
    pub view: Mat4,
    pub view_projection: Mat4,
    /// World position of the NDC origin on the near plane.
    pub camera_origin_near: Vec3,
    /// World position of the NDC origin on the far plane.
    pub camera_origin_far: Vec3,
}

impl Default for CameraMatrices {
    fn default() -> Self {
        Self {
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            view_projection: Mat4::IDENTITY,
            camera_origin_near: Vec3::ZERO,
            camera_origin_far: Vec3::Z,
        }
    }
}
