//! The object the interpreter moves.

/// Anything with a 2D position, a y-axis rotation, and a uniform scale.
///
/// The interpreter writes through this trait and never owns the target.
/// Implementors must not clamp scale themselves; the interpreter enforces
/// its configured bounds.
pub trait TransformTarget {
    fn position(&self) -> (f32, f32);
    fn set_position(&mut self, x: f32, y: f32);

    /// Rotation about the y axis, radians.
    fn rotation_y(&self) -> f32;
    fn set_rotation_y(&mut self, radians: f32);

    fn scale(&self) -> f32;
    fn set_scale(&mut self, scale: f32);
}

/// Plain-data transform.  Used headless (replay, tests) and embedded by
/// renderable models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTransform {
    pub x:          f32,
    pub y:          f32,
    pub rotation_y: f32,
    pub scale:      f32,
}

impl ModelTransform {
    pub fn with_scale(scale: f32) -> Self {
        ModelTransform { scale, ..Default::default() }
    }
}

impl Default for ModelTransform {
    fn default() -> Self {
        ModelTransform { x: 0.0, y: 0.0, rotation_y: 0.0, scale: 1.0 }
    }
}

impl TransformTarget for ModelTransform {
    fn position(&self) -> (f32, f32) { (self.x, self.y) }
    fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
    fn rotation_y(&self) -> f32 { self.rotation_y }
    fn set_rotation_y(&mut self, radians: f32) { self.rotation_y = radians; }
    fn scale(&self) -> f32 { self.scale }
    fn set_scale(&mut self, scale: f32) { self.scale = scale; }
}
