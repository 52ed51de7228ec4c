//! The model the hand drives: a wireframe mesh plus its transform, a fixed
//! perspective camera, and the one-shot intro spin.

use std::f32::consts::TAU;

use gesture_interp::{ModelTransform, TransformTarget};
use serde::{Deserialize, Serialize};

/// World size of one mesh unit at scale 1.
const MESH_UNIT: f32 = 0.25;

// ════════════════════════════════════════════════════════════════════════════
// Mesh
// ════════════════════════════════════════════════════════════════════════════

/// Built-in meshes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeshKind {
    Cube,
    /// Cube with a spike on every face.
    #[default]
    Spiky,
}

/// Vertices and the edges between them.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub vertices: Vec<[f32; 3]>,
    pub edges:    Vec<(usize, usize)>,
}

impl Mesh {
    pub fn build(kind: MeshKind) -> Self {
        match kind {
            MeshKind::Cube  => Mesh::cube(),
            MeshKind::Spiky => Mesh::spiky(),
        }
    }

    /// Unit cube centred on the origin.
    pub fn cube() -> Self {
        let mut vertices = Vec::with_capacity(8);
        for i in 0..8 {
            let c = |bit: usize| if i & bit != 0 { 0.5 } else { -0.5 };
            vertices.push([c(1), c(2), c(4)]);
        }
        // Two corners share an edge when they differ in exactly one axis.
        let mut edges = Vec::with_capacity(12);
        for a in 0..8usize {
            for bit in [1, 2, 4] {
                let b = a ^ bit;
                if a < b { edges.push((a, b)); }
            }
        }
        Mesh { vertices, edges }
    }

    pub fn spiky() -> Self {
        let mut mesh = Mesh::cube();
        let faces: [([f32; 3], [usize; 4]); 6] = [
            ([ 1.2, 0.0, 0.0], [1, 3, 5, 7]),
            ([-1.2, 0.0, 0.0], [0, 2, 4, 6]),
            ([0.0,  1.2, 0.0], [2, 3, 6, 7]),
            ([0.0, -1.2, 0.0], [0, 1, 4, 5]),
            ([0.0, 0.0,  1.2], [4, 5, 6, 7]),
            ([0.0, 0.0, -1.2], [0, 1, 2, 3]),
        ];
        for (apex, corners) in faces {
            let v = mesh.vertices.len();
            mesh.vertices.push(apex);
            mesh.edges.extend(corners.iter().map(|&c| (c, v)));
        }
        mesh
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Camera
// ════════════════════════════════════════════════════════════════════════════

/// Fixed perspective camera looking down −z.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye:    [f32; 3],
    /// Vertical field of view, radians.
    pub fov_y:  f32,
    pub near:   f32,
}

impl Default for Camera {
    fn default() -> Self {
        Camera { eye: [0.0, 1.0, 5.0], fov_y: 75f32.to_radians(), near: 0.1 }
    }
}

impl Camera {
    /// Project a world point onto a `w`×`h` viewport.  `None` when behind
    /// the near plane.
    pub fn project(&self, p: [f32; 3], w: f32, h: f32) -> Option<(f32, f32)> {
        let x = p[0] - self.eye[0];
        let y = p[1] - self.eye[1];
        let depth = self.eye[2] - p[2];
        if depth < self.near { return None; }
        let f = 1.0 / (self.fov_y / 2.0).tan();
        let ndc_x = x / depth * f / (w / h);
        let ndc_y = y / depth * f;
        Some(((ndc_x + 1.0) / 2.0 * w, (1.0 - ndc_y) / 2.0 * h))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Model: mesh + transform
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct Model {
    pub mesh:      Mesh,
    pub transform: ModelTransform,
}

impl Model {
    pub fn new(mesh: Mesh, scale: f32) -> Self {
        Model { mesh, transform: ModelTransform::with_scale(scale) }
    }

    /// World-space vertices after scale, y-rotation, and translation.
    pub fn world_vertices(&self) -> Vec<[f32; 3]> {
        let t = &self.transform;
        let (sin, cos) = t.rotation_y.sin_cos();
        let s = t.scale * MESH_UNIT;
        self.mesh.vertices.iter().map(|v| {
            let (x, y, z) = (v[0] * s, v[1] * s, v[2] * s);
            [x * cos + z * sin + t.x, y + t.y, -x * sin + z * cos]
        }).collect()
    }

    /// Screen-space edges for a `w`×`h` viewport; edges with an endpoint
    /// behind the camera are dropped.
    pub fn project_edges(&self, camera: &Camera, w: f32, h: f32) -> Vec<((f32, f32), (f32, f32))> {
        let pts: Vec<_> = self.world_vertices().into_iter()
            .map(|v| camera.project(v, w, h))
            .collect();
        self.mesh.edges.iter()
            .filter_map(|&(a, b)| Some((pts[a]?, pts[b]?)))
            .collect()
    }
}

impl TransformTarget for Model {
    fn position(&self) -> (f32, f32) { self.transform.position() }
    fn set_position(&mut self, x: f32, y: f32) { self.transform.set_position(x, y) }
    fn rotation_y(&self) -> f32 { self.transform.rotation_y }
    fn set_rotation_y(&mut self, radians: f32) { self.transform.set_rotation_y(radians) }
    fn scale(&self) -> f32 { self.transform.scale }
    fn set_scale(&mut self, scale: f32) { self.transform.set_scale(scale) }
}

// ════════════════════════════════════════════════════════════════════════════
// IntroSpin: one full turn shortly after load
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroSpin {
    /// Seconds after load before the spin starts.
    pub delay:    f32,
    /// Seconds for one full turn.
    pub duration: f32,
    elapsed:      f32,
    finished:     bool,
}

impl Default for IntroSpin {
    fn default() -> Self {
        IntroSpin { delay: 1.0, duration: 3.0, elapsed: 0.0, finished: false }
    }
}

impl IntroSpin {
    /// Advance by `dt` seconds.  Returns the y-rotation to apply while the
    /// spin is running.  The tick that reaches the end always lands on a
    /// full turn, however far it overshoots.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        if self.finished { return None; }
        self.elapsed += dt;
        let t = self.elapsed - self.delay;
        if t < 0.0 { return None; }
        if t >= self.duration {
            self.finished = true;
            return Some(TAU);
        }
        Some(TAU * t / self.duration)
    }

    pub fn done(&self) -> bool {
        self.finished
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_twelve_unit_edges() {
        let m = Mesh::cube();
        assert_eq!(m.vertices.len(), 8);
        assert_eq!(m.edges.len(), 12);
        for &(a, b) in &m.edges {
            let d: f32 = (0..3).map(|i| (m.vertices[a][i] - m.vertices[b][i]).abs()).sum();
            assert_eq!(d, 1.0);
        }
    }

    #[test]
    fn spiky_adds_a_spike_per_face() {
        let m = Mesh::build(MeshKind::Spiky);
        assert_eq!(m.vertices.len(), 14);
        assert_eq!(m.edges.len(), 12 + 24);
    }

    #[test]
    fn camera_projects_its_target_to_center() {
        let cam = Camera::default();
        let (x, y) = cam.project([0.0, 1.0, 0.0], 400.0, 300.0).unwrap();
        assert!((x - 200.0).abs() < 1e-3 && (y - 150.0).abs() < 1e-3);
        assert!(cam.project([0.0, 0.0, 6.0], 400.0, 300.0).is_none());
    }

    #[test]
    fn model_translation_shifts_vertices() {
        let mut m = Model::new(Mesh::cube(), 4.0);
        let before = m.world_vertices();
        m.set_position(1.0, -0.5);
        let after = m.world_vertices();
        for (b, a) in before.iter().zip(&after) {
            assert!((a[0] - b[0] - 1.0).abs() < 1e-6);
            assert!((a[1] - b[1] + 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn model_target_does_not_clamp() {
        let mut m = Model::new(Mesh::cube(), 4.0);
        m.set_scale(50.0);
        assert_eq!(m.scale(), 50.0);
    }

    #[test]
    fn intro_spin_waits_then_turns_once() {
        let mut spin = IntroSpin::default();
        assert_eq!(spin.tick(0.5), None);
        let mid = spin.tick(2.0).unwrap();           // 1.5 s into the spin
        assert!((mid - TAU / 2.0).abs() < 1e-4);
        assert!(spin.tick(1.4).is_some());
        assert!(!spin.done());
        assert_eq!(spin.tick(0.2), Some(TAU));
        assert!(spin.done());
        assert_eq!(spin.tick(0.2), None);
    }

    #[test]
    fn intro_spin_overshoot_lands_on_full_turn() {
        let mut spin = IntroSpin::default();
        assert_eq!(spin.tick(1.0), Some(0.0));
        let half = spin.tick(1.5).unwrap();
        assert!((half - TAU / 2.0).abs() < 1e-4);
        // a stalled frame jumps well past the end
        assert_eq!(spin.tick(1.6), Some(TAU));
        assert!(spin.done());
    }
}
