use std::any::Any;

use glam::Vec3;

use crate::traits::WorldObject;

/// Flat grid of ocean vertices in mesh-local coordinates.
///
/// Horizontal vertex coordinates are fixed at construction; only the
/// vertical component is rewritten by the wave animator. The mesh as a whole
/// is moved by the recenterer through its `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct OceanMesh {
    pub position: Vec3,
    vertices: Vec<Vec3>,
    columns: usize,
}

impl OceanMesh {
    /// Square grid of `size` world units with `segments` cells per side
    pub fn grid(size: f32, segments: usize, position: Vec3) -> Self {
        let columns = segments + 1;
        let step = size / segments as f32;
        let half = size * 0.5;

        let vertices = (0..columns)
            .flat_map(|row| {
                (0..columns).map(move |col| {
                    Vec3::new(col as f32 * step - half, 0.0, row as f32 * step - half)
                })
            })
            .collect();

        Self {
            position,
            vertices,
            columns,
        }
    }

    /// Mesh from externally supplied local vertices
    pub fn from_vertices(vertices: Vec<Vec3>, columns: usize, position: Vec3) -> Self {
        Self {
            position,
            vertices,
            columns,
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [Vec3] {
        &mut self.vertices
    }

    /// Vertical components, in vertex order
    pub fn heights(&self) -> impl Iterator<Item = f32> + '_ {
        self.vertices.iter().map(|v| v.y)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl WorldObject for OceanMesh {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    fn label(&self) -> &str {
        "ocean"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
