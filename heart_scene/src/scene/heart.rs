//! The extruded beating heart, built from the classic cubic-Bézier outline.
//!
//! The 2D outline is flattened into a polyline; cap faces come from lyon
//! fill tessellation of that polyline, side walls from sweeping it through
//! a bevel/body/bevel ring profile along the depth axis.

use std::f32::consts::{FRAC_PI_2, PI};

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use lyon::math::point;
use lyon::path::iterator::PathIterator;
use lyon::path::{Path, PathEvent};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers,
};

use crate::scene::animation::{HeartPulse, Spin};
use crate::scene::materials;

/// Marker for the heart entity.
#[derive(Component)]
pub struct Heart;

pub const HEART_BASE_SCALE: f32 = 0.5;
pub const HEART_SPIN_RATE: f32 = 0.005;

const CURVE_TOLERANCE: f32 = 0.05;

/// (ctrl1, ctrl2, end) triples of the closed outline, starting from (5, 5).
/// The outline is drawn point-up; the entity's base rotation turns it over.
const OUTLINE_START: [f32; 2] = [5.0, 5.0];
const OUTLINE_CURVES: [[[f32; 2]; 3]; 6] = [
    [[5.0, 5.0], [4.0, 0.0], [0.0, 0.0]],
    [[-6.0, 0.0], [-6.0, 7.0], [-6.0, 7.0]],
    [[-6.0, 11.0], [-3.0, 15.4], [5.0, 19.0]],
    [[12.0, 15.4], [16.0, 11.0], [16.0, 7.0]],
    [[16.0, 7.0], [16.0, 0.0], [10.0, 0.0]],
    [[7.0, 0.0], [5.0, 5.0], [5.0, 5.0]],
];

/// Sweep parameters for the extrusion.
#[derive(Clone, Debug)]
pub struct ExtrudeSettings {
    pub depth: f32,
    pub steps: usize,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_segments: usize,
}

impl Default for ExtrudeSettings {
    fn default() -> Self {
        Self {
            depth: 2.0,
            steps: 2,
            bevel_thickness: 1.0,
            bevel_size: 1.0,
            bevel_segments: 2,
        }
    }
}

impl ExtrudeSettings {
    /// The (outline expansion, z) rings of the sweep, back to front:
    /// a quarter-sine bevel from the raw outline up to full expansion,
    /// the straight body, then the mirrored front bevel. z values are
    /// strictly increasing.
    fn ring_profile(&self) -> Vec<(f32, f32)> {
        let mut rings = Vec::with_capacity(2 * self.bevel_segments + self.steps + 1);
        rings.push((0.0, -self.bevel_thickness));
        for s in 1..=self.bevel_segments {
            let t = s as f32 / self.bevel_segments as f32;
            rings.push((
                self.bevel_size * (t * FRAC_PI_2).sin(),
                -self.bevel_thickness * (t * FRAC_PI_2).cos(),
            ));
        }
        for k in 1..=self.steps {
            rings.push((self.bevel_size, self.depth * k as f32 / self.steps as f32));
        }
        for s in 1..=self.bevel_segments {
            let t = s as f32 / self.bevel_segments as f32;
            rings.push((
                self.bevel_size * (t * FRAC_PI_2).cos(),
                self.depth + self.bevel_thickness * (t * FRAC_PI_2).sin(),
            ));
        }
        rings
    }
}

fn heart_path() -> Path {
    let mut builder = Path::builder();
    builder.begin(point(OUTLINE_START[0], OUTLINE_START[1]));
    for [c1, c2, end] in OUTLINE_CURVES {
        builder.cubic_bezier_to(
            point(c1[0], c1[1]),
            point(c2[0], c2[1]),
            point(end[0], end[1]),
        );
    }
    builder.close();
    builder.build()
}

/// Flattens the outline into a counter-clockwise polyline without the
/// duplicated closing point.
fn flatten_outline(path: &Path, tolerance: f32) -> Vec<Vec2> {
    let mut pts: Vec<Vec2> = Vec::new();
    for event in path.iter().flattened(tolerance) {
        match event {
            PathEvent::Begin { at } => pts.push(Vec2::new(at.x, at.y)),
            PathEvent::Line { to, .. } => pts.push(Vec2::new(to.x, to.y)),
            _ => {}
        }
    }
    if pts.len() > 1 && pts[0].distance(pts[pts.len() - 1]) < 1e-4 {
        pts.pop();
    }
    if signed_area(&pts) < 0.0 {
        pts.reverse();
    }
    pts
}

fn signed_area(pts: &[Vec2]) -> f32 {
    let mut sum = 0.0;
    for i in 0..pts.len() {
        let a = pts[i];
        let b = pts[(i + 1) % pts.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}

/// Per-vertex outward normals (miter of the two adjacent edge normals).
/// Assumes counter-clockwise winding.
fn outward_normals(pts: &[Vec2]) -> Vec<Vec2> {
    let n = pts.len();
    let edge_normal = |a: Vec2, b: Vec2| {
        let d = b - a;
        Vec2::new(d.y, -d.x).normalize_or_zero()
    };
    (0..n)
        .map(|i| {
            let prev = pts[(i + n - 1) % n];
            let next = pts[(i + 1) % n];
            let merged = edge_normal(prev, pts[i]) + edge_normal(pts[i], next);
            let merged = merged.normalize_or_zero();
            if merged == Vec2::ZERO {
                edge_normal(pts[i], next)
            } else {
                merged
            }
        })
        .collect()
}

/// Fill-tessellates the flattened outline for the cap faces.
fn tessellate_cap(pts: &[Vec2]) -> (Vec<Vec2>, Vec<u32>) {
    let mut builder = Path::builder();
    builder.begin(point(pts[0].x, pts[0].y));
    for p in &pts[1..] {
        builder.line_to(point(p.x, p.y));
    }
    builder.close();
    let polygon = builder.build();

    let mut buffers: VertexBuffers<Vec2, u32> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();
    tessellator
        .tessellate_path(
            &polygon,
            &FillOptions::default(),
            &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
                Vec2::new(vertex.position().x, vertex.position().y)
            }),
        )
        .expect("heart outline is a simple closed polygon");

    (buffers.vertices, buffers.indices)
}

/// Forces each cap triangle to the requested winding as seen from +z.
fn orient_cap(indices: &mut [u32], verts: &[Vec2], ccw: bool) {
    for tri in indices.chunks_exact_mut(3) {
        let a = verts[tri[0] as usize];
        let b = verts[tri[1] as usize];
        let c = verts[tri[2] as usize];
        if ((b - a).perp_dot(c - a) > 0.0) != ccw {
            tri.swap(1, 2);
        }
    }
}

/// Builds the full extruded, beveled, recentered heart mesh.
pub fn build_heart_mesh(settings: &ExtrudeSettings) -> Mesh {
    let path = heart_path();
    let pts = flatten_outline(&path, CURVE_TOLERANCE);
    let normals_2d = outward_normals(&pts);
    let rings = settings.ring_profile();

    let n = pts.len();
    let ring_count = rings.len();

    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    // Side walls, ring by ring. Normals tilt with the local bevel slope.
    for (j, &(offset, z)) in rings.iter().enumerate() {
        let j0 = j.saturating_sub(1);
        let j1 = (j + 1).min(ring_count - 1);
        let d_offset = rings[j1].0 - rings[j0].0;
        let d_z = rings[j1].1 - rings[j0].1;
        for (i, (&p, n2)) in pts.iter().zip(&normals_2d).enumerate() {
            let pos = p + offset * *n2;
            positions.push([pos.x, pos.y, z]);
            let vn = Vec3::new(n2.x * d_z, n2.y * d_z, -d_offset).normalize();
            normals.push([vn.x, vn.y, vn.z]);
            uvs.push([i as f32 / n as f32, j as f32 / (ring_count - 1) as f32]);
        }
    }
    for j in 0..ring_count - 1 {
        for i in 0..n {
            let i2 = (i + 1) % n;
            let a = (j * n + i) as u32;
            let b = (j * n + i2) as u32;
            let c = ((j + 1) * n + i2) as u32;
            let d = ((j + 1) * n + i) as u32;
            indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }

    // Caps: the raw outline at both z extremes.
    let (cap_verts, cap_indices) = tessellate_cap(&pts);
    let bbox_min = pts.iter().copied().reduce(Vec2::min).unwrap_or(Vec2::ZERO);
    let bbox_max = pts.iter().copied().reduce(Vec2::max).unwrap_or(Vec2::ZERO);
    let bbox_span = (bbox_max - bbox_min).max(Vec2::splat(1e-6));

    let z_back = -settings.bevel_thickness;
    let z_front = settings.depth + settings.bevel_thickness;
    for (z, ccw) in [(z_back, false), (z_front, true)] {
        let base = positions.len() as u32;
        let nz = if ccw { 1.0 } else { -1.0 };
        for v in &cap_verts {
            positions.push([v.x, v.y, z]);
            normals.push([0.0, 0.0, nz]);
            uvs.push([
                (v.x - bbox_min.x) / bbox_span.x,
                (v.y - bbox_min.y) / bbox_span.y,
            ]);
        }
        let mut face = cap_indices.clone();
        orient_cap(&mut face, &cap_verts, ccw);
        indices.extend(face.iter().map(|i| base + i));
    }

    // Recenter on the bounding-box center so the entity scales and spins
    // around its own middle.
    let mut min = Vec3::splat(f32::MAX);
    let mut max = Vec3::splat(f32::MIN);
    for p in &positions {
        min = min.min(Vec3::from_array(*p));
        max = max.max(Vec3::from_array(*p));
    }
    let center = (min + max) * 0.5;
    for p in &mut positions {
        p[0] -= center.x;
        p[1] -= center.y;
        p[2] -= center.z;
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_indices(Indices::U32(indices));
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh
}

pub fn spawn_heart(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials_res: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = build_heart_mesh(&ExtrudeSettings::default());
    commands.spawn((
        Heart,
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials::heart_material(&mut materials_res)),
        Transform::from_rotation(Quat::from_rotation_z(PI))
            .with_scale(Vec3::splat(HEART_BASE_SCALE)),
        HeartPulse {
            base_scale: HEART_BASE_SCALE,
        },
        Spin::about_y(HEART_SPIN_RATE).with_post(Quat::from_rotation_z(PI)),
    ));
}
