//! Procedural geometry: the ripple surface grid and the boat hull.

use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SurfaceVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HullVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct PlaneMesh {
    pub vertices: Vec<SurfaceVertex>,
    pub indices: Vec<u32>,
}

/// Flat grid in the XY plane centred on the origin, facing +Z.
///
/// Rows run top to bottom with UV `v` flipped so `v = 1` is the top edge.
pub fn plane_grid(width: f32, height: f32, segments_x: u32, segments_y: u32) -> PlaneMesh {
    let gx = segments_x.max(1);
    let gy = segments_y.max(1);
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    let seg_w = width / gx as f32;
    let seg_h = height / gy as f32;

    let mut vertices = Vec::with_capacity(((gx + 1) * (gy + 1)) as usize);
    for iy in 0..=gy {
        let y = iy as f32 * seg_h - half_h;
        for ix in 0..=gx {
            let x = ix as f32 * seg_w - half_w;
            vertices.push(SurfaceVertex {
                position: [x, -y, 0.0],
                uv: [ix as f32 / gx as f32, 1.0 - iy as f32 / gy as f32],
            });
        }
    }

    let row = gx + 1;
    let mut indices = Vec::with_capacity((gx * gy * 6) as usize);
    for iy in 0..gy {
        for ix in 0..gx {
            let a = ix + row * iy;
            let b = ix + row * (iy + 1);
            let c = (ix + 1) + row * (iy + 1);
            let d = (ix + 1) + row * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    PlaneMesh { vertices, indices }
}

/// Low-poly hull, bow towards +X, deck at +Y. Flat shaded, non-indexed.
pub fn boat_hull() -> Vec<HullVertex> {
    let stern_l = Vec3::new(-5.0, 1.0, -2.0);
    let stern_r = Vec3::new(-5.0, 1.0, 2.0);
    let mid_l = Vec3::new(3.0, 1.0, -2.0);
    let mid_r = Vec3::new(3.0, 1.0, 2.0);
    let bow = Vec3::new(6.0, 1.2, 0.0);
    let keel_s = Vec3::new(-4.5, -1.5, 0.0);
    let keel_b = Vec3::new(4.0, -1.5, 0.0);

    let faces = [
        // deck
        [stern_l, stern_r, mid_r],
        [stern_l, mid_r, mid_l],
        [mid_l, mid_r, bow],
        // port side
        [stern_l, mid_l, keel_b],
        [stern_l, keel_b, keel_s],
        [mid_l, bow, keel_b],
        // starboard side
        [stern_r, keel_b, mid_r],
        [stern_r, keel_s, keel_b],
        [mid_r, keel_b, bow],
        // transom
        [stern_l, keel_s, stern_r],
    ];

    let centre = Vec3::new(0.0, 0.0, 0.0);
    let mut out = Vec::with_capacity(faces.len() * 3);
    for [a, b, c] in faces {
        let mut n = (b - a).cross(c - a).normalize_or_zero();
        let (b, c) = if n.dot((a + b + c) / 3.0 - centre) < 0.0 {
            n = -n;
            (c, b)
        } else {
            (b, c)
        };
        for p in [a, b, c] {
            out.push(HullVertex {
                position: p.to_array(),
                normal: n.to_array(),
            });
        }
    }
    out
}
