// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use approx::assert_relative_eq;
use prism_core::{
    render_state::CapturedRenderState,
    vertex::{VertexElement, VertexFormat, VertexLayout},
};
use prism_lanes::vertex_lane::QuadAugmentLane;

const SRC_STRIDE: usize = 28;
const DST_STRIDE: usize = 52;

struct BaseVertex {
    position: [f32; 3],
    color: [u8; 4],
    uv: [f32; 2],
    light: [u16; 2],
}

fn encode(vertices: &[BaseVertex]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(vertices.len() * SRC_STRIDE);
    for v in vertices {
        buf.extend_from_slice(bytemuck::cast_slice(&v.position));
        buf.extend_from_slice(&v.color);
        buf.extend_from_slice(bytemuck::cast_slice(&v.uv));
        buf.extend_from_slice(bytemuck::cast_slice(&v.light));
    }
    buf
}

fn unit_square(z: f32, uv_offset: f32) -> Vec<BaseVertex> {
    [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
        .iter()
        .enumerate()
        .map(|(i, &[x, y])| BaseVertex {
            position: [x, y, z],
            color: [i as u8, 10, 20, 255],
            uv: [x * 0.5 + uv_offset, y * 0.25 + uv_offset],
            light: [0x00F0, 0x00A0],
        })
        .collect()
}

fn read_f32(buf: &[u8], at: usize) -> f32 {
    bytemuck::pod_read_unaligned(&buf[at..at + 4])
}

fn read_u16(buf: &[u8], at: usize) -> u16 {
    bytemuck::pod_read_unaligned(&buf[at..at + 2])
}

fn read_i32(buf: &[u8], at: usize) -> i32 {
    bytemuck::pod_read_unaligned(&buf[at..at + 4])
}

#[test]
fn test_quad_augmentation_writes_all_extended_fields() {
    // --- 1. ARRANGE ---
    let _ = env_logger::builder().is_test(true).try_init();
    let lane = QuadAugmentLane::new(
        &VertexLayout::position_color_tex_light(),
        &VertexLayout::glyph_extended(),
    )
    .expect("stock layouts are compatible");
    let quad = unit_square(0.0, 0.0);
    let src = encode(&quad);
    let mut dst = vec![0u8; 4 * DST_STRIDE];
    let state = CapturedRenderState::new(7, 300, 0xBEEF);

    // --- 2. ACT ---
    lane.serialize(&src, &mut dst, 4, &state)
        .expect("serialization should succeed");

    // --- 3. ASSERT ---
    let glyph = VertexLayout::glyph_extended();
    let mid = glyph.offset_of(VertexElement::MidTexCoord).unwrap();
    let normal = glyph.offset_of(VertexElement::Normal).unwrap();
    let tangent = glyph.offset_of(VertexElement::Tangent).unwrap();
    let ids = glyph.offset_of(VertexElement::EntityIds).unwrap();

    let expected_u = quad.iter().map(|v| v.uv[0]).sum::<f32>() / 4.0;
    let expected_v = quad.iter().map(|v| v.uv[1]).sum::<f32>() / 4.0;

    for (i, vertex) in dst.chunks_exact(DST_STRIDE).enumerate() {
        // Base fields are copied verbatim.
        assert_eq!(
            &vertex[..SRC_STRIDE],
            &src[i * SRC_STRIDE..(i + 1) * SRC_STRIDE],
            "base fields of vertex {i} should be copied"
        );

        // Mid texture coordinate is the mean of the four UVs.
        assert_relative_eq!(read_f32(vertex, mid), expected_u, epsilon = 1e-6);
        assert_relative_eq!(read_f32(vertex, mid + 4), expected_v, epsilon = 1e-6);

        // Unit square in the XY plane with counter-clockwise winding faces +Z.
        assert_eq!(read_i32(vertex, normal), 0x007F_0000);
        assert_eq!(read_i32(vertex, tangent) as u32, 0x8100_007F);

        assert_eq!(read_u16(vertex, ids), 7);
        assert_eq!(read_u16(vertex, ids + 2), 300);
        assert_eq!(read_u16(vertex, ids + 4), 0xBEEF);
    }
}

#[test]
fn test_custom_layouts_write_at_resolved_offsets() {
    // --- 1. ARRANGE ---
    // No color or light, a padded texture coordinate, and the extended
    // attributes in a different order than the glyph format.
    let source = VertexLayout::builder("position_tex")
        .push(VertexElement::Position, VertexFormat::Float32x3)
        .push(VertexElement::Padding, VertexFormat::Padding16)
        .push(VertexElement::TexCoord, VertexFormat::Float32x2)
        .build();
    let destination = VertexLayout::builder("position_tex_extended")
        .push(VertexElement::Position, VertexFormat::Float32x3)
        .push(VertexElement::Padding, VertexFormat::Padding16)
        .push(VertexElement::TexCoord, VertexFormat::Float32x2)
        .push(VertexElement::Tangent, VertexFormat::Snorm8x4)
        .push(VertexElement::EntityIds, VertexFormat::Uint16x3)
        .push(VertexElement::MidTexCoord, VertexFormat::Float32x2)
        .push(VertexElement::Normal, VertexFormat::Snorm8x4)
        .build();
    let lane = QuadAugmentLane::new(&source, &destination).expect("layouts are compatible");
    assert_eq!(lane.source_stride(), 22);
    assert_eq!(lane.destination_stride(), 44);

    let mut src = Vec::new();
    for [x, y] in [[0.0f32, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]] {
        src.extend_from_slice(bytemuck::cast_slice(&[x, y, 0.0f32]));
        src.extend_from_slice(&[0xAA, 0xBB]);
        src.extend_from_slice(bytemuck::cast_slice(&[x, y]));
    }
    let mut dst = vec![0u8; 4 * 44];

    // --- 2. ACT ---
    lane.serialize(&src, &mut dst, 4, &CapturedRenderState::new(1, 2, 3))
        .expect("serialization should succeed");

    // --- 3. ASSERT ---
    let tangent = destination.offset_of(VertexElement::Tangent).unwrap();
    let ids = destination.offset_of(VertexElement::EntityIds).unwrap();
    let mid = destination.offset_of(VertexElement::MidTexCoord).unwrap();
    let normal = destination.offset_of(VertexElement::Normal).unwrap();
    assert_eq!((tangent, ids, mid, normal), (22, 26, 32, 40));

    for (i, vertex) in dst.chunks_exact(44).enumerate() {
        assert_eq!(&vertex[..22], &src[i * 22..(i + 1) * 22]);
        assert_eq!(read_i32(vertex, tangent) as u32, 0x8100_007F);
        assert_eq!(read_u16(vertex, ids), 1);
        assert_eq!(read_u16(vertex, ids + 2), 2);
        assert_eq!(read_u16(vertex, ids + 4), 3);
        assert_relative_eq!(read_f32(vertex, mid), 0.5);
        assert_relative_eq!(read_f32(vertex, mid + 4), 0.5);
        assert_eq!(read_i32(vertex, normal), 0x007F_0000);
    }
}

#[test]
fn test_quad_level_attributes_are_identical_within_a_quad() {
    let lane = QuadAugmentLane::glyph();
    // A slightly non-planar quad with irregular texture coordinates.
    let quad = vec![
        BaseVertex {
            position: [0.0, 0.0, 0.0],
            color: [255; 4],
            uv: [0.1, 0.2],
            light: [0, 0],
        },
        BaseVertex {
            position: [2.0, 0.1, 0.05],
            color: [255; 4],
            uv: [0.7, 0.25],
            light: [0, 0],
        },
        BaseVertex {
            position: [2.1, 1.9, -0.05],
            color: [255; 4],
            uv: [0.75, 0.9],
            light: [0, 0],
        },
        BaseVertex {
            position: [-0.1, 2.0, 0.0],
            color: [255; 4],
            uv: [0.05, 0.85],
            light: [0, 0],
        },
    ];
    let src = encode(&quad);
    let mut dst = vec![0u8; 4 * DST_STRIDE];

    lane.serialize(&src, &mut dst, 4, &CapturedRenderState::default())
        .unwrap();

    let first = &dst[28..52];
    for vertex in dst.chunks_exact(DST_STRIDE).skip(1) {
        // Normal, ids, padding, mid uv and tangent are bit-identical.
        assert_eq!(&vertex[28..52], first);
    }
}

#[test]
fn test_each_quad_gets_its_own_attributes() {
    let lane = QuadAugmentLane::glyph();
    let mut vertices = unit_square(0.0, 0.0);
    let mut second = unit_square(3.0, 0.5);
    // Reverse the winding of the second quad so it faces -Z.
    second.reverse();
    vertices.extend(second);
    let src = encode(&vertices);
    // One spare vertex at the end must stay untouched.
    let mut dst = vec![0xAAu8; 9 * DST_STRIDE];

    lane.serialize(&src, &mut dst, 8, &CapturedRenderState::default())
        .unwrap();

    let first_quad = &dst[..DST_STRIDE];
    let second_quad = &dst[4 * DST_STRIDE..5 * DST_STRIDE];
    assert_eq!(read_i32(first_quad, 28), 0x007F_0000);
    assert_eq!(read_i32(second_quad, 28), 0x0081_0000);
    assert_relative_eq!(read_f32(first_quad, 40), 0.25, epsilon = 1e-6);
    assert_relative_eq!(read_f32(second_quad, 40), 0.75, epsilon = 1e-6);
    assert!(dst[8 * DST_STRIDE..].iter().all(|&b| b == 0xAA));
}

#[test]
fn test_partial_quad_is_rejected_before_any_write() {
    let lane = QuadAugmentLane::glyph();
    let mut vertices = unit_square(0.0, 0.0);
    vertices.extend(unit_square(1.0, 0.0));
    let src = encode(&vertices);
    let mut dst = vec![0u8; 8 * DST_STRIDE];

    let result = lane.serialize(&src, &mut dst, 7, &CapturedRenderState::default());

    assert!(result.is_err());
    assert_eq!(
        format!("{}", result.unwrap_err()),
        "Vertex count 7 is not a multiple of 4"
    );
    assert!(dst.iter().all(|&b| b == 0), "no partial write is allowed");
}
