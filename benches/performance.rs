// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meshspell::{compact_unused, find_duplicates, Topology, Triangle, VertexAttributes};
use nalgebra::{Point3, Vector2};

/// Mesh where every other vertex is referenced by the triangle fan.
fn sparse_mesh(vertex_count: usize) -> (VertexAttributes, Topology) {
    let positions: Vec<Point3<f32>> = (0..vertex_count)
        .map(|i| Point3::new(i as f32, (i % 7) as f32, 0.0))
        .collect();
    let uv: Vec<Vector2<f32>> = (0..vertex_count)
        .map(|i| Vector2::new(i as f32 / vertex_count as f32, 0.5))
        .collect();

    let attributes = VertexAttributes {
        positions,
        normals: Vec::new(),
        colors: Vec::new(),
        uv_sets: vec![uv],
        declared_count: vertex_count as u32,
    };

    let triangles: Vec<Triangle> = (0..vertex_count / 2 - 2)
        .map(|i| {
            let i = (i * 2) as u16;
            Triangle::new([i, i + 2, i + 4])
        })
        .collect();

    (
        attributes,
        Topology {
            triangles,
            strips: Vec::new(),
        },
    )
}

/// Mesh where every vertex repeats `copies` times.
fn duplicated_mesh(unique: usize, copies: usize) -> VertexAttributes {
    let mut positions = Vec::with_capacity(unique * copies);
    for _ in 0..copies {
        for i in 0..unique {
            positions.push(Point3::new(i as f32, 0.0, 0.0));
        }
    }
    let declared_count = positions.len() as u32;

    VertexAttributes {
        positions,
        normals: Vec::new(),
        colors: Vec::new(),
        uv_sets: Vec::new(),
        declared_count,
    }
}

fn bench_compact(c: &mut Criterion) {
    let mut group = c.benchmark_group("compact");

    for &count in &[1_000usize, 10_000] {
        let (attributes, topology) = sparse_mesh(count);
        group.bench_with_input(
            BenchmarkId::new("unused", count),
            &(attributes, topology),
            |b, (attributes, topology)| {
                b.iter(|| compact_unused(black_box(attributes), black_box(topology)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicates");
    // The scan is quadratic; keep the inputs modest.
    group.sample_size(20);

    for &unique in &[250usize, 500] {
        let attributes = duplicated_mesh(unique, 2);
        group.bench_with_input(
            BenchmarkId::new("scan", unique * 2),
            &attributes,
            |b, attributes| {
                b.iter(|| find_duplicates(black_box(attributes)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compact, bench_duplicates);
criterion_main!(benches);
