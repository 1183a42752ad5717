//! Basic usage example: vector algebra, matrices and arena placement.

use mia::memory::ArenaConfig;
use mia::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    println!("Mia Basic Usage");
    println!("===============");

    vector_demo()?;
    matrix_demo();
    arena_demo()?;

    Ok(())
}

fn vector_demo() -> anyhow::Result<()> {
    println!("\n--- Vectors ---");

    let v1: Vector3 = Vector3::new([1.0, 0.0, 0.0]);
    let v2: Vector3 = Vector3::new([0.0, 1.0, 0.0]);

    println!("v1 = {}, v2 = {}", v1, v2);
    println!("v1 x v2 = {}", Vector::cross_product(&v1, &v2));
    println!("v1 . v2 = {}", Vector::dot_product(&v1, &v2));
    println!("angle   = {:.4} rad", Vector::angle(&v1, &v2));

    let v = Vector3i::new([1, 2, 3]);
    println!("|{}|^2 = {}, |{}| = {} (integer compute)", v, v.magnitude_squared(), v, v.magnitude());

    let from_points = Vector4::<f32>::from_slice(&[1, 2, 3, 4, 5])?;
    println!("from slice (extra ignored) = {}", from_points);

    // Short input is reported, not read past the end
    match Vector4::<f32>::from_slice(&[1, 2]) {
        Ok(v) => println!("unexpected: {}", v),
        Err(e) => println!("rejected: {}", e),
    }

    let direction = Vector3d::random_unit_vector();
    println!("random direction = {} (|d| = {:.6})", direction, direction.magnitude());

    Ok(())
}

fn matrix_demo() {
    println!("\n--- Matrices ---");

    let rotation = Matrix::<f32, 3, 3>::from_rows([
        [0.0, -1.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);
    let point: Vector3 = Vector3::right();

    println!("rotation:\n{}", rotation);
    println!("rotation * {} = {}", point, rotation * point);
    println!("rotation^T * rotation:\n{}", rotation.transpose() * rotation);
}

fn arena_demo() -> anyhow::Result<()> {
    println!("\n--- Arena ---");

    let mut arena = ArenaConfig::default().create_arena()?;

    let points: Vec<Vector3> = (0..32)
        .map(|i| Vector3::splat(i as f32))
        .collect();
    let placed = arena.alloc_slice_copy(&points)?;
    for p in placed.iter_mut() {
        *p *= 0.5;
    }
    println!("placed {} points, last = {}", placed.len(), placed[31]);
    println!("usage: {} / {} bytes", arena.offset(), arena.capacity());

    arena.reset();
    if let Some(stats) = arena.stats() {
        println!("{}", stats.format_summary());
    }

    Ok(())
}
