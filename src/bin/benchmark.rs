//! Step throughput on the unbounded grid

use std::time::Instant;

use rand::{rngs::StdRng, SeedableRng};
use sparse_life::{Config, Coord, GameState, SparseGrid, presets, step};

/// Random square soup of the given edge length
fn soup(size: i32, seed: u64) -> SparseGrid {
    let config = Config { random_size: size, ..Config::default() };
    let mut state = GameState::new(config);
    state.randomize_around(Coord::ORIGIN, &mut StdRng::seed_from_u64(seed));
    state.grid
}

/// Average ms per generation and the final population
fn benchmark(start: &SparseGrid, iterations: u32) -> (f64, usize) {
    let mut grid = start.clone();
    let timer = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    (timer.elapsed().as_secs_f64() * 1000.0 / iterations as f64, grid.population())
}

fn main() {
    println!("=== Sparse Life Step Benchmark ===\n");

    let sizes = [50, 100, 200, 500, 1000];
    let iterations = 20;

    println!("{:>12} {:>12} {:>12} {:>14} {:>14}", "Soup", "Start pop", "End pop", "ms/gen", "cells/sec");
    println!("{:-<70}", "");

    for size in sizes {
        let grid = soup(size, 0x5eed);
        let (ms, end_pop) = benchmark(&grid, iterations);
        let throughput = grid.population() as f64 / (ms / 1000.0);
        println!(
            "{:>12} {:>12} {:>12} {:>14.2} {:>14.0}",
            format!("{}x{}", size, size),
            grid.population(),
            end_pop,
            ms,
            throughput
        );
    }

    println!("\n=== Gosper Glider Gun (population grows without bound) ===\n");

    let gun = presets::glider_gun().to_grid(Coord::ORIGIN);
    for generations in [100, 1000, 5000] {
        let (ms, end_pop) = benchmark(&gun, generations);
        println!("{:>6} gens: {:>8.3} ms/gen, final population {}", generations, ms, end_pop);
    }
}
