//! Performance benchmark comparing the stepping algorithms

use std::time::Instant;
use elementary_automata::domain::{Algorithm, BitRow, Row, RuleTable, Ruleset, Seed};

fn benchmark(algorithm: Algorithm, width: usize, iterations: u32) -> f64 {
    let table = RuleTable::decode(Ruleset(30));
    let mut row = Seed::Random { density: 0.5, rng_seed: Some(1) }.build(width);

    let start = Instant::now();
    for _ in 0..iterations {
        algorithm.advance(&mut row, &table);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Bit-packed stepping without the pack/unpack round trip
fn benchmark_bit_row_native(width: usize, iterations: u32) -> f64 {
    let table = RuleTable::decode(Ruleset(30));
    let row: Row = Seed::Random { density: 0.5, rng_seed: Some(1) }.build(width);
    let mut current = BitRow::from_cells(row.cells());
    let mut next = BitRow::new(width);

    let start = Instant::now();
    for _ in 0..iterations {
        current.evolve_into(&table, &mut next);
        std::mem::swap(&mut current, &mut next);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Elementary Automaton Stepping Benchmark ===\n");

    let widths = [81, 1_000, 10_000, 100_000, 1_000_000];
    let iterations = 50;

    print!("{:>10}", "Width");
    for algorithm in Algorithm::all() {
        print!(" {:>12}", algorithm.name());
    }
    println!(" {:>12}", "packed-only");
    println!("{:-<66}", "");

    for width in widths {
        print!("{:>10}", width);
        for algorithm in Algorithm::all() {
            print!(" {:>12.4}", benchmark(algorithm, width, iterations));
        }
        println!(" {:>12.4}", benchmark_bit_row_native(width, iterations));
    }

    println!("\n=== Memory Usage (1M cells) ===\n");

    let width = 1_000_000;
    let row_mem = width * std::mem::size_of::<elementary_automata::Cell>() * 2;
    let bit_mem = BitRow::new(width).memory_bytes();

    println!("Row (double buffered): {:>10} bytes", row_mem);
    println!("BitRow:                {:>10} bytes", bit_mem);
    println!("Reduction:             {:>10.1}x", row_mem as f64 / bit_mem as f64);
}
