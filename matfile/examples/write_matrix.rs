//! Simple example to write a dense matrix to a .matrix file

use matfile::DenseMatrix;
use std::time::Instant;

fn main() -> matfile::Result<()> {
    let filename = "example_matrix.matrix";

    let rows = 3;
    let cols = 2;
    let matrix = DenseMatrix::from_vec(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0], rows, cols)?;

    println!("Writing {rows} x {cols} f64 matrix to '{filename}'...");

    let start = Instant::now();
    matfile::save_dense(&matrix, filename)?;
    let write_time = start.elapsed();

    println!("Matrix written in {write_time:?}");
    println!("\nRun 'cargo run --example read_matrix' to read it back!");
    Ok(())
}
