//! Element-wise comparison of two .matrix files
//!
//! Reports the relative residual and the maximum absolute error between
//! two matrices of the same shape. The arithmetic happens here in the
//! tool; the library only decodes.

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Compare two dense matrix files element-wise")]
struct Cli {
    /// Reference matrix file
    matrix_a: String,

    /// Matrix file to compare against the reference
    matrix_b: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let header_a = matfile::load_header(&cli.matrix_a)?;
    let header_b = matfile::load_header(&cli.matrix_b)?;

    if header_a.matrix_kind != header_b.matrix_kind {
        eprintln!("The matrix kinds are mismatch");
        std::process::exit(1);
    }
    if header_a.rows != header_b.rows || header_a.cols != header_b.cols {
        eprintln!("The matrix sizes are mismatch");
        std::process::exit(1);
    }

    let matrix_a = matfile::load_dense(&cli.matrix_a)?.widen_to_f64();
    let matrix_b = matfile::load_dense(&cli.matrix_b)?.widen_to_f64();

    let mut base_norm2 = 0.0_f64;
    let mut diff_norm2 = 0.0_f64;
    let mut max_error = 0.0_f64;
    for (a, b) in matrix_a.as_slice().iter().zip(matrix_b.as_slice()) {
        let diff = a - b;
        base_norm2 += a * a;
        diff_norm2 += diff * diff;
        max_error = max_error.max(diff.abs());
    }

    let relative_residual = if base_norm2 == 0.0 {
        1.0
    } else {
        (diff_norm2 / base_norm2).sqrt()
    };
    println!("relative residual = {relative_residual:e}, max absolute error = {max_error:e}");

    Ok(())
}
