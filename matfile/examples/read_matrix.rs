//! Simple example to read a dense matrix from a .matrix file

use matfile::FpWidth;
use std::time::Instant;

fn main() -> matfile::Result<()> {
    let filename = "example_matrix.matrix";

    if !std::path::Path::new(filename).exists() {
        println!("File '{filename}' not found!");
        println!("   Run 'cargo run --example write_matrix' first");
        return Ok(());
    }

    println!("Reading dense matrix from '{filename}'...");

    // The header answers shape and type questions without the payload
    let start = Instant::now();
    let (rows, cols) = matfile::load_size(filename)?;
    let dtype = matfile::load_dtype(filename)?;
    let header_time = start.elapsed();
    println!("Header parsed in {:.3}ms", header_time.as_secs_f64() * 1000.0);

    println!("\nMatrix Information:");
    println!("   Dimensions: {rows} x {cols}");
    println!("   Data type: {dtype}");
    match matfile::fp_width(filename)? {
        FpWidth::Fp32 => println!("   Float width: 32 bits"),
        FpWidth::Fp64 => println!("   Float width: 64 bits"),
        FpWidth::NotFloat => println!("   Float width: not a float matrix"),
    }

    let start = Instant::now();
    let matrix = matfile::load_dense(filename)?;
    let load_time = start.elapsed();
    println!(
        "\nPayload loaded in {:.3}ms",
        load_time.as_secs_f64() * 1000.0
    );

    println!("\nElements:");
    let mut stdout = std::io::stdout();
    matrix.write_pretty(&mut stdout)?;

    Ok(())
}
