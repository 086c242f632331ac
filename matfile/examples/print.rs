//! Formatted element dump for .matrix files

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Print the elements of a dense matrix file")]
struct Cli {
    /// Matrix file path
    path: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let matrix = matfile::load_dense(&cli.path)?;

    let mut stdout = std::io::stdout();
    matrix.write_pretty(&mut stdout)?;

    Ok(())
}
