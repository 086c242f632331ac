//! Header and summary dump for .matrix files

use clap::Parser;
use matfile::FpWidth;

#[derive(Parser)]
#[command(author, version, about = "Show header information for dense matrix files")]
struct Cli {
    /// Matrix file paths
    #[arg(required = true)]
    paths: Vec<String>,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    for (i, path) in cli.paths.iter().enumerate() {
        let header = matfile::load_header(path)?;

        if cli.json {
            let report = serde_json::json!({
                "path": path,
                "rows": header.rows,
                "cols": header.cols,
                "dtype": header.data_type.to_string(),
                "kind": header.matrix_kind.to_string(),
                "version": header.version,
                "fp_bits": header.data_type.float_width().bits(),
            });
            println!("{report}");
            continue;
        }

        println!("## ---- [{}] path : {path} ----", i + 1);
        println!("# size    : {} x {}", header.rows, header.cols);
        println!("# dtype   : {}", header.data_type);
        println!("# kind    : {}", header.matrix_kind);
        println!("# version : {}", header.version);
        match header.data_type.float_width() {
            FpWidth::NotFloat => println!("# fp bits : (not floating point)"),
            width => println!("# fp bits : {}", width.bits().unwrap_or(0)),
        }
    }

    Ok(())
}
