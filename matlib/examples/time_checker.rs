//! Timing driver for matrix operations
//!
//! Builds an N x N integer matrix filled with ones and reports the
//! wall-clock time of one multiply and one add:
//!
//! ```text
//! cargo run --example time_checker -- 500
//! ```

use clap::Parser;
use matlib::{Matrix, TicToc};

const FILL_VALUE: i32 = 1;

#[derive(Parser)]
#[command(name = "time_checker")]
#[command(about = "Time matrix multiply and add for an N x N matrix")]
struct Args {
    /// Square matrix dimension
    size: usize,
}

fn main() -> matlib::Result<()> {
    let args = Args::parse();

    let mat = Matrix::filled(args.size, args.size, FILL_VALUE)?;
    let mut clock = TicToc::new();

    clock.tic();
    mat.mul(&mat)?;
    let mult = clock.toc().unwrap_or_default();

    clock.tic();
    mat.add(&mat)?;
    let add = clock.toc().unwrap_or_default();

    println!("size {}", args.size);
    println!("matlib mult {}", mult.as_secs_f64());
    println!("matlib add {}", add.as_secs_f64());

    Ok(())
}
