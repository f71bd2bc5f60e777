//! Prints the staircase outline of a stepped sample loop.
//!
//! Usage:
//! ```text
//! cargo run --example outline                      # sample loop and copy at +22 x
//! cargo run --example outline -- 0 -5              # copy shifted by (0, -5) instead
//! RUST_LOG=stairline=trace cargo run --example outline
//! ```

use stairline::math::{Point2, Vector2};
use stairline::operations::query::Encloses;
use stairline::operations::transform::Translate2D;
use stairline::{OrthoOutline2D, Result};

const SAMPLE: [(f64, f64); 41] = [
    (1.0, 1.0),
    (2.0, 2.0),
    (3.0, 1.0),
    (4.0, 1.0),
    (10.0, 1.0),
    (10.0, 4.0),
    (12.0, 4.0),
    (12.0, 1.0),
    (17.0, 3.0),
    (17.0, 10.0),
    (16.0, 10.0),
    (16.0, 6.0),
    (14.0, 5.0),
    (14.0, 10.0),
    (13.0, 10.0),
    (13.0, 12.0),
    (12.0, 11.0),
    (12.0, 13.0),
    (11.0, 13.0),
    (11.0, 15.0),
    (9.0, 15.0),
    (9.0, 11.0),
    (8.0, 11.0),
    (8.0, 16.0),
    (7.0, 16.0),
    (7.0, 13.0),
    (6.0, 13.0),
    (6.0, 17.0),
    (5.0, 17.0),
    (5.0, 19.0),
    (4.0, 19.0),
    (1.0, 19.0),
    (1.0, 17.0),
    (2.0, 17.0),
    (2.0, 15.0),
    (1.0, 15.0),
    (1.0, 13.0),
    (3.0, 13.0),
    (3.0, 10.0),
    (1.0, 10.0),
    (1.0, 1.0),
];

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for stairline.
    // Override with RUST_LOG (e.g. RUST_LOG=stairline=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("outline=info".parse().unwrap_or_default())
        .add_directive("stairline=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<f64> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    let offset = match args.as_slice() {
        [dx, dy, ..] => Vector2::new(*dx, *dy),
        _ => Vector2::new(22.0, 0.0),
    };

    let sample: Vec<Point2> = SAMPLE.iter().map(|&(x, y)| Point2::new(x, y)).collect();
    let shifted = Translate2D::new(&sample, offset).execute();

    for (name, points) in [("sample", sample), ("shifted", shifted)] {
        let outline = OrthoOutline2D::new(points.clone()).execute()?;
        tracing::info!(
            shape = name,
            input = points.len(),
            output = outline.len(),
            enclosed = Encloses::new(&outline, &points).execute(),
            "outline computed"
        );
        println!("# {name}");
        for p in &outline {
            println!("{} {}", p.x, p.y);
        }
    }
    Ok(())
}
