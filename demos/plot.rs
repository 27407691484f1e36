//! Buffer outline demo — feeds an asteroid-like collision ring through the
//! simplify/offset pipeline and writes the results to `outlines.svg`.
//!
//! ```text
//! cargo run --example plot
//! ```

use polybuffer::math::Point2;
use polybuffer::operations::{BufferedOutline2D, RingSimplify2D};

use svg::node::element::path::Data;
use svg::node::element::Path;
use svg::Document;

const BUFFER_DISTANCE: f64 = 8.0;
const TOLERANCE: f64 = 1.5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: WARN for everything, INFO for polybuffer.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polybuffer=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("plot=info".parse()?)
        .add_directive("polybuffer=info".parse()?);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let ring = asteroid(64);
    let simplified = RingSimplify2D::new(ring.clone(), TOLERANCE).execute()?;
    let exact = BufferedOutline2D::exact(ring.clone(), BUFFER_DISTANCE, TOLERANCE).execute()?;
    let approximate =
        BufferedOutline2D::approximate(ring.clone(), BUFFER_DISTANCE, TOLERANCE).execute()?;

    tracing::info!(
        input = ring.len(),
        simplified = simplified.len(),
        exact = exact.len(),
        approximate = approximate.len(),
        "outlines computed"
    );

    let document = Document::new()
        .set("viewBox", (-60, -60, 120, 120))
        .add(ring_path(&ring, "#999999", 0.3))
        .add(ring_path(&simplified, "#222222", 0.6))
        .add(ring_path(&exact, "#0055cc", 0.6))
        .add(ring_path(&approximate, "#cc5500", 0.6));
    svg::save("outlines.svg", &document)?;
    Ok(())
}

/// A lumpy closed ring, similar in spirit to a collision outline traced
/// around an asteroid sprite.
fn asteroid(n: u32) -> Vec<Point2> {
    (0..n)
        .map(|i| {
            let theta = f64::from(i) * std::f64::consts::TAU / f64::from(n);
            let r = 40.0 + 6.0 * (3.0 * theta).sin() + 3.0 * (7.0 * theta + 1.3).sin();
            Point2::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}

fn ring_path(ring: &[Point2], stroke: &str, width: f64) -> Path {
    let mut data = Data::new().move_to((ring[0].x, ring[0].y));
    for p in &ring[1..] {
        data = data.line_to((p.x, p.y));
    }
    Path::new()
        .set("fill", "none")
        .set("stroke", stroke)
        .set("stroke-width", width)
        .set("d", data.close())
}
