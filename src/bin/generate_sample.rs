//! Writes synthetic versions of the seven input limit files so the
//! plotter can be exercised without the private physics inputs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use limit_comparison::data::{Category, MANIFEST};

/// A closed blob in log-log space: an ellipse around (cx, cy) with
/// log-decade radii (rx, ry), sampled at `n` points.
fn blob(cx: f64, cy: f64, rx: f64, ry: f64, n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let t = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            let x = 10f64.powf(cx + rx * t.cos());
            let y = 10f64.powf(cy + ry * t.sin());
            (x, y)
        })
        .collect()
}

/// A smooth open curve stored as (mass, log10(ε²)), the Dark SUSY file
/// format: dips in the middle of the mass range.
fn log_eps_squared_curve(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let f = i as f64 / (n - 1) as f64;
            // mass from 0.25 to 60 GeV, log-spaced
            let x = 10f64.powf(-0.6 + f * 2.38);
            let y = -6.0 - 2.0 * (std::f64::consts::PI * f).sin();
            (x, y)
        })
        .collect()
}

fn write_table(path: &Path, points: &[(f64, f64)]) {
    let file = File::create(path).expect("Failed to create output file");
    let mut w = BufWriter::new(file);
    writeln!(w, "# synthetic data, generated by generate_sample").unwrap();
    for (x, y) in points {
        writeln!(w, "{x:.6e} {y:.6e}").unwrap();
    }
}

fn main() {
    let dir = std::env::args().nth(1).unwrap_or_else(|| "sample_data".to_string());
    let dir = Path::new(&dir);
    std::fs::create_dir_all(dir).expect("Failed to create output directory");

    for (category, region, name) in MANIFEST {
        let points = match category {
            // Five disjoint excluded islands across the mass range.
            Category::HahmScouting => {
                let cx = -0.5 + 0.5 * (region.get() - 1) as f64;
                blob(cx, -6.5, 0.18, 1.2, 80)
            }
            Category::DarkSusy => log_eps_squared_curve(120),
            Category::Hahm => blob(1.2, -7.5, 0.35, 1.0, 80),
        };
        write_table(&dir.join(name), &points);
        println!("Wrote {} ({} points)", dir.join(name).display(), points.len());
    }
}
