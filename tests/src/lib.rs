//! Inputs shared by the benchmarks.

use glide::math::{point, Point};
use glide::path::{Path, PathError};

/// A small deterministic pseudo-random generator.
pub struct Rng(u64);

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng(seed)
    }

    pub fn next(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    pub fn point(&mut self, size: f64) -> Point {
        point(self.next() * size, self.next() * size)
    }
}

/// A path string mixing every command of the SVG path syntax, `count` commands long.
pub fn generate_path_string(count: usize) -> String {
    let mut rng = Rng::new(count as u64);
    let mut src = String::from("M 0 0");

    for i in 0..count {
        let a = rng.point(100.0);
        let b = rng.point(100.0);
        let c = rng.point(100.0);
        let cmd = match i % 10 {
            0 => format!(" L {} {}", a.x, a.y),
            1 => format!(" c{},{} {},{} {},{}", a.x, a.y, b.x, b.y, c.x, c.y),
            2 => format!(" s {} {} {} {}", a.x, -a.y, b.x, b.y),
            3 => format!(" H{}", a.x),
            4 => format!(" v-{}", a.y),
            5 => format!(" Q {} {} {} {}", a.x, a.y, b.x, b.y),
            6 => format!(" t{} {}", a.x, a.y),
            7 => format!(" A {} {} {} 0 1 {} {}", a.x + 1.0, a.y + 1.0, b.x, c.x, c.y),
            8 => " Z".to_string(),
            _ => format!(" m {} {}", a.x, a.y),
        };
        src.push_str(&cmd);
    }

    src
}

/// A path made of `count` random cubic bézier curves.
pub fn generate_curvy_path(count: usize) -> Result<Path, PathError> {
    let mut rng = Rng::new(1);
    let mut path = Path::new();
    path.reserve(count + 1)?;
    path.move_to(rng.point(500.0))?;
    for _ in 0..count {
        path.curve_to(rng.point(500.0), rng.point(500.0), rng.point(500.0))?;
    }

    Ok(path)
}

#[test]
fn generated_inputs() {
    let path = glide::svg::build_path(&generate_path_string(100)).unwrap();
    assert!(path.len() > 100);
    assert_eq!(generate_curvy_path(10).unwrap().len(), 11);
}
