#![deny(bare_trait_objects)]

//! A vector path engine.
//!
//! Build paths from moves, lines, bézier curves and elliptic arcs, either directly
//! or from SVG path strings, then flatten, transform and measure them, and find
//! positions by distance along the path to animate things along it.
//!
//! # Crates
//!
//! This meta-crate (`glide`) reexports the following sub-crates for convenience:
//!
//! * **glide_geom** - line segments, quadratic and cubic bézier curves, SVG arcs.
//! * **glide_path** - the path data structure, its length table and samplers.
//! * **glide_svg** - the SVG path syntax parser and serializer.
//!
//! Each `glide_<name>` crate is reexported as a `<name>` module in `glide`.
//!
//! # Feature flags
//!
//! serialization using serde can be enabled with the `serialization` feature flag
//! (disabled by default).
//!
//! # Examples
//!
//! ```
//! use glide::math::point;
//! use glide::svg::build_path;
//!
//! let mut path = build_path("M 0 0 L 100 0 A 50 50 0 0 1 100 100 Z").unwrap();
//!
//! let length = path.total_length().unwrap();
//! let mut sampler = path.sampler().unwrap();
//! for i in 0..10 {
//!     let sample = sampler.position_at(length * i as f64 / 10.0).unwrap();
//!     println!("{:?} {:?}", sample.position(), sample.angle());
//! }
//!
//! let nearest = sampler.progress_at(0.0, length, point(50.0, 10.0));
//! assert_eq!(nearest, 50.0);
//! ```

pub extern crate glide_geom;
pub extern crate glide_path;
pub extern crate glide_svg;

pub use glide_geom as geom;
pub use glide_path as path;
pub use glide_svg as svg;

pub use path::math;

#[cfg(test)]
mod tests {
    use crate::geom::{ArcCurves, ArcFlags, SvgArc};
    use crate::math::{point, vector, Angle, Box2D, Point};
    use crate::path::{Path, Segment};
    use crate::svg::build_path;

    // Small deterministic generator for the property style tests.
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> f64 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (self.0 >> 11) as f64 / (1u64 << 53) as f64
        }

        fn range(&mut self, min: f64, max: f64) -> f64 {
            min + (max - min) * self.next()
        }
    }

    #[test]
    fn parse_square() {
        let path = build_path("M0,0 L10,0 L10,10 Z").unwrap();

        assert_eq!(
            path.segments(),
            &[
                Segment::MoveTo(point(0.0, 0.0)),
                Segment::LineTo(point(10.0, 0.0)),
                Segment::LineTo(point(10.0, 10.0)),
                Segment::ClosePath,
                Segment::MoveTo(point(0.0, 0.0)),
            ]
        );
        assert_eq!(
            path.extents(),
            Box2D::new(point(0.0, 0.0), point(10.0, 10.0))
        );
    }

    #[test]
    fn flattening_flat_paths_changes_nothing() {
        let mut path = build_path("M 0 0 L 10 0 L 10 10 Z M 20 20 L 30 25").unwrap();
        let before = path.segments().to_vec();

        path.flatten().unwrap();
        assert_eq!(path.segments(), &before[..]);

        // Flattening twice gives the same result as flattening once.
        let mut curvy = build_path("M 0 0 C 0 10 10 10 10 0 Q 20 -10 30 0").unwrap();
        curvy.flatten().unwrap();
        let once = curvy.segments().to_vec();
        curvy.flatten().unwrap();
        assert_eq!(curvy.segments(), &once[..]);
    }

    #[test]
    fn arcs_end_on_their_endpoint() {
        let mut rng = Lcg(42);
        for _ in 0..500 {
            let from = point(rng.range(-100.0, 100.0), rng.range(-100.0, 100.0));
            let arc = SvgArc {
                from,
                to: point(rng.range(-100.0, 100.0), rng.range(-100.0, 100.0)),
                radii: vector(rng.range(0.1, 150.0), rng.range(0.1, 150.0)),
                x_rotation: Angle::degrees(rng.range(-360.0, 360.0)),
                flags: ArcFlags {
                    large_arc: rng.next() < 0.5,
                    sweep: rng.next() < 0.5,
                },
            };

            match arc.to_cubic_beziers() {
                ArcCurves::Curves(curves) => {
                    assert!(!curves.is_empty() && curves.len() <= 4);
                    assert_eq!(curves[0].from, arc.from);
                    assert_eq!(curves[curves.len() - 1].to, arc.to);
                    for pair in curves.windows(2) {
                        assert!((pair[0].to - pair[1].from).length() < 1e-6);
                    }
                }
                other => panic!("{:?} gave {:?}", arc, other),
            }

            let mut path = Path::new();
            path.move_to(from).unwrap();
            path.arc_to(arc.radii, arc.x_rotation.to_degrees(), arc.flags, arc.to)
                .unwrap();
            assert_eq!(path.current_point(), Some(arc.to));
        }
    }

    #[test]
    fn cursor_never_goes_backward() {
        let mut path =
            build_path("M 0 0 L 50 0 C 80 0 80 50 50 50 A 25 25 0 0 1 0 50 Z m 10 10 h 5").unwrap();
        let length = path.total_length().unwrap();

        let mut sampler = path.sampler().unwrap();
        let mut prev_index = sampler.cursor().index();
        let mut offset = 0.0;
        while offset <= length {
            assert!(sampler.position_at(offset).is_some(), "offset {}", offset);
            assert!(sampler.cursor().index() >= prev_index);
            prev_index = sampler.cursor().index();
            offset += 0.37;
        }
    }

    #[test]
    fn zero_radius_arc_is_a_line() {
        let mut arc_path = Path::new();
        arc_path.move_to(point(1.0, 2.0)).unwrap();
        arc_path
            .arc_to(vector(0.0, 10.0), 30.0, ArcFlags::default(), point(8.0, 9.0))
            .unwrap();

        let mut line_path = Path::new();
        line_path.move_to(point(1.0, 2.0)).unwrap();
        line_path.line_to(point(8.0, 9.0)).unwrap();

        assert_eq!(arc_path.segments(), line_path.segments());
        assert!(!arc_path.iter().any(Segment::is_curve));
    }

    #[test]
    fn nearest_offset_on_a_line() {
        let mut path = Path::new();
        path.move_to(point(0.0, 0.0)).unwrap();
        path.line_to(point(10.0, 0.0)).unwrap();

        assert_eq!(path.progress_at(0.0, 10.0, point(5.0, 1.0)).unwrap(), 5.0);
    }

    #[test]
    fn scale_then_translate() {
        let mut rng = Lcg(7);
        let points: Vec<Point> = (0..8)
            .map(|_| point(rng.range(-10.0, 10.0), rng.range(-10.0, 10.0)))
            .collect();

        let mut path = Path::new();
        path.move_to(points[0]).unwrap();
        path.curve_to(points[1], points[2], points[3]).unwrap();
        path.line_to(points[4]).unwrap();
        path.curve_to(points[5], points[6], points[7]).unwrap();
        let extents = path.extents();

        path.scale(2.0, 2.0);
        path.translate(vector(1.0, 1.0));

        let map = |p: Point| point(2.0 * p.x + 1.0, 2.0 * p.y + 1.0);
        let transformed: Vec<Point> = path.iter().flat_map(|s| s.points()).collect();
        let expected: Vec<Point> = points.iter().map(|p| map(*p)).collect();
        assert_eq!(transformed, expected);

        assert_eq!(path.extents().min, map(extents.min));
        assert_eq!(path.extents().max, map(extents.max));
    }

    #[test]
    fn extents_only_grow() {
        let mut rng = Lcg(1234);
        let mut path = Path::new();
        path.move_to(point(0.0, 0.0)).unwrap();

        let mut prev = path.extents();
        for i in 0..200 {
            let p = point(rng.range(-50.0, 50.0), rng.range(-50.0, 50.0));
            match i % 4 {
                0 => path.line_to(p).unwrap(),
                1 => path.curve_to(p, p + vector(3.0, -7.0), p + vector(1.0, 1.0)).unwrap(),
                2 => path
                    .arc_to(vector(20.0, 10.0), 15.0, ArcFlags::default(), p)
                    .unwrap(),
                _ => path.close_path().unwrap(),
            }

            let extents = path.extents();
            assert!(extents.min.x <= prev.min.x && extents.min.y <= prev.min.y);
            assert!(extents.max.x >= prev.max.x && extents.max.y >= prev.max.y);
            for p in path.iter().flat_map(|s| s.points()) {
                assert!(p.x >= extents.min.x && p.x <= extents.max.x);
                assert!(p.y >= extents.min.y && p.y <= extents.max.y);
            }
            prev = extents;
        }
    }
}
