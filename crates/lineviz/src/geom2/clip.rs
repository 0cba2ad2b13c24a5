//! Normal-form lines and their intersection with the viewport rectangle.
//!
//! Both parametrizations reduce to a `NormalLine` in the centered frame (origin at
//! the viewport center) and share `clip_to_rect`, so every returned segment has its
//! endpoints on the viewport boundary.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector2;

use super::types::{GeomCfg, Point2, Segment, Viewport};

/// Line `{ p : p.x·cos θ + p.y·sin θ = ρ }` in the centered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalLine {
    pub theta: f64,
    pub rho: f64,
}

impl NormalLine {
    #[inline]
    pub fn new(theta: f64, rho: f64) -> Self {
        Self { theta, rho }
    }

    /// Line through `point` running along direction angle `phi`.
    pub fn through(point: Point2, phi: f64) -> Self {
        let theta = phi + FRAC_PI_2;
        let n = Vector2::new(theta.cos(), theta.sin());
        Self {
            theta,
            rho: n.dot(&point),
        }
    }

    /// Unit normal `(cos θ, sin θ)`.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(self.theta.cos(), self.theta.sin())
    }

    /// Signed distance of `p` from the line (zero on the line).
    #[inline]
    pub fn residual(&self, p: Point2) -> f64 {
        self.normal().dot(&p) - self.rho
    }

    /// Foot of the perpendicular from the origin.
    #[inline]
    pub fn foot(&self) -> Point2 {
        self.normal() * self.rho
    }

    /// Intersect with the rectangle `[-half.x, half.x] × [-half.y, half.y]`.
    ///
    /// Vertical edges are only solved when |sin θ| > `eps_trig`, horizontal edges
    /// only when |cos θ| > `eps_trig`. Edge extents are inclusive. Candidates that
    /// coincide within `eps_dedup` (a corner hit from two edges) count once.
    /// Returns `None` unless at least two distinct points survive.
    pub fn clip_to_rect(&self, half: Vector2<f64>, cfg: &GeomCfg) -> Option<(Point2, Point2)> {
        let (s, c) = self.theta.sin_cos();
        let (left, right, top, bottom) = (-half.x, half.x, -half.y, half.y);

        let mut candidates: Vec<Point2> = Vec::with_capacity(4);
        if s.abs() > cfg.eps_trig {
            for x in [left, right] {
                let y = (self.rho - x * c) / s;
                if top <= y && y <= bottom {
                    candidates.push(Vector2::new(x, y));
                }
            }
        }
        if c.abs() > cfg.eps_trig {
            for y in [top, bottom] {
                let x = (self.rho - y * s) / c;
                if left <= x && x <= right {
                    candidates.push(Vector2::new(x, y));
                }
            }
        }

        let mut unique: Vec<Point2> = Vec::with_capacity(candidates.len());
        for p in candidates {
            let dup = unique.iter().any(|q| {
                (p.x - q.x).abs() < cfg.eps_dedup && (p.y - q.y).abs() < cfg.eps_dedup
            });
            if !dup {
                unique.push(p);
            }
        }

        match unique.len() {
            0 | 1 => None,
            2 => Some((unique[0], unique[1])),
            // Near-corner rounding can leave a third point just outside the dedup
            // radius; the two farthest apart span the visible chord.
            _ => farthest_pair(&unique),
        }
    }

    /// Clip against the viewport and return the chord in absolute coordinates.
    pub fn clip_to_viewport(&self, vp: &Viewport, cfg: &GeomCfg) -> Option<Segment> {
        let (a, b) = self.clip_to_rect(vp.half_extents(), cfg)?;
        Some(Segment::new(vp.from_centered(a), vp.from_centered(b)))
    }
}

fn farthest_pair(pts: &[Point2]) -> Option<(Point2, Point2)> {
    let mut best: Option<(Point2, Point2, f64)> = None;
    for (i, p) in pts.iter().enumerate() {
        for q in &pts[i + 1..] {
            let d = (p - q).norm_squared();
            if best.as_ref().is_none_or(|(_, _, bd)| d > *bd) {
                best = Some((*p, *q, d));
            }
        }
    }
    best.map(|(p, q, _)| (p, q))
}
