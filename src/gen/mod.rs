use std::f64::consts::PI;
use std::str::FromStr;

use crate::spatial::Point;

// target distribution for scattered points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Square,
    Disk,
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "square" => Ok(Shape::Square),
            "disk" => Ok(Shape::Disk),
            _ => Err(format!("unrecognized shape name: {}", s)),
        }
    }
}

// a seedable generator instance, threaded through explicitly
// rather than kept as global state
pub fn rng(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    }
}

// an endless stream of randomly placed points, optionally with a radius
// that grows as points are drawn
#[derive(Debug, Clone)]
pub struct Scatter {
    rng: fastrand::Rng,
    shape: Shape,
    center: Point,
    radius: f64,
    step: f64,
}

impl Scatter {
    pub fn new(shape: Shape, center: Point, radius: f64, seed: Option<u64>) -> Self {
        Scatter {
            rng: rng(seed),
            shape,
            center,
            radius,
            step: 0.0,
        }
    }

    // grow the radius by a fixed step per generated point
    pub fn with_growth(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Iterator for Scatter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let p = match self.shape {
            Shape::Square => {
                let x = (self.center.x - self.radius) + 2.0 * self.radius * self.rng.f64();
                let y = (self.center.y - self.radius) + 2.0 * self.radius * self.rng.f64();
                Point::new(x, y)
            }
            Shape::Disk => {
                // the radius is drawn uniformly, so points bunch towards
                // the center rather than spreading by area
                let dist = self.radius * self.rng.f64();
                let angle = 2.0 * PI * self.rng.f64();
                Point::new(
                    self.center.x + dist * angle.cos(),
                    self.center.y + dist * angle.sin(),
                )
            }
        };

        self.radius += self.step;
        Some(p)
    }
}

// add a sub-unit offset to an externally supplied point so exactly
// coincident inputs don't land on the orientation test's tie-break
pub fn jitter(rng: &fastrand::Rng, p: Point) -> Point {
    Point::new(p.x + rng.f64(), p.y + rng.f64())
}
