/// Tolerance below which two reals are treated as equal.
pub const EPSILON: f64 = 0.0000001;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y, }
    }

    /// Compares coordinate magnitudes only, so `(3, 4)` and `(-3, -4)` are
    /// considered the same point.
    pub fn same_magnitude(&self, other: &Point) -> bool {
        (self.x.abs() - other.x.abs()).abs() < EPSILON &&
            (self.y.abs() - other.y.abs()).abs() < EPSILON
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment {
    pub src: Point,
    pub dst: Point,
}

impl Segment {
    /// Change in `x` (the run) and in `y` (the rise) from `src` to `dst`.
    pub fn delta(&self) -> (f64, f64) {
        (self.dst.x - self.src.x, self.dst.y - self.src.y)
    }

    pub fn length(&self) -> f64 {
        let (dx, dy) = self.delta();
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_degenerate(&self) -> bool {
        self.src.same_magnitude(&self.dst)
    }
}
