use std::fmt;

use common::Segment;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SlopeDirection {
    Vertical,
    Horizontal,
    Increasing,
    Decreasing,
}

impl SlopeDirection {
    pub fn label(&self) -> &'static str {
        match self {
            &SlopeDirection::Vertical =>
                "vertical",
            &SlopeDirection::Horizontal =>
                "horizontal",
            &SlopeDirection::Increasing =>
                "increasing",
            &SlopeDirection::Decreasing =>
                "decreasing",
        }
    }
}

/// Line through the two points of a segment, plus the segment length.
///
/// `slope` and `intercept` are left at zero for a vertical line.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LineDescriptor {
    pub direction: SlopeDirection,
    pub slope: f64,
    pub intercept: f64,
    pub length: f64,
}

impl LineDescriptor {
    /// `y` on the line at `x`, `None` for a vertical line.
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        match self.direction {
            SlopeDirection::Vertical =>
                None,
            _ =>
                Some(self.slope * x + self.intercept),
        }
    }
}

#[derive(Debug)]
pub struct DegeneratePoints;

impl fmt::Display for DegeneratePoints {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error, the points are the same. Please try again.")
    }
}

pub fn analyze(segment: &Segment) -> Result<LineDescriptor, DegeneratePoints> {
    if segment.is_degenerate() {
        return Err(DegeneratePoints);
    }

    let (dx, dy) = segment.delta();
    let length = segment.length();

    // sign tests below are exact on purpose: no epsilon once dx is nonzero
    let descriptor = if dx.abs() > 0. {
        let slope = dy / dx;
        let intercept = segment.src.y - slope * segment.src.x;
        let direction = if slope > 0. {
            SlopeDirection::Increasing
        } else if slope < 0. {
            SlopeDirection::Decreasing
        } else {
            SlopeDirection::Horizontal
        };
        LineDescriptor { direction, slope, intercept, length, }
    } else {
        LineDescriptor { direction: SlopeDirection::Vertical, slope: 0., intercept: 0., length, }
    };
    debug!("{:?} -> {:?}", segment, descriptor);

    Ok(descriptor)
}
