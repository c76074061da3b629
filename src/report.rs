use std::io::{self, Write};

use common::Segment;
use analysis::{LineDescriptor, SlopeDirection};

const LABEL_WIDTH: usize = 21;
const SIGNIFICANT_DIGITS: i32 = 6;

pub fn write_report<W>(out: &mut W, segment: &Segment, line: &LineDescriptor) -> io::Result<()> where W: Write {
    let Segment { src, dst, } = *segment;
    writeln!(
        out,
        "From point: ({}, {}) to point: ({}, {}).",
        real(src.x),
        real(src.y),
        real(dst.x),
        real(dst.y),
    )?;
    writeln!(out, "{:<width$}{}", "Line equation:", equation(segment, line), width = LABEL_WIDTH)?;
    writeln!(out, "{:<width$}{}", "Slope direction:", line.direction.label(), width = LABEL_WIDTH)?;
    writeln!(out, "{:<width$}{}", "Line segment length:", real(line.length), width = LABEL_WIDTH)?;
    writeln!(out)
}

pub fn write_failure<W, E>(out: &mut W, error: &E) -> io::Result<()> where W: Write, E: ::std::fmt::Display {
    writeln!(out, "{}", error)?;
    writeln!(out)
}

pub fn equation(segment: &Segment, line: &LineDescriptor) -> String {
    match line.direction {
        SlopeDirection::Vertical =>
            format!("x = {}", real(segment.src.x)),
        SlopeDirection::Horizontal =>
            format!("y = {}", real(segment.src.y)),
        SlopeDirection::Increasing | SlopeDirection::Decreasing =>
            format!("y = {}x + {}", real(line.slope), real(line.intercept)),
    }
}

/// Renders a real in general notation with six significant digits and
/// trailing zeros dropped: `0.75`, `5`, `0.333333`, `1.23457e+06`, `1e-07`.
pub fn real(value: f64) -> String {
    if value == 0. {
        return if value.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }
    if !value.is_finite() {
        return format!("{}", value);
    }

    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = match scientific.find('e') {
        Some(index) =>
            (&scientific[.. index], scientific[index + 1 ..].parse::<i32>().unwrap_or(0)),
        None =>
            (&scientific[..], 0),
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use common::{Point, Segment};
    use analysis::{analyze, DegeneratePoints};
    use super::{real, write_failure, write_report};

    fn render(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
        let segment = Segment { src: Point::new(x1, y1), dst: Point::new(x2, y2), };
        let line = analyze(&segment).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &segment, &line).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn increasing_report() {
        assert_eq!(
            render(0., 0., 4., 3.),
            "From point: (0, 0) to point: (4, 3).\n\
             Line equation:       y = 0.75x + 0\n\
             Slope direction:     increasing\n\
             Line segment length: 5\n\
             \n",
        );
    }

    #[test]
    fn decreasing_report_keeps_negative_intercept_sign() {
        assert_eq!(
            render(0., -3., 1., -5.),
            "From point: (0, -3) to point: (1, -5).\n\
             Line equation:       y = -2x + -3\n\
             Slope direction:     decreasing\n\
             Line segment length: 2.23607\n\
             \n",
        );
    }

    #[test]
    fn vertical_report() {
        assert_eq!(
            render(2.5, -1., 2.5, 7.),
            "From point: (2.5, -1) to point: (2.5, 7).\n\
             Line equation:       x = 2.5\n\
             Slope direction:     vertical\n\
             Line segment length: 8\n\
             \n",
        );
    }

    #[test]
    fn horizontal_report() {
        assert_eq!(
            render(-3., 1.5, 1., 1.5),
            "From point: (-3, 1.5) to point: (1, 1.5).\n\
             Line equation:       y = 1.5\n\
             Slope direction:     horizontal\n\
             Line segment length: 4\n\
             \n",
        );
    }

    #[test]
    fn failure_is_message_and_blank_line() {
        let mut out = Vec::new();
        write_failure(&mut out, &DegeneratePoints).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error, the points are the same. Please try again.\n\n",
        );
    }

    #[test]
    fn reals_use_six_significant_digits() {
        assert_eq!(real(0.), "0");
        assert_eq!(real(-0.), "-0");
        assert_eq!(real(5.), "5");
        assert_eq!(real(-2.), "-2");
        assert_eq!(real(0.75), "0.75");
        assert_eq!(real(1. / 3.), "0.333333");
        assert_eq!(real(2. / 3.), "0.666667");
        assert_eq!(real(100.), "100");
        assert_eq!(real(123456.), "123456");
        assert_eq!(real(123456.7), "123457");
        assert_eq!(real(0.0001), "0.0001");
    }

    #[test]
    fn reals_switch_to_scientific_outside_the_fixed_range() {
        assert_eq!(real(1234567.), "1.23457e+06");
        assert_eq!(real(1000000.), "1e+06");
        assert_eq!(real(0.00001), "1e-05");
        assert_eq!(real(0.0000001), "1e-07");
        assert_eq!(real(-2.5e-12), "-2.5e-12");
        assert_eq!(real(1.5e300), "1.5e+300");
    }

    #[test]
    fn rounding_can_carry_into_the_exponent() {
        assert_eq!(real(999999.7), "1e+06");
        assert_eq!(real(9.999996), "10");
    }
}
