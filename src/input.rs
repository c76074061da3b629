use std::{fmt, io, str};
use std::io::Read;

use common::{Point, Segment};

const COORDINATES: [&str; 4] = ["x1", "y1", "x2", "y2"];

#[derive(Debug)]
pub enum InputError {
    Read(io::Error),
    MissingValue { position: &'static str, },
    Malformed { position: &'static str, token: String, },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error reading input. Please try again.")
    }
}

pub fn read_segment<R>(mut reader: R) -> Result<Segment, InputError> where R: Read {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)
        .map_err(InputError::Read)?;
    parse_segment(&bytes)
}

/// Reads `x1 y1 x2 y2` as the leading numeric prefix of each whitespace
/// skipped run, so `4 3abc` yields `4` and `3`. Anything after the fourth
/// value is left unread, whatever its encoding.
pub fn parse_segment<T>(input: &T) -> Result<Segment, InputError> where T: AsRef<[u8]> + ?Sized {
    let mut scanner = Scanner { rest: input.as_ref(), };
    let mut values = [0.0; 4];
    for (value, &position) in values.iter_mut().zip(COORDINATES.iter()) {
        *value = scanner.next_real(position)?;
    }
    debug!("parsed coordinates: {:?}", values);

    Ok(Segment {
        src: Point::new(values[0], values[1]),
        dst: Point::new(values[2], values[3]),
    })
}

struct Scanner<'a> {
    rest: &'a [u8],
}

impl<'a> Scanner<'a> {
    fn next_real(&mut self, position: &'static str) -> Result<f64, InputError> {
        let start = self.rest.iter()
            .position(|&byte| !is_space(byte))
            .ok_or(InputError::MissingValue { position, })?;
        self.rest = &self.rest[start ..];

        let length = numeric_prefix(self.rest);
        let value = str::from_utf8(&self.rest[.. length]).ok()
            .and_then(|digits| digits.parse::<f64>().ok())
            .filter(|value| length > 0 && value.is_finite());
        match value {
            Some(value) => {
                self.rest = &self.rest[length ..];
                Ok(value)
            },
            None => {
                let end = self.rest.iter()
                    .position(|&byte| is_space(byte))
                    .unwrap_or(self.rest.len());
                let token = String::from_utf8_lossy(&self.rest[.. end]).into_owned();
                Err(InputError::Malformed { position, token, })
            },
        }
    }
}

fn is_space(byte: u8) -> bool {
    match byte {
        b' ' | b'\t' ..= b'\r' =>
            true,
        _ =>
            false,
    }
}

/// Length of the longest `[sign] digits [. digits] [e [sign] digits]` prefix,
/// zero when `bytes` does not start with a number.
fn numeric_prefix(bytes: &[u8]) -> usize {
    let digits = |from: usize| bytes.iter().skip(from).take_while(|byte| byte.is_ascii_digit()).count();
    let sign = |at: usize| match bytes.get(at) {
        Some(&b'+') | Some(&b'-') => 1,
        _ => 0,
    };

    let mut end = sign(0);
    let integral = digits(end);
    end += integral;
    let mut fractional = 0;
    if bytes.get(end) == Some(&b'.') {
        fractional = digits(end + 1);
        if integral + fractional > 0 {
            end += 1 + fractional;
        }
    }
    if integral + fractional == 0 {
        return 0;
    }

    if let Some(&b'e') | Some(&b'E') = bytes.get(end) {
        let exponent_start = end + 1 + sign(end + 1);
        let exponent = digits(exponent_start);
        if exponent > 0 {
            end = exponent_start + exponent;
        }
    }
    end
}
