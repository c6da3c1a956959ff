use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::ConfigurationError;

// hand-rolled instead of num-complex; the escape loop only needs add, mul and modulus
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

/// Formats as `a+bi` / `a-bi` with six decimals, the form written to metadata sidecars.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.imag.is_sign_negative() { '-' } else { '+' };
        write!(f, "{:.6}{}{:.6}i", self.real, sign, self.imag.abs())
    }
}

/// Parses complex literals such as `0.3+0.5i`, `-0.7-0.27j`, `-0.8`, `0.6i` or `-i`.
/// Whitespace is ignored.
impl FromStr for Complex {
    type Err = ConfigurationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigurationError::MalformedComplex(input.to_string());
        let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();

        if cleaned.is_empty() {
            return Err(malformed());
        }

        let Some(body) = cleaned.strip_suffix(['i', 'j']) else {
            let real = cleaned.parse::<f64>().map_err(|_| malformed())?;
            return Ok(Self::new(real, 0.0));
        };

        // the sign separating the two parts is the last '+'/'-' that is not
        // at the start and does not belong to an exponent
        let bytes = body.as_bytes();
        let split = (1..bytes.len())
            .rev()
            .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'));

        let (real_part, imag_part) = match split {
            Some(index) => (&body[..index], &body[index..]),
            None => ("", body),
        };

        let real = if real_part.is_empty() {
            0.0
        } else {
            real_part.parse::<f64>().map_err(|_| malformed())?
        };

        let imag = match imag_part {
            "" | "+" => 1.0,
            "-" => -1.0,
            other => other.parse::<f64>().map_err(|_| malformed())?,
        };

        Ok(Self::new(real, imag))
    }
}
