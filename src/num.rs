// Numeric literals
//
//  Copyright (C) 2026 The xcfg Authors.
//
//  This file is part of xcfg.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Literal values, numeric parsing, and canonical rendering.
//!
//! Element text is coerced into a [`Literal`]:
//!   if it parses as a floating-point number it becomes
//!   [`Literal::Number`],
//!     otherwise the trimmed text is retained verbatim as
//!     [`Literal::Raw`].
//!
//! Canonical Float Rendering
//! =========================
//! Numbers are always rendered with at least one fractional digit,
//!   so `10` becomes `10.0`.
//! The digits are the shortest sequence that round-trips to the same
//!   [`f64`].
//! Magnitudes with a decimal exponent outside of `[-4, 16)` are rendered
//!   in scientific notation with an explicitly signed exponent of at least
//!   two digits
//!     (e.g. `1e+16` and `1.5e-05`).
//! Non-finite values render as `inf`, `-inf`, and `nan`.

use std::fmt::Display;

/// Smallest decimal exponent rendered without scientific notation.
const PLAIN_EXP_MIN: i32 = -4;

/// Decimal exponent at which scientific notation begins.
const PLAIN_EXP_MAX: i32 = 16;

/// A constant or item value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Raw(String),
}

impl Literal {
    /// Coerce element text into a literal.
    ///
    /// Surrounding whitespace is not significant for either variant.
    pub fn coerce(text: &str) -> Self {
        let trimmed = text.trim();

        match parse_float(trimmed) {
            Some(n) => Self::Number(n),
            None => Self::Raw(trimmed.to_string()),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Number(n) => Float(*n).fmt(fmt),
            Self::Raw(s) => fmt.write_str(s),
        }
    }
}

/// Parse `text` as a floating-point number.
///
/// This accepts everything that [`f64`]'s [`FromStr`](std::str::FromStr)
///   does,
///     and additionally permits `_` as a digit separator,
///       but only between two digits
///         (`1_000.000_1` but not `_1`, `1_`, `1__0`, or `1_.5`).
/// No surrounding whitespace is permitted.
pub fn parse_float(text: &str) -> Option<f64> {
    if !text.contains('_') {
        return text.parse().ok();
    }

    let bytes = text.as_bytes();
    let separated = bytes.iter().enumerate().all(|(i, b)| {
        *b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });

    if separated {
        text.replace('_', "").parse().ok()
    } else {
        None
    }
}

/// Canonical rendering of an [`f64`].
///
/// See the [module-level documentation](self) for the format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float(pub f64);

impl Display for Float {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        let n = self.0;

        if n.is_nan() {
            return fmt.write_str("nan");
        } else if n.is_infinite() {
            return fmt.write_str(if n < 0.0 { "-inf" } else { "inf" });
        } else if n == 0.0 {
            return fmt.write_str(if n.is_sign_negative() {
                "-0.0"
            } else {
                "0.0"
            });
        }

        // `LowerExp` yields the shortest round-trip mantissa,
        //   which also gives us the decimal exponent.
        let sci = format!("{n:e}");

        match sci
            .split_once('e')
            .and_then(|(mant, exp)| Some((mant, exp.parse::<i32>().ok()?)))
        {
            Some((mant, exp))
                if !(PLAIN_EXP_MIN..PLAIN_EXP_MAX).contains(&exp) =>
            {
                let sign = if exp < 0 { '-' } else { '+' };
                write!(fmt, "{mant}e{sign}{:02}", exp.unsigned_abs())
            }

            _ => {
                let plain = n.to_string();

                if plain.contains('.') {
                    fmt.write_str(&plain)
                } else {
                    write!(fmt, "{plain}.0")
                }
            }
        }
    }
}
