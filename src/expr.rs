// Value expressions
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

//! Value expressions.
//!
//! The text of a `value` declaration is classified into a [`ValueExpr`]
//!   and then evaluated against the table of constants.
//! Classification is attempted in this order:
//!
//!   1. Text that parses as a number is a [`ValueExpr::Number`];
//!   2. Text matching the expression grammar is a [`ValueExpr::Expr`];
//!   3. Anything else is [`ValueExpr::Opaque`] and passes through
//!        evaluation unchanged.
//!
//! Expression Grammar
//! ==================
//! ```text
//! expression := '@[' ('+'|'-') IDENT NUMBER ('pow(' INT ')')? ']'
//! ```
//!
//! Whitespace is permitted between tokens.
//! The expression `@[+ x 2 pow(2)]` evaluates to `(x + 2)²`;
//!   when `pow` is omitted the exponent is `1`.
//! All arithmetic is performed in [`f64`].
//!
//! A reference to a constant that was never declared evaluates as `0`.

use crate::{
    error::ValidationError,
    num::{parse_float, Literal},
    sema::Constants,
};
use regex::Regex;
use std::{fmt::Display, sync::LazyLock};
use tracing::warn;

static EXPR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^@\[([+-])\s*([a-zA-Z_]\w*)\s*([\d.]+)\s*(?:pow\(\s*(\d+)\s*\))?\]$",
    )
    .expect("expression pattern")
});

/// Operator applied to a constant and a literal operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprOp {
    Add,
    Sub,
}

impl ExprOp {
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
        }
    }
}

impl Display for ExprOp {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Add => write!(fmt, "+"),
            Self::Sub => write!(fmt, "-"),
        }
    }
}

/// A classified `value` declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueExpr {
    /// A plain numeric literal.
    Number(f64),

    /// `@[op constant literal pow(exponent)]`
    Expr {
        op: ExprOp,
        constant: String,
        literal: f64,
        exponent: i32,
    },

    /// Text that is neither a number nor an expression.
    Opaque(String),
}

impl ValueExpr {
    /// Classify the text of a `value` declaration.
    ///
    /// Text that has the shape of an expression but whose literal operand
    ///   is not a number
    ///     (e.g. `@[+ x 1.2.3]`)
    ///   or whose exponent does not fit an [`i32`] is an error rather than
    ///   opaque text.
    pub fn classify(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();

        if let Some(n) = parse_float(text) {
            return Ok(Self::Number(n));
        }

        let Some(cap) = EXPR.captures(text) else {
            return Ok(Self::Opaque(text.to_string()));
        };

        let op = match &cap[1] {
            "-" => ExprOp::Sub,
            _ => ExprOp::Add,
        };

        let literal = parse_float(&cap[3])
            .ok_or_else(|| ValidationError::InvalidExprNumber(cap[3].into()))?;

        let exponent = match cap.get(4) {
            None => 1,
            Some(exp) => exp.as_str().parse::<i32>().map_err(|_| {
                ValidationError::InvalidExponent(exp.as_str().into())
            })?,
        };

        Ok(Self::Expr {
            op,
            constant: cap[2].into(),
            literal,
            exponent,
        })
    }

    /// Evaluate against the given table of `constants`.
    pub fn eval(&self, constants: &Constants) -> Result<Literal, ValidationError> {
        match self {
            Self::Number(n) => Ok(Literal::Number(*n)),
            Self::Opaque(text) => Ok(Literal::Raw(text.clone())),

            Self::Expr {
                op,
                constant,
                literal,
                exponent,
            } => {
                let base = match constants.get(constant.as_str()) {
                    Some(Literal::Number(n)) => *n,
                    Some(Literal::Raw(_)) => {
                        return Err(ValidationError::NonNumericConstant(
                            constant.clone(),
                        ))
                    }
                    None => {
                        warn!(%constant, "undeclared constant evaluates as 0");
                        0.0
                    }
                };

                let sum = op.apply(base, *literal);
                let result = sum.powf(f64::from(*exponent));

                if sum.is_finite() && result.is_infinite() {
                    return Err(ValidationError::Overflow(self.to_string()));
                }

                Ok(Literal::Number(result))
            }
        }
    }
}

impl Display for ValueExpr {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        use crate::num::Float;

        match self {
            Self::Number(n) => Float(*n).fmt(fmt),
            Self::Opaque(text) => fmt.write_str(text),

            Self::Expr {
                op,
                constant,
                literal,
                exponent: 1,
            } => write!(fmt, "@[{op} {constant} {}]", Float(*literal)),

            Self::Expr {
                op,
                constant,
                literal,
                exponent,
            } => write!(
                fmt,
                "@[{op} {constant} {} pow({exponent})]",
                Float(*literal)
            ),
        }
    }
}
