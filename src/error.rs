// Translation errors
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

//! Errors produced during translation.
//!
//! Translation is fail-fast:
//!   the first error aborts the entire translation and no partial output
//!   is produced.
//! Errors contain only owned values so that they may be propagated freely
//!   up the stack.

use crate::tpwrap::quick_xml::Error as XmlError;
use std::fmt::Display;

/// Any error that may abort a translation.
#[derive(Debug, PartialEq)]
pub enum TranslateError {
    /// Markup could not be parsed.
    Parse(ParseError),
    /// Markup parsed but its declarations are not valid.
    Validation(ValidationError),
}

impl Display for TranslateError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(fmt, "parse error: {e}"),
            Self::Validation(e) => write!(fmt, "validation error: {e}"),
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Validation(e) => Some(e),
        }
    }
}

impl From<ParseError> for TranslateError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ValidationError> for TranslateError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

/// Malformed markup.
///
/// Byte offsets are relative to the comment-stripped text,
///   not the original source.
#[derive(Debug, PartialEq)]
pub enum ParseError {
    /// The underlying XML reader rejected the input.
    Xml { pos: u64, err: XmlError },
    /// Input ended before the named element was closed.
    UnclosedElement(String),
    /// The input contains no root element.
    NoRoot,
    /// Non-whitespace content before or after the root element.
    JunkOutsideRoot(u64),
    /// A declaration is missing an attribute that it requires.
    MissingAttr {
        element: &'static str,
        attr: &'static str,
    },
}

impl Display for ParseError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ParseError::*;

        match self {
            Xml { pos, err } => {
                write!(fmt, "malformed markup at byte {pos}: {err}")
            }

            UnclosedElement(name) => {
                write!(fmt, "unclosed element `<{name}>`")
            }

            NoRoot => write!(fmt, "no root element found"),

            JunkOutsideRoot(pos) => write!(
                fmt,
                "unexpected content outside of root element at byte {pos}"
            ),

            MissingAttr { element, attr } => {
                write!(fmt, "`<{element}>` is missing attribute `@{attr}`")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Xml { err, .. } => Some(err),
            _ => None,
        }
    }
}

/// Well-formed markup with invalid declarations or expressions.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A `constant` name does not satisfy the identifier grammar.
    InvalidConstantName(String),
    /// A `dictionary` name does not satisfy the identifier grammar.
    InvalidDictionaryName(String),
    /// The literal operand of an expression is not a number.
    InvalidExprNumber(String),
    /// The `pow` exponent of an expression is out of range.
    InvalidExponent(String),
    /// An expression references a constant whose value is not numeric.
    NonNumericConstant(String),
    /// An expression with finite operands produced an infinite result.
    Overflow(String),
}

impl Display for ValidationError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ValidationError::*;

        match self {
            InvalidConstantName(name) => {
                write!(fmt, "invalid constant name `{name}`")
            }

            InvalidDictionaryName(name) => {
                write!(fmt, "invalid dictionary name `{name}`")
            }

            InvalidExprNumber(lit) => {
                write!(fmt, "invalid number `{lit}` in expression")
            }

            InvalidExponent(lit) => {
                write!(fmt, "invalid exponent `{lit}` in expression")
            }

            NonNumericConstant(name) => write!(
                fmt,
                "constant `{name}` is not numeric and cannot be used \
                   in an expression"
            ),

            Overflow(expr) => {
                write!(fmt, "numeric overflow evaluating `{expr}`")
            }
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
