// Identifiers
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

//! Validated identifiers.
//!
//! Constant and dictionary names must be identifiers:
//!   a letter or underscore followed by any number of word characters.
//! Dictionary item keys are not identifiers and are never validated.

use crate::error::ValidationError;
use regex::Regex;
use std::{borrow::Borrow, fmt::Display, sync::LazyLock};

static IDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[_a-zA-Z]\w*$").expect("identifier pattern must compile")
});

/// Whether `name` satisfies the identifier grammar.
pub fn is_valid(name: &str) -> bool {
    IDENT.is_match(name)
}

/// The kind of declaration that an [`Ident`] names.
///
/// This determines the error produced when validation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentKind {
    Constant,
    Dictionary,
}

/// A name that has been verified to satisfy the identifier grammar.
///
/// An [`Ident`] hashes and compares like the [`str`] it wraps,
///   so maps keyed by [`Ident`] may be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ident(String);

impl Ident {
    /// Validate `name` as the name of a declaration of the given `kind`.
    pub fn validate(
        name: impl Into<String>,
        kind: IdentKind,
    ) -> Result<Self, ValidationError> {
        let name = name.into();

        match (is_valid(&name), kind) {
            (true, _) => Ok(Self(name)),
            (false, IdentKind::Constant) => {
                Err(ValidationError::InvalidConstantName(name))
            }
            (false, IdentKind::Dictionary) => {
                Err(ValidationError::InvalidDictionaryName(name))
            }
        }
    }
}

impl Borrow<str> for Ident {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for Ident {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.write_str(&self.0)
    }
}
