// Output rendering
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

//! Rendering of the target configuration language.
//!
//! Output is produced in a fixed order of sections:
//!
//!   1. Comments as `<# text #>`,
//!        multi-line comments before single-line comments;
//!   2. Constants as `name is value`;
//!   3. Dictionaries as a block of `key = value,` lines; and
//!   4. Evaluated values,
//!        one per line.
//!
//! An empty section produces no output.
//! Every line,
//!   including the last,
//!   is terminated by `\n`.

use crate::{comment::Comments, sema::Config};
use std::fmt::{self, Display, Formatter};

/// A translation ready to be written.
///
/// Rendering is performed by the [`Display`] implementation;
///   [`render`] produces the whole output as a [`String`].
#[derive(Debug, Clone, Copy)]
pub struct Rendering<'a> {
    comments: &'a Comments,
    config: &'a Config,
}

impl<'a> Rendering<'a> {
    pub fn new(comments: &'a Comments, config: &'a Config) -> Self {
        Self { comments, config }
    }

    fn fmt_comments(&self, fmt: &mut Formatter) -> fmt::Result {
        self.comments
            .iter()
            .try_for_each(|comment| writeln!(fmt, "<# {} #>", comment.trim()))
    }

    fn fmt_constants(&self, fmt: &mut Formatter) -> fmt::Result {
        self.config
            .constants
            .iter()
            .try_for_each(|(name, value)| writeln!(fmt, "{name} is {value}"))
    }

    fn fmt_dictionaries(&self, fmt: &mut Formatter) -> fmt::Result {
        for (name, items) in &self.config.dictionaries {
            writeln!(fmt, "{{ {name} = {{")?;

            for (key, value) in items {
                writeln!(fmt, "  {key} = {value},")?;
            }

            writeln!(fmt, "}}}}")?;
        }

        Ok(())
    }

    fn fmt_values(&self, fmt: &mut Formatter) -> fmt::Result {
        self.config
            .values
            .iter()
            .try_for_each(|value| writeln!(fmt, "{value}"))
    }
}

impl Display for Rendering<'_> {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        self.fmt_comments(fmt)?;
        self.fmt_constants(fmt)?;
        self.fmt_dictionaries(fmt)?;
        self.fmt_values(fmt)
    }
}

/// Render comments and an analyzed [`Config`].
pub fn render(comments: &Comments, config: &Config) -> String {
    Rendering::new(comments, config).to_string()
}

#[cfg(test)]
mod test;
