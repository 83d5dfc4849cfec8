// Comment extraction
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

//! Comment extraction.
//!
//! The source dialect permits two comment forms that are not XML:
//!
//!   - _Multi-line_ comments delimited by `/+` and `+/`,
//!       which may span lines and end at the first closing delimiter;
//!         and
//!   - _Single-line_ comments beginning with `\` and continuing to the
//!       end of the line.
//!
//! Extraction is a pure text pass that knows nothing about markup;
//!   a delimiter appearing within element text or an attribute value is
//!   still a comment boundary.
//! Comments are removed from the text before it is handed to the
//!   [structural parser](crate::doc),
//!     which therefore never sees them.
//!
//! Multi-line comments are extracted and stripped first;
//!   single-line comments are then extracted from what remains,
//!     so a `\` within a multi-line comment does not begin a second
//!     comment.
//! Captured text is retained verbatim;
//!   trimming is the responsibility of the [renderer](crate::render).

use regex::Regex;
use std::sync::LazyLock;

static MULTI_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)/\+(.*?)\+/").expect("multi-line comment pattern")
});

static SINGLE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)\\(.*?)$").expect("single-line comment pattern")
});

/// Comments captured from source text.
///
/// Each group is in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Comments {
    pub multi_line: Vec<String>,
    pub single_line: Vec<String>,
}

impl Comments {
    /// All comments in render order:
    ///   multi-line comments before single-line comments,
    ///     regardless of their relative position in the source.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.multi_line
            .iter()
            .chain(self.single_line.iter())
            .map(String::as_str)
    }
}

/// Capture and strip all comments from `src`.
///
/// Returns the text with every comment removed alongside the captured
///   comment bodies.
pub fn extract(src: &str) -> (String, Comments) {
    let multi_line = captures(&MULTI_LINE, src);
    let stripped = MULTI_LINE.replace_all(src, "");

    let single_line = captures(&SINGLE_LINE, &stripped);
    let cleaned = SINGLE_LINE.replace_all(&stripped, "").into_owned();

    (
        cleaned,
        Comments {
            multi_line,
            single_line,
        },
    )
}

fn captures(re: &Regex, text: &str) -> Vec<String> {
    re.captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|body| body.as_str().to_string())
        .collect()
}
