// Translation pipeline
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

//! Translation pipeline.
//!
//! Translation is a single pass through four stages,
//!   each consuming the output of the last:
//!
//!   1. [Comment extraction](crate::comment) captures and strips comments
//!        from the raw source text;
//!   2. [Structural parsing](crate::doc) reads declarations from the
//!        remaining markup;
//!   3. [Semantic analysis](crate::sema) validates names and evaluates
//!        values; and
//!   4. [Rendering](crate::render) produces the target text.
//!
//! The pipeline is pure:
//!   it performs no I/O and holds no state between invocations.
//! The first error encountered by any stage aborts translation.

use crate::{comment, doc, error::TranslateError, render, sema};
use tracing::debug;

/// Translate XML declaration source text into the target configuration
///   language.
///
/// ```
/// let out = xcfg::translate(
///     r#"<config><constant name="x">10</constant></config>"#,
/// )?;
///
/// assert_eq!(out, "x is 10.0\n");
/// # Ok::<(), xcfg::TranslateError>(())
/// ```
pub fn translate(src: &str) -> Result<String, TranslateError> {
    let (cleaned, comments) = comment::extract(src);
    debug!(
        multi_line = comments.multi_line.len(),
        single_line = comments.single_line.len(),
        "extracted comments"
    );

    let doc = doc::parse(&cleaned)?;
    debug!(decls = doc.decls.len(), "parsed declarations");

    let config = sema::analyze(doc)?;
    debug!(
        constants = config.constants.len(),
        dictionaries = config.dictionaries.len(),
        values = config.values.len(),
        "analyzed declarations"
    );

    Ok(render::render(&comments, &config))
}
