// Semantic analysis
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

//! Semantic analysis of parsed declarations.
//!
//! This validates declaration names,
//!   coerces literal text,
//!   and evaluates `value` expressions,
//!     producing a [`Config`] ready to be [rendered](crate::render).
//!
//! Analysis proceeds in two passes.
//! The first collects constants and dictionaries in document order,
//!   validating each name as it is encountered;
//!     the first invalid name aborts analysis.
//! The second evaluates each `value` against the _complete_ table of
//!   constants,
//!     so a value may reference a constant that is declared after it.
//!
//! Redeclaration
//! =============
//! Constants and dictionaries occupy separate namespaces.
//! Redeclaring a name within a namespace replaces its value but retains
//!   the position of the original declaration;
//!     the same holds for repeated keys within a dictionary.

use crate::{
    doc::{Decl, Document, Item},
    error::ValidationError,
    expr::ValueExpr,
    ident::{Ident, IdentKind},
    num::Literal,
};
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use tracing::trace;

/// Insertion-ordered map.
pub type OrderedMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Constants by name in declaration order.
pub type Constants = OrderedMap<Ident, Literal>;

/// Dictionary items by key in declaration order.
pub type Items = OrderedMap<String, Literal>;

/// Dictionaries by name in declaration order.
pub type Dictionaries = OrderedMap<Ident, Items>;

/// The result of analysis.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub constants: Constants,
    pub dictionaries: Dictionaries,
    /// Evaluated `value` declarations in document order.
    pub values: Vec<Literal>,
}

/// Validate and evaluate the declarations of `doc`.
pub fn analyze(doc: Document) -> Result<Config, ValidationError> {
    let mut config = Config::default();
    let mut exprs = Vec::new();

    for decl in doc.decls {
        match decl {
            Decl::Constant { name, text } => {
                let ident = Ident::validate(name, IdentKind::Constant)?;
                let value = Literal::coerce(&text);

                trace!(%ident, ?value, "constant");
                config.constants.insert(ident, value);
            }

            Decl::Dictionary { name, items } => {
                let ident = Ident::validate(name, IdentKind::Dictionary)?;

                trace!(%ident, items = items.len(), "dictionary");
                config.dictionaries.insert(ident, coerce_items(items));
            }

            Decl::Value { text } => exprs.push(text),
        }
    }

    config.values = exprs
        .iter()
        .map(|text| ValueExpr::classify(text)?.eval(&config.constants))
        .collect::<Result<_, _>>()?;

    Ok(config)
}

fn coerce_items(items: Vec<Item>) -> Items {
    items
        .into_iter()
        .map(|Item { key, text }| (key, Literal::coerce(&text)))
        .collect()
}
