// XML configuration dialect translator
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

//! Translator from an XML declaration dialect into a textual
//!   configuration language.
//!
//! The source dialect declares constants, dictionaries, and values within
//!   a single root element,
//!     and permits two non-XML comment forms
//!     (`/+ … +/` and `\ …` to end of line):
//!
//! ```xml
//! <config>
//!   /+ Limits +/
//!   <constant name="x">10</constant>
//!   <dictionary name="myDict">
//!     <item key="a">100</item>
//!   </dictionary>
//!   <value>@[+ x 2 pow(2)]</value>
//! </config>
//! ```
//!
//! which translates into
//!
//! ```text
//! <# Limits #>
//! x is 10.0
//! { myDict = {
//!   a = 100.0,
//! }}
//! 144.0
//! ```
//!
//! The entry point is [`translate`];
//!   see [`pipeline`] for an overview of how translation proceeds.
//! The command-line wrapper is the `xcfgc` binary.

pub mod comment;
pub mod doc;
pub mod error;
pub mod expr;
pub mod ident;
pub mod num;
pub mod pipeline;
pub mod render;
pub mod sema;
pub mod tpwrap;

pub use error::{ParseError, TranslateError, ValidationError};
pub use pipeline::translate;
