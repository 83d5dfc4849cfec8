// Structural parsing of declaration documents
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

//! Structural parser.
//!
//! This parses comment-stripped text (see [`crate::comment`]) into a
//!   [`Document`] of [`Decl`]s using [`quick_xml`].
//!
//! A document has exactly one root element of any name.
//! The root's children are declarations:
//!
//! ```xml
//! <config>
//!   <constant name="x">10</constant>
//!   <dictionary name="d">
//!     <item key="a">1</item>
//!   </dictionary>
//!   <value>@[+ x 2]</value>
//! </config>
//! ```
//!
//! Children of the root with any other name are skipped,
//!   as are children of a `dictionary` other than `item`.
//! Names are _not_ validated here;
//!   that is the job of [semantic analysis](crate::sema).
//!
//! The text of a declaration is its direct character data
//!   (text and CDATA, with entities unescaped),
//!   trimmed of surrounding whitespace;
//!     text belonging to nested elements is discarded.

use crate::error::ParseError;
use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::Reader as XmlReader;
use std::borrow::Cow;
use tracing::{trace, warn};

/// A parsed declaration document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Document {
    /// Declarations in document order.
    pub decls: Vec<Decl>,
}

/// A declaration within the root element.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    /// `<constant name="…">TEXT</constant>`
    Constant { name: String, text: String },

    /// `<dictionary name="…"><item key="…">TEXT</item>…</dictionary>`
    Dictionary { name: String, items: Vec<Item> },

    /// `<value>TEXT</value>`
    Value { text: String },
}

/// An `item` of a [`Decl::Dictionary`].
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub key: String,
    pub text: String,
}

/// Parse comment-stripped source text into a [`Document`].
pub fn parse(src: &str) -> Result<Document, ParseError> {
    DocParser::new(src).parse()
}

/// Recursive-descent parser over [`XmlEvent`]s.
struct DocParser<'a> {
    reader: XmlReader<&'a [u8]>,
}

impl<'a> DocParser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            reader: XmlReader::from_str(src),
        }
    }

    fn parse(mut self) -> Result<Document, ParseError> {
        let mut doc = Document::default();
        let mut seen_root = false;

        loop {
            let pos = self.pos();

            match self.next()? {
                XmlEvent::Start(ele) if !seen_root => {
                    seen_root = true;
                    self.parse_root(&ele, &mut doc)?;
                }

                XmlEvent::Empty(_) if !seen_root => seen_root = true,

                XmlEvent::Start(_) | XmlEvent::Empty(_) | XmlEvent::CData(_) => {
                    return Err(ParseError::JunkOutsideRoot(pos))
                }

                XmlEvent::Text(text) if !is_blank(&text) => {
                    return Err(ParseError::JunkOutsideRoot(pos))
                }

                XmlEvent::Eof => break,

                // Declarations, processing instructions, XML comments,
                //   doctypes, and whitespace.
                _ => (),
            }
        }

        if seen_root {
            Ok(doc)
        } else {
            Err(ParseError::NoRoot)
        }
    }

    /// Parse the children of the root element through its closing tag.
    fn parse_root(
        &mut self,
        root: &BytesStart<'a>,
        doc: &mut Document,
    ) -> Result<(), ParseError> {
        loop {
            match self.next()? {
                XmlEvent::Start(ele) => {
                    doc.decls.extend(self.parse_decl(&ele, false)?)
                }
                XmlEvent::Empty(ele) => {
                    doc.decls.extend(self.parse_decl(&ele, true)?)
                }
                XmlEvent::End(_) => return Ok(()),
                XmlEvent::Eof => {
                    return Err(ParseError::UnclosedElement(ele_name(
                        root.name().as_ref(),
                    )))
                }
                _ => (),
            }
        }
    }

    /// Parse a single child of the root.
    ///
    /// An `empty` element is self-closing and has no content to read.
    fn parse_decl(
        &mut self,
        ele: &BytesStart<'a>,
        empty: bool,
    ) -> Result<Option<Decl>, ParseError> {
        let pos = self.pos();

        let decl = match ele.name().as_ref() {
            b"constant" => Decl::Constant {
                name: attr(ele, "constant", "name", pos)?,
                text: self.read_text(ele, empty)?,
            },

            b"dictionary" => Decl::Dictionary {
                name: attr(ele, "dictionary", "name", pos)?,
                items: if empty { vec![] } else { self.read_items(ele)? },
            },

            b"value" => Decl::Value {
                text: self.read_text(ele, empty)?,
            },

            other => {
                warn!(element = %ele_name(other), "ignoring unknown element");
                self.read_text(ele, empty)?;

                return Ok(None);
            }
        };

        trace!(?decl, "parsed declaration");

        Ok(Some(decl))
    }

    /// Read `item`s through the closing tag of the dictionary `ele`.
    fn read_items(
        &mut self,
        ele: &BytesStart<'a>,
    ) -> Result<Vec<Item>, ParseError> {
        let mut items = Vec::new();

        loop {
            let pos = self.pos();

            match self.next()? {
                XmlEvent::Start(child) if child.name().as_ref() == b"item" => {
                    items.push(Item {
                        key: attr(&child, "item", "key", pos)?,
                        text: self.read_text(&child, false)?,
                    })
                }

                XmlEvent::Empty(child) if child.name().as_ref() == b"item" => {
                    items.push(Item {
                        key: attr(&child, "item", "key", pos)?,
                        text: String::new(),
                    })
                }

                XmlEvent::Start(child) => {
                    warn!(
                        element = %ele_name(child.name().as_ref()),
                        "ignoring non-item element in dictionary"
                    );
                    self.read_text(&child, false)?;
                }

                XmlEvent::End(_) => return Ok(items),

                XmlEvent::Eof => {
                    return Err(ParseError::UnclosedElement(ele_name(
                        ele.name().as_ref(),
                    )))
                }

                _ => (),
            }
        }
    }

    /// Read the direct character data of `ele` through its closing tag.
    ///
    /// Nested elements are consumed but their text is discarded.
    fn read_text(
        &mut self,
        ele: &BytesStart<'a>,
        empty: bool,
    ) -> Result<String, ParseError> {
        let mut text = String::new();
        let mut depth = 0usize;

        if empty {
            return Ok(text);
        }

        loop {
            let pos = self.pos();

            match self.next()? {
                XmlEvent::Text(t) if depth == 0 => text.push_str(
                    &t.unescape().map_err(|e| ParseError::Xml {
                        pos,
                        err: quick_xml::Error::from(e).into(),
                    })?,
                ),

                XmlEvent::CData(c) if depth == 0 => {
                    text.push_str(&String::from_utf8_lossy(&c))
                }

                XmlEvent::Start(_) => depth += 1,
                XmlEvent::End(_) if depth == 0 => break,
                XmlEvent::End(_) => depth -= 1,

                XmlEvent::Eof => {
                    return Err(ParseError::UnclosedElement(ele_name(
                        ele.name().as_ref(),
                    )))
                }

                _ => (),
            }
        }

        Ok(text.trim().to_string())
    }

    fn next(&mut self) -> Result<XmlEvent<'a>, ParseError> {
        let pos = self.pos();

        self.reader.read_event().map_err(|e| ParseError::Xml {
            pos,
            err: e.into(),
        })
    }

    #[allow(clippy::unnecessary_cast)]
    fn pos(&self) -> u64 {
        self.reader.buffer_position() as u64
    }
}

/// Retrieve the unescaped value of the required attribute `name`.
fn attr(
    ele: &BytesStart,
    element: &'static str,
    name: &'static str,
    pos: u64,
) -> Result<String, ParseError> {
    let xml_err = |err| ParseError::Xml { pos, err };

    match ele.try_get_attribute(name) {
        Ok(Some(attr)) => attr
            .unescape_value()
            .map(Cow::into_owned)
            .map_err(|e| xml_err(quick_xml::Error::from(e).into())),
        Ok(None) => Err(ParseError::MissingAttr {
            element,
            attr: name,
        }),
        Err(e) => Err(xml_err(e.into())),
    }
}

fn ele_name(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}
