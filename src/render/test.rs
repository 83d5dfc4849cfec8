// Tests for output rendering
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

use super::*;
use crate::{
    ident::{Ident, IdentKind},
    num::Literal,
    sema::Items,
};

fn name(name: &str) -> Ident {
    Ident::validate(name, IdentKind::Dictionary).unwrap()
}

fn items(pairs: &[(&str, Literal)]) -> Items {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

#[test]
fn empty_translation_renders_nothing() {
    assert_eq!(render(&Comments::default(), &Config::default()), "");
}

#[test]
fn renders_trimmed_comments_multi_line_first() {
    let comments = Comments {
        multi_line: vec!["  block\n ".into()],
        single_line: vec![" line".into()],
    };

    assert_eq!(
        render(&comments, &Config::default()),
        "<# block #>\n<# line #>\n",
    );
}

#[test]
fn renders_constants() {
    let mut config = Config::default();
    config.constants.insert(name("x"), Literal::Number(10.0));
    config.constants.insert(name("y"), Literal::Number(5.5));
    config.constants.insert(name("s"), Literal::Raw("on".into()));

    assert_eq!(
        render(&Comments::default(), &config),
        "x is 10.0\ny is 5.5\ns is on\n",
    );
}

#[test]
fn renders_dictionary_blocks() {
    let mut config = Config::default();
    config.dictionaries.insert(
        name("myDict"),
        items(&[("a", Literal::Number(100.0)), ("b", Literal::Number(200.0))]),
    );
    config.dictionaries.insert(name("empty"), Items::default());

    assert_eq!(
        render(&Comments::default(), &config),
        "{ myDict = {\n  a = 100.0,\n  b = 200.0,\n}}\n{ empty = {\n}}\n",
    );
}

#[test]
fn renders_sections_in_fixed_order() {
    let mut config = Config::default();
    config.values = vec![Literal::Number(12.0), Literal::Raw("as-is".into())];
    config
        .dictionaries
        .insert(name("d"), items(&[("k", Literal::Raw("v".into()))]));
    config.constants.insert(name("x"), Literal::Number(10.0));

    let comments = Comments {
        multi_line: vec![],
        single_line: vec!["note".into()],
    };

    assert_eq!(
        render(&comments, &config),
        "<# note #>\nx is 10.0\n{ d = {\n  k = v,\n}}\n12.0\nas-is\n",
    );
}
