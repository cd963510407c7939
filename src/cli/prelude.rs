// SPDX-FileCopyrightText: (C) 2024 Jason Ish <jason@codemonkey.net>
// SPDX-License-Identifier: MIT

#![allow(unused_imports)]

pub(crate) use clap::builder::BoolishValueParser;
pub(crate) use clap::{ArgAction, CommandFactory, Parser};
