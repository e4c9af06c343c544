// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

//! Terminal colors for log output.

use std::fmt::{Debug, Display};

pub const RESET: &str = "\x1b[0;0m";
pub const GREY: &str = "\x1b[0;90m";
pub const LAVENDER: &str = "\x1b[38;5;183;1m";

pub trait Color: Display {
    fn color(&self, color: &str) -> String {
        format!("{color}{self}{RESET}")
    }

    fn grey(&self) -> String {
        self.color(GREY)
    }

    fn lavender(&self) -> String {
        self.color(LAVENDER)
    }
}

impl<T: Display> Color for T {}

pub trait DebugColor: Debug {
    fn debug_color(&self, color: &str) -> String {
        format!("{color}{self:?}{RESET}")
    }

    fn debug_lavender(&self) -> String {
        self.debug_color(LAVENDER)
    }
}

impl<T: Debug> DebugColor for T {}
