// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Message categories and their colored prefixes.

use std::fmt;

/// Category of a diagnostic message. Determines the colored prefix and,
/// for [`Track`](Category::Track), a timestamp operand after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `>>info   :` in cyan.
    Info,
    /// `>>warning:` in orange.
    Warning,
    /// `>>alert  :` in red.
    Alert,
    /// `>>track  :` in green, followed by a `YYYYMMDD HH:MM:SS` timestamp.
    Track,
    /// `>>debug  :` in yellow.
    Debug,
}

impl Category {
    /// Exact prefix bytes written before every message of this category.
    ///
    /// Labels are padded to seven columns so the colons align across
    /// categories. The color span covers the padded label only; the `>>`
    /// and `:` stay unstyled.
    pub const fn prefix(self) -> &'static str {
        match self {
            Category::Info => ">>\x1b[0;36minfo   \x1b[0m:",
            Category::Warning => ">>\x1b[38;5;208mwarning\x1b[0m:",
            Category::Alert => ">>\x1b[0;31malert  \x1b[0m:",
            Category::Track => ">>\x1b[0;32mtrack  \x1b[0m:",
            Category::Debug => ">>\x1b[0;33mdebug  \x1b[0m:",
        }
    }

    /// Plain label without color escapes.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Info => "info",
            Category::Warning => "warning",
            Category::Alert => "alert",
            Category::Track => "track",
            Category::Debug => "debug",
        }
    }

    /// Whether messages of this category carry a wall-clock timestamp.
    pub(crate) const fn stamped(self) -> bool {
        matches!(self, Category::Track)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
