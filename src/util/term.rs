// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Terminal background control.
//!
//! OSC 11 / OSC 111 escape sequences are used to paint the whole terminal
//! window in the theme background, and to hand it back afterwards. Terminals
//! that do not understand them ignore them.

use std::io::{self, Write};

fn write_bg<W: Write>(out: &mut W, hex_colour: &str) -> io::Result<()> {
    write!(out, "\x1b]11;{}\x07", hex_colour)?;
    out.flush()
}

fn write_bg_reset<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\x1b]111\x07")?;
    out.flush()
}

/// Sets the terminal background, e.g. to `"#1e1e1e"`.
pub(crate) fn set_terminal_bg(hex_colour: &str) -> io::Result<()> {
    write_bg(&mut io::stdout(), hex_colour)
}

/// Restores the user's own terminal background.
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    write_bg_reset(&mut io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_sequences() {
        let mut out = Vec::new();
        write_bg(&mut out, "#0b0614").expect("write");
        write_bg_reset(&mut out).expect("write");
        assert_eq!(out, b"\x1b]11;#0b0614\x07\x1b]111\x07");
    }
}
