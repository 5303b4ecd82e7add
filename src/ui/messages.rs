//! Status lines for the mutating commands.
//!
//! Colour is only applied when the target stream is a terminal, so piped
//! output stays free of escape codes.

use ansi_term::{Colour, Style};
use std::fmt;
use std::io::{self, IsTerminal};

/// Paint `text` with `style` when `tty` is set, plain otherwise.
pub fn paint<T: fmt::Display>(style: Style, text: T, tty: bool) -> String {
    if tty {
        style.paint(text.to_string()).to_string()
    } else {
        text.to_string()
    }
}

fn line<T: fmt::Display>(colour: Colour, icon: &str, msg: T, tty: bool) -> String {
    format!("{} {}", paint(colour.bold(), icon, tty), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Blue, "ℹ️", msg, io::stdout().is_terminal()));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Green, "✅", msg, io::stdout().is_terminal()));
}

/// Warnings go to stderr so they never mix with report/count/time output.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Colour::Yellow, "⚠️", msg, io::stderr().is_terminal()));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Colour::Red, "❌", msg, io::stderr().is_terminal()));
}
