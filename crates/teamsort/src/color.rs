//! CLI color helpers.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR` and TTY detection via
//! `owo-colors`' `if_supports_color()`. The `--no-color` flag sets an
//! in-process flag that bypasses owo-colors entirely.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

/// Global override: when true, forces color off (set by `--no-color` flag).
static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

/// Type-safe RGB color with compile-time hex-to-component conversion.
#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const BANNER: Rgb = Rgb::from_hex(0xD4A84F); // Team names
const MEADOW: Rgb = Rgb::from_hex(0x6B8F5E); // Success
const AMBER: Rgb = Rgb::from_hex(0xC49A5C); // Warning
const EMBER: Rgb = Rgb::from_hex(0xB87060); // Error
const SLATE: Rgb = Rgb::from_hex(0x5C6370); // Secondary info

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

/// Team names.
pub fn team(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.truecolor(BANNER.r, BANNER.g, BANNER.b).bold().to_string())
        .to_string()
}

/// Completed actions.
pub fn success(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.truecolor(MEADOW.r, MEADOW.g, MEADOW.b))
        .to_string()
}

/// Secondary info on stdout.
pub fn muted(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.truecolor(SLATE.r, SLATE.g, SLATE.b))
        .to_string()
}

/// Error styling for stderr messages.
pub fn error(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stderr, |t| t.truecolor(EMBER.r, EMBER.g, EMBER.b))
        .to_string()
}

/// Warning styling for stderr messages.
pub fn warning(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stderr, |t| t.truecolor(AMBER.r, AMBER.g, AMBER.b))
        .to_string()
}

/// Hint styling for secondary info on stderr.
pub fn hint(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stderr, |t| t.truecolor(SLATE.r, SLATE.g, SLATE.b))
        .to_string()
}
