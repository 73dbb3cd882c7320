use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;

use crate::error::{KeymapError, Result};
use crate::keysyms::KeysymTable;
use crate::layout::KeyboardLayout;

/// Resolves a logical keymap name to its text.
///
/// The engine does not know where keymaps live; the host side supplies the
/// lookup. `open` returns the keymap's byte stream, or an error with kind
/// [`io::ErrorKind::NotFound`] when the name does not resolve.
pub trait KeymapSource {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read>>;
}

/// Looks up keymaps as files in a directory, by logical name.
#[derive(Debug, Clone)]
pub struct DirKeymapSource {
    root: PathBuf,
}

impl DirKeymapSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl KeymapSource for DirKeymapSource {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read>> {
        let file = File::open(self.root.join(name))?;
        Ok(Box::new(file))
    }
}

/// Includes nested deeper than this are skipped, so a keymap that includes
/// itself terminates instead of recursing forever.
const MAX_INCLUDE_DEPTH: usize = 16;

/// Builds a [`KeyboardLayout`] from the named keymap.
///
/// Keymaps are line oriented: `#` starts a comment, `map <...>` is a header
/// with no semantic effect, `include <name>` merges another keymap into the
/// same layout at the point it appears, and every other line is a
/// `<keysym-name> <keycode> [flags...]` assignment. The keycode is a decimal
/// or `0x` hex literal; a `numlock` token anywhere after it links the line's
/// keycode and keysym into the keypad/numlock ranges. Later assignments for
/// the same keysym overwrite earlier ones, in file-then-include order.
///
/// Per-line problems are logged and skipped; a missing *included* keymap is
/// skipped too, and only failing to open `name` itself is an error.
pub fn load_keymap(
    table: &KeysymTable<'_>,
    source: &dyn KeymapSource,
    name: &str,
) -> Result<KeyboardLayout> {
    let mut layout = KeyboardLayout::new();
    parse_into(table, source, name, &mut layout, 0)?;
    Ok(layout)
}

fn parse_into(
    table: &KeysymTable<'_>,
    source: &dyn KeymapSource,
    name: &str,
    layout: &mut KeyboardLayout,
    depth: usize,
) -> Result<()> {
    let stream = source.open(name).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            KeymapError::NotFound(name.to_string())
        } else {
            KeymapError::Io {
                name: name.to_string(),
                source: err,
            }
        }
    })?;

    for line in BufReader::new(stream).lines() {
        let line = line.map_err(|err| KeymapError::Io {
            name: name.to_string(),
            source: err,
        })?;

        if line.starts_with('#') {
            continue;
        }
        if line.starts_with("map ") {
            continue;
        }
        if let Some(included) = line.strip_prefix("include ") {
            if depth >= MAX_INCLUDE_DEPTH {
                tracing::warn!(keymap = included, "include nesting too deep, skipping");
                continue;
            }
            // A failed include is skipped; the outer keymap keeps parsing.
            if let Err(err) = parse_into(table, source, included, layout, depth + 1) {
                tracing::warn!(keymap = included, error = %err, "skipping unreadable include");
            }
            continue;
        }

        let Some((keysym_name, rest)) = line.split_once(' ') else {
            // No keycode field; nothing to assign.
            continue;
        };
        let keysym = table.resolve(keysym_name);
        if keysym == 0 {
            tracing::debug!(name = keysym_name, "unknown keysym name in keymap");
            continue;
        }
        let keycode = parse_keycode(rest);

        if rest.contains("numlock") {
            layout.link_numlock(keysym, keycode);
        }
        if !layout.assign(keysym, keycode) {
            tracing::warn!(
                name = keysym_name,
                keysym,
                "overflow table full, dropping assignment"
            );
        }
    }
    Ok(())
}

/// Parses the leading integer literal of `s`: optional sign, decimal or
/// `0x`/`0X` hex, longest valid prefix, anything after it ignored. No digits
/// at all parses as 0. The value is truncated to the guest's 16-bit
/// event-code width.
fn parse_keycode(s: &str) -> u16 {
    let s = s.trim_start();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(rest) => (rest, 16),
        None => (s, 10),
    };

    let mut value: i64 = 0;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(d));
    }
    if negative {
        value = -value;
    }
    value as u16
}
