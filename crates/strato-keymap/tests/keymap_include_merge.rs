use std::collections::HashMap;
use std::io::{self, Read};

use strato_keymap::{load_keymap, KeymapSource, KeysymTable};

struct MemSource(HashMap<&'static str, &'static str>);

impl KeymapSource for MemSource {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read>> {
        match self.0.get(name) {
            Some(text) => Ok(Box::new(text.as_bytes())),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such keymap")),
        }
    }
}

fn source(keymaps: &[(&'static str, &'static str)]) -> MemSource {
    MemSource(keymaps.iter().copied().collect())
}

const TABLE: &[(&str, u32)] = &[("foo", 1), ("bar", 2), ("baz", 3)];

#[test]
fn included_keymap_merges_into_the_same_layout() {
    let table = KeysymTable::new(TABLE);
    let source = source(&[("main", "include other\nfoo 5\n"), ("other", "bar 6\n")]);

    let layout = load_keymap(&table, &source, "main").unwrap();
    assert_eq!(layout.keycode(1), 5);
    assert_eq!(layout.keycode(2), 6);
}

#[test]
fn includes_nest() {
    let table = KeysymTable::new(TABLE);
    let source = source(&[
        ("main", "include middle\nfoo 5\n"),
        ("middle", "include inner\nbar 6\n"),
        ("inner", "baz 7\n"),
    ]);

    let layout = load_keymap(&table, &source, "main").unwrap();
    assert_eq!(layout.keycode(1), 5);
    assert_eq!(layout.keycode(2), 6);
    assert_eq!(layout.keycode(3), 7);
}

#[test]
fn include_is_processed_inline_so_it_can_override() {
    let table = KeysymTable::new(TABLE);
    // "foo 5" comes before the include, so the included assignment wins.
    let source = source(&[("main", "foo 5\ninclude other\n"), ("other", "foo 9\n")]);

    let layout = load_keymap(&table, &source, "main").unwrap();
    assert_eq!(layout.keycode(1), 9);
}

#[test]
fn missing_include_is_skipped_and_parsing_continues() {
    let table = KeysymTable::new(TABLE);
    let source = source(&[("main", "include no-such\nfoo 5\n")]);

    let layout = load_keymap(&table, &source, "main").unwrap();
    assert_eq!(layout.keycode(1), 5);
}

#[test]
fn self_including_keymap_terminates() {
    let table = KeysymTable::new(TABLE);
    let source = source(&[("loop", "include loop\nfoo 5\n")]);

    let layout = load_keymap(&table, &source, "loop").unwrap();
    assert_eq!(layout.keycode(1), 5);
}
