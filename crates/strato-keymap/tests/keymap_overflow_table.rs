use std::collections::HashMap;
use std::io::{self, Cursor, Read};

use strato_keymap::{load_keymap, KeymapSource, KeysymTable, MAX_DIRECT_KEYSYM, MAX_EXTRA_ENTRIES};

struct OwnedSource(HashMap<String, String>);

impl KeymapSource for OwnedSource {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read>> {
        match self.0.get(name) {
            Some(text) => Ok(Box::new(Cursor::new(text.clone().into_bytes()))),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such keymap")),
        }
    }
}

#[test]
fn overflow_table_keeps_first_entries_and_drops_the_rest() {
    // One more extra-range keysym than the overflow table can hold.
    let count = MAX_EXTRA_ENTRIES + 1;
    let names: Vec<String> = (0..count).map(|i| format!("sym{i}")).collect();
    let entries: Vec<(&str, u32)> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), MAX_DIRECT_KEYSYM + i as u32))
        .collect();
    let table = KeysymTable::new(&entries);

    let text: String = names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{name} {}\n", 100 + i))
        .collect();
    let source = OwnedSource(HashMap::from([("extras".to_string(), text)]));

    let layout = load_keymap(&table, &source, "extras").unwrap();

    // Exactly the capacity is retained, in first-seen order.
    assert_eq!(layout.extras().len(), MAX_EXTRA_ENTRIES);
    assert_eq!(layout.extras()[0].keysym, MAX_DIRECT_KEYSYM);
    assert_eq!(layout.extras()[0].keycode, 100);
    let last = layout.extras()[MAX_EXTRA_ENTRIES - 1];
    assert_eq!(last.keysym, MAX_DIRECT_KEYSYM + MAX_EXTRA_ENTRIES as u32 - 1);
    assert_eq!(last.keycode, 100 + MAX_EXTRA_ENTRIES as u16 - 1);

    // The one past capacity was dropped, non-fatally.
    assert_eq!(layout.keycode(MAX_DIRECT_KEYSYM + MAX_EXTRA_ENTRIES as u32), 0);
}

#[test]
fn extra_range_keysyms_resolve_through_the_overflow_table() {
    let entries = [("big", 0x1000u32)];
    let table = KeysymTable::new(&entries);
    let source = OwnedSource(HashMap::from([(
        "one".to_string(),
        "big 42\n".to_string(),
    )]));

    let layout = load_keymap(&table, &source, "one").unwrap();
    assert_eq!(layout.extras().len(), 1);
    assert_eq!(layout.keycode(0x1000), 42);
}
