/// Ordered `(name, keysym)` table supplied by the front-end.
///
/// Resolution is a linear scan in table order; the first matching name wins,
/// so duplicate names shadow later entries. `0` is the "no such keysym"
/// sentinel, which means a table cannot carry a genuine keysym of 0 — an
/// inherited restriction of the keymap format.
#[derive(Debug, Clone, Copy)]
pub struct KeysymTable<'a> {
    entries: &'a [(&'a str, u32)],
}

impl<'a> KeysymTable<'a> {
    pub fn new(entries: &'a [(&'a str, u32)]) -> Self {
        Self { entries }
    }

    /// The keysym registered for `name`, or 0 if the table has none.
    pub fn resolve(&self, name: &str) -> u32 {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|&(_, keysym)| keysym)
            .unwrap_or(0)
    }
}
