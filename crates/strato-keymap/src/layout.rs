use crate::range_set::KeyRangeSet;

/// Keysyms below this value index straight into the direct table; anything at
/// or above it goes through the bounded overflow table.
pub const MAX_DIRECT_KEYSYM: u32 = 512;

/// Capacity of the overflow table.
pub const MAX_EXTRA_ENTRIES: usize = 256;

/// One overflow assignment, for a keysym the direct table cannot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraEntry {
    pub keysym: u32,
    pub keycode: u16,
}

/// A parsed keyboard layout: the keysym→keycode tables plus the compressed
/// keypad/numlock ranges.
///
/// Built once by [`crate::load_keymap`] — recursive includes merge into the
/// same instance — and read-only afterwards. The queries take `&self`, never
/// allocate, and are safe to call from any thread once construction is done.
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    direct: [u16; MAX_DIRECT_KEYSYM as usize],
    extras: Vec<ExtraEntry>,
    keypad_keycodes: KeyRangeSet,
    numlock_keysyms: KeyRangeSet,
}

impl KeyboardLayout {
    pub(crate) fn new() -> Self {
        Self {
            direct: [0; MAX_DIRECT_KEYSYM as usize],
            extras: Vec::new(),
            keypad_keycodes: KeyRangeSet::new(),
            numlock_keysyms: KeyRangeSet::new(),
        }
    }

    /// Stores `keysym -> keycode`. Direct-table assignments overwrite any
    /// earlier one (last write wins); overflow assignments append in
    /// first-seen order. Returns false when the overflow table is full and
    /// the assignment was dropped.
    pub(crate) fn assign(&mut self, keysym: u32, keycode: u16) -> bool {
        if keysym < MAX_DIRECT_KEYSYM {
            self.direct[keysym as usize] = keycode;
            return true;
        }
        if self.extras.len() >= MAX_EXTRA_ENTRIES {
            return false;
        }
        self.extras.push(ExtraEntry { keysym, keycode });
        true
    }

    /// Flags `keycode` as a numlock-sensitive keypad key and `keysym` as its
    /// numlock-tracked counterpart.
    pub(crate) fn link_numlock(&mut self, keysym: u32, keycode: u16) {
        self.keypad_keycodes.insert(u32::from(keycode));
        self.numlock_keysyms.insert(keysym);
    }

    /// The keycode the layout assigns to `keysym`, or 0 for none.
    ///
    /// Overflow lookups return the first assignment for a keysym; direct
    /// lookups reflect the last.
    pub fn keycode(&self, keysym: u32) -> u16 {
        if keysym < MAX_DIRECT_KEYSYM {
            return self.direct[keysym as usize];
        }
        self.extras
            .iter()
            .find(|entry| entry.keysym == keysym)
            .map(|entry| entry.keycode)
            .unwrap_or(0)
    }

    /// Overflow assignments, in the order the keymap supplied them.
    pub fn extras(&self) -> &[ExtraEntry] {
        &self.extras
    }

    /// True if the layout flagged `keycode` as a numlock-sensitive keypad key.
    pub fn is_keypad_keycode(&self, keycode: u16) -> bool {
        self.keypad_keycodes.contains(u32::from(keycode))
    }

    /// True if `keysym` is the keypad counterpart of a numlock-tracked key.
    pub fn is_numlock_keysym(&self, keysym: u32) -> bool {
        self.numlock_keysyms.contains(keysym)
    }
}
