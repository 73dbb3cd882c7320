#![forbid(unsafe_code)]

//! Keysym to keycode translation for guest input injection.
//!
//! The front-end reports a keypress as an X11-style keysym; the guest input
//! layer wants a Linux evdev code. Two paths cover this:
//!
//! - [`keysym_to_keycode`]: static band-table translation over the restricted
//!   keysym space the front-end actually produces. Pure, allocation-free,
//!   needs no loaded keymap; this is the hot runtime path.
//! - [`load_keymap`]: parses a keymap file (with recursive includes) into a
//!   [`KeyboardLayout`] holding the full keysym→keycode tables plus the
//!   compressed keypad/numlock ranges the injection path queries through
//!   [`KeyboardLayout::is_keypad_keycode`] and
//!   [`KeyboardLayout::is_numlock_keysym`].
//!
//! Layouts are build-then-freeze: [`load_keymap`] constructs the layout to
//! completion (including every `include`), after which nothing mutates it, so
//! post-construction reads need no synchronization.

mod error;
mod keysyms;
mod layout;
mod parse;
mod range_set;
mod scancode;

pub use error::{KeymapError, Result};
pub use keysyms::KeysymTable;
pub use layout::{ExtraEntry, KeyboardLayout, MAX_DIRECT_KEYSYM, MAX_EXTRA_ENTRIES};
pub use parse::{load_keymap, DirKeymapSource, KeymapSource};
pub use range_set::{KeyRange, KeyRangeSet};
pub use scancode::keysym_to_keycode;
