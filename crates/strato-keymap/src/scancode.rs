//! Static keysym→keycode translation for the hot input path.
//!
//! The front-end produces a restricted keysym space (ASCII letters/digits,
//! common punctuation, the X11 cursor/modifier/function bands); this maps it
//! straight to guest key codes without consulting any loaded keymap. Pure and
//! total: every `u32` translates, with 0 meaning "no key for this keysym".

use strato_input_codes as keys;

// XK_Home..XK_Begin.
const CURSOR_KEYS: [u16; 9] = [
    keys::KEY_HOME,
    keys::KEY_LEFT,
    keys::KEY_UP,
    keys::KEY_RIGHT,
    keys::KEY_DOWN,
    keys::KEY_SOFT1,
    keys::KEY_SOFT2,
    keys::KEY_END,
    0,
];

// XK_Shift_L..XK_Hyper_R. The handset has no control keys; the control pair
// lands on the compose position, and shift-lock doubles up on left shift.
// Super and hyper stay unmapped.
const MODIFIER_KEYS: [u16; 14] = [
    keys::KEY_LEFTSHIFT,
    keys::KEY_RIGHTSHIFT,
    keys::KEY_COMPOSE,
    keys::KEY_COMPOSE,
    keys::KEY_CAPSLOCK,
    keys::KEY_LEFTSHIFT,
    keys::KEY_LEFTMETA,
    keys::KEY_RIGHTMETA,
    keys::KEY_LEFTALT,
    keys::KEY_RIGHTALT,
    0,
    0,
    0,
    0,
];

const LETTER_KEYS: [u16; 26] = [
    keys::KEY_A,
    keys::KEY_B,
    keys::KEY_C,
    keys::KEY_D,
    keys::KEY_E,
    keys::KEY_F,
    keys::KEY_G,
    keys::KEY_H,
    keys::KEY_I,
    keys::KEY_J,
    keys::KEY_K,
    keys::KEY_L,
    keys::KEY_M,
    keys::KEY_N,
    keys::KEY_O,
    keys::KEY_P,
    keys::KEY_Q,
    keys::KEY_R,
    keys::KEY_S,
    keys::KEY_T,
    keys::KEY_U,
    keys::KEY_V,
    keys::KEY_W,
    keys::KEY_X,
    keys::KEY_Y,
    keys::KEY_Z,
];

// XK_F1..XK_F24.
const FUNCTION_KEYS: [u16; 24] = [
    keys::KEY_F1,
    keys::KEY_F2,
    keys::KEY_F3,
    keys::KEY_F4,
    keys::KEY_F5,
    keys::KEY_F6,
    keys::KEY_F7,
    keys::KEY_F8,
    keys::KEY_F9,
    keys::KEY_F10,
    keys::KEY_F11,
    keys::KEY_F12,
    keys::KEY_F13,
    keys::KEY_F14,
    keys::KEY_F15,
    keys::KEY_F16,
    keys::KEY_F17,
    keys::KEY_F18,
    keys::KEY_F19,
    keys::KEY_F20,
    keys::KEY_F21,
    keys::KEY_F22,
    keys::KEY_F23,
    keys::KEY_F24,
];

// XK_BackSpace..XK_Return.
const EDIT_KEYS: [u16; 6] = [
    keys::KEY_BACKSPACE,
    keys::KEY_TAB,
    keys::KEY_LINEFEED,
    keys::KEY_CLEAR,
    0,
    keys::KEY_ENTER,
];

// XK_Pause..XK_Sys_Req.
const FREEZE_KEYS: [u16; 3] = [keys::KEY_PAUSE, keys::KEY_SCROLLLOCK, keys::KEY_SYSRQ];

/// Translates a keysym to the guest key code, or 0 for unmapped.
///
/// Stateless and allocation-free; repeated calls with the same keysym always
/// return the same code. Independent of any [`crate::KeyboardLayout`].
pub fn keysym_to_keycode(keysym: u32) -> u16 {
    match keysym {
        // '1'..'9' land on KEY_1..KEY_9; '0' wraps to KEY_0 at the end of
        // the digit row.
        0x0030..=0x0039 => keys::KEY_1 + (((keysym & 0xF) + 9) % 10) as u16,
        0xFF50..=0xFF58 => CURSOR_KEYS[(keysym - 0xFF50) as usize],
        0xFFE1..=0xFFEE => MODIFIER_KEYS[(keysym - 0xFFE1) as usize],
        // Upper and lower case hit the same key.
        0x0041..=0x005A | 0x0061..=0x007A => LETTER_KEYS[((keysym & 0x5F) - 0x41) as usize],
        0xFFBE..=0xFFD5 => FUNCTION_KEYS[(keysym - 0xFFBE) as usize],
        0xFF08..=0xFF0D => EDIT_KEYS[(keysym - 0xFF08) as usize],
        0xFF13..=0xFF15 => FREEZE_KEYS[(keysym - 0xFF13) as usize],
        other => misc_keycode(other),
    }
}

/// Single keysyms outside the bands. Shifted and unshifted pairs deliver the
/// same handset key.
fn misc_keycode(keysym: u32) -> u16 {
    match keysym {
        0x0003 => keys::KEY_CENTER,
        0x0020 => keys::KEY_SPACE,
        0x0023 | 0x0033 => keys::KEY_SHARP,
        0x002A => keys::KEY_STAR,
        0x002C | 0x003C => keys::KEY_COMMA,
        0x002E | 0x003E => keys::KEY_DOT,
        0x002F | 0x003F => keys::KEY_SLASH,
        0x0032 | 0x0040 => keys::KEY_EMAIL,
        // Escape backs out on the handset.
        0xFF1B => keys::KEY_BACK,
        // Keypad plus/minus drive the volume rocker.
        0xFFAB => keys::KEY_VOLUMEUP,
        0xFFAD => keys::KEY_VOLUMEDOWN,
        0xFFFF => keys::KEY_DELETE,
        _ => 0,
    }
}
