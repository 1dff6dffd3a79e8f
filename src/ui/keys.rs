//! Keyboard input as delivered by the host view.

/// A key the gallery reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// A key press together with the Shift modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: Key,
    pub shift: bool,
}

impl KeyChord {
    pub const fn plain(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub const fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}
