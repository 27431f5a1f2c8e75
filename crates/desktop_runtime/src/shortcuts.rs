//! Global keyboard shortcuts handled by the shell.

/// Modifier state and key name of a keyboard event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            alt: ev.alt_key(),
            shift: ev.shift_key(),
        }
    }
}

/// Ctrl+W or Cmd+W, either case, without Alt.
pub fn is_close_window_chord(chord: &KeyChord) -> bool {
    (chord.ctrl || chord.meta) && !chord.alt && chord.key.eq_ignore_ascii_case("w")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_or_cmd_w_closes_window() {
        assert!(is_close_window_chord(&KeyChord::new("w").ctrl()));
        assert!(is_close_window_chord(&KeyChord::new("w").meta()));
        assert!(is_close_window_chord(&KeyChord::new("W").ctrl().shift()));
    }

    #[test]
    fn other_chords_are_ignored() {
        assert!(!is_close_window_chord(&KeyChord::new("w")));
        assert!(!is_close_window_chord(&KeyChord::new("w").ctrl().alt()));
        assert!(!is_close_window_chord(&KeyChord::new("q").meta()));
        assert!(!is_close_window_chord(&KeyChord::new("Tab").ctrl()));
    }
}
