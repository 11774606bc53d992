//! Single-line text editing over a fixed-capacity, zero-terminated byte buffer.
//!
//! The caller owns the storage. Each frame the focused text input hands its
//! [`TextInputState`] and the frame's [`KeyboardSample`] to
//! [`TextInputState::apply_keyboard`], which performs at most one edit and, on
//! frames without an edit, at most one cursor move.
//!
//! Invariants, checked on entry and re-established on every successful return:
//! `0 <= cursor <= len < capacity` and `buffer[len] == 0`. Bytes at or beyond
//! `capacity` are never touched. Cursor movement is byte-wise.

use std::ops::Range;

use thiserror::Error;

use crate::input::KeyboardSample;

/// A [`TextInputState`] that cannot be edited safely. Nothing was modified.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum TextStateError {
    #[error("text buffer has zero capacity")]
    ZeroCapacity,

    #[error("length {len} leaves no room for the terminator in capacity {capacity}")]
    LengthOutOfRange { len: usize, capacity: usize },

    #[error("cursor {cursor} is past length {len}")]
    CursorOutOfRange { cursor: usize, len: usize },
}

/// The edit applied in a frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Edit {
    Backspace,
    Delete,
    /// Number of bytes inserted.
    Insert(usize),
}

/// What [`TextInputState::apply_keyboard`] did.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EditOutcome {
    pub edit: Option<Edit>,
    /// Inserted text was refused as a whole (no room, or it contained a 0 byte).
    pub dropped: bool,
    /// The cursor moved without an edit.
    pub moved: bool,
}

impl EditOutcome {
    /// Buffer contents changed.
    #[inline]
    pub fn changed(&self) -> bool {
        self.edit.is_some()
    }
}

/// Externally owned editing state for one text input.
///
/// `B` is any byte storage: `[u8; N]`, `Box<[u8]>`, `Vec<u8>` or `&mut [u8]`.
/// Capacity is the storage length and includes the terminator, so at most
/// `capacity - 1` bytes of text fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputState<B = Box<[u8]>> {
    pub buffer: B,
    pub len: usize,
    pub cursor: usize,
}

impl TextInputState<Box<[u8]>> {
    /// Zeroed heap buffer of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self::from_buffer(vec![0u8; capacity].into_boxed_slice())
    }

    /// Heap buffer holding `text`, truncated to `capacity - 1` bytes.
    pub fn with_text(capacity: usize, text: &[u8]) -> Self {
        let mut state = Self::new(capacity);
        if let Err(e) = state.set_text(text) {
            log::debug!("text input initialised empty: {e}");
        }
        state
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> TextInputState<B> {
    /// Wraps storage as an empty input with the cursor at 0.
    pub fn from_buffer(mut buffer: B) -> Self {
        if let Some(first) = buffer.as_mut().first_mut() {
            *first = 0;
        }
        Self { buffer, len: 0, cursor: 0 }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().len()
    }

    /// The text bytes, `buffer[..len]`. Empty if `len` is out of range.
    pub fn text(&self) -> &[u8] {
        self.buffer.as_ref().get(..self.len).unwrap_or_default()
    }

    /// The text as UTF-8, if it is.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.text()).ok()
    }

    pub fn validate(&self) -> Result<(), TextStateError> {
        let capacity = self.capacity();
        if capacity == 0 {
            return Err(TextStateError::ZeroCapacity);
        }
        if self.len >= capacity {
            return Err(TextStateError::LengthOutOfRange { len: self.len, capacity });
        }
        if self.cursor > self.len {
            return Err(TextStateError::CursorOutOfRange { cursor: self.cursor, len: self.len });
        }
        Ok(())
    }

    /// Replaces the contents with `text`, stopping at the first 0 byte and at
    /// `capacity - 1` bytes. Cursor goes to the end. Returns the bytes kept.
    pub fn set_text(&mut self, text: &[u8]) -> Result<usize, TextStateError> {
        let capacity = self.capacity();
        if capacity == 0 {
            return Err(TextStateError::ZeroCapacity);
        }
        let end = text.iter().position(|&b| b == 0).unwrap_or(text.len());
        let n = end.min(capacity - 1);

        let buf = self.buffer.as_mut();
        buf[..n].copy_from_slice(&text[..n]);
        buf[n] = 0;
        self.len = n;
        self.cursor = n;
        Ok(n)
    }

    pub fn clear(&mut self) {
        if let Some(first) = self.buffer.as_mut().first_mut() {
            *first = 0;
        }
        self.len = 0;
        self.cursor = 0;
    }

    /// Applies one frame of keyboard input.
    ///
    /// Edits, highest priority first, at most one per frame: backspace (needs
    /// `cursor > 0`), delete (needs `cursor < len`), insert (needs room for
    /// all of `keys.text`). Only when no edit happened: one move, first of
    /// left, right, home, end.
    pub fn apply_keyboard(&mut self, keys: &KeyboardSample<'_>) -> Result<EditOutcome, TextStateError> {
        self.validate()?;

        let mut outcome = EditOutcome::default();
        let (len, cursor) = (self.len, self.cursor);
        let buf = self.buffer.as_mut();

        if keys.backspace && cursor > 0 {
            if shift_range(buf, cursor..len, cursor - 1) {
                self.cursor = cursor - 1;
                self.len = len - 1;
                outcome.edit = Some(Edit::Backspace);
            }
        } else if keys.delete && cursor < len {
            if shift_range(buf, cursor + 1..len, cursor) {
                self.len = len - 1;
                outcome.edit = Some(Edit::Delete);
            }
        } else if !keys.text.is_empty() {
            let n = keys.text.len();
            let room = buf.len() - 1 - len;
            if n > room || keys.text.contains(&0) {
                outcome.dropped = true;
            } else if shift_range(buf, cursor..len, cursor + n) {
                buf[cursor..cursor + n].copy_from_slice(keys.text);
                self.cursor = cursor + n;
                self.len = len + n;
                outcome.edit = Some(Edit::Insert(n));
            }
        }

        if outcome.edit.is_none() {
            outcome.moved = self.apply_move(keys);
        }

        let len = self.len;
        self.buffer.as_mut()[len] = 0;
        Ok(outcome)
    }

    fn apply_move(&mut self, keys: &KeyboardSample<'_>) -> bool {
        let target = if keys.left {
            self.cursor.checked_sub(1)
        } else if keys.right {
            (self.cursor < self.len).then(|| self.cursor + 1)
        } else if keys.home {
            Some(0)
        } else if keys.end {
            Some(self.len)
        } else {
            None
        };

        match target {
            Some(to) if to != self.cursor => {
                self.cursor = to;
                true
            }
            _ => false,
        }
    }
}

/// Moves `buf[src]` so it starts at `dst`, overlap-safe.
///
/// Refuses (returns `false`, buffer untouched) when the source or the
/// destination range falls outside `buf`.
pub(crate) fn shift_range(buf: &mut [u8], src: Range<usize>, dst: usize) -> bool {
    if src.start > src.end || src.end > buf.len() {
        return false;
    }
    match dst.checked_add(src.len()) {
        Some(dst_end) if dst_end <= buf.len() => {
            buf.copy_within(src, dst);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state(text: &[u8], cursor: usize, capacity: usize) -> TextInputState {
        let mut s = TextInputState::with_text(capacity, text);
        s.cursor = cursor;
        s
    }

    fn keys() -> KeyboardSample<'static> {
        KeyboardSample::default()
    }

    // ── splice ────────────────────────────────────────────────────────────

    #[test]
    fn insert_in_middle() {
        let mut s = state(b"Hi", 1, 16);
        let out = s.apply_keyboard(&KeyboardSample::text(b"e")).unwrap();
        assert_eq!(out.edit, Some(Edit::Insert(1)));
        assert_eq!(s.text(), b"Hei");
        assert_eq!(s.cursor, 2);
        assert_eq!(s.buffer[3], 0);
    }

    #[test]
    fn backspace_in_middle() {
        let mut s = state(b"Hei", 2, 16);
        s.apply_keyboard(&KeyboardSample { backspace: true, ..keys() }).unwrap();
        assert_eq!(s.text(), b"Hi");
        assert_eq!(s.cursor, 1);
        assert_eq!(s.buffer[2], 0);
    }

    #[test]
    fn delete_at_start() {
        let mut s = state(b"Hi", 0, 16);
        s.apply_keyboard(&KeyboardSample { delete: true, ..keys() }).unwrap();
        assert_eq!(s.text(), b"i");
        assert_eq!(s.cursor, 0);
        assert_eq!(s.buffer[1], 0);
    }

    #[test]
    fn multi_byte_insert_shifts_tail() {
        let mut s = state(b"ad", 1, 16);
        s.apply_keyboard(&KeyboardSample::text(b"bc")).unwrap();
        assert_eq!(s.as_str(), Some("abcd"));
        assert_eq!(s.cursor, 3);
    }

    #[test]
    fn backspace_at_start_falls_through_to_delete() {
        let mut s = state(b"ab", 0, 16);
        let out = s
            .apply_keyboard(&KeyboardSample { backspace: true, delete: true, ..keys() })
            .unwrap();
        assert_eq!(out.edit, Some(Edit::Delete));
        assert_eq!(s.text(), b"b");
    }

    // ── capacity ──────────────────────────────────────────────────────────

    #[test]
    fn insert_that_does_not_fit_is_dropped_whole() {
        // capacity 5 holds 4 text bytes; "abc" + "de" would need 5
        let mut s = state(b"abc", 3, 5);
        let out = s.apply_keyboard(&KeyboardSample::text(b"de")).unwrap();
        assert!(out.dropped && !out.changed());
        assert_eq!(s.text(), b"abc");
        assert_eq!(s.cursor, 3);
    }

    #[test]
    fn insert_filling_last_slot_fits() {
        let mut s = state(b"abc", 3, 5);
        s.apply_keyboard(&KeyboardSample::text(b"d")).unwrap();
        assert_eq!(s.text(), b"abcd");
        assert_eq!(s.buffer[4], 0);
    }

    #[test]
    fn insert_containing_terminator_is_dropped() {
        let mut s = state(b"ab", 2, 16);
        let out = s.apply_keyboard(&KeyboardSample::text(b"x\0y")).unwrap();
        assert!(out.dropped);
        assert_eq!(s.text(), b"ab");
    }

    #[test]
    fn with_text_truncates_to_capacity() {
        let s = TextInputState::with_text(4, b"hello");
        assert_eq!(s.text(), b"hel");
        assert_eq!(s.cursor, 3);
    }

    // ── mutual exclusion ──────────────────────────────────────────────────

    #[test]
    fn delete_and_text_apply_only_delete() {
        let mut s = state(b"abc", 1, 16);
        let out = s
            .apply_keyboard(&KeyboardSample { text: b"X", delete: true, ..keys() })
            .unwrap();
        assert_eq!(out.edit, Some(Edit::Delete));
        assert_eq!(s.text(), b"ac");
        assert_eq!(s.cursor, 1);
    }

    #[test]
    fn no_move_on_edit_frame() {
        let mut s = state(b"abc", 1, 16);
        let out = s
            .apply_keyboard(&KeyboardSample { text: b"X", left: true, end: true, ..keys() })
            .unwrap();
        assert!(out.changed() && !out.moved);
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn dropped_insert_still_allows_move() {
        let mut s = state(b"abc", 3, 4);
        let out = s
            .apply_keyboard(&KeyboardSample { text: b"X", home: true, ..keys() })
            .unwrap();
        assert!(out.dropped && out.moved);
        assert_eq!(s.cursor, 0);
    }

    // ── movement ──────────────────────────────────────────────────────────

    #[test]
    fn moves_are_clamped() {
        let mut s = state(b"ab", 0, 16);
        let out = s.apply_keyboard(&KeyboardSample { left: true, ..keys() }).unwrap();
        assert!(!out.moved);
        assert_eq!(s.cursor, 0);

        s.apply_keyboard(&KeyboardSample { end: true, ..keys() }).unwrap();
        assert_eq!(s.cursor, 2);
        let out = s.apply_keyboard(&KeyboardSample { right: true, ..keys() }).unwrap();
        assert!(!out.moved);
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn left_wins_over_later_moves() {
        let mut s = state(b"abc", 2, 16);
        s.apply_keyboard(&KeyboardSample { left: true, home: true, ..keys() }).unwrap();
        assert_eq!(s.cursor, 1);
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn zero_capacity_is_refused() {
        let mut s = TextInputState::new(0);
        assert_eq!(
            s.apply_keyboard(&KeyboardSample::text(b"a")),
            Err(TextStateError::ZeroCapacity)
        );
    }

    #[test]
    fn invalid_state_is_refused_untouched() {
        let mut s = state(b"abc", 1, 8);
        s.len = 8;
        let before = s.clone();
        let err = s.apply_keyboard(&KeyboardSample { backspace: true, ..keys() });
        assert_eq!(err, Err(TextStateError::LengthOutOfRange { len: 8, capacity: 8 }));
        assert_eq!(s, before);

        let mut s = state(b"abc", 4, 8);
        let before = s.clone();
        assert!(s.apply_keyboard(&KeyboardSample::text(b"x")).is_err());
        assert_eq!(s, before);
    }

    #[test]
    fn shift_range_refuses_out_of_bounds() {
        let mut buf = *b"abcd";
        assert!(!shift_range(&mut buf, 2..5, 0));
        assert!(!shift_range(&mut buf, 0..2, 3));
        assert!(!shift_range(&mut buf, 0..1, usize::MAX));
        assert_eq!(&buf, b"abcd");
        assert!(shift_range(&mut buf, 0..3, 1));
        assert_eq!(&buf, b"aabc");
    }

    #[test]
    fn borrowed_and_array_storage() {
        let mut storage = [0u8; 8];
        let mut s = TextInputState::from_buffer(&mut storage[..]);
        s.apply_keyboard(&KeyboardSample::text(b"ok")).unwrap();
        assert_eq!(s.text(), b"ok");

        let mut s = TextInputState::from_buffer([0u8; 4]);
        s.apply_keyboard(&KeyboardSample::text(b"abc")).unwrap();
        assert_eq!(s.buffer, *b"abc\0");
    }

    // ── invariant fuzz ────────────────────────────────────────────────────

    #[derive(Debug, Clone)]
    enum Op {
        Insert(Vec<u8>),
        Backspace,
        Delete,
        Left,
        Right,
        Home,
        End,
        /// Several edges in one frame.
        Mixed(Vec<u8>, bool, bool, bool),
    }

    fn op() -> impl Strategy<Value = Op> {
        let text = prop::collection::vec(1u8..=255, 0..6);
        prop_oneof![
            text.clone().prop_map(Op::Insert),
            Just(Op::Backspace),
            Just(Op::Delete),
            Just(Op::Left),
            Just(Op::Right),
            Just(Op::Home),
            Just(Op::End),
            (text, any::<bool>(), any::<bool>(), any::<bool>())
                .prop_map(|(t, b, d, l)| Op::Mixed(t, b, d, l)),
        ]
    }

    const CANARY: u8 = 0xA5;
    const SLACK: usize = 8;

    proptest! {
        #[test]
        fn invariants_hold_and_canary_survives(
            capacity in 1usize..24,
            ops in prop::collection::vec(op(), 0..64),
        ) {
            let mut backing = vec![CANARY; capacity + SLACK];
            {
                let mut s = TextInputState::from_buffer(&mut backing[..capacity]);
                for op in &ops {
                    let sample = match op {
                        Op::Insert(t) => KeyboardSample::text(t),
                        Op::Backspace => KeyboardSample { backspace: true, ..keys() },
                        Op::Delete => KeyboardSample { delete: true, ..keys() },
                        Op::Left => KeyboardSample { left: true, ..keys() },
                        Op::Right => KeyboardSample { right: true, ..keys() },
                        Op::Home => KeyboardSample { home: true, ..keys() },
                        Op::End => KeyboardSample { end: true, ..keys() },
                        Op::Mixed(t, b, d, l) => KeyboardSample {
                            text: t, backspace: *b, delete: *d, left: *l, ..keys()
                        },
                    };
                    let before_len = s.len;
                    let out = s.apply_keyboard(&sample).unwrap();

                    prop_assert!(s.cursor <= s.len);
                    prop_assert!(s.len < s.capacity());
                    prop_assert_eq!(s.buffer[s.len], 0);
                    prop_assert!(!(out.changed() && out.moved));
                    if out.dropped {
                        prop_assert_eq!(s.len, before_len);
                    }
                }
            }
            prop_assert!(backing[capacity..].iter().all(|&b| b == CANARY));
        }
    }
}
