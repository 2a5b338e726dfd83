//! Note buffer for a finished phase.

/// Upper bound on note size in bytes.
pub const MAX_NOTE_BYTES: usize = 4096;

/// Free text attached to a finished phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    text: String,
}

impl Note {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a character. Input past [`MAX_NOTE_BYTES`] is dropped.
    pub fn push(&mut self, c: char) {
        if self.text.len() + c.len_utf8() <= MAX_NOTE_BYTES {
            self.text.push(c);
        }
    }

    /// Removes the last character. No-op on an empty note.
    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop() {
        let mut note = Note::new();
        for c in "hi there".chars() {
            note.push(c);
        }
        assert_eq!(note.as_str(), "hi there");

        note.pop();
        note.pop();
        assert_eq!(note.as_str(), "hi the");
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut note = Note::new();
        note.pop();
        note.pop();
        assert_eq!(note.as_str(), "");
    }

    #[test]
    fn pop_removes_whole_multibyte_char() {
        let mut note = Note::new();
        note.push('a');
        note.push('é');
        note.pop();
        assert_eq!(note.as_str(), "a");
    }

    #[test]
    fn stops_growing_at_bound() {
        let mut note = Note::new();
        for _ in 0..MAX_NOTE_BYTES + 10 {
            note.push('x');
        }
        assert_eq!(note.as_str().len(), MAX_NOTE_BYTES);

        // A multi-byte char that would straddle the bound is dropped too.
        note.pop();
        note.push('é');
        assert_eq!(note.as_str().len(), MAX_NOTE_BYTES - 1);
    }
}
