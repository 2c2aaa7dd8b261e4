//! Prompt storage layouts.
//!
//! Menus are compile-time data and come in three shapes: a slice of
//! string references, a slice of NUL-padded inline byte arrays, and a
//! single NUL-separated buffer. [`PromptSource`] gives all three the
//! same indexed view so the model and view stay layout-agnostic.

/// Indexed, read-only list of prompt strings.
pub trait PromptSource {
    fn len(&self) -> usize;

    /// Prompt at `index`, or `None` past the end.
    fn prompt(&self, index: usize) -> Option<&str>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PromptSource for [&str] {
    fn len(&self) -> usize {
        <[&str]>::len(self)
    }

    fn prompt(&self, index: usize) -> Option<&str> {
        self.get(index).copied()
    }
}

/// Inline prompts: each entry is `N` bytes, text followed by NUL padding.
impl<const N: usize> PromptSource for [[u8; N]] {
    fn len(&self) -> usize {
        <[[u8; N]]>::len(self)
    }

    fn prompt(&self, index: usize) -> Option<&str> {
        let entry = self.get(index)?;
        let end = entry.iter().position(|&b| b == 0).unwrap_or(N);
        core::str::from_utf8(&entry[..end]).ok()
    }
}

/// Build one inline prompt entry at compile time.
///
/// Panics (at compile time, in a `const`/`static`) if `text` does not fit.
pub const fn inline_prompt<const N: usize>(text: &str) -> [u8; N] {
    let bytes = text.as_bytes();
    assert!(bytes.len() <= N, "prompt longer than its inline slot");
    let mut out = [0u8; N];
    let mut i = 0;
    while i < bytes.len() {
        out[i] = bytes[i];
        i += 1;
    }
    out
}

/// All prompts in one buffer, separated by NUL characters. A trailing
/// NUL is optional.
#[derive(Clone, Copy, Debug)]
pub struct NulSeparated<'a> {
    buffer: &'a str,
}

impl<'a> NulSeparated<'a> {
    pub const fn new(buffer: &'a str) -> Self {
        Self { buffer }
    }

    fn body(&self) -> &'a str {
        self.buffer.strip_suffix('\0').unwrap_or(self.buffer)
    }
}

impl PromptSource for NulSeparated<'_> {
    fn len(&self) -> usize {
        let body = self.body();
        if body.is_empty() {
            0
        } else {
            body.split('\0').count()
        }
    }

    fn prompt(&self, index: usize) -> Option<&str> {
        let body = self.body();
        if body.is_empty() {
            return None;
        }
        body.split('\0').nth(index)
    }
}
