//! Render-call-scoped output buffer with newline/indent bookkeeping.
//!
//! The buffer tracks the offset of the most recent newline so the writer
//! can align continuation lines of multi-operand composites under the
//! first operand's column. State lives for exactly one render call and is
//! passed by exclusive reference through the recursive walk.

/// Output buffer for a single render call.
#[derive(Debug, Default)]
pub struct RenderBuffer {
    text: String,
    last_newline: usize,
}

impl RenderBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk, updating the most-recent-newline offset. The
    /// offset points just past the newline, so the column math below
    /// counts only the visible characters on the current line.
    pub fn write(&mut self, s: &str) {
        if let Some(idx) = s.rfind('\n') {
            self.last_newline = self.text.len() + idx + 1;
        }
        self.text.push_str(s);
    }

    /// Append a newline.
    pub fn newline(&mut self) {
        self.write("\n");
    }

    /// The current column: distance from the most recent newline to the
    /// end of the buffer.
    pub fn current_indent(&self) -> usize {
        self.text.len() - self.last_newline
    }

    /// Append `indent` space characters.
    pub fn pad(&mut self, indent: usize) {
        for _ in 0..indent {
            self.text.push(' ');
        }
    }

    /// The rendered text so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the buffer, yielding the rendered text.
    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_is_length_before_any_newline() {
        let mut buf = RenderBuffer::new();
        buf.write("abc");
        assert_eq!(buf.current_indent(), 3);
    }

    #[test]
    fn indent_resets_after_newline() {
        let mut buf = RenderBuffer::new();
        buf.write("abc");
        buf.newline();
        buf.write("de");
        assert_eq!(buf.current_indent(), 2);
    }

    #[test]
    fn most_recent_newline_wins() {
        let mut buf = RenderBuffer::new();
        buf.write("a\nbb\nccc");
        assert_eq!(buf.current_indent(), 3);
    }

    #[test]
    fn pad_inserts_spaces() {
        let mut buf = RenderBuffer::new();
        buf.write("x");
        buf.newline();
        buf.pad(4);
        buf.write("y");
        assert_eq!(buf.as_str(), "x\n    y");
    }
}
