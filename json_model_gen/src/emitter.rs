//! Line buffer that tracks an indentation level.
//!
//! Each line records the level it was pushed at; spaces are only produced in
//! [`Emitter::render`]. That lets a fully formed block be built in one emitter
//! and [`absorb`](Emitter::absorb)ed into another without re-indenting it.

use std::fmt;

use crate::settings::DEFAULT_INDENT_WIDTH;

/// A buffered line: its indentation level and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    level: usize,
    text: String,
}

/// Accumulates lines of text at a current indentation level.
#[derive(Debug, Clone)]
pub struct Emitter {
    lines: Vec<Line>,
    level: usize,
    indent_width: usize,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// Empty emitter at level 0 with the default indentation width.
    #[must_use]
    pub fn new() -> Self {
        Self::with_indent_width(DEFAULT_INDENT_WIDTH)
    }

    /// Empty emitter at level 0 rendering `indent_width` spaces per level.
    #[must_use]
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self {
            lines: Vec::new(),
            level: 0,
            indent_width,
        }
    }

    /// Empty emitter whose lines start at `level`, for blocks that will be
    /// absorbed into a parent block at that depth.
    #[must_use]
    pub fn nested(level: usize) -> Self {
        Self {
            level,
            ..Self::new()
        }
    }

    /// Current indentation level.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Append a line at the current level. `text` must not contain a newline.
    pub fn push_line(&mut self, text: impl Into<String>) -> &mut Self {
        let text: String = text.into();
        debug_assert!(
            !text.contains(['\n', '\r']),
            "Emitter::push_line given a line break: {text:?}"
        );
        self.lines.push(Line {
            level: self.level,
            text,
        });
        self
    }

    /// Append an empty line. It renders without indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.lines.push(Line {
            level: 0,
            text: String::new(),
        });
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Decrease the level by one.
    ///
    /// # Panics
    ///
    /// Panics when the level is already 0. Block opens and closes are always
    /// paired by the renderer, so an underflow is a logic error.
    pub fn dedent(&mut self) -> &mut Self {
        assert!(
            self.level > 0,
            "Emitter::dedent called at indentation level 0"
        );
        self.level -= 1;
        self
    }

    /// Push `header` and indent the lines that follow.
    pub fn open_block(&mut self, header: impl Into<String>) -> &mut Self {
        self.push_line(header).indent()
    }

    /// Dedent and push `footer`.
    ///
    /// # Panics
    ///
    /// Panics when no block is open (see [`Emitter::dedent`]).
    pub fn close_block(&mut self, footer: impl Into<String>) -> &mut Self {
        self.dedent().push_line(footer)
    }

    /// Append every line of `other` at the level it was recorded at.
    /// The current level of `self` is unchanged.
    pub fn absorb(&mut self, other: &Emitter) -> &mut Self {
        self.lines.extend(other.lines.iter().cloned());
        self
    }

    /// Flatten the buffer into text, one `\n`-terminated line per entry.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            if line.text.is_empty() {
                writeln!(f)?;
            } else {
                let width: usize = line.level * self.indent_width;
                writeln!(f, "{:width$}{}", "", line.text)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_line_uses_current_level() {
        let mut emitter: Emitter = Emitter::new();
        emitter
            .push_line("a")
            .indent()
            .push_line("b")
            .indent()
            .push_line("c")
            .dedent()
            .dedent()
            .push_line("d");

        let expected: &str = "a\n    b\n        c\nd\n";
        assert_eq!(expected, emitter.render());
        assert_eq!(0, emitter.level());
    }

    #[test]
    fn open_and_close_block_are_balanced() {
        let mut emitter: Emitter = Emitter::new();
        emitter.open_block("outer {");
        emitter.open_block("inner {");
        emitter.push_line("body");
        emitter.close_block("}");
        emitter.close_block("}");

        let expected: &str = "outer {\n    inner {\n        body\n    }\n}\n";
        assert_eq!(expected, emitter.render());
        assert_eq!(0, emitter.level(), "level must return to its start");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "line break")]
    fn push_line_with_newline_panics_in_debug() {
        let mut emitter: Emitter = Emitter::new();
        emitter.push_line("a\nb");
    }

    #[test]
    #[should_panic(expected = "indentation level 0")]
    fn dedent_below_zero_panics() {
        let mut emitter: Emitter = Emitter::new();
        emitter.dedent();
    }

    #[test]
    #[should_panic(expected = "indentation level 0")]
    fn close_block_without_open_panics() {
        let mut emitter: Emitter = Emitter::new();
        emitter.close_block("}");
    }

    #[test]
    fn absorb_keeps_recorded_levels() {
        let mut child: Emitter = Emitter::nested(1);
        child.open_block("init {").push_line("x = 1").close_block("}");

        let mut parent: Emitter = Emitter::new();
        parent.open_block("class A {");
        parent.absorb(&child);
        parent.close_block("}");

        let expected: &str = "class A {\n    init {\n        x = 1\n    }\n}\n";
        assert_eq!(expected, parent.render());
        assert_eq!(1, child.level());
    }

    #[test]
    fn absorb_does_not_change_current_level() {
        let mut deep: Emitter = Emitter::nested(3);
        deep.push_line("deep");

        let mut parent: Emitter = Emitter::new();
        parent.indent().absorb(&deep).push_line("shallow");

        let expected: &str = "            deep\n    shallow\n";
        assert_eq!(expected, parent.render());
        assert_eq!(1, parent.level());
    }

    #[test]
    fn blank_lines_have_no_trailing_whitespace() {
        let mut emitter: Emitter = Emitter::new();
        emitter.indent().push_line("a").push_blank().push_line("b");

        let expected: &str = "    a\n\n    b\n";
        assert_eq!(expected, emitter.render());
    }

    #[test]
    fn indent_width_is_configurable() {
        let mut emitter: Emitter = Emitter::with_indent_width(2);
        emitter.open_block("{").push_line("x").close_block("}");

        let expected: &str = "{\n  x\n}\n";
        assert_eq!(expected, emitter.render());
    }

    #[test]
    fn absorbed_lines_render_with_receiver_width() {
        let mut child: Emitter = Emitter::nested(1);
        child.push_line("x");

        let mut parent: Emitter = Emitter::with_indent_width(3);
        parent.absorb(&child);

        assert_eq!("   x\n", parent.render());
    }

    #[test]
    fn empty_emitter_renders_nothing() {
        let emitter: Emitter = Emitter::new();
        assert!(emitter.is_empty());
        assert_eq!(0, emitter.line_count());
        assert_eq!("", emitter.render());
    }
}
