/// Converts a zero-based index into a one-based source coordinate.
pub(crate) fn coordinate(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

/// An open bracket and the line it was opened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenBracket {
    /// The opening character: `(`, `[` or `{`.
    pub bracket: char,
    /// The line of the opening character.
    pub line:    u32,
}

/// Scanning state owned by a single `Lexer`.
///
/// `lines` are the newline-normalised physical lines of the input, each
/// ending in `\n`. `indent_stack` starts as `[0]` and is strictly increasing
/// from bottom to top.
#[derive(Debug, Clone)]
pub struct LexerContext {
    /// Physical lines of the input.
    pub lines:         Vec<Vec<char>>,
    /// Index of the current line.
    pub line_index:    usize,
    /// Index of the current character within the current line.
    pub column_index:  usize,
    /// Widths of the open indentation levels.
    pub indent_stack:  Vec<usize>,
    /// Brackets opened and not yet closed.
    pub bracket_stack: Vec<OpenBracket>,
    /// Set when the cursor sits at the start of a logical line.
    pub at_line_start: bool,
}

impl LexerContext {
    /// Splits `source` into physical lines after normalising `\r\n` and `\r`
    /// to `\n`.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::lexer::context::LexerContext;
    ///
    /// let context = LexerContext::new("a = 1\r\nb = 2");
    /// assert_eq!(context.lines.len(), 2);
    /// assert_eq!(context.lines[1].last(), Some(&'\n'));
    /// assert_eq!(context.indent_stack, vec![0]);
    /// ```
    #[must_use]
    pub fn new(source: &str) -> Self {
        let normalised = source.replace("\r\n", "\n").replace('\r', "\n");
        let lines = normalised.split_inclusive('\n')
                              .map(|line| {
                                  let mut chars: Vec<char> = line.chars().collect();
                                  if chars.last() != Some(&'\n') {
                                      chars.push('\n');
                                  }
                                  chars
                              })
                              .collect();

        Self { lines,
               line_index: 0,
               column_index: 0,
               indent_stack: vec![0],
               bracket_stack: Vec::new(),
               at_line_start: true }
    }

    /// Whether every line has been consumed.
    #[must_use]
    pub fn at_eof(&self) -> bool {
        self.line_index >= self.lines.len()
    }

    /// The character under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.peek(0)
    }

    /// The character `offset` positions after the cursor on the current line.
    #[must_use]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.lines
            .get(self.line_index)
            .and_then(|line| line.get(self.column_index + offset))
            .copied()
    }

    /// Moves the cursor one character forward.
    pub fn bump(&mut self) {
        self.column_index += 1;
    }

    /// Moves the cursor to the start of the next physical line.
    pub fn next_line(&mut self) {
        self.line_index += 1;
        self.column_index = 0;
    }

    /// The source text between `start` and the cursor on the current line.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> String {
        let Some(line) = self.lines.get(self.line_index) else {
            return String::new();
        };
        let end = self.column_index.min(line.len());
        line[start.min(end)..end].iter().collect()
    }

    /// One-based number of the current line.
    #[must_use]
    pub fn line(&self) -> u32 {
        coordinate(self.line_index)
    }

    /// One-based number of the cursor column.
    #[must_use]
    pub fn column(&self) -> u32 {
        coordinate(self.column_index)
    }

    /// Width of the innermost indentation level.
    #[must_use]
    pub fn current_indent(&self) -> usize {
        self.indent_stack.last().copied().unwrap_or(0)
    }
}
