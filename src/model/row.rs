//! A single row of text and its cached display rendering.
//!
//! Rows keep two representations in sync: `chars`, the logical content as
//! typed, and `render`, the display content with tabs expanded to spaces.
//! Every mutation goes through a method that refreshes `render` before
//! returning, so readers never see a stale rendering.
//!
//! The editor assumes one byte per display cell (ASCII text); tab is the
//! only character that widens on screen.

/// Tab stops are every 8 columns.
pub const TAB_STOP: usize = 8;

/// One line of text, without a trailing newline.
#[derive(Debug, Clone, Default)]
pub struct Row {
    /// Logical content.
    chars: String,
    /// Display content, tabs expanded. Derived from `chars`, never stale.
    render: String,
}

impl Row {
    /// Create a row from logical content, computing its rendering.
    pub fn new(text: impl Into<String>) -> Self {
        let mut row = Self {
            chars: text.into(),
            render: String::new(),
        };
        row.update_render();
        row
    }

    /// Logical content length.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Logical content.
    pub fn chars(&self) -> &str {
        &self.chars
    }

    /// Display content (tabs expanded).
    pub fn render(&self) -> &str {
        &self.render
    }

    /// Rendered width of the row.
    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    /// Regenerate `render` from `chars`: each tab advances to the next
    /// multiple-of-8 column, everything else passes through one-to-one.
    fn update_render(&mut self) {
        self.render.clear();
        for ch in self.chars.chars() {
            if ch == '\t' {
                self.render.push(' ');
                while self.render.len() % TAB_STOP != 0 {
                    self.render.push(' ');
                }
            } else {
                self.render.push(ch);
            }
        }
    }

    /// Insert one character at `at`, clamped to the end of the row.
    pub fn insert_char(&mut self, at: usize, ch: char) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, ch);
        self.update_render();
    }

    /// Remove the character at `at`; does nothing when out of range.
    pub fn delete_char(&mut self, at: usize) {
        if at >= self.chars.len() {
            return;
        }
        self.chars.remove(at);
        self.update_render();
    }

    /// Append raw text to the end of the row.
    pub fn append_str(&mut self, text: &str) {
        self.chars.push_str(text);
        self.update_render();
    }

    /// Truncate the row at `at` and return the tail (used for newline splits).
    pub fn split_off(&mut self, at: usize) -> String {
        let tail = self.chars.split_off(at);
        self.update_render();
        tail
    }

    /// Map a logical column to its rendered column.
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        let mut rx = 0;
        for ch in self.chars.chars().take(cx) {
            if ch == '\t' {
                rx += (TAB_STOP - 1) - (rx % TAB_STOP);
            }
            rx += 1;
        }
        rx
    }

    /// Map a rendered column back to a logical column.
    ///
    /// Walks the row accumulating rendered width until it would pass
    /// `rx`; returns the row length if it never does. Only an inverse of
    /// [`cx_to_rx`](Self::cx_to_rx) up to tab-expansion ambiguity: a
    /// rendered column that lands mid-tab maps to the tab itself.
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        let mut cur_rx = 0;
        for (cx, ch) in self.chars.chars().enumerate() {
            if ch == '\t' {
                cur_rx += (TAB_STOP - 1) - (cur_rx % TAB_STOP);
            }
            cur_rx += 1;
            if cur_rx > rx {
                return cx;
            }
        }
        self.chars.len()
    }
}
