//! Select widget configuration.

/// Narrowest control that still fits the value area and the right-hand controls.
pub const MIN_WIDTH: u16 = 14;

/// Per-widget configuration.
#[derive(Debug, Clone)]
pub struct SelectConfig {
    /// Preferred control width in columns (clamped to the available area).
    pub width: u16,

    /// Text shown when nothing is selected.
    pub placeholder: Option<String>,

    pub clear_glyph: char,
    pub remove_glyph: char,
    pub divider_glyph: char,
    pub caret_glyph: char,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            width: 40,
            placeholder: None,
            clear_glyph: '×',
            remove_glyph: '×',
            divider_glyph: '│',
            caret_glyph: '▾',
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width.max(MIN_WIDTH);
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Set the clear and badge-remove glyphs.
    pub fn remove_glyphs(mut self, clear: char, remove: char) -> Self {
        self.clear_glyph = clear;
        self.remove_glyph = remove;
        self
    }

    pub fn caret(mut self, caret: char) -> Self {
        self.caret_glyph = caret;
        self
    }
}
