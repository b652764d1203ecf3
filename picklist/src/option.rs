use std::fmt;

/// The underlying value of a [`SelectOption`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

/// One selectable item: a display label and its underlying value.
///
/// Two options are the same option when their values match; the label is
/// display only. Callers can rebuild their option list between frames
/// without losing the selection.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub label: String,
    pub value: OptionValue,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The key options are compared by.
    pub fn key(&self) -> &OptionValue {
        &self.value
    }
}

impl PartialEq for SelectOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for SelectOption {}

impl fmt::Display for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
