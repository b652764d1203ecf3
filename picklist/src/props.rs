//! Inputs a [`SelectWidget`](crate::SelectWidget) is rendered and driven with.
//!
//! The widget is controlled: it reads the current value from its props and
//! reports changes through the callback. The owner stores the new value and
//! passes it back in next time.

use crate::option::SelectOption;

/// Mode-specific value and change callback.
pub enum SelectMode<'a> {
    /// At most one option selected.
    Single {
        value: Option<&'a SelectOption>,
        on_change: &'a mut dyn FnMut(Option<SelectOption>),
    },
    /// Any number of options selected, shown as removable badges.
    Multiple {
        value: &'a [SelectOption],
        on_change: &'a mut dyn FnMut(Vec<SelectOption>),
    },
}

impl std::fmt::Debug for SelectMode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single { value, .. } => f.debug_struct("Single").field("value", value).finish(),
            Self::Multiple { value, .. } => {
                f.debug_struct("Multiple").field("value", value).finish()
            }
        }
    }
}

#[derive(Debug)]
pub struct SelectProps<'a> {
    pub options: &'a [SelectOption],
    pub mode: SelectMode<'a>,
}

impl<'a> SelectProps<'a> {
    pub fn single(
        options: &'a [SelectOption],
        value: Option<&'a SelectOption>,
        on_change: &'a mut dyn FnMut(Option<SelectOption>),
    ) -> Self {
        Self {
            options,
            mode: SelectMode::Single { value, on_change },
        }
    }

    pub fn multiple(
        options: &'a [SelectOption],
        value: &'a [SelectOption],
        on_change: &'a mut dyn FnMut(Vec<SelectOption>),
    ) -> Self {
        Self {
            options,
            mode: SelectMode::Multiple { value, on_change },
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self.mode, SelectMode::Multiple { .. })
    }

    /// Currently selected options, in display order.
    pub fn selected(&self) -> &[SelectOption] {
        match &self.mode {
            SelectMode::Single { value, .. } => match value {
                Some(option) => std::slice::from_ref(*option),
                None => &[],
            },
            SelectMode::Multiple { value, .. } => value,
        }
    }
}
