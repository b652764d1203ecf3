//! Structural class names and the stylesheet that gives them a look.
//!
//! The widget only decides which classes apply to each of its parts. What
//! those classes look like is up to the [`StyleSheet`] the owner passes in.

use std::collections::HashMap;

use crate::types::{Color, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// The bordered control.
    Container,
    /// Control has keyboard focus.
    Focus,
    /// Selected-value display area.
    Value,
    /// Clear-all control.
    ClearBtn,
    Divider,
    Caret,
    /// The option list frame.
    Options,
    /// Option list is visible.
    Show,
    /// One option row.
    Option,
    Selected,
    Highlighted,
    /// A selected value in multiple mode.
    OptionBadge,
    /// The remove glyph inside a badge.
    RemoveBtn,
}

impl Class {
    pub const ALL: [Class; 13] = [
        Class::Container,
        Class::Focus,
        Class::Value,
        Class::ClearBtn,
        Class::Divider,
        Class::Caret,
        Class::Options,
        Class::Show,
        Class::Option,
        Class::Selected,
        Class::Highlighted,
        Class::OptionBadge,
        Class::RemoveBtn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Focus => "focus",
            Self::Value => "value",
            Self::ClearBtn => "clear-btn",
            Self::Divider => "divider",
            Self::Caret => "caret",
            Self::Options => "options",
            Self::Show => "show",
            Self::Option => "option",
            Self::Selected => "selected",
            Self::Highlighted => "highlighted",
            Self::OptionBadge => "option-badge",
            Self::RemoveBtn => "remove-btn",
        }
    }

    pub fn from_name(name: &str) -> Option<Class> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Join class names the way they would appear in markup.
pub fn class_list(classes: &[Class]) -> String {
    classes
        .iter()
        .map(Class::name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Maps classes to styles. Rules cascade in the order classes are listed.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    rules: HashMap<Class, Style>,
}

impl StyleSheet {
    /// A sheet with no rules; everything renders with terminal defaults.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the rule for `class`, replacing any previous one.
    pub fn rule(mut self, class: Class, style: Style) -> Self {
        self.rules.insert(class, style);
        self
    }

    pub fn set(&mut self, class: Class, style: Style) {
        self.rules.insert(class, style);
    }

    pub fn get(&self, class: Class) -> Option<&Style> {
        self.rules.get(&class)
    }

    /// Cascade the rules of `classes`, later classes overriding earlier ones.
    pub fn resolve(&self, classes: &[Class]) -> Style {
        classes
            .iter()
            .filter_map(|class| self.rules.get(class))
            .fold(Style::new(), |acc, style| acc.merge(style))
    }

    /// The stock look: gray chrome, blue highlight, light blue selection.
    pub fn standard() -> Self {
        let chrome = Color::rgb(119, 119, 119);
        let accent = Color::hsl(200.0, 1.0, 0.5);
        let selected = Color::hsl(200.0, 1.0, 0.7);

        Self::empty()
            .rule(Class::Container, Style::new().foreground(chrome))
            .rule(Class::Focus, Style::new().foreground(accent))
            .rule(Class::Value, Style::new().foreground(Color::rgb(230, 230, 230)))
            .rule(Class::ClearBtn, Style::new().foreground(chrome))
            .rule(Class::Divider, Style::new().foreground(chrome))
            .rule(Class::Caret, Style::new().foreground(chrome))
            .rule(Class::Options, Style::new().foreground(chrome))
            .rule(Class::Show, Style::new().background(Color::rgb(20, 20, 20)))
            .rule(Class::Option, Style::new().foreground(Color::rgb(230, 230, 230)))
            .rule(
                Class::Selected,
                Style::new()
                    .background(selected)
                    .foreground(Color::rgb(0, 0, 0)),
            )
            .rule(
                Class::Highlighted,
                Style::new()
                    .background(accent)
                    .foreground(Color::rgb(255, 255, 255))
                    .bold(),
            )
            .rule(
                Class::OptionBadge,
                Style::new()
                    .background(Color::rgb(60, 60, 60))
                    .foreground(Color::rgb(230, 230, 230)),
            )
            .rule(Class::RemoveBtn, Style::new().foreground(Color::hsl(0.0, 1.0, 0.7)))
    }
}
