//! Select widget state and interaction handling.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::SelectConfig;
use crate::event::{Event, EventResult, Key, MouseButton};
use crate::layout::Rect;
use crate::listener::{KeyListeners, ListenerGuard};
use crate::option::SelectOption;
use crate::props::{SelectMode, SelectProps};
use crate::selection;

/// Unique identifier for a SelectWidget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "select-{}", self.0)
    }
}

/// State the widget owns itself. Selection is never part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub is_open: bool,
    /// Index into the option list of the keyboard/hover highlight.
    pub highlighted_index: usize,
    pub focused: bool,
}

/// A clickable part of the widget, encoded into hit-region target IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// Control body: value area, divider and caret.
    Container,
    /// Clear-all control.
    Clear,
    /// Badge of the n-th selected value (multiple mode).
    Tag(usize),
    /// Option list frame around the rows.
    OptionList,
    /// The n-th option row.
    Option(usize),
}

impl Part {
    /// Target ID of this part for the widget `owner`.
    pub fn target(&self, owner: &str) -> String {
        match self {
            Part::Container => owner.to_string(),
            Part::Clear => format!("{owner}/clear"),
            Part::Tag(i) => format!("{owner}/tag/{i}"),
            Part::OptionList => format!("{owner}/options"),
            Part::Option(i) => format!("{owner}/option/{i}"),
        }
    }

    /// Decode a target ID. Returns None for targets of other widgets.
    pub fn parse(owner: &str, target: &str) -> Option<Part> {
        let rest = target.strip_prefix(owner)?;
        if rest.is_empty() {
            return Some(Part::Container);
        }
        let rest = rest.strip_prefix('/')?;
        match rest.split_once('/') {
            None => match rest {
                "clear" => Some(Part::Clear),
                "options" => Some(Part::OptionList),
                _ => None,
            },
            Some(("tag", i)) => i.parse().ok().map(Part::Tag),
            Some(("option", i)) => i.parse().ok().map(Part::Option),
            Some(_) => None,
        }
    }
}

/// What the key listener was attached for. A change re-attaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerDeps {
    is_open: bool,
    highlighted_index: usize,
    options_ptr: usize,
    options_len: usize,
}

/// A dropdown select supporting single and multiple selection.
///
/// The widget is controlled: the selected value lives with the owner and is
/// passed in through [`SelectProps`] every time the widget handles an event
/// or renders. The widget only keeps its open/closed state, the highlighted
/// row and whether it has focus.
///
/// # Example
///
/// ```ignore
/// let mut next = None;
/// let mut on_change = |value: Option<SelectOption>| next = Some(value);
/// let mut props = SelectProps::single(&options, current.as_ref(), &mut on_change);
/// widget.handle_event(&event, &mut props);
/// if let Some(value) = next {
///     current = value;
/// }
/// ```
#[derive(Debug)]
pub struct SelectWidget {
    id: SelectId,
    pub(crate) config: SelectConfig,
    pub(crate) state: InteractionState,
    /// Area of the control from the last render
    pub(crate) area: Rect,
    listener: Option<ListenerGuard>,
    deps: Option<ListenerDeps>,
}

impl Default for SelectWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectWidget {
    pub fn new() -> Self {
        Self::with_config(SelectConfig::default())
    }

    pub fn with_config(config: SelectConfig) -> Self {
        Self {
            id: SelectId::new(),
            config,
            state: InteractionState::default(),
            area: Rect::default(),
            listener: None,
            deps: None,
        }
    }

    /// Get the unique ID for this widget
    pub fn id(&self) -> SelectId {
        self.id
    }

    /// Get the ID as a string (focus and hit-region target)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn highlighted_index(&self) -> usize {
        self.state.highlighted_index
    }

    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    /// Area the control occupied in the last render.
    pub fn area(&self) -> Rect {
        self.area
    }

    // -------------------------------------------------------------------------
    // Open state
    // -------------------------------------------------------------------------

    /// Flip the open state. Opening resets the highlight to the first row.
    pub fn toggle_open(&mut self) {
        if self.state.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        if !self.state.is_open {
            log::debug!("[select] {} open", self.id);
            self.state.is_open = true;
            self.state.highlighted_index = 0;
        }
    }

    pub fn close(&mut self) {
        if self.state.is_open {
            log::debug!("[select] {} close", self.id);
            self.state.is_open = false;
        }
    }

    /// Move the highlight to `index`. Out-of-range indices are ignored.
    /// Returns true if the highlight changed.
    pub fn highlight(&mut self, index: usize, option_count: usize) -> bool {
        if index >= option_count || index == self.state.highlighted_index {
            return false;
        }
        self.state.highlighted_index = index;
        true
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.state.highlighted_index == index
    }

    // -------------------------------------------------------------------------
    // Selection requests
    // -------------------------------------------------------------------------

    /// Request a selection change for `option`.
    ///
    /// Single mode reports `option` unless it is already the value. Multiple
    /// mode removes it when present and appends it otherwise.
    pub fn select_option(&self, props: &mut SelectProps<'_>, option: &SelectOption) {
        match &mut props.mode {
            SelectMode::Single { value, on_change } => {
                if let Some(next) = selection::replaced(*value, option) {
                    log::debug!("[select] {} select {:?}", self.id, next.value);
                    on_change(Some(next));
                }
            }
            SelectMode::Multiple { value, on_change } => {
                let next = selection::toggled(value, option);
                log::debug!(
                    "[select] {} toggle {:?} ({} -> {} selected)",
                    self.id,
                    option.value,
                    value.len(),
                    next.len()
                );
                on_change(next);
            }
        }
    }

    /// Request an empty selection.
    pub fn clear_selection(&self, props: &mut SelectProps<'_>) {
        log::debug!("[select] {} clear", self.id);
        match &mut props.mode {
            SelectMode::Single { on_change, .. } => on_change(None),
            SelectMode::Multiple { on_change, .. } => on_change(Vec::new()),
        }
    }

    /// Remove a selected value through its badge. Only meaningful in
    /// multiple mode, and only for options that are actually selected.
    pub fn remove_tag(&self, props: &mut SelectProps<'_>, option: &SelectOption) {
        let removable = match &props.mode {
            SelectMode::Multiple { value, .. } => selection::contains(value, option),
            SelectMode::Single { .. } => false,
        };
        if removable {
            self.select_option(props, option);
        } else {
            log::trace!("[select] {} ignoring remove of {:?}", self.id, option.value);
        }
    }

    pub fn is_option_selected(&self, props: &SelectProps<'_>, option: &SelectOption) -> bool {
        match &props.mode {
            SelectMode::Single { value, .. } => *value == Some(option),
            SelectMode::Multiple { value, .. } => selection::contains(value, option),
        }
    }

    // -------------------------------------------------------------------------
    // Key listener
    // -------------------------------------------------------------------------

    /// Keep the key listener attached for the current open state, highlight
    /// and option list. Re-attaches only when one of those changed, dropping
    /// the previous attachment first.
    ///
    /// Also clamps the highlight if the option list shrank while open.
    pub fn sync_listener(&mut self, listeners: &KeyListeners, options: &[SelectOption]) {
        if self.state.is_open && !options.is_empty() && self.state.highlighted_index >= options.len()
        {
            self.state.highlighted_index = options.len() - 1;
        }

        let deps = ListenerDeps {
            is_open: self.state.is_open,
            highlighted_index: self.state.highlighted_index,
            options_ptr: options.as_ptr() as usize,
            options_len: options.len(),
        };
        if self.listener.is_some() && self.deps == Some(deps) {
            return;
        }

        self.listener = None;
        self.listener = Some(listeners.attach(self.id_string()));
        self.deps = Some(deps);
    }

    /// Detach the key listener, if attached.
    pub fn detach_listener(&mut self) {
        self.listener = None;
        self.deps = None;
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    // -------------------------------------------------------------------------
    // Event handling
    // -------------------------------------------------------------------------

    /// Handle a key press while focused.
    pub fn handle_key(&mut self, key: Key, props: &mut SelectProps<'_>) -> EventResult {
        match key {
            Key::Enter | Key::SPACE => {
                if !self.state.is_open {
                    self.open();
                } else {
                    let options = props.options;
                    if let Some(option) = options.get(self.state.highlighted_index) {
                        self.select_option(props, option);
                    }
                }
                EventResult::Consumed
            }

            Key::Up | Key::Down => {
                if !self.state.is_open {
                    self.open();
                    return EventResult::Consumed;
                }

                let next = if key == Key::Down {
                    self.state.highlighted_index.checked_add(1)
                } else {
                    self.state.highlighted_index.checked_sub(1)
                };
                if let Some(next) = next.filter(|&i| i < props.options.len()) {
                    self.state.highlighted_index = next;
                }
                EventResult::Consumed
            }

            Key::Escape if self.state.is_open => {
                self.close();
                EventResult::Consumed
            }

            _ => EventResult::Ignored,
        }
    }

    /// Handle a click on one of this widget's parts.
    pub fn handle_click(&mut self, part: Part, props: &mut SelectProps<'_>) -> EventResult {
        match part {
            // Rows and frame of a list that is no longer shown
            Part::OptionList | Part::Option(_) if !self.state.is_open => {
                log::trace!("[select] {} ignoring click on closed list", self.id);
                return EventResult::Ignored;
            }

            Part::Container | Part::OptionList => self.toggle_open(),

            Part::Clear => self.clear_selection(props),

            Part::Tag(index) => {
                let Some(option) = props.selected().get(index).cloned() else {
                    return EventResult::Ignored;
                };
                self.remove_tag(props, &option);
            }

            Part::Option(index) => {
                let options = props.options;
                let Some(option) = options.get(index) else {
                    return EventResult::Ignored;
                };
                self.select_option(props, option);
                self.close();
            }
        }
        EventResult::Consumed
    }

    /// Route a high-level event to this widget.
    ///
    /// Key events are only handled while the event targets this widget and
    /// its key listener is attached (see [`SelectWidget::sync_listener`]).
    pub fn handle_event(&mut self, event: &Event, props: &mut SelectProps<'_>) -> EventResult {
        let id = self.id_string();
        match event {
            Event::Key {
                target: Some(target),
                key,
                ..
            } if *target == id && self.listener.is_some() => self.handle_key(*key, props),

            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
                ..
            } => match Part::parse(&id, target) {
                Some(part) => self.handle_click(part, props),
                None => EventResult::Ignored,
            },

            Event::MouseMove {
                target: Some(target),
                ..
            } => match Part::parse(&id, target) {
                Some(Part::Option(index)) if self.state.is_open => {
                    self.highlight(index, props.options.len());
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            },

            Event::Focus { target } if *target == id => {
                self.state.focused = true;
                EventResult::Consumed
            }

            Event::Blur { target } if *target == id => {
                self.state.focused = false;
                self.close();
                EventResult::Consumed
            }

            _ => EventResult::Ignored,
        }
    }
}
