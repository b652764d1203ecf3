use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::event::{Event, Key, Modifiers};
use crate::hit::HitMap;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, focusable: &[String]) -> Option<String> {
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };

        self.move_to(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, focusable: &[String]) -> Option<String> {
        if focusable.is_empty() {
            return None;
        }

        let last = focusable.len() - 1;
        let new_focus = match &self.focused {
            None => focusable[last].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => focusable[last].clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };

        self.move_to(new_focus)
    }

    fn move_to(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Push Blur/Focus events for a focus change to `next` (None = nothing).
    fn change_focus(&mut self, next: Option<String>, events: &mut Vec<Event>) {
        if self.focused == next {
            return;
        }
        log::debug!("[focus] Changing focus from {:?} to {:?}", self.focused, next);
        if let Some(old) = self.focused.take() {
            events.push(Event::Blur { target: old });
        }
        if let Some(new) = next {
            self.focused = Some(new.clone());
            events.push(Event::Focus { target: new });
        }
    }

    /// Process raw crossterm events and produce high-level events.
    ///
    /// Pressing the mouse moves focus to the owner of the region under the
    /// pointer, or clears it when nothing is hit. Focus changes are emitted
    /// before the click they were caused by.
    pub fn process_events(&mut self, raw: &[CrosstermEvent], hits: &HitMap) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    if key == Key::Tab {
                        let next = self.peek(|state| state.focus_next(hits.focusable()));
                        if next.is_some() {
                            self.change_focus(next, &mut events);
                        }
                        continue;
                    }

                    if key == Key::BackTab {
                        let prev = self.peek(|state| state.focus_prev(hits.focusable()));
                        if prev.is_some() {
                            self.change_focus(prev, &mut events);
                        }
                        continue;
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    let x = mouse_event.column;
                    let y = mouse_event.row;

                    match mouse_event.kind {
                        MouseEventKind::Down(button) => {
                            let region = hits.hit_test(x, y);
                            self.change_focus(region.map(|r| r.owner.clone()), &mut events);
                            events.push(Event::Click {
                                target: region.map(|r| r.id.clone()),
                                x,
                                y,
                                button: button.into(),
                            });
                        }

                        MouseEventKind::Moved => {
                            let target = hits.target_at(x, y);
                            log::trace!("[focus] MouseMove at ({}, {}), target={:?}", x, y, target);
                            events.push(Event::MouseMove { target, x, y });
                        }

                        _ => {}
                    }
                }

                CrosstermEvent::FocusLost => {
                    self.change_focus(None, &mut events);
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }

    /// Compute where a navigation would land without committing it, so
    /// the caller can emit Blur for the old element first.
    fn peek(&self, nav: impl FnOnce(&mut FocusState) -> Option<String>) -> Option<String> {
        let mut probe = FocusState {
            focused: self.focused.clone(),
        };
        nav(&mut probe)
    }
}
