//! The demo screen: one single-mode and one multiple-mode select over the
//! same option list. The host owns both selections.

use crossterm::event::Event as CrosstermEvent;
use picklist::{
    Buffer, Color, Event, EventResult, FocusState, HitMap, Key, KeyListeners, Rect, SelectConfig,
    SelectOption, SelectProps, SelectWidget, Style, StyleSheet,
};

const MARGIN_X: u16 = 2;

pub fn demo_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("First", 1),
        SelectOption::new("Second", 2),
        SelectOption::new("Third", 3),
        SelectOption::new("Fourth", 4),
        SelectOption::new("Fifth", 5),
    ]
}

pub struct DemoHost {
    options: Vec<SelectOption>,
    single_value: Option<SelectOption>,
    multiple_value: Vec<SelectOption>,
    single: SelectWidget,
    multiple: SelectWidget,
    focus: FocusState,
    listeners: KeyListeners,
    hits: HitMap,
    sheet: StyleSheet,
    should_quit: bool,
}

impl Default for DemoHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoHost {
    pub fn new() -> Self {
        let options = demo_options();
        let single_value = options.first().cloned();
        let multiple_value = options.iter().take(1).cloned().collect();

        Self {
            options,
            single_value,
            multiple_value,
            single: SelectWidget::with_config(SelectConfig::new().placeholder("Pick one")),
            multiple: SelectWidget::with_config(SelectConfig::new().placeholder("Pick any")),
            focus: FocusState::new(),
            listeners: KeyListeners::new(),
            hits: HitMap::new(),
            sheet: StyleSheet::standard(),
            should_quit: false,
        }
    }

    pub fn single_value(&self) -> Option<&SelectOption> {
        self.single_value.as_ref()
    }

    pub fn multiple_value(&self) -> &[SelectOption] {
        &self.multiple_value
    }

    pub fn single(&self) -> &SelectWidget {
        &self.single
    }

    pub fn multiple(&self) -> &SelectWidget {
        &self.multiple
    }

    pub fn listeners(&self) -> &KeyListeners {
        &self.listeners
    }

    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Bring both widgets' key listeners in line with their current state.
    fn sync_listeners(&mut self) {
        self.single.sync_listener(&self.listeners, &self.options);
        self.multiple.sync_listener(&self.listeners, &self.options);
    }

    /// Paint the whole screen and rebuild the hit map.
    pub fn render(&mut self, buf: &mut Buffer) {
        self.sync_listeners();
        self.hits.clear();

        let width = buf.width().saturating_sub(MARGIN_X * 2);
        let title = Style::new().bold();
        let label = Style::new().foreground(Color::rgb(160, 160, 160));

        buf.write_str(MARGIN_X, 0, "picklist demo", buf.width(), &title);

        buf.write_str(MARGIN_X, 2, "Single", buf.width(), &label);
        let single_area = {
            let mut on_change = |_: Option<SelectOption>| {};
            let props =
                SelectProps::single(&self.options, self.single_value.as_ref(), &mut on_change);
            self.single.render(
                &props,
                Rect::new(MARGIN_X, 3, width, 0),
                buf,
                &self.sheet,
                &mut self.hits,
            )
        };

        let multiple_label_y = single_area.bottom() + 1;
        buf.write_str(MARGIN_X, multiple_label_y, "Multiple", buf.width(), &label);
        let multiple_area = {
            let mut on_change = |_: Vec<SelectOption>| {};
            let props = SelectProps::multiple(&self.options, &self.multiple_value, &mut on_change);
            self.multiple.render(
                &props,
                Rect::new(MARGIN_X, multiple_label_y + 1, width, 0),
                buf,
                &self.sheet,
                &mut self.hits,
            )
        };

        let status_y = multiple_area.bottom() + 1;
        let single_text = self
            .single_value
            .as_ref()
            .map(|o| o.label.clone())
            .unwrap_or_else(|| "(none)".to_string());
        let multiple_text = if self.multiple_value.is_empty() {
            "(none)".to_string()
        } else {
            self.multiple_value
                .iter()
                .map(|o| o.label.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        buf.write_str(
            MARGIN_X,
            status_y,
            &format!("single:   {single_text}"),
            buf.width(),
            &label,
        );
        buf.write_str(
            MARGIN_X,
            status_y + 1,
            &format!("multiple: {multiple_text}"),
            buf.width(),
            &label,
        );

        let help = "Tab focus · Enter/Space open/select · ↑/↓ move · Esc close · q quit";
        let help_y = buf.height().saturating_sub(1);
        buf.write_str(MARGIN_X, help_y, help, buf.width(), &Style::new().dim());

        // Option lists go last so they cover the content below their control.
        {
            let mut on_change = |_: Option<SelectOption>| {};
            let props =
                SelectProps::single(&self.options, self.single_value.as_ref(), &mut on_change);
            self.single
                .render_overlay(&props, buf, &self.sheet, &mut self.hits);
        }
        {
            let mut on_change = |_: Vec<SelectOption>| {};
            let props = SelectProps::multiple(&self.options, &self.multiple_value, &mut on_change);
            self.multiple
                .render_overlay(&props, buf, &self.sheet, &mut self.hits);
        }
    }

    /// Translate raw terminal input against the last frame and dispatch it.
    pub fn process(&mut self, raw: &[CrosstermEvent]) {
        let events = self.focus.process_events(raw, &self.hits);
        for event in &events {
            self.dispatch(event);
        }
    }

    /// Deliver one event to both widgets and apply any selection changes
    /// they report.
    pub fn dispatch(&mut self, event: &Event) -> EventResult {
        if let Event::Key {
            target, key, modifiers, ..
        } = event
        {
            if modifiers.ctrl && *key == Key::Char('c') {
                self.should_quit = true;
                return EventResult::Consumed;
            }
            if target.is_none() && modifiers.none() && *key == Key::Char('q') {
                self.should_quit = true;
                return EventResult::Consumed;
            }
            // Keys only reach an element with an attached listener.
            let listening = target
                .as_deref()
                .is_some_and(|target| self.listeners.is_listening(target));
            if !listening {
                return EventResult::Ignored;
            }
        }

        let mut single_change = None;
        let single_result = {
            let mut on_change = |value: Option<SelectOption>| single_change = Some(value);
            let mut props =
                SelectProps::single(&self.options, self.single_value.as_ref(), &mut on_change);
            self.single.handle_event(event, &mut props)
        };
        if let Some(value) = single_change {
            log::debug!(
                "[demo] single value -> {:?}",
                value.as_ref().map(|o| &o.label)
            );
            self.single_value = value;
        }

        let mut multiple_change = None;
        let multiple_result = {
            let mut on_change = |value: Vec<SelectOption>| multiple_change = Some(value);
            let mut props =
                SelectProps::multiple(&self.options, &self.multiple_value, &mut on_change);
            self.multiple.handle_event(event, &mut props)
        };
        if let Some(value) = multiple_change {
            log::debug!(
                "[demo] multiple value -> {:?}",
                value.iter().map(|o| &o.label).collect::<Vec<_>>()
            );
            self.multiple_value = value;
        }

        self.sync_listeners();

        if single_result.is_handled() || multiple_result.is_handled() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{
        Event as CtEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtButton, MouseEvent,
        MouseEventKind,
    };
    use picklist::Part;

    use super::*;

    fn key(code: KeyCode) -> CtEvent {
        CtEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, x: u16, y: u16) -> CtEvent {
        CtEvent::Mouse(MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn click(x: u16, y: u16) -> CtEvent {
        mouse(MouseEventKind::Down(CtButton::Left), x, y)
    }

    /// Center-ish point of the region registered for `target`.
    fn point_of(host: &DemoHost, target: &str) -> (u16, u16) {
        let region = host
            .hits()
            .regions()
            .iter()
            .rev()
            .find(|r| r.id == target)
            .unwrap_or_else(|| panic!("no region for {target}"));
        (region.rect.x + region.rect.width / 2, region.rect.y)
    }

    fn frame(host: &mut DemoHost) -> Buffer {
        let mut buf = Buffer::new(80, 30);
        host.render(&mut buf);
        buf
    }

    fn labels(values: &[SelectOption]) -> Vec<&str> {
        values.iter().map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn test_initial_values() {
        let host = DemoHost::new();
        assert_eq!(host.single_value().map(|o| o.label.as_str()), Some("First"));
        assert_eq!(labels(host.multiple_value()), vec!["First"]);
    }

    #[test]
    fn test_keyboard_selects_third_and_stays_open() {
        let mut host = DemoHost::new();
        frame(&mut host);

        host.process(&[key(KeyCode::Tab)]);
        assert_eq!(host.focus.focused(), Some(host.single().id_string().as_str()));

        // Opens, then moves twice, then commits
        host.process(&[key(KeyCode::Down)]);
        assert!(host.single().is_open());
        host.process(&[key(KeyCode::Down), key(KeyCode::Down), key(KeyCode::Enter)]);

        assert_eq!(host.single_value().map(|o| o.label.as_str()), Some("Third"));
        assert!(host.single().is_open());
    }

    #[test]
    fn test_click_option_then_remove_badge() {
        let mut host = DemoHost::new();
        let id = host.multiple().id_string();
        frame(&mut host);

        let (x, y) = point_of(&host, &id);
        host.process(&[click(x, y)]);
        assert!(host.multiple().is_open());

        frame(&mut host);
        let (x, y) = point_of(&host, &Part::Option(1).target(&id));
        host.process(&[click(x, y)]);
        assert_eq!(labels(host.multiple_value()), vec!["First", "Second"]);
        assert!(!host.multiple().is_open());

        frame(&mut host);
        let (x, y) = point_of(&host, &Part::Tag(0).target(&id));
        host.process(&[click(x, y)]);
        assert_eq!(labels(host.multiple_value()), vec!["Second"]);
        assert!(!host.multiple().is_open(), "badge click must not toggle the list");
    }

    #[test]
    fn test_escape_closes_without_changing_selection() {
        let mut host = DemoHost::new();
        frame(&mut host);

        host.process(&[key(KeyCode::Tab), key(KeyCode::Enter)]);
        assert!(host.single().is_open());

        host.process(&[key(KeyCode::Down), key(KeyCode::Esc)]);
        assert!(!host.single().is_open());
        assert_eq!(host.single_value().map(|o| o.label.as_str()), Some("First"));
    }

    #[test]
    fn test_click_on_list_closed_in_same_batch_is_ignored() {
        let mut host = DemoHost::new();
        let id = host.single().id_string();
        frame(&mut host);

        host.process(&[key(KeyCode::Tab), key(KeyCode::Enter)]);
        frame(&mut host);
        let (x, y) = point_of(&host, &Part::Option(2).target(&id));

        // Both arrive before the next frame, so the click resolves against
        // the list that Esc just closed
        host.process(&[key(KeyCode::Esc), click(x, y)]);

        assert!(!host.single().is_open());
        assert_eq!(host.single_value().map(|o| o.label.as_str()), Some("First"));
        assert_eq!(labels(host.multiple_value()), vec!["First"]);
    }

    #[test]
    fn test_clear_button_clears_without_opening() {
        let mut host = DemoHost::new();
        let id = host.single().id_string();
        frame(&mut host);

        let (x, y) = point_of(&host, &Part::Clear.target(&id));
        host.process(&[click(x, y)]);

        assert_eq!(host.single_value(), None);
        assert!(!host.single().is_open());
    }

    #[test]
    fn test_click_outside_blurs_and_closes() {
        let mut host = DemoHost::new();
        let id = host.single().id_string();
        frame(&mut host);

        let (x, y) = point_of(&host, &id);
        host.process(&[click(x, y)]);
        assert!(host.single().is_open());
        assert!(host.single().is_focused());

        frame(&mut host);
        host.process(&[click(79, 29)]);
        assert!(!host.single().is_open());
        assert!(!host.single().is_focused());
        assert_eq!(host.focus.focused(), None);
    }

    #[test]
    fn test_hover_moves_highlight() {
        let mut host = DemoHost::new();
        let id = host.single().id_string();
        frame(&mut host);

        let (x, y) = point_of(&host, &id);
        host.process(&[click(x, y)]);
        frame(&mut host);

        let (x, y) = point_of(&host, &Part::Option(3).target(&id));
        host.process(&[mouse(MouseEventKind::Moved, x, y)]);
        assert_eq!(host.single().highlighted_index(), 3);
    }

    #[test]
    fn test_open_list_covers_content_below() {
        let mut host = DemoHost::new();
        let id = host.single().id_string();
        frame(&mut host);

        let (x, y) = point_of(&host, &id);
        host.process(&[click(x, y)]);
        let buf = frame(&mut host);

        // The third row of the single list lands on the multiple control
        let (_, row_y) = point_of(&host, &Part::Option(2).target(&id));
        let multiple_area = host.multiple().area();
        assert!(row_y >= multiple_area.top() && row_y < multiple_area.bottom());
        assert!(buf.row_text(row_y).contains("Third"));
        assert_eq!(
            host.hits().target_at(x, row_y),
            Some(Part::Option(2).target(&id))
        );
    }

    #[test]
    fn test_q_quits_only_without_focus() {
        let mut host = DemoHost::new();
        frame(&mut host);

        host.process(&[key(KeyCode::Tab), key(KeyCode::Char('q'))]);
        assert!(!host.should_quit());

        host.process(&[click(79, 29), key(KeyCode::Char('q'))]);
        assert!(host.should_quit());
    }

    #[test]
    fn test_one_listener_per_widget() {
        let mut host = DemoHost::new();
        frame(&mut host);
        host.process(&[
            key(KeyCode::Tab),
            key(KeyCode::Down),
            key(KeyCode::Down),
            key(KeyCode::Up),
            key(KeyCode::Esc),
        ]);
        frame(&mut host);

        assert_eq!(host.listeners().count(&host.single().id_string()), 1);
        assert_eq!(host.listeners().count(&host.multiple().id_string()), 1);
        assert_eq!(host.listeners().total(), 2);
    }

    #[test]
    fn test_status_lines_echo_values() {
        let mut host = DemoHost::new();
        let buf = frame(&mut host);

        let text: Vec<String> = (0..buf.height()).map(|y| buf.row_text(y)).collect();
        assert!(text.iter().any(|line| line.contains("single:   First")));
        assert!(text.iter().any(|line| line.contains("multiple: First")));
    }
}
