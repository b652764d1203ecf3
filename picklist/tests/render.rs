use picklist::{
    class_list, layout_badges, Buffer, Class, Color, Event, HitMap, Part, Rect, SelectConfig,
    SelectOption, SelectProps, SelectWidget, Style, StyleSheet,
};

fn options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("First", 1),
        SelectOption::new("Second", 2),
        SelectOption::new("Third", 3),
        SelectOption::new("Fourth", 4),
        SelectOption::new("Fifth", 5),
    ]
}

fn render_single(
    widget: &mut SelectWidget,
    list: &[SelectOption],
    value: Option<&SelectOption>,
) -> (Buffer, HitMap) {
    let mut buf = Buffer::new(60, 20);
    let mut hits = HitMap::new();
    let sheet = StyleSheet::standard();
    let mut on_change = |_: Option<SelectOption>| {};
    let props = SelectProps::single(list, value, &mut on_change);

    widget.render(&props, buf.area(), &mut buf, &sheet, &mut hits);
    widget.render_overlay(&props, &mut buf, &sheet, &mut hits);
    (buf, hits)
}

fn render_multiple(
    widget: &mut SelectWidget,
    list: &[SelectOption],
    value: &[SelectOption],
) -> (Buffer, HitMap) {
    let mut buf = Buffer::new(60, 20);
    let mut hits = HitMap::new();
    let sheet = StyleSheet::standard();
    let mut on_change = |_: Vec<SelectOption>| {};
    let props = SelectProps::multiple(list, value, &mut on_change);

    widget.render(&props, buf.area(), &mut buf, &sheet, &mut hits);
    widget.render_overlay(&props, &mut buf, &sheet, &mut hits);
    (buf, hits)
}

fn char_at(buf: &Buffer, x: u16, y: u16) -> char {
    buf.get(x, y).map(|cell| cell.char).unwrap_or('?')
}

// ============================================================================
// Control
// ============================================================================

#[test]
fn test_single_value_and_chrome() {
    let list = options();
    let mut widget = SelectWidget::new();

    let (buf, _) = render_single(&mut widget, &list, Some(&list[0]));

    assert_eq!(widget.area(), Rect::new(0, 0, 40, 3));
    assert!(buf.row_text(0).starts_with('╭'));
    assert!(buf.row_text(1).starts_with("│ First"));
    assert!(buf.row_text(2).starts_with('╰'));
    assert_eq!(char_at(&buf, 33, 1), '×');
    assert_eq!(char_at(&buf, 35, 1), '│');
    assert_eq!(char_at(&buf, 37, 1), '▾');
    assert_eq!(char_at(&buf, 39, 1), '│');
}

#[test]
fn test_placeholder_when_nothing_selected() {
    let list = options();
    let mut widget = SelectWidget::with_config(SelectConfig::new().placeholder("Pick one"));

    let (buf, _) = render_single(&mut widget, &list, None);

    assert!(buf.row_text(1).starts_with("│ Pick one"));
    assert!(buf.get(2, 1).is_some_and(|cell| cell.style.dim));
}

#[test]
fn test_renders_value_from_props_only() {
    let list = options();
    let mut widget = SelectWidget::new();
    let current = Some(list[0].clone());

    // The owner ignores the reported change, so the display must not move
    let mut on_change = |_: Option<SelectOption>| {};
    {
        let mut props = SelectProps::single(&list, current.as_ref(), &mut on_change);
        widget.select_option(&mut props, &list[1]);
    }

    let (buf, _) = render_single(&mut widget, &list, current.as_ref());
    assert!(buf.row_text(1).starts_with("│ First "));
}

#[test]
fn test_width_clamped_and_label_truncated() {
    let list = options();
    let mut widget = SelectWidget::with_config(SelectConfig::new().width(3));

    let (buf, _) = render_single(&mut widget, &list, Some(&list[1]));

    assert_eq!(widget.area().width, 14);
    assert!(buf.row_text(1).starts_with("│ Sec…"));
}

#[test]
fn test_custom_glyphs() {
    let list = options();
    let config = SelectConfig::new().remove_glyphs('x', '-').caret('v');
    let mut single = SelectWidget::with_config(config.clone());
    let mut multiple = SelectWidget::with_config(config);

    let (buf, _) = render_single(&mut single, &list, Some(&list[0]));
    assert_eq!(char_at(&buf, 33, 1), 'x');
    assert_eq!(char_at(&buf, 37, 1), 'v');

    let (buf, _) = render_multiple(&mut multiple, &list, &list[..2]);
    assert!(buf.row_text(1).starts_with("│ First - Second -"));
}

#[test]
fn test_control_hit_regions() {
    let list = options();
    let mut widget = SelectWidget::new();
    let id = widget.id_string();

    let (_, hits) = render_single(&mut widget, &list, Some(&list[0]));

    assert_eq!(hits.focusable(), &[id.clone()]);
    assert_eq!(hits.target_at(5, 1), Some(Part::Container.target(&id)));
    assert_eq!(hits.target_at(37, 1), Some(Part::Container.target(&id)));
    for x in 32..35 {
        assert_eq!(hits.target_at(x, 1), Some(Part::Clear.target(&id)));
    }
    assert_eq!(hits.target_at(45, 1), None);
}

// ============================================================================
// Badges
// ============================================================================

#[test]
fn test_badges_wrap_to_next_line() {
    let badges = layout_badges(&options(), '×', 30);

    let lines: Vec<u16> = badges.iter().map(|b| b.line).collect();
    let offsets: Vec<u16> = badges.iter().map(|b| b.offset).collect();
    assert_eq!(lines, vec![0, 0, 0, 1, 1]);
    assert_eq!(offsets, vec![0, 8, 17, 0, 9]);
    assert_eq!(badges[1].text, "Second ×");
    assert_eq!(badges[1].width, 8);
}

#[test]
fn test_badge_longer_than_line_is_truncated() {
    let long = vec![SelectOption::new("A very long option label", 1)];

    let badges = layout_badges(&long, '×', 10);

    assert_eq!(badges[0].line, 0);
    assert_eq!(badges[0].text, "A very … ×");
    assert_eq!(badges[0].width, 10);
}

#[test]
fn test_multiple_badges_render_in_value_order() {
    let list = options();
    let mut widget = SelectWidget::new();
    let value = vec![list[1].clone(), list[0].clone()];

    let (buf, hits) = render_multiple(&mut widget, &list, &value);
    let id = widget.id_string();

    assert!(buf.row_text(1).starts_with("│ Second × First ×"));
    assert_eq!(hits.target_at(3, 1), Some(Part::Tag(0).target(&id)));
    assert_eq!(hits.target_at(12, 1), Some(Part::Tag(1).target(&id)));
    assert_eq!(hits.target_at(10, 1), Some(Part::Container.target(&id)));
}

#[test]
fn test_multiple_control_grows_with_badge_lines() {
    let list = options();
    let mut widget = SelectWidget::new();

    let (buf, _) = render_multiple(&mut widget, &list, &list);

    assert_eq!(widget.area().height, 4);
    assert!(buf.row_text(2).starts_with("│ Fourth × Fifth ×"));
    assert!(buf.row_text(3).starts_with('╰'));
}

#[test]
fn test_multiple_empty_value_is_one_line() {
    let list = options();
    let mut widget = SelectWidget::new();

    render_multiple(&mut widget, &list, &[]);

    assert_eq!(widget.area().height, 3);
}

// ============================================================================
// Option List
// ============================================================================

#[test]
fn test_closed_list_is_not_drawn() {
    let list = options();
    let mut widget = SelectWidget::new();

    let (buf, hits) = render_single(&mut widget, &list, None);

    assert!(buf.row_text(3).trim().is_empty());
    assert!(hits
        .regions()
        .iter()
        .all(|region| !region.id.contains("/option")));
}

#[test]
fn test_open_list_rows_below_control() {
    let list = options();
    let mut widget = SelectWidget::new();
    widget.open();
    let id = widget.id_string();

    let (buf, hits) = render_single(&mut widget, &list, Some(&list[0]));

    assert!(buf.row_text(3).starts_with('╭'));
    for (i, option) in list.iter().enumerate() {
        let y = 4 + i as u16;
        assert!(buf.row_text(y).starts_with(&format!("│ {}", option.label)));
        assert_eq!(hits.target_at(20, y), Some(Part::Option(i).target(&id)));
    }
    assert!(buf.row_text(9).starts_with('╰'));
    assert_eq!(hits.target_at(0, 9), Some(Part::OptionList.target(&id)));
}

#[test]
fn test_open_empty_list_shows_frame_only() {
    let mut widget = SelectWidget::new();
    widget.open();
    let id = widget.id_string();

    let (buf, hits) = render_single(&mut widget, &[], None);

    assert!(buf.row_text(3).starts_with('╭'));
    assert!(buf.row_text(4).starts_with('╰'));
    assert_eq!(hits.target_at(5, 3), Some(Part::OptionList.target(&id)));
    assert_eq!(hits.target_at(5, 5), None);
}

#[test]
fn test_highlight_and_selection_colors() {
    let list = options();
    let mut widget = SelectWidget::new();
    widget.open();
    widget.highlight(2, list.len());
    let sheet = StyleSheet::standard();

    let (buf, _) = render_single(&mut widget, &list, Some(&list[1]));

    let selected_bg = sheet.resolve(&[Class::Selected]).background;
    let highlighted_bg = sheet.resolve(&[Class::Highlighted]).background;
    let bg = |y: u16| buf.get(5, y).map(|cell| cell.bg);

    assert_eq!(bg(5), selected_bg.map(|c| c.to_rgb()));
    assert_eq!(bg(6), highlighted_bg.map(|c| c.to_rgb()));
    assert_ne!(bg(4), bg(5));
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_container_classes_follow_focus() {
    let list = options();
    let mut widget = SelectWidget::new();
    assert_eq!(widget.container_classes(), vec![Class::Container]);

    let mut on_change = |_: Option<SelectOption>| {};
    let mut props = SelectProps::single(&list, None, &mut on_change);
    let target = widget.id_string();
    widget.handle_event(&Event::Focus { target }, &mut props);

    assert_eq!(class_list(&widget.container_classes()), "container focus");
}

#[test]
fn test_options_classes_follow_open_state() {
    let mut widget = SelectWidget::new();
    assert_eq!(widget.options_classes(), vec![Class::Options]);

    widget.open();
    assert_eq!(class_list(&widget.options_classes()), "options show");
}

#[test]
fn test_option_classes_are_independent() {
    let list = options();
    let mut widget = SelectWidget::new();
    widget.open();
    widget.highlight(1, list.len());

    let value = vec![list[1].clone(), list[3].clone()];
    let mut on_change = |_: Vec<SelectOption>| {};
    let props = SelectProps::multiple(&list, &value, &mut on_change);

    assert_eq!(widget.option_classes(&props, 0), vec![Class::Option]);
    assert_eq!(
        class_list(&widget.option_classes(&props, 1)),
        "option selected highlighted"
    );
    assert_eq!(
        widget.option_classes(&props, 3),
        vec![Class::Option, Class::Selected]
    );
}

#[test]
fn test_class_names_round_trip() {
    for class in Class::ALL {
        assert_eq!(Class::from_name(class.name()), Some(class));
    }
    assert_eq!(Class::from_name("dropdown"), None);
}

// ============================================================================
// Stylesheet
// ============================================================================

#[test]
fn test_resolve_cascades_in_class_order() {
    let red = Color::rgb(255, 0, 0);
    let blue = Color::rgb(0, 0, 255);
    let sheet = StyleSheet::empty()
        .rule(Class::Selected, Style::new().background(red).foreground(red))
        .rule(Class::Highlighted, Style::new().background(blue).bold());

    let style = sheet.resolve(&[Class::Option, Class::Selected, Class::Highlighted]);

    assert_eq!(style.background, Some(blue));
    assert_eq!(style.foreground, Some(red));
    assert!(style.text_style.bold);
}

#[test]
fn test_empty_sheet_resolves_to_defaults() {
    let style = StyleSheet::empty().resolve(&Class::ALL);

    assert_eq!(style.background, None);
    assert_eq!(style.foreground, None);
}
