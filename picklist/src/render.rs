use crate::buffer::{Buffer, Cell};
use crate::config::MIN_WIDTH;
use crate::hit::HitMap;
use crate::layout::Rect;
use crate::option::SelectOption;
use crate::props::SelectProps;
use crate::stylesheet::{Class, StyleSheet};
use crate::text::{char_width, display_width, pad_to_width, truncate_to_width};
use crate::types::Style;
use crate::widget::{Part, SelectWidget};

// Columns taken by border, padding, clear, divider and caret around the value area.
const CHROME_WIDTH: u16 = 10;

/// Where a badge goes inside the value area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgePlacement {
    /// Index into the selected values
    pub index: usize,
    pub line: u16,
    /// Column offset from the start of the value area
    pub offset: u16,
    pub text: String,
    pub width: u16,
}

/// Lay out one badge per selected value, wrapping onto a new line when the
/// next badge would not fit. Labels too long for a line are truncated.
pub fn layout_badges(
    selected: &[SelectOption],
    remove_glyph: char,
    max_width: u16,
) -> Vec<BadgePlacement> {
    let mut placements = Vec::with_capacity(selected.len());
    let mut line = 0;
    let mut col: u16 = 0;

    for (index, option) in selected.iter().enumerate() {
        let limit = max_width.saturating_sub(1 + char_width(remove_glyph) as u16);
        let label = truncate_to_width(&option.label, limit as usize);
        let text = format!("{label} {remove_glyph}");
        let width = display_width(&text) as u16;

        if col > 0 && col.saturating_add(width) > max_width {
            line += 1;
            col = 0;
        }

        placements.push(BadgePlacement {
            index,
            line,
            offset: col,
            text,
            width,
        });
        col = col.saturating_add(width + 1);
    }

    placements
}

impl SelectWidget {
    fn control_width(&self, available: u16) -> u16 {
        self.config.width.min(available).max(MIN_WIDTH)
    }

    /// Height of the control when rendered `available_width` columns wide.
    pub fn measure(&self, props: &SelectProps<'_>, available_width: u16) -> u16 {
        let value_width = self.control_width(available_width) - CHROME_WIDTH;
        let lines = if props.is_multiple() {
            layout_badges(props.selected(), self.config.remove_glyph, value_width)
                .last()
                .map(|badge| badge.line + 1)
                .unwrap_or(1)
        } else {
            1
        };
        lines + 2
    }

    pub fn container_classes(&self) -> Vec<Class> {
        let mut classes = vec![Class::Container];
        if self.state.focused {
            classes.push(Class::Focus);
        }
        classes
    }

    pub fn options_classes(&self) -> Vec<Class> {
        let mut classes = vec![Class::Options];
        if self.state.is_open {
            classes.push(Class::Show);
        }
        classes
    }

    /// Classes of the option row at `index`. Selected and highlighted are
    /// independent and may both apply.
    pub fn option_classes(&self, props: &SelectProps<'_>, index: usize) -> Vec<Class> {
        let mut classes = vec![Class::Option];
        if let Some(option) = props.options.get(index) {
            if self.is_option_selected(props, option) {
                classes.push(Class::Selected);
            }
        }
        if self.is_highlighted(index) {
            classes.push(Class::Highlighted);
        }
        classes
    }

    fn part_style(&self, sheet: &StyleSheet, parts: &[Class]) -> Style {
        let mut classes = self.container_classes();
        classes.extend_from_slice(parts);
        sheet.resolve(&classes)
    }

    /// Render the control at the top-left of `area` and register its hit
    /// regions. Returns the area the control occupies.
    ///
    /// The option list is drawn separately by [`SelectWidget::render_overlay`]
    /// so that it can be painted over whatever follows the control.
    pub fn render(
        &mut self,
        props: &SelectProps<'_>,
        area: Rect,
        buf: &mut Buffer,
        sheet: &StyleSheet,
        hits: &mut HitMap,
    ) -> Rect {
        let width = self.control_width(area.width);
        let height = self.measure(props, area.width);
        let rect = Rect::new(area.x, area.y, width, height);
        self.area = rect;

        let id = self.id_string();
        let container_style = sheet.resolve(&self.container_classes());
        buf.fill(rect, &container_style);
        draw_border(buf, rect, &container_style);
        hits.register_focusable(&id);
        hits.register(rect, Part::Container.target(&id), &id);

        let inner = rect.inner();
        let value_x = inner.x + 1;
        let value_width = width - CHROME_WIDTH;
        let value_end = value_x + value_width;

        if props.is_multiple() {
            let badge_style = self.part_style(sheet, &[Class::Value, Class::OptionBadge]);
            let remove_style =
                self.part_style(sheet, &[Class::Value, Class::OptionBadge, Class::RemoveBtn]);
            let glyph_width = char_width(self.config.remove_glyph) as u16;

            for badge in layout_badges(props.selected(), self.config.remove_glyph, value_width) {
                let x = value_x + badge.offset;
                let y = inner.y + badge.line;
                buf.write_str(x, y, &badge.text, value_end, &badge_style);
                let glyph_x = (x + badge.width).saturating_sub(glyph_width);
                buf.write_str(
                    glyph_x,
                    y,
                    &self.config.remove_glyph.to_string(),
                    value_end,
                    &remove_style,
                );
                hits.register(
                    Rect::new(x, y, badge.width, 1),
                    Part::Tag(badge.index).target(&id),
                    &id,
                );
            }
        } else if let Some(option) = props.selected().first() {
            let style = self.part_style(sheet, &[Class::Value]);
            let label = truncate_to_width(&option.label, value_width as usize);
            buf.write_str(value_x, inner.y, &label, value_end, &style);
        } else if let Some(placeholder) = &self.config.placeholder {
            let style = self.part_style(sheet, &[Class::Value]).dim();
            let text = truncate_to_width(placeholder, value_width as usize);
            buf.write_str(value_x, inner.y, &text, value_end, &style);
        }

        let clear_x = rect.right() - 7;
        let divider_x = rect.right() - 5;
        let caret_x = rect.right() - 3;

        let clear_style = self.part_style(sheet, &[Class::ClearBtn]);
        put(buf, clear_x, inner.y, self.config.clear_glyph, &clear_style);
        hits.register(
            Rect::new(clear_x - 1, inner.y, 3, 1),
            Part::Clear.target(&id),
            &id,
        );

        let divider_style = self.part_style(sheet, &[Class::Divider]);
        for y in inner.top()..inner.bottom() {
            put(buf, divider_x, y, self.config.divider_glyph, &divider_style);
        }

        let caret_style = self.part_style(sheet, &[Class::Caret]);
        put(buf, caret_x, inner.y, self.config.caret_glyph, &caret_style);

        rect
    }

    /// Render the option list below the control, if open.
    pub fn render_overlay(
        &self,
        props: &SelectProps<'_>,
        buf: &mut Buffer,
        sheet: &StyleSheet,
        hits: &mut HitMap,
    ) {
        if !self.state.is_open {
            return;
        }

        let id = self.id_string();
        let rows = u16::try_from(props.options.len()).unwrap_or(u16::MAX);
        let list = self.area.below(rows.saturating_add(2));

        let frame_classes = self.options_classes();
        let frame_style = sheet.resolve(&frame_classes);
        buf.fill(list, &frame_style);
        draw_border(buf, list, &frame_style);
        hits.register(list, Part::OptionList.target(&id), &id);

        let inner = list.inner();
        for (index, option) in props.options.iter().enumerate() {
            let y = inner.y.saturating_add(index as u16);
            if y >= inner.bottom() || y >= buf.height() {
                break;
            }

            let mut classes = frame_classes.clone();
            classes.extend(self.option_classes(props, index));
            let style = sheet.resolve(&classes);

            let row = Rect::new(inner.x, y, inner.width, 1);
            let text = pad_to_width(&format!(" {}", option.label), inner.width as usize);
            buf.write_str(row.x, y, &text, row.right(), &style);
            hits.register(row, Part::Option(index).target(&id), &id);
        }
    }
}

fn put(buf: &mut Buffer, x: u16, y: u16, ch: char, style: &Style) {
    let base = buf.get(x, y).copied().unwrap_or_default();
    buf.set(
        x,
        y,
        Cell {
            char: ch,
            wide_continuation: false,
            ..base
        }
        .styled(style),
    );
}

fn draw_border(buf: &mut Buffer, rect: Rect, style: &Style) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    put(buf, rect.x, rect.y, '╭', style);
    put(buf, right, rect.y, '╮', style);
    put(buf, rect.x, bottom, '╰', style);
    put(buf, right, bottom, '╯', style);

    for x in rect.x + 1..right {
        put(buf, x, rect.y, '─', style);
        put(buf, x, bottom, '─', style);
    }
    for y in rect.y + 1..bottom {
        put(buf, rect.x, y, '│', style);
        put(buf, right, y, '│', style);
    }
}
