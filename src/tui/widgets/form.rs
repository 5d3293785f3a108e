//! Reusable two-column form widget for text input screens.
//!
//! The widget owns only focus; values and errors are supplied per draw as
//! [`FormRow`]s so the form state stays in the model.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Height of one input box, borders included.
pub const ROW_HEIGHT: u16 = 3;

/// What to draw for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow<'a> {
    /// Display label shown in the border.
    pub label: &'a str,
    /// Current text value.
    pub value: &'a str,
    /// Dimmed hint shown while the value is empty.
    pub placeholder: &'a str,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the label gets a `*` marker.
    pub required: bool,
}

/// Focus over a fixed number of inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    len: usize,
    focus: usize,
}

impl Form {
    /// Creates a form with `len` inputs. Focus starts on the first input.
    pub fn new(len: usize) -> Self {
        Self { len, focus: 0 }
    }

    /// Returns the index of the currently focused input.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to the next input, wrapping around.
    pub fn focus_next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.focus = (self.focus + 1) % self.len;
    }

    /// Moves focus to the previous input, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.focus = (self.focus + self.len - 1) % self.len;
    }

    /// Focuses the input at `index`; out-of-range indexes are ignored.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.len {
            self.focus = index;
        }
    }

    /// Moves focus back to the first input.
    pub fn reset(&mut self) {
        self.focus = 0;
    }

    /// Height needed to draw every row in two columns.
    pub fn height(&self) -> u16 {
        (self.len.div_ceil(2) as u16) * ROW_HEIGHT
    }
}

/// Renders form rows in two columns, left to right then top to bottom.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(rows: &[FormRow<'_>], focus: usize, frame: &mut Frame, area: Rect) {
    let line_count = rows.len().div_ceil(2);
    let lines = Layout::vertical(vec![Constraint::Length(ROW_HEIGHT); line_count]).split(area);

    for (i, row) in rows.iter().enumerate() {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(lines[i / 2]);
        let cell = if i % 2 == 0 { left } else { right };
        draw_row(row, i == focus, frame, cell);
    }
}

fn draw_row(row: &FormRow<'_>, is_focused: bool, frame: &mut Frame, area: Rect) {
    let border_color = if row.error.is_some() {
        Color::Red
    } else if is_focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let label = if row.required {
        format!("{} *", row.label)
    } else {
        row.label.to_string()
    };

    let block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut spans = if row.value.is_empty() && !is_focused {
        vec![Span::styled(row.placeholder, Style::default().fg(Color::DarkGray))]
    } else {
        vec![Span::raw(row.value)]
    };
    if is_focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    // The error sits on the bottom border of its input box.
    if let Some(ref err) = row.error {
        let Some(err_area) = error_area(area, frame.area()) else {
            return;
        };
        let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
        frame.render_widget(error_line, err_area);
    }
}

/// Bottom-border line of an input box, clipped to the frame.
///
/// `None` when the layout squeezed the box below full height or the line
/// falls outside the frame.
fn error_area(area: Rect, bounds: Rect) -> Option<Rect> {
    if area.height < ROW_HEIGHT {
        return None;
    }
    let line = Rect {
        x: area.x.saturating_add(2),
        y: area.y.saturating_add(ROW_HEIGHT - 1),
        width: area.width.saturating_sub(4),
        height: 1,
    };
    let clipped = line.intersection(bounds);
    (!clipped.is_empty()).then_some(clipped)
}
