//! Drive card widget: a bordered summary of one drive with its status and apply button.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{ButtonTone, Drive, DriveStatus, derive_view, format_drive_date};

/// Height of one card, borders included.
pub const CARD_HEIGHT: u16 = 8;

fn tone_color(tone: ButtonTone) -> Color {
    match tone {
        ButtonTone::Affirmative => Color::Green,
        ButtonTone::Negative => Color::Red,
        ButtonTone::Neutral => Color::DarkGray,
    }
}

fn badge_style(status: DriveStatus) -> Style {
    match status {
        DriveStatus::Applied => Style::default().fg(Color::Black).bg(Color::Cyan),
        DriveStatus::NotEligible => Style::default().fg(Color::White).bg(Color::Red),
        DriveStatus::Eligible => Style::default().fg(Color::Black).bg(Color::Gray),
    }
}

/// Renders a drive card. `selected` marks the card the cursor is on.
#[mutants::skip]
pub fn draw_drive_card(drive: &Drive, selected: bool, frame: &mut Frame, area: Rect) {
    let view = derive_view(drive);

    let border_style = match (selected, view.highlighted) {
        (true, _) => Style::default().fg(Color::Yellow),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", drive.company_name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", view.status_label), badge_style(view.status)),
    ]);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled(
            drive.role.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Package: ", label),
            Span::styled(drive.package.as_str(), Style::default().fg(Color::Green)),
            Span::styled("   Drive Date: ", label),
            Span::raw(format_drive_date(&drive.drive_date)),
        ]),
        Line::from(vec![
            Span::styled("Eligibility Criteria: ", label),
            Span::raw(drive.eligibility.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Selection Process: ", label),
            Span::raw(drive.process.as_str()),
        ]),
    ];

    let [details_area, action_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    frame.render_widget(Paragraph::new(lines), details_area);

    let button_style = if view.button_enabled {
        Style::default()
            .fg(Color::Black)
            .bg(tone_color(view.button_tone))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(tone_color(view.button_tone))
    };
    let helper = if view.status == DriveStatus::Applied {
        format!("✓ {}", view.helper_text)
    } else {
        view.helper_text.to_string()
    };
    let button = format!("[ {} ]", view.button_label);
    let [helper_area, button_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(button.chars().count() as u16),
    ])
    .areas(action_area);
    frame.render_widget(Paragraph::new(Span::styled(helper, label)), helper_area);
    frame.render_widget(Paragraph::new(Span::styled(button, button_style)), button_area);
}
