//! Status bar widget: persistent one-line board summary.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::DriveBoard;

/// Data passed to the status bar widget; decoupled from [`DriveBoard`] for testing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Total drives on the board.
    pub drives: usize,
    /// Drives the viewer can still apply to.
    pub open: usize,
    /// Drives already applied to.
    pub applied: usize,
    /// Submitted drive requests awaiting admin approval.
    pub awaiting_approval: usize,
}

impl StatusBarContext {
    pub fn from_board(board: &DriveBoard) -> Self {
        Self {
            drives: board.drives().len(),
            open: board.open_count(),
            applied: board.applied_count(),
            awaiting_approval: board.awaiting_approval().len(),
        }
    }
}

/// Renders a one-line status bar.
///
/// Display format (Cyan, open count in Green):
/// `5 drives  2 open  1 applied` followed by `  3 awaiting approval` when any
/// submitted requests are pending.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let green = Style::default().fg(Color::Green);
    let yellow = Style::default().fg(Color::Yellow);

    let mut spans = vec![
        Span::styled(format!("{} drives  ", ctx.drives), cyan),
        Span::styled(format!("{} open", ctx.open), green),
        Span::styled(format!("  {} applied", ctx.applied), cyan),
    ];
    if ctx.awaiting_approval > 0 {
        spans.push(Span::styled(
            format!("  {} awaiting approval", ctx.awaiting_approval),
            yellow,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
