//! Modal shown when a request failed because the device is offline.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ERROR_RED, POPUP_BORDER, SELECTION_BG, TEXT, TEXT_MUTED};

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 7;

pub const DIALOG_TITLE: &str = "No network connection";
pub const DIALOG_MESSAGE: &str = "Please check your connection and try again.";

pub fn render_network_dialog(frame: &mut Frame, area: Rect) {
    let area = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);

    // Clear the area behind the dialog
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", DIALOG_TITLE),
            Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(DIALOG_MESSAGE, Style::default().fg(TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(TEXT)
                .bg(SELECTION_BG)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter/Esc to dismiss",
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
