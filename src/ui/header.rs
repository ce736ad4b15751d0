use crate::ui::theme::{ACCEPTED_GREEN, BORDER, BRAND_ORANGE, SEPARATOR, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Header<'a> {
    site: &'a str,
    location: &'a str,
    loading: bool,
    tick: usize,
}

impl<'a> Header<'a> {
    pub fn new(site: &'a str, location: &'a str) -> Self {
        Self {
            site,
            location,
            loading: false,
            tick: 0,
        }
    }

    /// Shows the spinner frame for `tick` while a request is in flight.
    pub fn loading(mut self, loading: bool, tick: usize) -> Self {
        self.loading = loading;
        self.tick = tick;
        self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "stack",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "browse",
                Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.site.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.location.to_string(), text_style),
        ];
        if self.loading {
            let frame = SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()];
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} Loading...", frame),
                Style::default().fg(ACCEPTED_GREEN),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}
