use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::Palette;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Previous/Next buttons styled like the original controls, key hints,
    /// and the version right-aligned.
    pub fn widget(&self, area: Rect, palette: &Palette) -> Paragraph<'static> {
        let button_style = Style::default()
            .bg(palette.button_background)
            .fg(palette.button_text);
        let hint_style = Style::default().fg(palette.text).add_modifier(Modifier::DIM);

        let previous = " ◀ Previous ";
        let next = " Next ▶ ";
        let hints = "   t: Theme │ ?: Help │ q: Quit";
        let version = format!("v{} ", VERSION);

        // Pad with char counts, not byte counts.
        let used = previous.chars().count()
            + 2
            + next.chars().count()
            + hints.chars().count()
            + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(previous, button_style),
            Span::raw("  "),
            Span::styled(next, button_style),
            Span::styled(hints, hint_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(version, hint_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}
