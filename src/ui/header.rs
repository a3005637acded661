use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{Palette, ThemeMode};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title on the left, `index / count` plus the theme name on the
    /// right.
    pub fn widget(
        &self,
        area: Rect,
        position: (usize, usize),
        theme: ThemeMode,
        palette: &Palette,
    ) -> Paragraph<'static> {
        let (index, count) = position;
        let left = " Art Space";
        let right = format!("{} / {}  {} ", index, count, theme.label());

        // Pad with char counts, not byte counts.
        let padding = (area.width as usize)
            .saturating_sub(left.chars().count())
            .saturating_sub(right.chars().count());

        let title_style = Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD);
        let status_style = Style::default().fg(palette.text);

        let line = Line::from(vec![
            Span::styled(left, title_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(right, status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}
