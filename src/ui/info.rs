use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::gallery::Artwork;
use crate::ui::theme::Palette;

/// Metadata card below (or beside) the image: title, artist, year.
pub struct InfoCard<'a> {
    artwork: &'a Artwork,
}

impl<'a> InfoCard<'a> {
    pub fn new(artwork: &'a Artwork) -> Self {
        Self { artwork }
    }

    pub fn widget(&self, palette: &Palette) -> Paragraph<'static> {
        let title_style = Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(palette.text);
        let divider_style = Style::default().fg(palette.border).add_modifier(Modifier::DIM);

        let lines = vec![
            Line::styled(self.artwork.title.to_string(), title_style),
            Line::styled("─".repeat(24), divider_style),
            Line::styled(self.artwork.artist.to_string(), text_style),
            Line::styled(self.artwork.year.to_string(), text_style),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(palette.card))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}
