//! The image surface.
//!
//! Terminals cannot show the actual paintings, so each `ImageRef` key
//! resolves to a built-in ASCII rendition. The frame carries the artwork
//! title as its text label.

use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::gallery::Artwork;
use crate::ui::theme::Palette;

const STARRY_NIGHT: &[&str] = &[
    r"   .    *       ~~~~~        *   . ",
    r"  *   ~~( @ )~~    .    *     .    ",
    r" ~~~~~~   ~~~   ~~~~~~~   ( o )  * ",
    r"    .   *    ~~~~~    .    ~~~     ",
    r"  /\     .        *     .      *   ",
    r" /||\   __~-~__________            ",
    r" ||||  /       ^       \______     ",
    r" |||| |  ^   ^   ^   ^  | _  |     ",
    r" ^^^^ |_^__^______^____^_||_||____ ",
];

const THE_SCREAM: &[&str] = &[
    r" ~~~~ ~~~~~~ ~~~~~ ~~~~~~ ~~~~~~~~ ",
    r"  ~~~~~ ~~~~ ~~~~~~~ ~~~~~ ~~~~~   ",
    r" ================================= ",
    r"            _____                  ",
    r"           /     \                 ",
    r"          | o   o |                ",
    r"          |   O   |                ",
    r"           \_____/                 ",
    r"          /|     |\                ",
    r" ________/ |_____| \_____________  ",
];

const PERSISTENCE_OF_MEMORY: &[&str] = &[
    r"         _____                     ",
    r"     ___/     \___        /\       ",
    r"    /   12        \      /  \      ",
    r"   |  9    +    3  |____/    \__   ",
    r"    \___    6   ___/               ",
    r"        \______/      ______       ",
    r"   ______        ____/  12  \___   ",
    r"  /  12  \______/  9       3    \  ",
    r" |_9___3______________6_________|  ",
];

const UNKNOWN: &[&str] = &[
    r" +----------------------+ ",
    r" |                      | ",
    r" |    no rendition      | ",
    r" |     available        | ",
    r" |                      | ",
    r" +----------------------+ ",
];

pub struct ArtSurface<'a> {
    artwork: &'a Artwork,
}

impl<'a> ArtSurface<'a> {
    pub fn new(artwork: &'a Artwork) -> Self {
        Self { artwork }
    }

    pub fn widget(&self, palette: &Palette) -> Paragraph<'static> {
        let text_style = Style::default().fg(palette.text);
        let lines: Vec<Line> = rendition(self.artwork.image.key())
            .iter()
            .map(|row| Line::styled((*row).to_string(), text_style))
            .collect();

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(palette.card))
            .block(
                Block::default()
                    .title(self.artwork.title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}

fn rendition(key: &str) -> &'static [&'static str] {
    match key {
        "starry-night" => STARRY_NIGHT,
        "the-scream" => THE_SCREAM,
        "persistence-of-memory" => PERSISTENCE_OF_MEMORY,
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery;

    #[test]
    fn every_builtin_artwork_has_a_rendition() {
        for artwork in gallery::builtin() {
            let rows = rendition(artwork.image.key());
            assert!(!rows.is_empty(), "missing rendition for {}", artwork.title);
            assert_ne!(rows, UNKNOWN, "fallback used for {}", artwork.title);
        }
    }

    #[test]
    fn unknown_key_falls_back_to_placeholder() {
        assert_eq!(rendition("mona-lisa"), UNKNOWN);
    }
}
