use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::art::ArtSurface;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::info::InfoCard;
use crate::ui::layout::{centered_rect, layout_regions, LayoutMode};
use crate::ui::theme::Palette;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let palette = Palette::for_mode(app.theme());
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(header, app.position(), app.theme(), &palette),
        header,
    );

    let artwork = app.current_artwork();
    let art = ArtSurface::new(artwork);
    let info = InfoCard::new(artwork);

    match LayoutMode::for_area(body) {
        LayoutMode::SideBySide => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                .split(body);
            frame.render_widget(art.widget(&palette), columns[0]);
            frame.render_widget(info.widget(&palette), columns[1]);
        }
        LayoutMode::Stacked => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(6)])
                .split(body);
            frame.render_widget(art.widget(&palette), rows[0]);
            frame.render_widget(info.widget(&palette), rows[1]);
        }
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, &palette), footer);

    if app.show_help() {
        let lines = vec![
            Line::from("←  h  p   previous artwork"),
            Line::from("→  l  n   next artwork"),
            Line::from("t         toggle light/dark"),
            Line::from("q  Esc    quit"),
            Line::from(""),
            Line::from("press any key to close"),
        ];
        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
        let height = lines.len() as u16 + 2;
        let popup_area = centered_rect(body, width, height);

        frame.render_widget(Clear, popup_area);
        let popup = Block::default()
            .title("Keys")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border));
        let widget = Paragraph::new(lines)
            .style(Style::default().fg(palette.text).bg(palette.card))
            .block(popup);
        frame.render_widget(widget, popup_area);
    }
}
