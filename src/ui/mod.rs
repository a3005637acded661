pub mod app;
pub mod art;
pub mod carousel;
pub mod events;
pub mod footer;
pub mod header;
pub mod info;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod terminal_guard;
pub mod theme;

use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::gallery::Gallery;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::ThemeMode;

pub fn run(gallery: Gallery, theme: ThemeMode, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(gallery, theme);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            // Resize and tick both just trigger the redraw above.
            Ok(AppEvent::Resize(_, _)) | Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
