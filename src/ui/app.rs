use crate::gallery::{Artwork, Gallery};
use crate::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use crate::ui::mvi::Reducer;
use crate::ui::theme::ThemeMode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::debug;

/// Top-level UI state: the gallery, the carousel selection, the active
/// theme, and popup focus.
///
/// Navigation goes through the carousel reducer; the renderer re-reads
/// state after every dispatch, so there is no notification machinery.
pub struct App {
    gallery: Gallery,
    carousel: CarouselState,
    theme: ThemeMode,
    show_help: bool,
    should_quit: bool,
}

impl App {
    pub fn new(gallery: Gallery, theme: ThemeMode) -> Self {
        let carousel = CarouselState::new(gallery.len());
        Self {
            gallery,
            carousel,
            theme,
            show_help: false,
            should_quit: false,
        }
    }

    /// The artwork under the current selection. Total: the gallery is
    /// non-empty by construction and the reducer keeps the index in range.
    pub fn current_artwork(&self) -> &Artwork {
        self.gallery.get(self.carousel.current)
    }

    /// One-based position for display, e.g. `(2, 3)` renders as "2 / 3".
    pub fn position(&self) -> (usize, usize) {
        (self.carousel.current + 1, self.carousel.count)
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // The help popup is modal: any key dismisses it.
        if self.show_help {
            self.show_help = false;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
                self.dispatch(CarouselIntent::Previous);
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
                self.dispatch(CarouselIntent::Next);
            }
            KeyCode::Char('t') => self.theme = self.theme.toggled(),
            KeyCode::Char('?') => self.show_help = true,
            _ => {}
        }
    }

    fn dispatch(&mut self, intent: CarouselIntent) {
        self.carousel = CarouselReducer::reduce(self.carousel, intent);
        debug!(
            index = self.carousel.current,
            title = self.current_artwork().title,
            "selection moved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        let gallery = Gallery::new(gallery::builtin()).unwrap();
        App::new(gallery, ThemeMode::Dark)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn starts_on_first_artwork() {
        let app = app();
        assert_eq!(app.current_artwork().title, "The Starry Night");
        assert_eq!(app.position(), (1, 3));
    }

    #[test]
    fn arrow_keys_navigate_with_wrap_around() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.position(), (2, 3));
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.position(), (3, 3));
        assert_eq!(app.current_artwork().title, "The Persistence of Memory");
    }

    #[test]
    fn vi_and_mnemonic_keys_navigate() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.position(), (2, 3));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.position(), (3, 3));
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.position(), (1, 3));
    }

    #[test]
    fn q_and_escape_request_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app2 = app;
        app2.should_quit = false;
        press(&mut app2, KeyCode::Esc);
        assert!(app2.should_quit());
    }

    #[test]
    fn t_toggles_the_theme() {
        let mut app = app();
        assert_eq!(app.theme(), ThemeMode::Dark);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme(), ThemeMode::Light);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme(), ThemeMode::Dark);
    }

    #[test]
    fn help_popup_swallows_the_next_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help());

        press(&mut app, KeyCode::Right);
        assert!(!app.show_help());
        // The key that closed the popup must not navigate.
        assert_eq!(app.position(), (1, 3));
    }

    #[test]
    fn key_release_events_are_ignored() {
        let mut app = app();
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)
        };
        app.on_key(release);
        assert_eq!(app.position(), (1, 3));
    }
}
