//! Application state and main loop.

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use folio_config::Config;
use folio_core::{BackgroundStyle, Pointer, Section, Theme, UiState};
use folio_field::{BackgroundState, FrameInfo};
use ratatui::{DefaultTerminal, Frame, widgets::Block};
use tracing::{debug, info, warn};

use crate::content::PageContent;
use crate::copy::{self, CopyFeedback};
use crate::page::{self, Hit, HitMap};
use crate::sections::{ActiveSectionTracker, DocumentLayout, SectionObserver, SmoothScroll};

/// Rows moved per scroll step.
const SCROLL_STEP: f32 = 3.0;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Theme, active section and toast flag.
    ui: UiState,
    /// Configured background; may be `Auto`.
    background_style: BackgroundStyle,
    background: BackgroundState,
    content: PageContent,
    observer: SectionObserver,
    tracker: ActiveSectionTracker,
    scroll: SmoothScroll,
    copy: CopyFeedback,
    /// Latest pointer sample, `None` while the pointer is away.
    pointer: Option<Pointer>,
    /// Terminal size as `(width, height)`.
    viewport: (u16, u16),
    frame_interval: Duration,
    started: Instant,
    frame: u64,
    /// Text waiting to be written to the clipboard.
    pending_clipboard: Option<String>,
    hits: HitMap,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config, theme: Theme) -> Self {
        let mut app = Self {
            running: false,
            ui: UiState::new(theme),
            background_style: config.background,
            background: BackgroundState::new(config.particle_count, config.rotate),
            content: PageContent::new(&config.profile),
            observer: SectionObserver::default(),
            tracker: ActiveSectionTracker::default(),
            scroll: SmoothScroll::default(),
            copy: CopyFeedback::default(),
            pointer: None,
            viewport: (80, 24),
            frame_interval: Duration::from_millis(1000 / u64::from(config.fps.max(1))),
            started: Instant::now(),
            frame: 0,
            pending_clipboard: None,
            hits: HitMap::default(),
        };
        app.sync_background();
        app
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.resize(size.width, size.height);
        info!(width = size.width, height = size.height, "started");

        let mut next_frame = Instant::now();
        while self.running {
            let now = Instant::now();
            if now >= next_frame {
                self.on_frame(now);
                terminal.draw(|frame| self.render(frame))?;
                next_frame = now + self.frame_interval;
            }

            self.handle_crossterm_events(next_frame.saturating_duration_since(Instant::now()))?;

            if let Some(text) = self.pending_clipboard.take() {
                if let Err(e) = copy::copy_to_clipboard(terminal.backend_mut(), &text) {
                    warn!(error = %e, "clipboard write failed");
                }
            }
        }
        info!(frames = self.frame, "stopped");
        Ok(())
    }

    fn layout(&self) -> DocumentLayout {
        let (_, height) = self.viewport;
        DocumentLayout::new(height, |section| self.content.lines(section).len() + 4)
    }

    /// Advance scroll, section tracking, the toast and the background by one frame.
    fn on_frame(&mut self, now: Instant) {
        self.ui.copied = self.copy.tick(now);

        let (_, height) = self.viewport;
        let layout = self.layout();
        self.scroll.clamp(layout.max_scroll(height));
        self.scroll.step();

        let entries = self.observer.observe(&layout, self.scroll.position(), height);
        if let Some(section) = self.tracker.apply(&entries) {
            self.set_active(section);
        }

        self.background.tick(&FrameInfo {
            frame: self.frame,
            elapsed: now.saturating_duration_since(self.started),
            pointer: self.pointer,
        });
        self.frame += 1;
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let view = self.ui.view();

        frame.render_widget(Block::new().style(view.base), area);
        self.background.render(frame, area, view.palette.background);

        let layout = self.layout();
        page::render_content(
            frame,
            area,
            &layout,
            &self.content,
            self.scroll.position(),
            &view,
        );
        self.hits.nav = page::render_nav(frame, area, &view);
        self.hits.theme_toggle = page::render_chrome(frame, area, &view, self.ui.theme.is_dark());
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most `timeout` so frames keep their pace.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(width, height) => self.resize(width, height),
                Event::FocusLost => self.pointer = None,
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => self.toggle_theme(),
            (_, KeyCode::Char('b')) => self.cycle_background(),
            (_, KeyCode::Char('y')) => self.copy_contact(),
            (_, KeyCode::Char(c @ '1'..='4')) => {
                if let Some(section) = Section::from_index(c as usize - '1' as usize) {
                    self.navigate(section);
                }
            }
            (_, KeyCode::Tab) => self.navigate(self.ui.active.next()),
            (_, KeyCode::BackTab) => self.navigate(self.ui.active.prev()),
            (_, KeyCode::Char('j') | KeyCode::Down) => self.scroll_by(SCROLL_STEP),
            (_, KeyCode::Char('k') | KeyCode::Up) => self.scroll_by(-SCROLL_STEP),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => {
                self.scroll_by(self.viewport.1 as f32)
            }
            (_, KeyCode::PageUp) => self.scroll_by(-(self.viewport.1 as f32)),
            (_, KeyCode::Home | KeyCode::Char('g')) => self.navigate(Section::Home),
            (_, KeyCode::End | KeyCode::Char('G')) => self.navigate(Section::About),
            _ => {}
        }
    }

    /// Track the pointer, scroll with the wheel and handle clicks.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let (width, height) = self.viewport;
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer = Some(Pointer::from_cell(mouse.column, mouse.row, width, height));
            }
            MouseEventKind::ScrollDown => self.scroll_by(SCROLL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-SCROLL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hits.hit(mouse.column, mouse.row) {
                    Some(Hit::Nav(section)) => self.navigate(section),
                    Some(Hit::ThemeToggle) => self.toggle_theme(),
                    None => {}
                }
            }
            _ => {}
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.observer.reset();
        let max = self.layout().max_scroll(height);
        self.scroll.clamp(max);
    }

    fn scroll_by(&mut self, delta: f32) {
        let max = self.layout().max_scroll(self.viewport.1);
        self.scroll.scroll_by(delta, max);
    }

    /// Make `section` active right away and scroll to it.
    fn navigate(&mut self, section: Section) {
        self.set_active(section);
        let layout = self.layout();
        self.scroll
            .scroll_to(layout.span(section).top, layout.max_scroll(self.viewport.1));
    }

    fn set_active(&mut self, section: Section) {
        if self.ui.active != section {
            debug!(section = section.id(), "active section");
        }
        self.ui.active = section;
        self.tracker.set(section);
        self.sync_background();
    }

    /// Mount the scene that belongs to the active section.
    fn sync_background(&mut self) {
        let style = self.background_style.for_section(self.ui.active);
        self.background.show(style, self.ui.view().points);
    }

    fn toggle_theme(&mut self) {
        self.ui.theme = self.ui.theme.toggle();
        debug!(theme = ?self.ui.theme, "theme toggled");
        self.background.set_point_style(self.ui.view().points);
    }

    fn cycle_background(&mut self) {
        self.background_style = self.background_style.next();
        info!(background = %self.background_style, "background changed");
        self.sync_background();
    }

    fn copy_contact(&mut self) {
        let Some(contact) = self.content.contact() else {
            return;
        };
        self.pending_clipboard = Some(contact.to_string());
        self.copy.trigger(Instant::now());
        self.ui.copied = true;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use folio_config::Profile;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn small_config() -> Config {
        Config {
            particle_count: 200,
            ..Config::default()
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_starts_on_home_with_orbs() {
        let app = App::new(&small_config(), Theme::Dark);
        assert_eq!(app.ui.active, Section::Home);
        assert_eq!(app.background.style(), BackgroundStyle::Orbs);
    }

    #[test]
    fn test_navigate_switches_section_and_scene() {
        let mut app = App::new(&small_config(), Theme::Dark);
        app.on_key_event(press(KeyCode::Char('4')));
        assert_eq!(app.ui.active, Section::About);
        assert_eq!(app.background.style(), BackgroundStyle::Blackhole);
        assert_eq!(app.scroll.target(), app.layout().span(Section::About).top);
    }

    #[test]
    fn test_scroll_updates_active_section() {
        let mut app = App::new(&small_config(), Theme::Dark);
        app.resize(80, 24);
        let now = Instant::now();
        app.on_frame(now);
        assert_eq!(app.ui.active, Section::Home);

        app.on_key_event(press(KeyCode::PageDown));
        for i in 0..60 {
            app.on_frame(now + Duration::from_millis(16 * i));
        }
        assert_eq!(app.ui.active, Section::Skills);
    }

    #[test]
    fn test_theme_toggle_key() {
        let mut app = App::new(&small_config(), Theme::Dark);
        app.on_key_event(press(KeyCode::Char('t')));
        assert_eq!(app.ui.theme, Theme::Light);
    }

    #[test]
    fn test_copy_shows_toast_then_hides() {
        let mut app = App::new(&small_config(), Theme::Dark);
        app.on_key_event(press(KeyCode::Char('y')));
        assert_eq!(
            app.pending_clipboard.as_deref(),
            Some(Profile::default().contact.as_str())
        );
        assert!(app.ui.view().toast_visible);

        app.on_frame(Instant::now() + copy::TOAST_DURATION + Duration::from_millis(1));
        assert!(!app.ui.copied);
    }

    #[test]
    fn test_copy_without_contact_does_nothing() {
        let config = Config {
            profile: Profile {
                contact: String::new(),
                ..Profile::default()
            },
            ..small_config()
        };
        let mut app = App::new(&config, Theme::Dark);
        app.on_key_event(press(KeyCode::Char('y')));
        assert!(app.pending_clipboard.is_none());
        assert!(!app.ui.copied);
    }

    #[test]
    fn test_pointer_tracking() {
        let mut app = App::new(&small_config(), Theme::Dark);
        app.resize(81, 25);
        app.on_mouse_event(mouse(MouseEventKind::Moved, 80, 0));
        assert_eq!(app.pointer, Some(Pointer::new(1.0, 1.0)));
        app.on_mouse_event(mouse(MouseEventKind::ScrollDown, 10, 10));
        assert_eq!(app.scroll.target(), SCROLL_STEP);
    }

    #[test]
    fn test_background_cycle() {
        let mut app = App::new(&small_config(), Theme::Dark);
        app.on_key_event(press(KeyCode::Char('b')));
        assert_eq!(app.background_style, BackgroundStyle::Blackhole);
        assert_eq!(app.background.style(), BackgroundStyle::Blackhole);
        app.on_key_event(press(KeyCode::Char('b')));
        app.on_key_event(press(KeyCode::Char('b')));
        assert_eq!(app.background.style(), BackgroundStyle::None);
        assert!(app.background.scheduler().is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&small_config(), Theme::Dark);
        app.running = true;
        app.on_key_event(press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_render_and_click_nav() {
        let mut app = App::new(&small_config(), Theme::Light);
        app.resize(80, 24);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        app.on_frame(Instant::now());
        terminal.draw(|frame| app.render(frame)).unwrap();

        let (rect, section) = app.hits.nav[2];
        assert_eq!(section, Section::Projects);
        app.on_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), rect.x, rect.y));
        assert_eq!(app.ui.active, Section::Projects);

        let toggle = app.hits.theme_toggle;
        app.on_mouse_event(mouse(
            MouseEventKind::Down(MouseButton::Left),
            toggle.x,
            toggle.y,
        ));
        assert_eq!(app.ui.theme, Theme::Dark);
    }
}
