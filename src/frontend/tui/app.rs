use crate::core::layout::HostLayout;
use crate::core::AppCore;
use crate::frontend::tui::{healthbar::HealthbarView, switch::SwitchView};
use crate::frontend::{Frontend, FrontendEvent};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
    Terminal,
};
use std::io;
use std::time::Duration;

/// TUI Frontend using ratatui
///
/// Renders the host screen with ratatui and handles events via crossterm.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    restored: bool,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enables mouse capture, and enters alternate screen.
    pub fn new(poll_timeout: Duration) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout,
            restored: false,
        })
    }

    /// Convert crossterm event to FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (ignore repeats and releases)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::key(key_event.code, key_event.modifiers))
            }
            Event::Mouse(mouse_event) => Some(FrontendEvent::mouse(
                mouse_event.kind,
                mouse_event.column,
                mouse_event.row,
            )),
            Event::Resize(w, h) => Some(FrontendEvent::resize(w, h)),
            _ => None,
        }
    }
}

/// Draw the whole host screen into a buffer
///
/// The terminal can shrink between the last resize event and this draw, so a
/// layout built for another area is recomputed for `area` first.
pub fn render_host(core: &AppCore, area: Rect, buf: &mut Buffer) {
    let theme = &core.theme;
    let layout = if core.layout.area == area {
        core.layout
    } else {
        tracing::debug!("Layout stale ({:?} vs {:?}), recomputing", core.layout.area, area);
        HostLayout::compute(area, core.config.healthbar.show_border)
    };

    Block::default()
        .style(Style::default().bg(theme.window_background))
        .render(area, buf);

    Paragraph::new(Line::from(core.config.healthbar.title.as_str()))
        .style(
            Style::default()
                .fg(theme.window_title)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .render(layout.title, buf);

    HealthbarView::new(&core.config.healthbar, theme)
        .fill(core.slider.fill_ratio(), core.slider.fill_width())
        .dragging(core.slider.is_dragging())
        .render(layout.bar_outer, buf);

    SwitchView::new(core.toggle.is_dark(), theme).render(layout.switch, buf);
    Paragraph::new(Line::from("Dark mode"))
        .style(Style::default().fg(theme.text_primary))
        .render(layout.switch_label, buf);

    Paragraph::new(Line::from("drag the bar · t: theme · q: quit"))
        .style(Style::default().fg(theme.text_secondary))
        .alignment(Alignment::Center)
        .render(layout.hint, buf);
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        // Block for the first event up to the timeout, then drain what's queued
        let mut timeout = self.poll_timeout;
        while event::poll(timeout)? {
            if let Some(frontend_event) = Self::convert_event(event::read()?) {
                events.push(frontend_event);
            }
            timeout = Duration::ZERO;
        }

        Ok(events)
    }

    fn render(&mut self, core: &AppCore) -> Result<()> {
        self.terminal.draw(|f| {
            let area = f.area();
            render_host(core, area, f.buffer_mut());
        })?;

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_convert_event_filters_key_releases() {
        let press = Event::Key(KeyEvent {
            code: KeyCode::Char('t'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert_eq!(
            TuiFrontend::convert_event(press),
            Some(FrontendEvent::key(KeyCode::Char('t'), KeyModifiers::NONE))
        );

        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('t'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(TuiFrontend::convert_event(release), None);

        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 2,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            TuiFrontend::convert_event(mouse),
            Some(FrontendEvent::mouse(MouseEventKind::Down(MouseButton::Left), 7, 2))
        );
    }

    #[test]
    fn test_render_host_screen() {
        let mut core = AppCore::new(Config::default(), 60, 12);
        let bar = core.layout.bar_inner;
        core.handle_mouse(MouseEventKind::Down(MouseButton::Left), bar.x, bar.y);
        core.handle_mouse(MouseEventKind::Up(MouseButton::Left), bar.x, bar.y);
        assert_eq!(core.slider.value(), 0);

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("test terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                render_host(&core, area, f.buffer_mut());
            })
            .expect("draw");

        let buf = terminal.backend().buffer();
        let row: String = (bar.x..bar.x + bar.width)
            .map(|x| buf[(x, bar.y)].symbol().to_string())
            .collect();
        assert!(row.contains("0%"));
        assert!((bar.x..bar.x + bar.width).all(|x| buf[(x, bar.y)].bg != core.theme.bar_fill));

        let title: String = (0..60)
            .map(|x| buf[(x, core.layout.title.y)].symbol().to_string())
            .collect();
        assert!(title.contains("HP"));
    }

    #[test]
    fn test_render_host_after_shrink_stays_in_buffer() {
        // Layout still sized for 100x30 when the terminal is already 40x10
        let core = AppCore::new(Config::default(), 100, 30);
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        render_host(&core, area, &mut buf);

        let fresh = HostLayout::compute(area, true);
        let row: String = (fresh.bar_inner.x..fresh.bar_inner.x + fresh.bar_inner.width)
            .map(|x| buf[(x, fresh.bar_inner.y)].symbol().to_string())
            .collect();
        assert!(row.contains("100%"));
        assert_eq!(buf[(fresh.bar_inner.x, fresh.bar_inner.y)].bg, core.theme.bar_fill);
    }
}
