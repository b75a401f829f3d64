use crate::config::Config;
use crate::core::input_router::{MouseRoute, PointerRouter};
use crate::core::layout::HostLayout;
use crate::theme::{AppTheme, ThemePresets};
use crate::widgets::{BoundingBox, MoveListeners, SliderSurface, ThemeToggle, ValueSlider};
use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};
use ratatui::layout::Rect;

/// The bar's root element on screen
///
/// Terminal columns are discrete cells, so the first cell reports position 0
/// and the last cell the full width. A one-cell bar has zero width.
#[derive(Debug, Default)]
pub struct HealthbarElement {
    rect: Rect,
    listeners: MoveListeners,
}

impl SliderSurface for HealthbarElement {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.rect.x as f64, self.rect.width.saturating_sub(1) as f64)
    }

    fn move_listeners(&self) -> &MoveListeners {
        &self.listeners
    }
}

/// Core application state (frontend-agnostic)
///
/// Owns the healthbar, the theme switch and the current layout. Frontends
/// feed it input and render from it.
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// The draggable healthbar
    pub slider: ValueSlider,

    /// Light/dark switch
    pub toggle: ThemeToggle,

    /// Active theme, follows `toggle`
    pub theme: AppTheme,

    /// Current screen layout
    pub layout: HostLayout,

    /// Application running flag
    pub running: bool,

    /// Set when state changed since the last render
    pub needs_render: bool,

    bar_element: HealthbarElement,
    router: PointerRouter,
}

impl AppCore {
    pub fn new(config: Config, width: u16, height: u16) -> Self {
        let toggle = ThemeToggle::from_theme_name(&config.ui.theme);
        let mut core = Self {
            theme: ThemePresets::for_mode(toggle.is_dark()),
            toggle,
            slider: ValueSlider::new(),
            layout: HostLayout::default(),
            running: true,
            needs_render: true,
            bar_element: HealthbarElement::default(),
            router: PointerRouter::new(),
            config,
        };
        core.resize(width, height);
        core
    }

    /// Recompute the layout for a new terminal size
    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = HostLayout::compute(
            Rect::new(0, 0, width, height),
            self.config.healthbar.show_border,
        );
        self.bar_element.rect = self.layout.bar_inner;
        self.needs_render = true;
        tracing::debug!(
            "Layout for {}x{}: bar at {:?}",
            width,
            height,
            self.layout.bar_inner
        );
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        for route in self.router.route(kind, x, y, &self.layout) {
            match route {
                MouseRoute::Slider(event) => {
                    let was_dragging = self.slider.is_dragging();
                    if self.slider.handle(event, &self.bar_element)
                        || was_dragging != self.slider.is_dragging()
                    {
                        self.needs_render = true;
                    }
                }
                MouseRoute::ToggleTheme => self.toggle_theme(),
            }
        }
    }

    /// Apply or remove dark mode
    pub fn toggle_theme(&mut self) {
        let dark = self.toggle.toggle();
        self.theme = ThemePresets::for_mode(dark);
        self.needs_render = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("Quit requested (value {})", self.slider.value());
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::MouseButton;

    fn core() -> AppCore {
        AppCore::new(Config::default(), 100, 30)
    }

    #[test]
    fn test_new_starts_full_and_dark() {
        let core = core();
        assert_eq!(core.slider.value(), 100);
        assert!(core.toggle.is_dark());
        assert_eq!(core.theme.name, "Dark");
        assert!(core.running);
    }

    #[test]
    fn test_bar_element_maps_cells_to_full_range() {
        let mut core = core();
        let bar = core.layout.bar_inner;

        core.handle_mouse(MouseEventKind::Down(MouseButton::Left), bar.x, bar.y);
        assert_eq!(core.slider.value(), 0);

        core.handle_mouse(
            MouseEventKind::Drag(MouseButton::Left),
            bar.x + bar.width - 1,
            bar.y,
        );
        assert_eq!(core.slider.value(), 100);

        // 78 cells -> width 77, cell 38 is 38/77 = 49.35%
        core.handle_mouse(MouseEventKind::Up(MouseButton::Left), bar.x + 38, bar.y);
        assert_eq!(core.slider.value(), 49);
        assert_eq!(core.bar_element.listeners.attached(), 0);
    }

    #[test]
    fn test_drag_off_the_bar_stops_tracking() {
        let mut core = core();
        let bar = core.layout.bar_inner;

        core.handle_mouse(MouseEventKind::Down(MouseButton::Left), bar.x + 10, bar.y);
        let value = core.slider.value();
        assert_eq!(core.bar_element.listeners.attached(), 1);

        core.handle_mouse(MouseEventKind::Drag(MouseButton::Left), bar.x + 10, bar.y + 3);
        assert!(!core.slider.is_dragging());
        assert_eq!(core.bar_element.listeners.attached(), 0);

        // Hovering back without pressing does not move the value
        core.handle_mouse(MouseEventKind::Moved, bar.x + 60, bar.y);
        assert_eq!(core.slider.value(), value);
    }

    #[test]
    fn test_switch_and_key_toggle_theme() {
        let mut core = core();
        let switch = core.layout.switch;

        core.handle_mouse(MouseEventKind::Down(MouseButton::Left), switch.x, switch.y);
        assert!(!core.toggle.is_dark());
        assert_eq!(core.theme.name, "Light");

        core.handle_key(KeyCode::Char('t'), KeyModifiers::NONE);
        assert!(core.toggle.is_dark());
        // Theme never touches the value
        assert_eq!(core.slider.value(), 100);
    }

    #[test]
    fn test_quit_keys() {
        let mut core = core();
        core.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(core.running);
        core.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!core.running);

        let mut core = AppCore::new(Config::default(), 100, 30);
        core.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!core.running);
    }

    #[test]
    fn test_resize_moves_bar() {
        let mut core = core();
        let before = core.bar_element.rect;
        core.resize(40, 12);
        let after = core.bar_element.rect;
        assert_ne!(before, after);
        assert_eq!(after, core.layout.bar_inner);
    }

    #[test]
    fn test_one_cell_bar_keeps_value() {
        // width 7 -> bar 3 wide, inner 1 cell -> degenerate geometry
        let mut core = AppCore::new(Config::default(), 7, 10);
        let bar = core.layout.bar_inner;
        assert_eq!(bar.width, 1);

        core.handle_mouse(MouseEventKind::Down(MouseButton::Left), bar.x, bar.y);
        assert_eq!(core.slider.value(), 100);
    }

    #[test]
    fn test_light_theme_from_config() {
        let mut config = Config::default();
        config.ui.theme = "light".to_string();
        let core = AppCore::new(config, 80, 24);
        assert!(!core.toggle.is_dark());
        assert_eq!(core.theme.name, "Light");
    }
}
