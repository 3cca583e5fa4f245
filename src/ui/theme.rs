use ratatui::style::Color;
use tasklist::config::Config;
use tasklist::todo::Priority;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub error: Color,
    pub accent: Color,
    pub selection_bg: Color,
    pub drag_bg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub priority_low: Color,
    pub priority_medium: Color,
    pub priority_high: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::DarkGray,
            error: Color::Red,
            accent: Color::Cyan,
            selection_bg: Color::Rgb(50, 50, 70),
            drag_bg: Color::Rgb(70, 60, 20),
            status_bar_bg: Color::Rgb(40, 40, 40),
            status_bar_fg: Color::White,
            priority_low: Color::Rgb(100, 200, 120),
            priority_medium: Color::Rgb(255, 200, 100),
            priority_high: Color::Rgb(255, 100, 100),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            ..Self::default_theme()
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            muted: Color::Gray,
            error: Color::Rgb(200, 30, 30),
            accent: Color::Blue,
            selection_bg: Color::Rgb(210, 220, 240),
            drag_bg: Color::Rgb(240, 225, 170),
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
            priority_low: Color::Rgb(30, 130, 60),   // Darker green for light theme
            priority_medium: Color::Rgb(180, 130, 0), // Darker yellow/brown for light theme
            priority_high: Color::Rgb(200, 50, 50),   // Darker red for light theme
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }

    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Low => self.priority_low,
            Priority::Medium => self.priority_medium,
            Priority::High => self.priority_high,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
