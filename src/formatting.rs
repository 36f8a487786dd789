use yansi::Paint;

/// Color palette for consistent theming
pub struct ColorPalette {
    pub muted: (u8, u8, u8),   // Item numbers, hints
    pub text: (u8, u8, u8),    // Item text
    pub notice: (u8, u8, u8),  // Confirmations after a change
    pub warning: (u8, u8, u8), // Removals
}

impl ColorPalette {
    pub const CATPPUCCIN: Self = Self {
        muted: (108, 112, 134),  // Gray
        text: (205, 214, 244),   // Text
        notice: (166, 227, 161), // Green
        warning: (243, 139, 168), // Pink
    };
}

/// Formatting context passed through rendering
pub struct FormatContext {
    pub use_color: bool,
    pub palette: ColorPalette,
}

impl FormatContext {
    pub fn new(use_color: bool) -> Self {
        Self { use_color, palette: ColorPalette::CATPPUCCIN }
    }

    pub fn from_env() -> Self {
        let use_color = std::env::var("NO_COLOR").is_err();
        Self::new(use_color)
    }

    /// `plain` comes from a `--plain` flag and always wins.
    pub fn from_env_plain(plain: bool) -> Self {
        let mut ctx = Self::from_env();
        ctx.use_color &= !plain;
        ctx
    }

    /// One-based label such as `3.`
    pub fn format_position(&self, position: usize) -> String {
        let label = format!("{}.", position + 1);
        self.paint(&label, self.palette.muted, false)
    }

    pub fn format_item(&self, text: &str) -> String {
        self.paint(text, self.palette.text, false)
    }

    pub fn format_notice(&self, text: &str) -> String {
        self.paint(text, self.palette.notice, true)
    }

    pub fn format_removed(&self, text: &str) -> String {
        self.paint(text, self.palette.warning, true)
    }

    pub fn format_hint(&self, text: &str) -> String {
        self.paint(text, self.palette.muted, false)
    }

    fn paint(&self, text: &str, (r, g, b): (u8, u8, u8), bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let painted = Paint::rgb(text, r, g, b);
        if bold { painted.bold().to_string() } else { painted.to_string() }
    }
}
