use console::Style;

/// Terminal styles used by the renderer. Built with styling forced on or off
/// so output is predictable in tests and pipes.
pub struct Palette {
    pub id: Style,
    pub title: Style,
    pub artist: Style,
    pub price: Style,
    pub header: Style,
    pub dim: Style,
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        let style = |s: Style| s.force_styling(color);
        Self {
            id: style(Style::new().yellow()),
            title: style(Style::new().bold()),
            artist: style(Style::new().cyan()),
            price: style(Style::new().green()),
            header: style(Style::new().bold().underlined()),
            dim: style(Style::new().dim()),
            info: style(Style::new().dim()),
            success: style(Style::new().green()),
            warning: style(Style::new().yellow()),
            error: style(Style::new().red()),
        }
    }

    /// Colors when stdout is a terminal that supports them.
    pub fn detect() -> Self {
        Self::new(console::colors_enabled())
    }
}
