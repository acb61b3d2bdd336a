use crate::ui::app::{InputMode, Tab};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the active tab.
pub fn hints(tab: Tab, mode: &InputMode) -> &'static str {
    if let InputMode::Editing { .. } = mode {
        return " Enter: Apply │ Esc: Cancel";
    }
    match tab {
        Tab::Products => {
            " ←/→: Page │ g: Go to │ /: Search │ c: Category │ x: Clear │ r: Reload │ Tab: Next │ q: Quit"
        }
        Tab::Categories => " n: New │ r: Reload │ d: Dismiss │ Tab: Next │ q: Quit",
        Tab::Orders => {
            " ↑/↓: Select │ Enter: Details │ s: Sort │ o: Order │ f: Status │ r: Reload │ q: Quit"
        }
    }
}

pub struct Footer {
    tab: Tab,
    mode: InputMode,
}

impl Footer {
    pub fn new(tab: Tab, mode: &InputMode) -> Self {
        Self {
            tab,
            mode: mode.clone(),
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = hints(self.tab, &self.mode);
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the hints contain arrows.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
