use crate::ui::app::Tab;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_WARN,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct Header<'a> {
    active: Tab,
    base_url: &'a str,
    busy: bool,
    ticks: u64,
}

impl<'a> Header<'a> {
    pub fn new(active: Tab, base_url: &'a str) -> Self {
        Self {
            active,
            base_url,
            busy: false,
            ticks: 0,
        }
    }

    pub fn busy(mut self, busy: bool, ticks: u64) -> Self {
        self.busy = busy;
        self.ticks = ticks;
        self
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled("  ", text_style)];
        for (idx, tab) in Tab::ALL.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  │  ", separator_style));
            }
            let label = format!("{} {}", tab.index() + 1, tab.title());
            let style = if *tab == self.active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                text_style
            };
            spans.push(Span::styled(label, style));
        }

        spans.push(Span::styled("  │  ", separator_style));
        let (indicator, indicator_style) = if self.busy {
            (
                SPINNER[(self.ticks % SPINNER.len() as u64) as usize],
                Style::default().fg(STATUS_WARN),
            )
        } else {
            ("●", Style::default().fg(STATUS_OK))
        };
        spans.push(Span::styled(indicator, indicator_style));
        spans.push(Span::styled(" ", text_style));
        spans.push(Span::styled(self.base_url, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
