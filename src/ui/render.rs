use crate::model::Product;
use crate::ui::app::{App, InputMode, Tab};
use crate::ui::categories::CategoryState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list::{pagination_bar, ListState, PaginationBar};
use crate::ui::orders::OrdersState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_WARN,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, List, ListItem, ListState as SelectionState, Paragraph, Row,
    Table,
};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.tab(), app.base_url()).busy(app.is_busy(), app.ticks());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    match app.tab() {
        Tab::Products => draw_products(frame, app, body),
        Tab::Categories => draw_categories(frame, app.categories(), body),
        Tab::Orders => draw_orders(frame, app.orders(), body),
    }

    let footer_widget = Footer::new(app.tab(), app.mode());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let InputMode::Editing { target, buffer } = app.mode() {
        let popup = prompt_rect(body);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(format!(" {} ", target.prompt()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT));
        frame.render_widget(Paragraph::new(format!("{buffer}_")).block(block), popup);
    }
}

fn draw_products(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.products();
    let [status, table, bar] = split_vertical(area, [1, 0, 1]);

    let status_line = product_status_line(state, app.category_filter_name());
    frame.render_widget(Paragraph::new(status_line), status);

    let categories = app.categories();
    let rows: Vec<Row> = state
        .items()
        .iter()
        .map(|product| product_row(product, categories))
        .collect();
    let widths = [
        Constraint::Length(8),
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(20),
        Constraint::Length(8),
    ];
    let title = if state.is_loading() { " Products (loading) " } else { " Products " };
    let widget = Table::new(rows, widths)
        .header(header_row(["ID", "Name", "Category", "List price", "Stock"]))
        .block(bordered(title));
    frame.render_widget(widget, table);

    if let Some(bar_model) = pagination_bar(&state.page) {
        frame.render_widget(Paragraph::new(pagination_line(&bar_model)), bar);
    }
}

fn product_status_line<'a>(state: &'a ListState<Product>, category: Option<&'a str>) -> Line<'a> {
    if let Some(error) = &state.error {
        return Line::from(Span::styled(format!(" {error}"), Style::default().fg(STATUS_ERROR)));
    }
    let muted = Style::default().fg(MUTED_TEXT);
    let mut spans = vec![Span::styled(" Search: ", muted)];
    if state.query.search.is_empty() {
        spans.push(Span::styled("(none)", muted));
    } else {
        spans.push(Span::raw(state.query.search.as_str()));
    }
    spans.push(Span::styled("   Category: ", muted));
    spans.push(Span::raw(category.unwrap_or("All")));
    Line::from(spans)
}

fn product_row<'a>(product: &'a Product, categories: &'a CategoryState) -> Row<'a> {
    let stock_style = if product.stock > 0 {
        Style::default().fg(HEADER_TEXT)
    } else {
        Style::default().fg(STATUS_WARN)
    };
    Row::new(vec![
        Cell::from(product.id.to_string()),
        Cell::from(product.name.as_str()),
        Cell::from(categories.name_for(&product.category)),
        Cell::from(product.list_price.to_string()),
        Cell::from(product.stock.to_string()).style(stock_style),
    ])
}

/// `« ‹ 1 2 [3] 4 5 › »  page 3 of 9`; arrows are dimmed when disabled.
fn pagination_line(bar: &PaginationBar) -> Line<'static> {
    let enabled = Style::default().fg(HEADER_TEXT);
    let disabled = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);
    let back = if bar.has_previous { enabled } else { disabled };
    let forward = if bar.has_next { enabled } else { disabled };

    let mut spans = vec![Span::styled(" « ‹ ", back)];
    for page in bar.pages.clone() {
        if page == bar.current {
            spans.push(Span::styled(
                format!("[{page}] "),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(format!("{page} "), enabled));
        }
    }
    spans.push(Span::styled("› » ", forward));
    spans.push(Span::styled(
        format!(" page {} of {}", bar.current, bar.total),
        Style::default().fg(MUTED_TEXT),
    ));
    Line::from(spans)
}

fn draw_categories(frame: &mut Frame<'_>, state: &CategoryState, area: Rect) {
    let [messages, table] = split_vertical(area, [1, 0]);

    let message = if let Some(error) = &state.error {
        Span::styled(format!(" {error}"), Style::default().fg(STATUS_ERROR))
    } else if let Some(success) = &state.success {
        Span::styled(format!(" {success}"), Style::default().fg(STATUS_OK))
    } else if state.submitting {
        Span::styled(" Creating category...", Style::default().fg(STATUS_WARN))
    } else {
        Span::raw("")
    };
    frame.render_widget(Paragraph::new(Line::from(message)), messages);

    let rows: Vec<Row> = state
        .categories
        .iter()
        .map(|category| {
            Row::new(vec![
                Cell::from(category.id.to_string()),
                Cell::from(category.code.as_ref().map(ToString::to_string).unwrap_or_default()),
                Cell::from(category.name.as_str()),
            ])
        })
        .collect();
    let widths = [Constraint::Length(8), Constraint::Length(12), Constraint::Min(20)];
    let title = if state.loading { " Categories (loading) " } else { " Categories " };
    let widget = Table::new(rows, widths)
        .header(header_row(["ID", "Code", "Name"]))
        .block(bordered(title));
    frame.render_widget(widget, table);
}

fn draw_orders(frame: &mut Frame<'_>, state: &OrdersState, area: Rect) {
    let [status, list] = split_vertical(area, [1, 0]);

    let muted = Style::default().fg(MUTED_TEXT);
    let line = if let Some(error) = &state.error {
        Line::from(Span::styled(format!(" {error}"), Style::default().fg(STATUS_ERROR)))
    } else {
        Line::from(vec![
            Span::styled(" Sort: ", muted),
            Span::raw(format!("{:?} {:?}", state.filters.sort_by, state.filters.order)),
            Span::styled("   Status: ", muted),
            Span::raw(state.filters.status.to_string()),
        ])
    };
    frame.render_widget(Paragraph::new(line), status);

    let visible = state.visible();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|order| {
            let mut lines = vec![Line::from(vec![
                Span::styled(format!("#{:<6}", order.id.to_string()), Style::default().fg(ACCENT)),
                Span::raw(format!(" {}  ", order.placed_at)),
                Span::raw(format!("{:<10}", order.status.to_string())),
                Span::raw(format!(" total {}  paid {}", order.total, order.paid)),
            ])];
            if state.is_expanded(&order.id) {
                for item in &order.lines {
                    lines.push(Line::from(Span::styled(
                        format!("     {} x{} @ {}", item.name, item.quantity, item.price),
                        muted,
                    )));
                }
                lines.push(Line::from(Span::styled(
                    format!("     saved {}", order.savings()),
                    Style::default().fg(STATUS_OK),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let title = if state.loading { " Orders (loading) " } else { " Orders " };
    let widget = List::new(items)
        .block(bordered(title))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut selection = SelectionState::default();
    if !visible.is_empty() {
        selection.select(Some(state.selected));
    }
    frame.render_stateful_widget(widget, list, &mut selection);
}

fn header_row<const N: usize>(titles: [&'static str; N]) -> Row<'static> {
    Row::new(titles).style(Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD))
}

fn bordered(title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

/// Zero heights take the remaining space.
fn split_vertical<const N: usize>(area: Rect, heights: [u16; N]) -> [Rect; N] {
    let constraints = heights.map(|height| {
        if height == 0 {
            Constraint::Min(0)
        } else {
            Constraint::Length(height)
        }
    });
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .areas(area)
}

fn prompt_rect(area: Rect) -> Rect {
    let width = area.width.min(50);
    let height = area.height.min(3);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
