use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use rand::seq::SliceRandom;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::data::{seed_expenses, seed_sales, stock_alerts};
use crate::error::Result;
use crate::fmt::{display_date, money, number};
use crate::listview::{filter_records, FilterState, ListView};
use crate::models::{ExpenseRecord, SaleRecord, StockAlert, EXPENSE_CATEGORIES};
use crate::settings::{load_settings, save_settings, settings_file_exists, Settings};
use crate::stats::{daily_totals, expense_summary, inventory_counts, overview_kpis};
use crate::tui::{
    category_style, money_span, status_style, stock_level_style, wrap_text, FOOTER_STYLE,
    HEADER_STYLE, SELECTED_STYLE,
};

const GREETINGS: &[&str] = &[
    "Counter's open.",
    "Let's see how the shop is doing.",
    "Another day at the till.",
    "The shelves won't count themselves.",
    "Back again? Good.",
    "Shall we check the numbers?",
    "Morning rush or slow day?",
    "Everything synced. Well, mostly.",
];

const PAGES: &[&str] = &["Overview", "Sales", "Expenses", "Inventory"];

const SIDEBAR_WIDTH: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Overview,
    Sales,
    Expenses,
    Inventory,
}

impl Page {
    fn index(&self) -> usize {
        match self {
            Page::Overview => 0,
            Page::Sales => 1,
            Page::Expenses => 2,
            Page::Inventory => 3,
        }
    }

    fn from_index(i: usize) -> Page {
        match i {
            1 => Page::Sales,
            2 => Page::Expenses,
            3 => Page::Inventory,
            _ => Page::Overview,
        }
    }
}

enum Mode {
    Normal,
    /// Typing into the search box of the active page.
    Search,
}

pub enum AppAction {
    Continue,
    Quit,
}

pub struct App {
    page: Page,
    greeting: String,
    mode: Mode,
    expenses: ListView<ExpenseRecord>,
    sales: Vec<SaleRecord>,
    sales_filter: FilterState,
    alerts: Vec<StockAlert>,
    status_message: Option<String>,
}

impl App {
    pub fn new(shop_name: &str, expense_page_size: usize) -> Self {
        let mut rng = rand::thread_rng();
        let random_greeting = GREETINGS.choose(&mut rng).unwrap_or(&"Hello.").to_string();
        let greeting = if shop_name.is_empty() {
            format!("duka: {random_greeting}")
        } else {
            format!("{shop_name} — {random_greeting}")
        };
        Self {
            page: Page::Overview,
            greeting,
            mode: Mode::Normal,
            expenses: ListView::new(seed_expenses(), expense_page_size),
            sales: seed_sales(),
            sales_filter: FilterState::default(),
            alerts: stock_alerts(),
            status_message: None,
        }
    }

    fn filtered_sales(&self) -> Vec<&SaleRecord> {
        filter_records(&self.sales, &self.sales_filter)
    }

    fn cycle_category(&mut self) {
        let next = match self.expenses.filter().category.as_deref() {
            None => Some(EXPENSE_CATEGORIES[0].to_string()),
            Some(current) => EXPENSE_CATEGORIES
                .iter()
                .position(|&c| c == current)
                .and_then(|i| EXPENSE_CATEGORIES.get(i + 1))
                .map(|c| c.to_string()),
        };
        self.expenses.set_category(next);
    }

    /// Handle a key press. Search mode swallows most keys as text input.
    pub fn handle_key(&mut self, code: KeyCode) -> AppAction {
        self.status_message = None;

        if let Mode::Search = self.mode {
            match code {
                KeyCode::Enter | KeyCode::Esc => self.mode = Mode::Normal,
                KeyCode::Backspace => match self.page {
                    Page::Expenses => self.expenses.pop_search_char(),
                    Page::Sales => {
                        self.sales_filter.search.pop();
                    }
                    _ => {}
                },
                KeyCode::Char(c) => match self.page {
                    Page::Expenses => self.expenses.push_search_char(c),
                    Page::Sales => self.sales_filter.search.push(c),
                    _ => {}
                },
                _ => {}
            }
            return AppAction::Continue;
        }

        match code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Esc => {
                // First Esc clears active filters; second quits.
                match self.page {
                    Page::Expenses if !self.expenses.filter().is_default() => {
                        self.expenses.clear_filters();
                        self.status_message = Some("Filters cleared".to_string());
                    }
                    Page::Sales if !self.sales_filter.search.is_empty() => {
                        self.sales_filter.search.clear();
                        self.status_message = Some("Search cleared".to_string());
                    }
                    _ => return AppAction::Quit,
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                self.page = Page::from_index((self.page.index() + 1) % PAGES.len());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.page =
                    Page::from_index((self.page.index() + PAGES.len() - 1) % PAGES.len());
            }
            KeyCode::Char('1') => self.page = Page::Overview,
            KeyCode::Char('2') => self.page = Page::Sales,
            KeyCode::Char('3') => self.page = Page::Expenses,
            KeyCode::Char('4') => self.page = Page::Inventory,
            KeyCode::Char('/') => {
                if matches!(self.page, Page::Sales | Page::Expenses) {
                    self.mode = Mode::Search;
                }
            }
            KeyCode::Char('t') => {
                if self.page == Page::Expenses {
                    let next = self.expenses.filter().time_range.next();
                    self.expenses.set_time_range(next);
                }
            }
            KeyCode::Char('c') => {
                if self.page == Page::Expenses {
                    self.cycle_category();
                }
            }
            KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => {
                if self.page == Page::Expenses {
                    self.expenses.next_page();
                }
            }
            KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => {
                if self.page == Page::Expenses {
                    self.expenses.prev_page();
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let [header_area, sep_area, body_area, status_area, keys_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(format!(" {}", self.greeting)).style(HEADER_STYLE),
            header_area,
        );
        let sep_line = "━".repeat(area.width as usize);
        frame.render_widget(Paragraph::new(sep_line).style(FOOTER_STYLE), sep_area);

        let [sidebar_area, content_area] = Layout::horizontal([
            Constraint::Length(SIDEBAR_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(body_area);

        self.draw_sidebar(frame, sidebar_area);
        match self.page {
            Page::Overview => self.draw_overview(frame, content_area),
            Page::Sales => self.draw_sales(frame, content_area),
            Page::Expenses => self.draw_expenses(frame, content_area),
            Page::Inventory => self.draw_inventory(frame, content_area),
        }

        frame.render_widget(
            Paragraph::new(self.status_line()).style(FOOTER_STYLE),
            status_area,
        );
        frame.render_widget(
            Paragraph::new(self.keys_line()).style(FOOTER_STYLE),
            keys_area,
        );
    }

    fn draw_sidebar(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = PAGES
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let marker = if i == self.page.index() { ">" } else { " " };
                let style = if i == self.page.index() {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!(" {marker} {label}"), style))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn draw_overview(&self, frame: &mut Frame, area: Rect) {
        let kpis = overview_kpis(&self.sales, self.expenses.records());
        let [cards_area, chart_area] =
            Layout::vertical([Constraint::Length(6), Constraint::Fill(1)]).areas(area);

        let today = kpis
            .reference
            .map(display_date)
            .unwrap_or_else(|| "—".to_string());
        let cards = vec![
            Line::from(Span::styled(
                " Overview of your business operations",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::raw(format!(" Sales ({today})      ")),
                money_span(kpis.latest_day_sales),
            ]),
            Line::from(vec![
                Span::raw(format!(" Expenses ({today})   ")),
                money_span(-kpis.latest_day_expenses),
            ]),
            Line::from(vec![
                Span::raw(" Monthly sales        "),
                money_span(kpis.month_sales),
            ]),
            Line::from(format!(
                " Pending syncs        {} items waiting to upload",
                number(kpis.pending_syncs as i64)
            )),
        ];
        frame.render_widget(Paragraph::new(cards), cards_area);

        let [chart_left, chart_right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(chart_area);
        self.draw_sales_chart(frame, chart_left);
        self.draw_stock_list(frame, chart_right);
    }

    fn draw_sales_chart(&self, frame: &mut Frame, area: Rect) {
        let totals = daily_totals(&self.sales, self.expenses.records());
        if totals.is_empty() {
            return;
        }

        let sales_style = Style::default().fg(ratatui::style::Color::Rgb(80, 220, 100));
        let expense_style = Style::default().fg(ratatui::style::Color::Red);

        let groups: Vec<BarGroup> = totals
            .iter()
            .map(|t| {
                let label = t.date.format("%-d").to_string();
                let bars = vec![
                    Bar::default().value(t.sales.max(0.0) as u64).style(sales_style),
                    Bar::default()
                        .value(t.expenses.max(0.0) as u64)
                        .style(expense_style),
                ];
                BarGroup::default().label(Line::from(label)).bars(&bars)
            })
            .collect();

        let block = Block::default()
            .title("Sales vs Expenses")
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::NONE);

        let mut chart = BarChart::default()
            .block(block)
            .bar_width(2)
            .bar_gap(0)
            .group_gap(1);
        for group in &groups {
            chart = chart.data(group.clone());
        }
        frame.render_widget(chart, area);
    }

    fn draw_stock_list(&self, frame: &mut Frame, area: Rect) {
        let counts = inventory_counts(&self.alerts);
        let mut lines = vec![Line::from(Span::styled(
            format!(
                " Low Stock Alerts — {} items require attention",
                self.alerts.len()
            ),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        for a in &self.alerts {
            lines.push(Line::from(vec![
                Span::raw(format!(" {:<20} {:>3} units  ", a.name, a.quantity)),
                Span::styled(a.level.label(), stock_level_style(a.level)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            " {} low, {} out of stock",
            counts.low, counts.out
        )));
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn draw_sales(&self, frame: &mut Frame, area: Rect) {
        let [search_area, table_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);

        frame.render_widget(
            Paragraph::new(self.search_prompt(&self.sales_filter.search)),
            search_area,
        );

        let rows = self.filtered_sales();
        if rows.is_empty() {
            frame.render_widget(
                Paragraph::new(format!(
                    " No results found for \"{}\"",
                    self.sales_filter.search
                )),
                table_area,
            );
            return;
        }

        let header = Row::new(vec!["Date", "Customer", "Items", "Amount", "Payment", "Status"])
            .style(HEADER_STYLE)
            .bottom_margin(1);
        let table_rows: Vec<Row> = rows
            .iter()
            .map(|s| {
                Row::new(vec![
                    Cell::from(format!("{}, {}", display_date(s.date), s.time)),
                    Cell::from(s.customer.clone()),
                    Cell::from(s.items.clone()),
                    Cell::from(money_span(s.amount)),
                    Cell::from(s.payment.label()),
                    Cell::from(Span::styled(s.status.label(), status_style(s.status))),
                ])
            })
            .collect();
        let widths = vec![
            Constraint::Length(22),
            Constraint::Length(18),
            Constraint::Fill(1),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(8),
        ];
        let table = Table::new(table_rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(SELECTED_STYLE);
        frame.render_widget(table, table_area);
    }

    fn draw_expenses(&self, frame: &mut Frame, area: Rect) {
        let [filter_area, table_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);

        let filter = self.expenses.filter();
        let category = filter.category.as_deref().unwrap_or("All Categories");
        let filter_lines = vec![
            Line::from(format!(
                " [t] {}   [c] {}",
                filter.time_range.label(),
                category
            )),
            Line::from(self.search_prompt(&filter.search)),
        ];
        frame.render_widget(Paragraph::new(filter_lines), filter_area);

        let visible = self.expenses.visible();
        if visible.is_empty() {
            frame.render_widget(
                Paragraph::new(" No results found for the selected filters."),
                table_area,
            );
            return;
        }

        // Wrap descriptions into the flexible column.
        let fixed_cols: u16 = 13 + 16 + 14 + 8;
        let spacing = 4u16;
        let desc_width = table_area
            .width
            .saturating_sub(fixed_cols + spacing)
            .max(10) as usize;

        let header = Row::new(vec!["Date & Time", "Category", "Description", "Amount", "Status"])
            .style(HEADER_STYLE)
            .bottom_margin(1);
        let table_rows: Vec<Row> = visible
            .iter()
            .map(|e| {
                let (desc, line_count) = wrap_text(&e.description, desc_width);
                Row::new(vec![
                    Cell::from(format!("{}\n{}", display_date(e.date), e.time)),
                    Cell::from(Span::styled(e.category.clone(), category_style(&e.category))),
                    Cell::from(desc),
                    Cell::from(money_span(-e.amount)),
                    Cell::from(Span::styled(e.status.label(), status_style(e.status))),
                ])
                .height(line_count.max(2))
            })
            .collect();
        let widths = vec![
            Constraint::Length(13),
            Constraint::Length(16),
            Constraint::Fill(1),
            Constraint::Length(14),
            Constraint::Length(8),
        ];
        let table = Table::new(table_rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(SELECTED_STYLE);
        frame.render_widget(table, table_area);
    }

    fn draw_inventory(&self, frame: &mut Frame, area: Rect) {
        let counts = inventory_counts(&self.alerts);
        let mut lines = vec![
            Line::from(Span::styled(
                " Manage your product stock levels",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                " Low stock: {}   Out of stock: {}",
                counts.low, counts.out
            )),
            Line::from(""),
        ];
        for a in &self.alerts {
            lines.push(Line::from(vec![
                Span::raw(format!(" {:<20} SKU: {:<8} {:>3} units  ", a.name, a.sku, a.quantity)),
                Span::styled(a.level.label(), stock_level_style(a.level)),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn search_prompt(&self, search: &str) -> String {
        match self.mode {
            Mode::Search => format!(" [/] Search: {search}\u{2588}"),
            Mode::Normal if search.is_empty() => " [/] Search".to_string(),
            Mode::Normal => format!(" [/] Search: {search}"),
        }
    }

    fn status_line(&self) -> String {
        if let Some(msg) = &self.status_message {
            return format!(" {msg}");
        }
        match self.page {
            Page::Expenses => {
                let (start, end) = self.expenses.display_range();
                let summary = expense_summary(&self.expenses.all_filtered());
                let filters = self.expenses.filter().describe();
                let filters = if filters.is_empty() {
                    String::new()
                } else {
                    format!(" | {filters}")
                };
                format!(
                    " Showing {start} to {end} of {} results | Page {} of {} | Total {}{}",
                    self.expenses.filtered_len(),
                    self.expenses.current_page(),
                    self.expenses.total_pages(),
                    money(summary.total),
                    filters,
                )
            }
            Page::Sales => {
                let rows = self.filtered_sales();
                let total: f64 = rows.iter().map(|s| s.amount).sum();
                format!(
                    " {} of {} sales | Total {}",
                    rows.len(),
                    self.sales.len(),
                    money(total)
                )
            }
            _ => String::new(),
        }
    }

    fn keys_line(&self) -> String {
        match self.mode {
            Mode::Search => " Type to search  Enter/Esc=done".to_string(),
            Mode::Normal => match self.page {
                Page::Expenses => {
                    let next = if self.expenses.has_next() { "n/\u{2192}:next" } else { "(next)" };
                    let prev = if self.expenses.has_prev() { "p/\u{2190}:prev" } else { "(prev)" };
                    format!(
                        " Tab:page  t:range  c:category  /:search  {next}  {prev}  Esc:clear  q:quit"
                    )
                }
                Page::Sales => " Tab:page  /:search  Esc:clear  q:quit".to_string(),
                _ => " Tab:page  1-4:jump  q:quit".to_string(),
            },
        }
    }
}

pub fn run() -> Result<()> {
    // First run: write the default settings so there is a file to edit.
    if !settings_file_exists() {
        save_settings(&Settings::default())?;
    }
    let settings = load_settings();
    let mut app = App::new(&settings.shop_name, settings.page_size());

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));

    let mut terminal = ratatui::init();
    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| app.draw(frame)) {
            break Err(e.into());
        }
        match event::read() {
            Err(e) => break Err(e.into()),
            Ok(Event::Key(key)) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    break Ok(());
                }
                match app.handle_key(key.code) {
                    AppAction::Quit => break Ok(()),
                    AppAction::Continue => {}
                }
            }
            _ => {}
        }
    };
    drop(terminal);
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listview::TimeRange;

    fn app() -> App {
        App::new("Test Shop", 4)
    }

    #[test]
    fn test_tab_cycles_pages() {
        let mut app = app();
        assert_eq!(app.page, Page::Overview);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.page, Page::Sales);
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.page, Page::Overview);
        app.handle_key(KeyCode::BackTab);
        assert_eq!(app.page, Page::Inventory);
    }

    #[test]
    fn test_number_keys_jump_to_page() {
        let mut app = app();
        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.page, Page::Expenses);
        app.handle_key(KeyCode::Char('2'));
        assert_eq!(app.page, Page::Sales);
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        assert!(matches!(app.handle_key(KeyCode::Char('q')), AppAction::Quit));
    }

    #[test]
    fn test_time_range_cycles_and_resets_pagination() {
        let mut app = app();
        app.handle_key(KeyCode::Char('3'));
        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.expenses.current_page(), 2);

        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.expenses.filter().time_range, TimeRange::Last7Days);
        assert_eq!(app.expenses.current_page(), 1);
    }

    #[test]
    fn test_category_cycle_wraps_to_all() {
        let mut app = app();
        app.handle_key(KeyCode::Char('3'));
        for _ in 0..EXPENSE_CATEGORIES.len() {
            app.handle_key(KeyCode::Char('c'));
        }
        assert_eq!(
            app.expenses.filter().category.as_deref(),
            Some("Other")
        );
        app.handle_key(KeyCode::Char('c'));
        assert!(app.expenses.filter().category.is_none());
    }

    #[test]
    fn test_next_page_stops_at_last() {
        let mut app = app();
        app.handle_key(KeyCode::Char('3'));
        // 10 expenses, page size 4 -> 3 pages.
        assert_eq!(app.expenses.total_pages(), 3);
        for _ in 0..5 {
            app.handle_key(KeyCode::Char('n'));
        }
        assert_eq!(app.expenses.current_page(), 3);
        app.handle_key(KeyCode::Char('p'));
        assert_eq!(app.expenses.current_page(), 2);
    }

    #[test]
    fn test_search_mode_types_into_expense_filter() {
        let mut app = app();
        app.handle_key(KeyCode::Char('3'));
        app.handle_key(KeyCode::Char('/'));
        for c in "rice".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.expenses.filter().search, "rice");
        assert_eq!(app.expenses.filtered_len(), 1);
    }

    #[test]
    fn test_search_mode_types_into_sales_filter() {
        let mut app = app();
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Char('/'));
        for c in "cafe".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.sales_filter.search, "cafe");
        assert_eq!(app.filtered_sales().len(), 1);
        assert_eq!(app.filtered_sales()[0].customer, "Selamawit Cafe");
    }

    #[test]
    fn test_slash_ignored_outside_list_pages() {
        let mut app = app();
        app.handle_key(KeyCode::Char('/'));
        assert!(matches!(app.mode, Mode::Normal));
    }

    #[test]
    fn test_esc_clears_filters_then_quits() {
        let mut app = app();
        app.handle_key(KeyCode::Char('3'));
        app.handle_key(KeyCode::Char('t'));
        app.handle_key(KeyCode::Char('n'));
        assert!(matches!(app.handle_key(KeyCode::Esc), AppAction::Continue));
        assert!(app.expenses.filter().is_default());
        assert_eq!(app.expenses.current_page(), 1);
        assert_eq!(app.status_line(), " Filters cleared");
        assert!(matches!(app.handle_key(KeyCode::Esc), AppAction::Quit));
    }

    #[test]
    fn test_esc_clearing_sales_search_reports_in_status_line() {
        let mut app = app();
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Char('/'));
        app.handle_key(KeyCode::Char('c'));
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Esc);
        assert!(app.sales_filter.search.is_empty());
        assert_eq!(app.status_line(), " Search cleared");
    }

    #[test]
    fn test_status_line_shows_display_range() {
        let mut app = app();
        app.handle_key(KeyCode::Char('3'));
        let line = app.status_line();
        assert!(line.contains("Showing 1 to 4 of 10 results"), "{line}");
        app.handle_key(KeyCode::Char('n'));
        app.handle_key(KeyCode::Char('n'));
        let line = app.status_line();
        assert!(line.contains("Showing 9 to 10 of 10 results"), "{line}");
    }
}
