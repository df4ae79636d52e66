use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::fmt::money;
use crate::models::{StockLevel, SyncStatus};

pub const HEADER_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub const FOOTER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const AMOUNT_POS_STYLE: Style = Style::new().fg(Color::Rgb(80, 220, 100));
pub const AMOUNT_NEG_STYLE: Style = Style::new().fg(Color::Red);

pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::Rgb(40, 40, 60))
    .add_modifier(Modifier::BOLD);

/// Badge style for categories and statuses nothing else matched.
pub const DEFAULT_BADGE_STYLE: Style = Style::new().fg(Color::Gray);

/// Format an amount as a colored Span (green for sales, red for expenses).
/// Shows absolute value — color conveys the sign.
pub fn money_span(amount: f64) -> Span<'static> {
    let style = if amount < 0.0 {
        AMOUNT_NEG_STYLE
    } else {
        AMOUNT_POS_STYLE
    };
    Span::styled(money(amount.abs()), style)
}

/// Badge style for an expense category. Unrecognized labels get the default
/// style rather than failing — data and styling evolve separately.
pub fn category_style(category: &str) -> Style {
    match category {
        "Stock Purchase" => Style::new().fg(Color::Green),
        "Salaries" => Style::new().fg(Color::Magenta),
        "Rent" => Style::new().fg(Color::Blue),
        "Maintenance" => Style::new().fg(Color::Yellow),
        "Transport" => Style::new().fg(Color::LightRed),
        "Other" => Style::new().fg(Color::Gray),
        _ => DEFAULT_BADGE_STYLE,
    }
}

pub fn status_style(status: SyncStatus) -> Style {
    match status {
        SyncStatus::Synced => Style::new().fg(Color::Green),
        SyncStatus::Pending => Style::new().fg(Color::Yellow),
        SyncStatus::Failed => Style::new().fg(Color::Red),
    }
}

pub fn stock_level_style(level: StockLevel) -> Style {
    match level {
        StockLevel::Low => Style::new().fg(Color::Yellow),
        StockLevel::Out => Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// Wrap text to a given width. Returns (wrapped_string, line_count).
pub fn wrap_text(text: &str, width: usize) -> (String, u16) {
    if width == 0 {
        return (text.to_string(), 1);
    }
    let wrapped = textwrap::fill(text, width);
    let lines = wrapped.lines().count().max(1) as u16;
    (wrapped, lines)
}
