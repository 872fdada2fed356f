//! Terminal rendering. Every `render_*` function returns a `String`; callers print it.
//! The `_internal` variants take `use_color` so tests can force plain output.

use super::styles;
use cepbookapp::commands::{CmdMessage, MessageLevel};
use cepbookapp::index::DisplayAddress;
use cepbookapp::model::Address;
use chrono::{DateTime, Utc};
use console::Style;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const STREET_WIDTH: usize = 32;
const NEIGHBORHOOD_WIDTH: usize = 20;
const CITY_WIDTH: usize = 20;
const TIME_WIDTH: usize = 14;
const EMPTY_LIST: &str = "No addresses found.";

fn paint(style: Style, use_color: Option<bool>) -> Style {
    match use_color {
        Some(force) => style.force_styling(force),
        None => style,
    }
}

pub fn render_greeting(greeting: &str) -> String {
    format!("{}\n", styles::heading().apply_to(greeting))
}

pub fn render_address_list(addresses: &[DisplayAddress]) -> String {
    render_address_list_internal(addresses, None)
}

fn render_address_list_internal(addresses: &[DisplayAddress], use_color: Option<bool>) -> String {
    if addresses.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }

    let idx_width = addresses
        .iter()
        .map(|da| format!("{}.", da.index).width())
        .max()
        .unwrap_or(2);

    let mut output = String::new();
    for da in addresses {
        let a = &da.address;
        let idx = format!("{}.", da.index);
        let lead = " ".repeat(idx_width - idx.width() + 2);
        output.push_str(&format!(
            "{}{} {} {} {} {:<2} {:<8} {}\n",
            lead,
            paint(styles::index(), use_color).apply_to(idx),
            pad_to_width(&a.street, STREET_WIDTH),
            pad_to_width(&a.neighborhood, NEIGHBORHOOD_WIDTH),
            pad_to_width(&a.city, CITY_WIDTH),
            a.state_code,
            a.cep,
            paint(styles::time(), use_color).apply_to(format_time_ago(a.created_at)),
        ));
    }
    output
}

pub fn render_full_addresses(addresses: &[DisplayAddress]) -> String {
    render_full_addresses_internal(addresses, None)
}

fn render_full_addresses_internal(addresses: &[DisplayAddress], use_color: Option<bool>) -> String {
    let mut output = String::new();
    for (i, da) in addresses.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let a = &da.address;
        output.push_str(&format!(
            "{} {}\n",
            paint(styles::index(), use_color).apply_to(da.index),
            paint(styles::heading(), use_color).apply_to(a.summary())
        ));
        for (label, value) in address_fields(a) {
            if value.is_empty() {
                continue;
            }
            output.push_str(&format!(
                "  {} {}\n",
                paint(styles::label(), use_color).apply_to(format!("{:<14}", label)),
                value
            ));
        }
    }
    output
}

fn address_fields(a: &Address) -> Vec<(&'static str, String)> {
    vec![
        ("CEP", a.cep.clone()),
        ("Street", a.street.clone()),
        ("Complement", a.complement.clone()),
        ("Unit", a.unit.clone()),
        ("Neighborhood", a.neighborhood.clone()),
        ("City", a.city.clone()),
        ("State", a.state_code.clone()),
        ("State name", a.state_name.clone()),
        ("Region", a.region.clone()),
        ("IBGE", a.ibge_code.clone()),
        ("GIA", a.gia_code.clone()),
        ("Area code", a.area_code.clone()),
        ("SIAFI", a.siafi_code.clone()),
        ("Saved", a.created_at.to_rfc3339()),
        ("Id", a.id.to_string()),
    ]
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    let mut output = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => styles::info(),
            MessageLevel::Success => styles::success(),
            MessageLevel::Warning => styles::warning(),
        };
        output.push_str(&format!(
            "{}\n",
            paint(style, use_color).apply_to(&message.content)
        ));
    }
    output
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// Truncates with an ellipsis, then pads with spaces to exactly `width` columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
