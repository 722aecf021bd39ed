//! # Rendering
//!
//! Turns command results into terminal text. Every function returns a
//! `String` so output can be checked in tests; the handlers print it.
//!
//! Layout math (truncation, alignment) is Unicode-width aware. Colors come
//! from `colored`, which the CLI turns off when stdout cannot show them.

use carlot::api::{CmdMessage, MessageLevel};
use carlot::config::CarlotConfig;
use carlot::format::{format_price, results_count, time_ago};
use carlot::model::Listing;
use carlot::validation::ValidationResult;
use chrono::{DateTime, Utc};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fallback width when the terminal size is unknown.
pub const LINE_WIDTH: usize = 100;
const CARD_INDENT: &str = "   ";
const FEATURED_BADGE: &str = "★ Featured";

/// Renders the result list: a count header and one card per listing.
pub fn render_listing_cards(listings: &[Listing], width: usize, now: DateTime<Utc>) -> String {
    if listings.is_empty() {
        return format!(
            "{}\n{}\n",
            "No cars found".bold(),
            "Try adjusting your search or browse all listings".dimmed()
        );
    }

    let mut out = format!("{}\n", results_count(listings.len()).dimmed());
    for (i, listing) in listings.iter().enumerate() {
        out.push('\n');
        out.push_str(&render_card(i + 1, listing, width, now));
    }
    out
}

fn render_card(position: usize, listing: &Listing, width: usize, now: DateTime<Utc>) -> String {
    let prefix = format!("{}. ", position);
    let badge_width = if listing.featured {
        FEATURED_BADGE.width() + 2
    } else {
        0
    };
    let title_room = width.saturating_sub(prefix.width() + badge_width).max(8);

    let mut out = String::new();
    out.push_str(&prefix);
    let title = truncate_to_width(&listing.name, title_room);
    out.push_str(&title.bold().to_string());
    if listing.featured {
        out.push_str(&format!("  {}", FEATURED_BADGE.yellow()));
    }
    out.push('\n');

    out.push_str(&format!(
        "{}{}  📍 {}\n",
        CARD_INDENT,
        format_price(listing.price).green().bold(),
        listing.location
    ));

    let details = detail_chips(listing);
    if !details.is_empty() {
        out.push_str(&format!("{}{}\n", CARD_INDENT, details.join(" · ")));
    }

    let mut footer = listing.details_link();
    if let Some(created_at) = listing.created_at {
        footer.push_str(&format!("  listed {}", time_ago(created_at, now)));
    }
    out.push_str(&format!("{}{}\n", CARD_INDENT, footer.dimmed()));
    out
}

fn detail_chips(listing: &Listing) -> Vec<String> {
    [
        ("📅", &listing.year),
        ("📊", &listing.mileage),
        ("⛽", &listing.fuel),
    ]
    .into_iter()
    .filter_map(|(icon, value)| {
        let value = value.as_ref()?;
        Some(format!("{} {}", icon, value))
    })
    .collect()
}

/// Renders the details view of a single listing.
pub fn render_listing_details(listing: &Listing, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}", listing.name.bold()));
    if listing.featured {
        out.push_str(&format!("  {}", FEATURED_BADGE.yellow()));
    }
    out.push('\n');
    out.push_str(&format!("{}\n", format_price(listing.price).green().bold()));
    out.push_str(&format!("📍 {}\n\n", listing.location));
    out.push_str(&format!("{}\n\n", listing.description));

    let mut rows: Vec<(&str, String)> = Vec::new();
    if let Some(year) = &listing.year {
        rows.push(("Year", year.clone()));
    }
    if let Some(mileage) = &listing.mileage {
        rows.push(("Mileage", mileage.clone()));
    }
    if let Some(fuel) = &listing.fuel {
        rows.push(("Fuel", fuel.clone()));
    }
    rows.push(("Image", listing.image.clone()));
    if let Some(created_at) = listing.created_at {
        rows.push(("Listed", time_ago(created_at, now)));
    }
    rows.push(("Link", listing.details_link()));

    for (label, value) in rows {
        out.push_str(&format!("{}{}\n", format!("{:<9}", label).dimmed(), value));
    }
    out
}

/// One line per rejected field, in form order.
pub fn render_field_errors(validation: &ValidationResult) -> String {
    validation
        .errors()
        .iter()
        .map(|(field, message)| {
            let field = field.as_str().red().bold();
            format!("  {}: {}\n", field, message)
        })
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let content = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", content)
        })
        .collect()
}

pub fn render_config(config: &CarlotConfig) -> String {
    carlot::config::CONFIG_KEYS
        .iter()
        .filter_map(|key| {
            let value = config.get(key)?;
            Some(format!("{} = {}\n", key, value))
        })
        .collect()
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
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
