//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Every function returns a
//! `String` so output can be tested without a terminal.
//!
//! Column layout is computed on plain text with `unicode-width` and styles
//! are applied afterwards, so escape codes never throw alignment off.

use super::styles::Palette;
use juzztapp::cart::{Cart, Notification, NotificationAction, NotificationLevel};
use juzztapp::catalog::{CatalogPage, CatalogState};
use juzztapp::commands::{CmdMessage, GenreCount, MessageLevel};
use juzztapp::model::Record;
use juzztapp::remote::Profile;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ID_WIDTH: usize = 5;
pub const TITLE_WIDTH: usize = 36;
pub const ARTIST_WIDTH: usize = 24;
pub const PRICE_WIDTH: usize = 9;
pub const QTY_WIDTH: usize = 4;

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

fn record_row(record: &Record, p: &Palette) -> String {
    format!(
        "{}  {}  {}  {}",
        p.id.apply_to(format!("{:>width$}", record.id, width = ID_WIDTH)),
        p.title.apply_to(fit(&record.title, TITLE_WIDTH)),
        p.artist
            .apply_to(fit(record.artist_or_default(), ARTIST_WIDTH)),
        p.price.apply_to(format!(
            "{:>width$}",
            format_price(record.price),
            width = PRICE_WIDTH
        )),
    )
}

pub fn render_records(records: &[Record], p: &Palette) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record_row(record, p));
        out.push('\n');
    }
    out
}

pub fn render_page(page: &CatalogPage, state: &CatalogState, p: &Palette) -> String {
    if page.total_pages == 0 {
        return String::new();
    }
    let price = state.price();
    let mut out = format!(
        "{}\n",
        p.header.apply_to(format!(
            "Page {} of {} · {} records · genre: {} · {} to {} · sorted by {}",
            page.page,
            page.total_pages,
            page.total_matches,
            state.genre(),
            format_price(price.min),
            format_price(price.max),
            state.sort(),
        ))
    );
    out.push_str(&render_records(&page.items, p));
    if page.has_next() {
        out.push_str(&format!(
            "{}\n",
            p.dim.apply_to(format!("More on page {} (--page {})", page.page + 1, page.page + 1))
        ));
    }
    out
}

pub fn render_record_detail(record: &Record, p: &Palette) -> String {
    let mut out = format!(
        "{}  {}\nby {}\n",
        p.id.apply_to(format!("#{}", record.id)),
        p.title.apply_to(&record.title),
        p.artist.apply_to(record.artist_or_default()),
    );
    let mut field = |label: &str, value: String| {
        out.push_str(&format!("{:<10}{}\n", format!("{}:", label), value));
    };
    field("Price", p.price.apply_to(format_price(record.price)).to_string());
    if let Some(genre) = &record.genre {
        field("Genre", genre.clone());
    }
    if let Some(released) = record.released_at() {
        field("Released", released.format("%Y-%m-%d").to_string());
    }
    if let Some(url) = &record.image_url {
        field("Cover", p.dim.apply_to(url).to_string());
    }
    if let Some(mbid) = &record.musicbrainz_id {
        field("MBID", p.dim.apply_to(mbid).to_string());
    }
    out
}

pub fn render_cart(cart: &Cart, p: &Palette) -> String {
    if cart.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for entry in cart.entries() {
        let record = &entry.record;
        out.push_str(&format!(
            "{}  {}  {}  {}  {}\n",
            p.id.apply_to(format!("{:>width$}", record.id, width = ID_WIDTH)),
            p.title.apply_to(fit(&record.title, TITLE_WIDTH)),
            p.artist
                .apply_to(fit(record.artist_or_default(), ARTIST_WIDTH)),
            format!("{:>width$}", format!("×{}", entry.quantity), width = QTY_WIDTH),
            p.price.apply_to(format!(
                "{:>width$}",
                format_price(entry.subtotal()),
                width = PRICE_WIDTH
            )),
        ));
    }
    out.push_str(&format!(
        "{}\n",
        p.header.apply_to(format!(
            "{} item{} · total {}",
            cart.total_items(),
            if cart.total_items() == 1 { "" } else { "s" },
            format_price(cart.total_price())
        ))
    ));
    out
}

pub fn render_notifications(notifications: &[Notification], p: &Palette) -> String {
    let mut out = String::new();
    for notification in notifications {
        let (marker, style) = match notification.level() {
            NotificationLevel::Success => ("✓", &p.success),
            NotificationLevel::Info => ("•", &p.info),
        };
        out.push_str(&format!(
            "{}\n",
            style.apply_to(format!("{} {}", marker, notification.message()))
        ));
        if let Some(action) = notification.action() {
            out.push_str(&format!(
                "  {}\n",
                p.dim.apply_to(format!("{}: {}", action.label(), action_hint(action)))
            ));
        }
    }
    out
}

fn action_hint(action: NotificationAction) -> &'static str {
    match action {
        NotificationAction::ViewCart => "juzzt cart",
    }
}

pub fn render_genres(genres: &[GenreCount], p: &Palette) -> String {
    let width = genres.iter().map(|g| g.name.width()).max().unwrap_or(0);
    let mut out = String::new();
    for genre in genres {
        let line = format!("{}  {:>3}", fit(&genre.name, width), genre.count);
        if genre.count == 0 {
            out.push_str(&format!("{}\n", p.dim.apply_to(line)));
        } else {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

pub fn render_profile(profile: &Profile, p: &Palette) -> String {
    format!(
        "{}\n{}\n",
        p.title.apply_to(profile.display_name()),
        profile.email.as_deref().unwrap_or("")
    )
}

pub fn render_messages(messages: &[CmdMessage], p: &Palette) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &p.info,
            MessageLevel::Success => &p.success,
            MessageLevel::Warning => &p.warning,
            MessageLevel::Error => &p.error,
        };
        out.push_str(&format!("{}\n", style.apply_to(&message.content)));
    }
    out
}

/// Truncates to `width` display columns (with an ellipsis) and pads the rest.
fn fit(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    if s.width() <= width {
        out.push_str(s);
        used = s.width();
    } else {
        let limit = width.saturating_sub(1);
        for c in s.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > limit {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push('…');
        used += 1;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
