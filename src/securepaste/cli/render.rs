//! # Rendering Module
//!
//! Turns command results into terminal text. Every `render_*` function
//! returns a `String` so layout can be tested without capturing stdout;
//! only `print_messages` writes directly.
//!
//! ## Layout
//!
//! - Single pastes use a labelled block (`ID:`, `Title:`, ...) closed by a
//!   50-dash rule.
//! - Listings use one row per paste: title (fill), language column and a
//!   right-aligned relative timestamp, all measured in display columns via
//!   `unicode-width` so wide characters do not break alignment.

use chrono::{Local, NaiveDateTime};
use colored::Colorize;
use securepaste::api::{CmdMessage, MessageLevel};
use securepaste::config::ClientConfig;
use securepaste::model::{Page, Paste, Statistics};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const RULE_WIDTH: usize = 50;
pub const PREVIEW_CHARS: usize = 100;

const COL_LANGUAGE: usize = 12;
const COL_VIEWS: usize = 8;
const COL_TIME: usize = 16;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// The labelled summary block for one paste.
pub fn render_paste(paste: &Paste) -> String {
    let mut lines = vec![
        format!("{} {}", "ID:".bold(), paste.id),
        format!("{} {}", "Title:".bold(), paste.title),
        format!(
            "{} {}",
            "Language:".bold(),
            paste.language.as_deref().unwrap_or("N/A")
        ),
        format!(
            "{} {}",
            "Author:".bold(),
            paste.author_name.as_deref().unwrap_or("Anonymous")
        ),
        format!("{} {}", "Visibility:".bold(), paste.visibility),
        format!("{} {}", "Views:".bold(), paste.view_count),
        format!(
            "{} {} {}",
            "Created:".bold(),
            format_timestamp(&paste.created_at),
            format!("({})", format_time_ago(&paste.created_at)).dimmed()
        ),
    ];
    if let Some(expires_at) = &paste.expires_at {
        lines.push(format!(
            "{} {}",
            "Expires:".bold(),
            format_timestamp(expires_at)
        ));
    }
    if paste.password_protected {
        lines.push(format!("{} Yes", "Password Protected:".bold()));
    }
    lines.push(format!(
        "{} {}",
        "Content Preview:".bold(),
        content_preview(&paste.content, PREVIEW_CHARS)
    ));
    lines.push("-".repeat(RULE_WIDTH));

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// One row per paste plus a paging footer.
pub fn render_page(page: &Page<Paste>) -> String {
    if page.content.is_empty() {
        return "No pastes found.\n".to_string();
    }

    let mut output = String::new();
    let index_width = page.content.len().to_string().len() + 2;
    for (i, paste) in page.content.iter().enumerate() {
        let index = format!("{:>width$}", format!("{}.", i + 1), width = index_width);
        let fixed = index_width + 1 + COL_LANGUAGE + COL_VIEWS + 1 + COL_TIME;
        let available = LINE_WIDTH.saturating_sub(fixed);

        let title = truncate_to_width(&single_line(&paste.title), available);
        let padding = available.saturating_sub(title.width());
        let language = truncate_to_width(
            paste.language.as_deref().unwrap_or("-"),
            COL_LANGUAGE - 1,
        );
        let language_padding = COL_LANGUAGE.saturating_sub(language.width());
        let views = format!("{:>width$}", format!("{} ⊙", paste.view_count), width = COL_VIEWS);
        let time = format!(
            "{:>width$}",
            format_time_ago(&paste.created_at),
            width = COL_TIME
        );

        let lock = if paste.password_protected { "⚿" } else { " " };
        output.push_str(&format!(
            "{} {}{}{}{}{}{}{}\n",
            index.yellow(),
            title,
            " ".repeat(padding),
            language.cyan(),
            " ".repeat(language_padding),
            views,
            lock,
            time.dimmed()
        ));
    }

    output.push_str(&format!(
        "{}\n",
        page_footer(page).dimmed()
    ));
    output
}

fn page_footer(page: &Page<Paste>) -> String {
    let noun = if page.total_elements == 1 {
        "paste"
    } else {
        "pastes"
    };
    format!(
        "Page {} of {} ({} {} in total)",
        page.number + 1,
        page.total_pages.max(1),
        page.total_elements,
        noun
    )
}

/// Totals followed by the `top` most used languages.
pub fn render_statistics(stats: &Statistics, top: usize) -> String {
    let mut output = format!(
        "Total pastes: {}\nPublic pastes: {}\nTotal views: {}\n",
        stats.total_pastes, stats.public_pastes, stats.total_views
    );
    if !stats.popular_languages.is_empty() {
        output.push_str("Popular languages:\n");
        for entry in stats.popular_languages.iter().take(top) {
            output.push_str(&format!(
                "  - {}: {} pastes\n",
                entry.language(),
                entry.count()
            ));
        }
    }
    output
}

pub fn render_config(config: &ClientConfig) -> String {
    ClientConfig::keys()
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Relative time against the local clock. Service timestamps carry no zone
/// and are taken to be in local time; future times read as "now".
pub fn format_time_ago(timestamp: &NaiveDateTime) -> String {
    let duration = Local::now()
        .naive_local()
        .signed_duration_since(*timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

/// First `max` characters on a single line, with `...` when cut.
pub fn content_preview(content: &str, max: usize) -> String {
    let flat = single_line(content);
    if flat.chars().count() <= max {
        return flat;
    }
    let mut preview: String = flat.chars().take(max).collect();
    preview.push_str("...");
    preview
}

fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
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
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
