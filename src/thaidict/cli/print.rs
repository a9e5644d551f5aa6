use colored::Colorize;
use thaidict::api::{CmdMessage, MessageLevel};
use thaidict::config::DictConfig;
use thaidict::model::{Entry, TranslationCheck};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_COLUMN_WIDTH: usize = 40;
const GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Print entries as aligned `english  thai  category` columns.
///
/// Thai vowel and tone marks are zero-width, so alignment uses display width
/// rather than char counts.
pub(super) fn print_entries(entries: &[Entry]) {
    if entries.is_empty() {
        println!("No words found.");
        return;
    }

    let english_width = column_width(entries.iter().map(|e| e.english.as_str()));
    let thai_width = column_width(entries.iter().map(|e| e.thai.as_str()));

    for entry in entries {
        let english = truncate_to_width(&entry.english, MAX_COLUMN_WIDTH);
        let thai = truncate_to_width(&entry.thai, MAX_COLUMN_WIDTH);
        let category = entry.category.as_deref().unwrap_or("");

        println!(
            "{}{}{}{}{}{}",
            english.bold(),
            pad(&english, english_width),
            GAP,
            thai,
            pad(&thai, thai_width),
            if category.is_empty() {
                String::new()
            } else {
                format!("{}{}", GAP, category.dimmed())
            }
        );
    }
}

pub(super) fn print_entry(entry: &Entry) {
    println!("{}", entry.english.bold());
    println!("  {}", entry.thai);
    if let Some(category) = &entry.category {
        println!("  {}", category.dimmed());
    }
}

pub(super) fn print_check(check: &TranslationCheck) {
    if check.correct {
        println!("{}", check.message.green());
    } else {
        println!("{}", check.message.red());
    }
}

pub(super) fn print_config(config: &DictConfig) {
    for key in DictConfig::keys() {
        let value = config.get(key).ok().flatten();
        println!("{} = {}", key, value.as_deref().unwrap_or("(unset)"));
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.width().min(MAX_COLUMN_WIDTH))
        .max()
        .unwrap_or(0)
}

fn pad(s: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(s.width()))
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
