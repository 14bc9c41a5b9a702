//! E-card styles and birthday message templating.
//!
//! Pure string work: pick a card style, compose the message body, and
//! decide whether a record is eligible for sending at all. Handing the
//! composed text to the platform share sheet is out of scope.

use crate::models::BirthdayRecord;

/// Available e-card styles and their emoji.
pub const CARD_STYLES: [(&str, &str); 6] = [
    ("Birthday Cake", "🎂"),
    ("Balloons", "🎈"),
    ("Gift Box", "🎁"),
    ("Party Hat", "🎉"),
    ("Flowers", "🌸"),
    ("Stars", "⭐"),
];

/// The style used when a record has no preference.
pub const DEFAULT_CARD_STYLE: &str = "Birthday Cake";

/// Looks up the emoji for a card style, if the style is known.
#[must_use]
pub fn emoji_for_style(style: &str) -> Option<&'static str> {
    CARD_STYLES
        .iter()
        .find(|(name, _)| *name == style)
        .map(|(_, emoji)| *emoji)
}

/// The card style to preselect for a record: its stored preference when
/// that names a known style, otherwise the default.
#[must_use]
pub fn default_style_for(record: &BirthdayRecord) -> &str {
    record
        .preferred_card_style
        .as_deref()
        .filter(|style| emoji_for_style(style).is_some())
        .unwrap_or(DEFAULT_CARD_STYLE)
}

/// True when the record can receive a message: sending requires a phone
/// number on file.
#[must_use]
pub fn can_send_message(record: &BirthdayRecord) -> bool {
    record
        .phone_number
        .as_deref()
        .is_some_and(|phone| !phone.trim().is_empty())
}

/// Composes the e-card message body for a record.
///
/// Unknown styles fall back to the party emoji, mirroring how the style
/// table is consulted everywhere else.
#[must_use]
pub fn compose_ecard_message(
    record: &BirthdayRecord,
    style: &str,
    personal_message: &str,
) -> String {
    let emoji = emoji_for_style(style).unwrap_or("🎉");

    let mut message = format!("🎂 Happy Birthday {}! 🎂\n\n", record.name);
    message.push_str(&format!(
        "{emoji} Wishing you a wonderful day filled with joy and happiness! {emoji}\n\n"
    ));

    if !personal_message.is_empty() {
        message.push_str(&format!("{personal_message}\n\n"));
    }

    message.push_str("🎁 Have an amazing birthday! 🎁");
    message
}
