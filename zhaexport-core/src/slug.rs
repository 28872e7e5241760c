//! Filesystem-safe slugs for export file names
//!
//! Rules:
//! 1. Apostrophes become separators
//! 2. Transliterate to ASCII, lowercase
//! 3. Drop apostrophes produced by transliteration
//! 4. Drop commas between digits (`1,000` -> `1000`)
//! 5. Collapse every run of chars outside `[a-z0-9]` into one `-`
//! 6. Trim leading and trailing `-`

use tracing::warn;

use crate::constants::{FALLBACK_SLUG, MISSING_VALUE};

const SEPARATOR: char = '-';

/// Slugify arbitrary text
///
/// # Examples
///
/// ```
/// use zhaexport_core::slug::slugify;
///
/// assert_eq!(slugify("Acme-Widget A"), "acme-widget-a");
/// assert_eq!(slugify("_TZ3000_okaz9tjs-TS011F"), "tz3000-okaz9tjs-ts011f");
/// ```
pub fn slugify(text: &str) -> String {
    let text = text.replace('\'', "-");
    let text = deunicode::deunicode(&text).to_lowercase().replace('\'', "");

    let chars: Vec<char> = text.chars().collect();
    let mut slug = String::with_capacity(chars.len());
    let mut pending_separator = false;

    for (i, &c) in chars.iter().enumerate() {
        if c == ',' && is_digit_at(&chars, i.wrapping_sub(1)) && is_digit_at(&chars, i + 1) {
            continue;
        }

        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}

fn is_digit_at(chars: &[char], i: usize) -> bool {
    chars.get(i).is_some_and(|c| c.is_ascii_digit())
}

/// Slug identifying a manufacturer/model pair
///
/// A missing manufacturer or model is rendered as `None`. A pair with no
/// alphanumeric characters at all maps to [`FALLBACK_SLUG`] so the file stem
/// is never empty.
pub fn manufacturer_model_slug(manufacturer: Option<&str>, model: Option<&str>) -> String {
    let manufacturer = manufacturer.unwrap_or(MISSING_VALUE);
    let model = model.unwrap_or(MISSING_VALUE);
    let slug = slugify(&format!("{}-{}", manufacturer, model));

    if slug.is_empty() {
        warn!(
            "Manufacturer {:?} and model {:?} have no usable characters, exporting as '{}'",
            manufacturer, model, FALLBACK_SLUG
        );
        return FALLBACK_SLUG.to_string();
    }

    slug
}
