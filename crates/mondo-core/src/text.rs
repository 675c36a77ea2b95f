// crates/mondo-core/src/text.rs

//! String helpers shared by the aggregator and the page layer.

/// Convert a string into a folded key suitable for comparison.
///
/// Transliterates Unicode to ASCII (`São Paulo` -> `Sao Paulo`) and
/// lowercases the result.
///
/// ```rust
/// use mondo_core::text::fold_key;
///
/// assert_eq!(fold_key("Zürich"), "zurich");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Build the URL slug for a country or destination name.
///
/// `&` becomes `and`, whitespace runs become a single `-`, and everything
/// outside `[a-z0-9-]` is dropped after folding.
///
/// ```rust
/// use mondo_core::text::slugify;
///
/// assert_eq!(slugify("Trinidad & Tobago"), "trinidad-and-tobago");
/// assert_eq!(slugify("São Paulo"), "sao-paulo");
/// assert_eq!(slugify("Koh Samui (North)"), "koh-samui-north");
/// ```
pub fn slugify(name: &str) -> String {
    let folded = fold_key(&name.replace('&', " and "));
    let mut out = String::with_capacity(folded.len());
    let mut pending_dash = false;

    for ch in folded.trim().chars() {
        if ch.is_whitespace() {
            pending_dash = true;
            continue;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            if pending_dash {
                out.push('-');
                pending_dash = false;
            }
            out.push(ch);
        }
    }
    out
}

/// Lowercase, whitespace runs to `-`, drop everything outside `[a-z0-9-]`.
///
/// No transliteration: this is how existing destination files were named,
/// so `São Paulo` gives `so-paulo` here but `sao-paulo` from [`slugify`].
///
/// ```rust
/// use mondo_core::text::plain_slug;
///
/// assert_eq!(plain_slug("São Paulo"), "so-paulo");
/// assert_eq!(plain_slug("Trinidad & Tobago"), "trinidad--tobago");
/// ```
pub fn plain_slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
                in_space = true;
            }
            continue;
        }
        in_space = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            out.push(ch);
        }
    }
    out
}

/// Turn a data file stem into a display name: `koh_samui` -> `Koh Samui`.
pub fn display_name(stem: &str) -> String {
    stem.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_whitespace() {
        assert_eq!(slugify("  New   York  "), "new-york");
        assert_eq!(slugify("Ho Chi Minh City"), "ho-chi-minh-city");
    }

    #[test]
    fn slug_strips_punctuation() {
        assert_eq!(slugify("St. John's"), "st-johns");
        assert_eq!(slugify("US, Canada & Mexico"), "us-canada-and-mexico");
    }

    #[test]
    fn slug_of_symbols_only_is_empty() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn display_name_title_cases_words() {
        assert_eq!(display_name("koh_samui"), "Koh Samui");
        assert_eq!(display_name("bali"), "Bali");
        assert_eq!(display_name("los__cabos"), "Los Cabos");
    }
}
