// Case folding for tokens and input strings.
//
// Every token in a corpus and every string handed to the search engine goes
// through `fold` first, so comparisons and substring lookups never need to
// care about case again.

/// Convert a character to its simple lowercase equivalent.
///
/// Characters with multi-character lowercase expansions map to the first
/// character only, so folding never changes the character count of a string.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is a whitespace character.
///
/// Covers ASCII whitespace plus the Unicode space separators that show up in
/// copy-pasted street names (no-break space, narrow no-break space, ...).
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

/// Fold a string into the canonical form used throughout the engine.
///
/// Letters are lowercased one-to-one and every whitespace character becomes a
/// plain ASCII space. Folding is idempotent.
pub fn fold(text: &str) -> String {
    text.chars()
        .map(|c| if is_whitespace(c) { ' ' } else { simple_lower(c) })
        .collect()
}

/// Returns `true` if `text` is already in folded form.
pub fn is_folded(text: &str) -> bool {
    text.chars()
        .all(|c| c == ' ' || (!is_whitespace(c) && simple_lower(c) == c))
}
