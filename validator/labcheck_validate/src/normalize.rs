//! String normalization shared by both validators.
//!
//! Report text comes out of OCR with arbitrary case, punctuation and spacing,
//! and parsed-value keys arrive as `Total_Cholesterol`, `total-cholesterol` or
//! `totalCholesterol`. Everything is reduced to one comparable form here so
//! the validators never carry their own ad hoc cleanup.

/// Lowercase `s` and collapse every run of non-alphanumeric characters into a
/// single space, trimming the ends.
///
/// ```
/// use labcheck_validate::normalize::normalize_text;
/// assert_eq!(normalize_text("  Hemoglobin (HGB):\t14.5 g/dL "), "hemoglobin hgb 14 5 g dl");
/// ```
pub fn normalize_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    for ch in s.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            pending_space = true;
        }
    }
    out
}

/// [`normalize_text`] without any separators at all.
///
/// ```
/// use labcheck_validate::normalize::compact;
/// assert_eq!(compact("Specific_Gravity"), "specificgravity");
/// assert_eq!(compact("HDL-C"), "hdlc");
/// ```
pub fn compact(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Whether `term` occurs in `haystack` with no letter directly before or
/// after it. Both arguments must already be normalized.
///
/// Digits count as boundaries so OCR output such as `hemoglobin14 5` still
/// matches `hemoglobin`, while `mch` does not fire inside `mchc`. A single
/// trailing `s` is allowed, so `wbcs` matches `wbc`.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    term_ends(haystack, term).next().is_some()
}

/// Byte offset just past every occurrence [`contains_term`] accepts,
/// including the plural `s` when there is one.
pub fn term_ends<'a>(haystack: &'a str, term: &'a str) -> impl Iterator<Item = usize> + 'a {
    haystack
        .match_indices(term)
        .filter(move |_| !term.is_empty())
        .filter_map(move |(start, _)| {
            if haystack[..start].chars().next_back().is_some_and(char::is_alphabetic) {
                return None;
            }
            let end = start + term.len();
            let mut rest = haystack[end..].chars();
            match rest.next() {
                Some('s') if !rest.next().is_some_and(char::is_alphabetic) => Some(end + 1),
                Some(c) if c.is_alphabetic() => None,
                _ => Some(end),
            }
        })
}
