//! Database utility functions.

/// Number of pages of `page_size` rows needed to hold `total` rows.
///
/// A non-positive page size yields zero pages rather than dividing by zero.
pub fn page_count(total: i64, page_size: i64) -> i64 {
    if page_size <= 0 || total <= 0 {
        return 0;
    }
    (total + page_size - 1) / page_size
}

/// Escape character used by every `LIKE ... ESCAPE` clause in the catalog.
pub const LIKE_ESCAPE: char = '\\';

/// Build a substring `LIKE` pattern for a user search term.
///
/// `%`, `_` and the escape character itself are escaped so the term matches
/// literally. Returns None for empty or whitespace-only terms, which callers
/// treat as "no filter".
pub fn like_pattern(search_term: &str) -> Option<String> {
    let term = search_term.trim();
    if term.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}
