//! Pure text helpers: narrative chunking and export file naming.

/// Character budget for one narrative section (one slide/page of text).
pub const NARRATIVE_CHUNK_LIMIT: usize = 1800;

/// Fallback file stem used when the client name sanitizes to nothing.
pub const FALLBACK_FILE_STEM: &str = "proposal";

/// Split a narrative into chunks of at most `limit` characters at paragraph
/// boundaries.
///
/// Paragraphs (separated by blank lines) are packed greedily in order and
/// re-joined with a blank line. A paragraph is split internally only when it
/// alone exceeds the limit, in which case it is cut at the last whitespace
/// before the budget (or mid-word when it contains none).
///
/// Blank input yields no chunks.
#[must_use]
pub fn chunk_paragraphs(text: &str, limit: usize) -> Vec<String> {
    assert!(limit > 0, "chunk limit must be positive");

    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();

    for paragraph in text.split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }

        for piece in split_oversized(paragraph, limit) {
            let needed = if current.is_empty() {
                piece.chars().count()
            } else {
                current.chars().count() + 2 + piece.chars().count()
            };
            if needed > limit && !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push_str("\n\n");
            }
            current.push_str(piece);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Break one paragraph into `limit`-sized pieces, preferring whitespace cuts.
fn split_oversized(paragraph: &str, limit: usize) -> Vec<&str> {
    if paragraph.chars().count() <= limit {
        return vec![paragraph];
    }

    let mut pieces = Vec::new();
    let mut rest = paragraph;
    while rest.chars().count() > limit {
        let mut cut = None;
        let mut hard_cut = 0;
        for (count, (offset, c)) in rest.char_indices().enumerate() {
            if count == limit {
                hard_cut = offset;
                break;
            }
            if c.is_whitespace() {
                cut = Some(offset);
            }
        }
        let at = cut.unwrap_or(hard_cut);
        if at == 0 {
            // Leading whitespace only - nothing sensible to cut.
            break;
        }
        let (head, tail) = rest.split_at(at);
        pieces.push(head.trim_end());
        rest = tail.trim_start();
    }
    if !rest.is_empty() {
        pieces.push(rest);
    }
    pieces
}

/// Derive a filesystem-safe file stem from a client name.
///
/// Whitespace runs collapse to a single underscore and everything outside
/// `[A-Za-z0-9_.-]` is dropped, matching the naming of the exported
/// artifacts. Returns [`FALLBACK_FILE_STEM`] when nothing survives.
#[must_use]
pub fn export_file_stem(client_name: &str) -> String {
    let joined = client_name.split_whitespace().collect::<Vec<_>>().join("_");
    let sanitized: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    if sanitized.is_empty() {
        FALLBACK_FILE_STEM.to_string()
    } else {
        sanitized
    }
}
