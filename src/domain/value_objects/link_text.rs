//! Display-text grammar for signal endpoints
//!
//! Endpoint texts follow a fixed shape that the rest of the system parses:
//!
//! - OUT confirmed: `"<signal> hacia <dest>"`
//! - OUT pending:   `"<signal> hacia <dest|EXTERNO> (pendiente)"`
//! - IN:            `"<signal> desde <origin>"`
//!
//! `" hacia "` and `" desde "` are the only parse anchors. Every mutation
//! splits on the first occurrence of the anchor and rewrites one side only,
//! so suffix annotations a user may have appended survive verbatim. No
//! service hand-rolls this surgery; it all lives here.

/// Anchor for OUT texts ("towards")
pub const KW_TO: &str = " hacia ";
/// Anchor for IN texts ("from")
pub const KW_FROM: &str = " desde ";
/// Placeholder counterpart for unresolved links
pub const EXTERNAL: &str = "EXTERNO";
/// Suffix marking an unresolved endpoint
pub const PENDING_MARK: &str = "(pendiente)";

/// Format an OUT endpoint text
pub fn out_text(signal_name: &str, dest_name: &str, pending: bool) -> String {
    if pending {
        format!("{signal_name}{KW_TO}{dest_name} {PENDING_MARK}")
    } else {
        format!("{signal_name}{KW_TO}{dest_name}")
    }
}

/// Format an IN endpoint text
pub fn in_text(signal_name: &str, origin_name: &str) -> String {
    format!("{signal_name}{KW_FROM}{origin_name}")
}

/// Split on the first occurrence of the anchor, if present
pub fn split_on(text: &str, keyword: &str) -> Option<(String, String)> {
    text.split_once(keyword)
        .map(|(l, r)| (l.to_string(), r.to_string()))
}

/// The signal-name side of a text, falling back to the given name when the
/// anchor is absent
pub fn name_side<'a>(text: &'a str, keyword: &str, fallback: &'a str) -> &'a str {
    match text.split_once(keyword) {
        Some((left, _)) => left.trim(),
        None => fallback,
    }
}

/// Rewrite only the counterpart side, keeping the name side as-is
///
/// When the anchor is missing (malformed text) the name side falls back to
/// `signal_name` and the text is rebuilt from scratch.
pub fn rewrite_counterpart(
    text: &str,
    keyword: &str,
    signal_name: &str,
    new_counterpart: &str,
) -> String {
    let left = name_side(text, keyword, signal_name);
    format!("{left}{keyword}{new_counterpart}")
}

/// Rewrite only the name side, keeping the counterpart side (including any
/// suffix annotations) as-is
pub fn rewrite_name(text: &str, keyword: &str, new_name: &str) -> String {
    match text.split_once(keyword) {
        Some((_, right)) => format!("{new_name}{keyword}{}", right.trim()),
        None => new_name.to_string(),
    }
}

/// Replace the counterpart name only when the old name is an exact prefix of
/// what follows the anchor, preserving everything after it
///
/// This is the rename-propagation primitive: `"X hacia 52H1 (pendiente)"`
/// with old `"52H1"` becomes `"X hacia 52H2 (pendiente)"`, while a `"52H1"`
/// occurring anywhere else in the string is left alone.
pub fn rename_counterpart_prefix(text: &str, keyword: &str, old: &str, new: &str) -> String {
    let Some((left, right)) = text.split_once(keyword) else {
        return text.to_string();
    };
    let suffix = right.trim_start();
    if suffix.is_empty() || !suffix.starts_with(old) {
        return text.to_string();
    }
    let rest = &suffix[old.len()..];
    format!("{left}{keyword}{new}{rest}")
}

/// Counterpart side with the pending mark removed and whitespace trimmed
pub fn counterpart_name(right: &str) -> String {
    right.replace(PENDING_MARK, "").trim().to_string()
}

/// Re-point a text at EXTERNO as pending, keeping the name side
///
/// Texts without the anchor just gain the pending mark.
pub fn pending_reset(text: &str, keyword: &str) -> String {
    match text.split_once(keyword) {
        Some((left, _)) => format!("{}{keyword}{EXTERNAL} {PENDING_MARK}", left.trim()),
        None => format!("{} {PENDING_MARK}", text.trim()),
    }
}

/// Best-effort signal name recovery from an endpoint text
pub fn infer_signal_name(text: &str) -> String {
    if let Some((left, _)) = text.split_once(KW_TO) {
        return left.trim().to_string();
    }
    if let Some((left, _)) = text.split_once(KW_FROM) {
        return left.trim().to_string();
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "SIN_NOMBRE".to_string()
    } else {
        trimmed.to_string()
    }
}
