use crate::models::MatchRange;

const OPEN_TAG: &str = "<b>";
const CLOSE_TAG: &str = "</b>";

/// Wrap every matched span of `text` in `<b>`/`</b>`.
///
/// Offsets and lengths count characters, not bytes. Empty spans are dropped,
/// spans are clamped to the text, and overlapping or touching spans are
/// merged so tags never nest.
pub fn bold_matches(text: &str, matches: &[MatchRange]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    let mut spans: Vec<(usize, usize)> = matches
        .iter()
        .filter(|m| m.length > 0)
        .map(|m| {
            let start = m.offset.min(len);
            let end = m.offset.saturating_add(m.length).min(len);
            (start, end)
        })
        .filter(|(start, end)| start < end)
        .collect();

    if spans.is_empty() {
        return text.to_string();
    }

    spans.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut out =
        String::with_capacity(text.len() + merged.len() * (OPEN_TAG.len() + CLOSE_TAG.len()));
    let mut cursor = 0;
    for (start, end) in merged {
        out.extend(&chars[cursor..start]);
        out.push_str(OPEN_TAG);
        out.extend(&chars[start..end]);
        out.push_str(CLOSE_TAG);
        cursor = end;
    }
    out.extend(&chars[cursor..]);

    out
}
