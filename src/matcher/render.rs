use super::{highlight, Segment};
use html_escape::encode_text;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

const SEPARATOR: &str = ", ";

fn render_with<F>(segments: &[Segment], text_of: F) -> String
where
    F: Fn(&str) -> String,
{
    segments
        .iter()
        .map(|segment| {
            let text = text_of(&segment.text);
            if segment.is_match {
                format!("{MARK_OPEN}{text}{MARK_CLOSE}")
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Render segments as HTML, escaping every token before wrapping matches in `<mark>`.
///
/// Tokens are joined with `", "`, which may differ from the spacing of the
/// original description.
pub fn render_escaped(segments: &[Segment]) -> String {
    render_with(segments, |text| encode_text(text).into_owned())
}

/// Render segments with `<mark>` markers and no escaping.
///
/// The output embeds token text verbatim. Only hand it to an unescaped
/// rich-text sink when the description is trusted; otherwise use
/// [`render_escaped`].
pub fn render_raw(segments: &[Segment]) -> String {
    render_with(segments, str::to_string)
}

/// Highlight `description` and render it with raw `<mark>` markers.
pub fn highlight_marked<S: AsRef<str>>(description: &str, pantry_names: &[S]) -> String {
    render_raw(&highlight(description, pantry_names))
}
