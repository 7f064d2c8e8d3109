//! Fixed-width column padding for aligned generated text.

/// The narrowest column any aligned block may use.
pub const MIN_COLUMN: usize = 2;

/// Returns a padder that truncates its input to `width` characters and then
/// right-pads it with spaces to exactly `width`.
pub fn pad(width: usize) -> impl Fn(&str) -> String {
    move |text| pad_to(text, width)
}

/// Truncates `text` to `width` characters, then right-pads with spaces to exactly `width`.
pub fn pad_to(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

/// Right-pads `text` with spaces to at least `width` characters.
///
/// Identifiers go through this variant: a name longer than its column is
/// emitted whole and pushes the rest of its line right.
pub fn pad_end(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(width);
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

/// Returns the length of the longest name, never less than `min`.
pub fn column_width<'a, I>(names: I, min: usize) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(|name| name.chars().count())
        .fold(min, usize::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_extends_short_text() {
        assert_eq!(pad_to("ab", 5), "ab   ");
    }

    #[test]
    fn pad_truncates_long_text() {
        assert_eq!(pad_to("%Error", 3), "%Er");
        assert_eq!(pad(4)("%Error"), "%Err");
    }

    #[test]
    fn pad_exact_width_unchanged() {
        assert_eq!(pad_to("idle", 4), "idle");
        assert_eq!(pad_to("", 0), "");
    }

    #[test]
    fn pad_end_never_truncates() {
        assert_eq!(pad_end("foo", 5), "foo  ");
        assert_eq!(pad_end("waiting", 3), "waiting");
    }

    #[test]
    fn column_width_has_floor() {
        assert_eq!(column_width(["a", "b"], MIN_COLUMN), 2);
        assert_eq!(column_width(["idle", "run"], MIN_COLUMN), 4);
        assert_eq!(column_width(std::iter::empty(), MIN_COLUMN), 2);
    }
}
