//! Compound identifiers built from heterogeneous name-bearing parts.

use std::borrow::Cow;

/// The separator placed between the segments of a compound identifier.
pub const NAME_SEPARATOR: char = '_';

/// Anything that can contribute one segment to a compound identifier.
///
/// Plain strings contribute themselves. Named records (machines, states,
/// transitions) contribute their name rather than their own representation.
pub trait NamePart {
    /// Returns the text this part contributes to a compound identifier.
    fn name_part(&self) -> Cow<'_, str>;
}

impl NamePart for str {
    fn name_part(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl NamePart for String {
    fn name_part(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl NamePart for usize {
    fn name_part(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl<T: NamePart + ?Sized> NamePart for &T {
    fn name_part(&self) -> Cow<'_, str> {
        (**self).name_part()
    }
}

/// Joins the name segments of `parts` with [`NAME_SEPARATOR`].
///
/// ```
/// use fsmgen_common::compose_name;
///
/// assert_eq!(compose_name(&[&"FSM", &"idle", &"run"]), "FSM_idle_run");
/// ```
pub fn compose_name(parts: &[&dyn NamePart]) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(NAME_SEPARATOR);
        }
        out.push_str(&part.name_part());
    }
    out
}
