use std::fmt::{self, Formatter};

/// Writes `#{a, b, c}` for the provided items, using `each` to format every item.
pub fn write_set_contents<I, F>(f: &mut Formatter<'_>, items: I, mut each: F) -> fmt::Result
where
    I: IntoIterator,
    F: FnMut(&mut Formatter<'_>, I::Item) -> fmt::Result,
{
    write!(f, "#{{")?;
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        each(f, item)?;
    }
    write!(f, "}}")
}
