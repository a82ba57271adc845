/// Compares two optional header values, treating an absent value and an
/// empty one as the same thing.
pub(crate) fn equals_or_both_blank(a: Option<&str>, b: Option<&str>) -> bool {
    a.unwrap_or_default() == b.unwrap_or_default()
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
