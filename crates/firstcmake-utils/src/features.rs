//! The showcase feature list.

/// Marker used by the console to pick out language-related features.
pub const DEFAULT_FEATURE_MARKER: &str = "C++";

/// The fixed, ordered list of showcase features.
pub fn features() -> Vec<String> {
    [
        "C++20 standard support",
        "Concepts and constraints",
        "Ranges library usage",
        "PascalCase naming convention",
        "Advanced CMake configuration",
        "Template specialization",
        "Modern C++ best practices",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Lazily select the items containing `marker`, preserving order.
///
/// Matching is a case-sensitive substring test; an empty marker keeps
/// every item.
///
/// # Examples
/// ```
/// use firstcmake_utils::{features, filter_features};
/// let all = features();
/// let cpp: Vec<&String> = filter_features(&all, "C++").collect();
/// assert_eq!(cpp.len(), 2);
/// ```
pub fn filter_features<'a, I>(items: I, marker: &'a str) -> impl Iterator<Item = I::Item> + 'a
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .filter(move |item| <I::Item as AsRef<str>>::as_ref(item).contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_fixed_and_ordered() {
        let list = features();
        assert_eq!(list.len(), 7);
        assert_eq!(list[0], "C++20 standard support");
        assert_eq!(list[6], "Modern C++ best practices");
        assert_eq!(list, features());
    }

    #[test]
    fn filter_by_default_marker() {
        let list = features();
        let cpp: Vec<&String> = filter_features(&list, DEFAULT_FEATURE_MARKER).collect();
        assert_eq!(cpp, vec!["C++20 standard support", "Modern C++ best practices"]);
    }

    #[test]
    fn filter_is_case_sensitive() {
        let list = features();
        assert_eq!(filter_features(&list, "cmake").count(), 0);
        assert_eq!(filter_features(&list, "CMake").count(), 1);
    }

    #[test]
    fn empty_marker_keeps_everything() {
        let list = features();
        assert_eq!(filter_features(&list, "").count(), list.len());
    }
}
