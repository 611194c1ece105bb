//! Flattenable merge input.
//!
//! Merge entry points accept more than a single string: callers assemble
//! class lists from optional and conditional fragments, so the input is an
//! arbitrarily nested tree of items in which skipped branches (`None`,
//! booleans, empty strings) are filtered out and the rest is joined with
//! single spaces.

/// A merge input: a single item, a nested group, or nothing.
///
/// Built via the `From` conversions, so call sites stay terse:
///
/// ```
/// use twmerge::ClassList;
///
/// let active = true;
/// let input: ClassList = vec![
///     ClassList::from("px-2"),
///     ClassList::from(active.then_some("font-bold")),
///     ClassList::from(""),
/// ]
/// .into();
/// assert_eq!(input.to_class_string(), "px-2 font-bold");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassList {
    /// One class fragment; may itself contain several whitespace-separated
    /// classes.
    Item(String),
    /// A nested group, flattened recursively.
    Group(Vec<ClassList>),
    /// Contributes nothing.
    Skip,
}

impl ClassList {
    /// Flattens the tree into a single space-joined class string,
    /// discarding skipped branches and empty items.
    pub fn to_class_string(&self) -> String {
        let mut joined = String::new();
        self.collect_into(&mut joined);
        joined
    }

    fn collect_into(&self, joined: &mut String) {
        match self {
            ClassList::Item(item) => {
                if !item.is_empty() {
                    if !joined.is_empty() {
                        joined.push(' ');
                    }
                    joined.push_str(item);
                }
            }
            ClassList::Group(items) => {
                for item in items {
                    item.collect_into(joined);
                }
            }
            ClassList::Skip => {}
        }
    }
}

impl From<&str> for ClassList {
    fn from(item: &str) -> Self {
        ClassList::Item(item.to_string())
    }
}

impl From<String> for ClassList {
    fn from(item: String) -> Self {
        ClassList::Item(item)
    }
}

impl From<&String> for ClassList {
    fn from(item: &String) -> Self {
        ClassList::Item(item.clone())
    }
}

/// Booleans contribute nothing; they exist so conditional call sites can
/// pass the untaken branch of a condition.
impl From<bool> for ClassList {
    fn from(_: bool) -> Self {
        ClassList::Skip
    }
}

impl<T: Into<ClassList>> From<Option<T>> for ClassList {
    fn from(item: Option<T>) -> Self {
        match item {
            Some(item) => item.into(),
            None => ClassList::Skip,
        }
    }
}

impl<T: Into<ClassList>> From<Vec<T>> for ClassList {
    fn from(items: Vec<T>) -> Self {
        ClassList::Group(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassList> + Clone> From<&[T]> for ClassList {
    fn from(items: &[T]) -> Self {
        ClassList::Group(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<ClassList>, const N: usize> From<[T; N]> for ClassList {
    fn from(items: [T; N]) -> Self {
        ClassList::Group(items.into_iter().map(Into::into).collect())
    }
}
