//! Literal construction macros for sets.

/// Creates a [`Set`](crate::Set) containing the given elements.
///
/// Duplicate elements, as judged by [`Element::equal`](crate::Element::equal),
/// are dropped. A trailing comma is allowed.
///
/// # Examples
///
/// ```rust
/// use eqset::{Set, set};
///
/// let empty: Set<i32> = set![];
/// assert!(empty.is_empty());
///
/// let numbers = set![1, 4, 4, 2, 2, 3, 4];
/// assert_eq!(numbers.len(), 4);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };

    ($($element:expr),+ $(,)?) => {{
        let mut set = $crate::Set::new();
        $(
            set.add_element($element);
        )+
        set
    }};
}

/// Creates an [`ExtendedSet`](crate::ExtendedSet) containing the given
/// elements.
///
/// Duplicate elements, as judged by [`Element::equal`](crate::Element::equal),
/// are dropped. A trailing comma is allowed.
///
/// # Examples
///
/// ```rust
/// use eqset::extended_set;
///
/// let letters = extended_set!['a', 'b', 'a',];
/// assert_eq!(letters.cardinality(), 2);
/// assert!(letters.has_element(&'b'));
/// ```
#[macro_export]
macro_rules! extended_set {
    () => {
        $crate::ExtendedSet::new()
    };

    ($($element:expr),+ $(,)?) => {{
        let mut set = $crate::ExtendedSet::new();
        $(
            set.add($element);
        )+
        set
    }};
}

#[cfg(test)]
mod tests {
    use crate::{ExtendedSet, Set};

    #[test]
    fn test_set_macro_empty() {
        let set: Set<u8> = set![];
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_macro_drops_duplicates() {
        let set = set![1, 4, 4, 2, 2, 3, 4];
        assert_eq!(set.len(), 4);
        for value in 1..=4 {
            assert!(set.has_element(&value));
        }
    }

    #[test]
    fn test_extended_set_macro_empty() {
        let set: ExtendedSet<String> = extended_set![];
        assert_eq!(set.cardinality(), 0);
    }

    #[test]
    fn test_extended_set_macro_trailing_comma() {
        let set = extended_set!["x", "y", "x",];
        assert_eq!(set, ExtendedSet::from_elements(["y", "x"]));
    }

    #[test]
    fn test_macros_nest() {
        let nested = extended_set![extended_set![1, 2], extended_set![2, 1], extended_set![]];
        assert_eq!(nested.cardinality(), 2);
    }
}
