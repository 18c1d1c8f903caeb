//! Collection helpers: pagination, random selection, joining, bulk mutation.

use std::fmt::Display;

use rand::seq::SliceRandom;

/// Extension methods available on any slice
pub trait SliceExt<T> {
    /// One page of elements. Pages are 1-based; a page or size of zero falls
    /// back to the defaults (page 1, size 10). Pages past the end are empty.
    fn paginate(&self, page: usize, page_size: usize) -> &[T];

    /// A uniformly random element, or `None` when the slice is empty
    fn random_element(&self) -> Option<&T>;

    /// Render the elements separated by `sep`
    fn join_with(&self, sep: &str) -> String
    where
        T: Display;
}

impl<T> SliceExt<T> for [T] {
    fn paginate(&self, page: usize, page_size: usize) -> &[T] {
        let page = if page == 0 { 1 } else { page };
        let size = if page_size == 0 { 10 } else { page_size };
        let start = (page - 1).saturating_mul(size).min(self.len());
        let end = start.saturating_add(size).min(self.len());
        &self[start..end]
    }

    fn random_element(&self) -> Option<&T> {
        self.choose(&mut rand::thread_rng())
    }

    fn join_with(&self, sep: &str) -> String
    where
        T: Display,
    {
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

/// Append every element of `items` to `target`
pub fn add_all<T>(target: &mut Vec<T>, items: impl IntoIterator<Item = T>) {
    target.extend(items);
}

/// Remove every occurrence of the listed elements from `target`
pub fn remove_all<T: PartialEq>(target: &mut Vec<T>, unwanted: &[T]) {
    target.retain(|element| !unwanted.contains(element));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_is_one_based() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(items.paginate(2, 3), &[3, 4, 5]);
        assert_eq!(items.paginate(1, 3), &[0, 1, 2]);
        assert_eq!(items.paginate(4, 3), &[9]);
        assert_eq!(items.paginate(5, 3), &[] as &[u32]);
    }

    #[test]
    fn pagination_coerces_non_positive_inputs() {
        let items: Vec<u32> = (0..25).collect();
        // page 0 -> 1, size 0 -> 10
        assert_eq!(items.paginate(0, 0), &items[0..10]);
        assert_eq!(items.paginate(2, 0), &items[10..20]);
        assert_eq!(items.paginate(0, 5), &items[0..5]);
    }

    #[test]
    fn random_element_contract() {
        let empty: Vec<u32> = Vec::new();
        assert!(empty.random_element().is_none());

        let items = vec![1, 2, 3];
        for _ in 0..50 {
            let chosen = items.random_element().unwrap();
            assert!(items.contains(chosen));
        }
    }

    #[test]
    fn join_with_renders_separated() {
        let items = vec![1, 2, 3];
        assert_eq!(items.join_with(", "), "1, 2, 3");
        let none: Vec<u8> = Vec::new();
        assert_eq!(none.join_with(","), "");
    }

    #[test]
    fn bulk_add_and_remove() {
        let mut target = vec![1, 2, 3];
        add_all(&mut target, [4, 5]);
        assert_eq!(target, vec![1, 2, 3, 4, 5]);

        remove_all(&mut target, &[2, 4]);
        assert_eq!(target, vec![1, 3, 5]);
    }
}
