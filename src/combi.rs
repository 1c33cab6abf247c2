use itertools::Itertools;

/// All unordered pairs of a basket, each oriented (earlier, later).
///
/// For a duplicate-free basket of n items this yields n * (n - 1) / 2 pairs
/// with no self-pairs.
pub fn basket_pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items.iter().tuple_combinations()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_basket_pairs() {
        let pairs: Vec<_> = basket_pairs(&["a", "b", "c"]).collect();
        assert_eq!(pairs, vec![(&"a", &"b"), (&"a", &"c"), (&"b", &"c")]);
    }

    #[test]
    fn test_basket_pairs_count() {
        let items: Vec<u32> = (0..10).collect();
        let pairs: HashSet<_> = basket_pairs(&items).collect();

        assert_eq!(pairs.len(), 45);
        assert!(pairs.iter().all(|(a, b)| a < b));
    }

    #[test]
    fn test_basket_pairs_too_small() {
        assert_eq!(basket_pairs(&[1]).count(), 0);
        assert_eq!(basket_pairs::<u32>(&[]).count(), 0);
    }
}
