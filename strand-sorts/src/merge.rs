/// Sorts the slice by recursive halving and merging. Stable, O(n log n).
///
/// Each level clones the two halves into scratch buffers, sorts them
/// recursively, and merges back into the original slice. Ties take the left
/// half's element first, which is what keeps the sort stable.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }

    let mid = data.len() / 2;
    let mut left = data[..mid].to_vec();
    let mut right = data[mid..].to_vec();

    merge_sort(&mut left);
    merge_sort(&mut right);

    let (mut i, mut j) = (0, 0);
    for slot in data.iter_mut() {
        if i < left.len() && (j >= right.len() || left[i] <= right[j]) {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_unordered_input() {
        let mut data = vec![38, 27, 43, 3, 9, 82, 10];
        merge_sort(&mut data);
        assert_eq!(data, vec![3, 9, 10, 27, 38, 43, 82]);
    }

    #[test]
    fn handles_trivial_slices() {
        let mut empty: Vec<u32> = vec![];
        merge_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![7];
        merge_sort(&mut single);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn handles_odd_and_even_lengths() {
        let mut odd = vec![3, 1, 2];
        merge_sort(&mut odd);
        assert_eq!(odd, vec![1, 2, 3]);

        let mut even = vec![4, 3, 2, 1];
        merge_sort(&mut even);
        assert_eq!(even, vec![1, 2, 3, 4]);
    }

    /// Ordered and compared by the key only; the tag tracks arrival.
    #[derive(Clone, Debug)]
    struct Keyed(u32, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn equal_keys_keep_arrival_order() {
        let mut data = vec![Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        merge_sort(&mut data);

        let tags: Vec<_> = data.iter().map(|item| item.1).collect();
        assert_eq!(tags, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn agrees_with_std_sort_on_larger_input() {
        let mut data: Vec<i32> = (0..128).map(|i| (i * 37) % 64 - 32).collect();
        let mut expected = data.clone();
        merge_sort(&mut data);
        expected.sort();
        assert_eq!(data, expected);
    }
}
