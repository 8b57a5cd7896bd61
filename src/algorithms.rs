//! The two in-place sorts. Both use strict comparisons only, so equal
//! values never move past each other.

/// Shift each element left past every strictly greater predecessor.
pub fn insertion_sort(values: &mut [u32]) {
    for i in 1..values.len() {
        let current = values[i];
        let mut slot = i;
        while slot > 0 && current < values[slot - 1] {
            values[slot] = values[slot - 1];
            slot -= 1;
        }
        values[slot] = current;
    }
}

/// Full bubble sort: `len - 1` passes, each running to the unsorted
/// boundary even when the previous pass made no swaps. Measured durations
/// depend on that, so there is no early exit.
pub fn bubble_sort(values: &mut [u32]) {
    let len = values.len();
    for pass in 0..len.saturating_sub(1) {
        for i in 0..len - pass - 1 {
            if values[i] > values[i + 1] {
                values.swap(i, i + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(data: &[u32]) -> bool {
        data.windows(2).all(|w| w[0] <= w[1])
    }

    fn check_sorter(sort: fn(&mut [u32])) {
        let mut data: Vec<u32> = vec![];
        sort(&mut data);
        assert!(data.is_empty());

        let mut data = vec![42];
        sort(&mut data);
        assert_eq!(data, vec![42]);

        let mut data = vec![1, 2, 3, 4, 5];
        sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);

        let mut data = vec![5, 4, 3, 2, 1];
        sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);

        let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        sort(&mut data);
        assert_eq!(data, vec![1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9]);

        let mut data = vec![7, 7, 7, 7];
        sort(&mut data);
        assert_eq!(data, vec![7, 7, 7, 7]);

        let mut data = vec![999_999_999, 0, u32::MAX, 1];
        sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, vec![0, 1, 999_999_999, u32::MAX]);
    }

    #[test]
    fn insertion_sort_cases() {
        check_sorter(insertion_sort);
    }

    #[test]
    fn bubble_sort_cases() {
        check_sorter(bubble_sort);
    }

    #[test]
    fn spec_example() {
        let mut a = vec![5, 3, 8, 1];
        let mut b = a.clone();
        insertion_sort(&mut a);
        bubble_sort(&mut b);
        assert_eq!(a, vec![1, 3, 5, 8]);
        assert_eq!(b, vec![1, 3, 5, 8]);
    }
}
