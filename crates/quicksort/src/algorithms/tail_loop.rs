use super::lomuto;

/// Sorts the inclusive range `[low, high]` of `data` in place.
///
/// Same partition and pivot choice as the recursive sorter, but only the
/// smaller side is sorted by a recursive call; the larger side is handled by
/// the loop. Recursion depth stays within O(log N) for every input.
pub fn quick_sort<T: Ord>(data: &mut [T], mut low: usize, mut high: usize) {
    while low < high {
        let pivot = lomuto::partition(data, low, high);

        if pivot - low < high - pivot {
            if pivot > low {
                quick_sort(data, low, pivot - 1);
            }
            low = pivot + 1;
        } else {
            quick_sort(data, pivot + 1, high);
            // left side holds at least one element here
            debug_assert!(pivot > low);
            high = pivot - 1;
        }
    }
}
