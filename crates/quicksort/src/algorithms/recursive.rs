use super::lomuto;

/// Sorts the inclusive range `[low, high]` of `data` in place.
///
/// Direct recursion on both sides of the pivot. Recursion depth is O(N) on
/// sorted or reverse-sorted input because the pivot is always `data[high]`.
pub fn quick_sort<T: Ord>(data: &mut [T], low: usize, high: usize) {
    if low >= high {
        return;
    }

    let pivot = lomuto::partition(data, low, high);
    if pivot > low {
        quick_sort(data, low, pivot - 1);
    }
    quick_sort(data, pivot + 1, high);
}
