/// Lomuto partition of the inclusive range `[low, high]` around `data[high]`.
///
/// Returns the final index `p` of the pivot. Afterwards every element of
/// `[low, p)` is `<=` the pivot and every element of `(p, high]` is `>=` it.
/// Elements outside the range are not touched.
///
/// The caller must guarantee `low <= high < data.len()`.
#[inline]
pub fn partition<T: Ord>(data: &mut [T], low: usize, high: usize) -> usize {
    debug_assert!(low <= high);
    debug_assert!(high < data.len());

    // `store` is one past the `<= pivot` prefix.
    let mut store = low;
    for j in low..high {
        if data[j] <= data[high] {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, high);
    store
}
