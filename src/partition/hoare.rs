use core::ptr;

partition_impl!("hoare");

/// Classic two cursor partition. Scans from both ends and swaps every pair of elements found on
/// the wrong side, so it does at most `v.len() / 2` swaps.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition<T, F>(v: &mut [T], mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    // Both cursors are inclusive, `r` points to the last element not yet known to be in place.
    let mut l = 0;
    let mut r = len - 1;

    // SAFETY: The unsafety below involves indexing the slice.
    // We start with `l == 0` and `r == len - 1`, both valid indices. Every access is guarded by
    // `l < r`, so `l` is at most `len - 2` when read and `r` is at least `1`. After a swap `l`
    // grows by one and `r` shrinks by one, which keeps `l <= r + 1` and both within `0..len`.
    unsafe {
        loop {
            // Find the first element that belongs on the right side.
            while l < r && pred(v.get_unchecked(l)) {
                l += 1;
            }

            // Find the last element that belongs on the left side.
            while l < r && !pred(v.get_unchecked(r)) {
                r -= 1;
            }

            // Are we done?
            if l >= r {
                break;
            }

            // Swap the found pair of out-of-order elements.
            let arr_ptr = v.as_mut_ptr();
            ptr::swap(arr_ptr.add(l), arr_ptr.add(r));
            l += 1;
            r -= 1;
        }

        debug_assert!(l == r || l == r + 1);

        // If the cursors met, the element they stopped on has not been classified yet.
        if l == r && pred(v.get_unchecked(l)) {
            l + 1
        } else {
            l
        }
    }
}
