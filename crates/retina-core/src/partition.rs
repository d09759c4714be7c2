use std::ops::Range;

/// Split `elems` into `parts` contiguous ranges whose sizes differ by at most one.
///
/// The first `len % parts` ranges receive the extra element. Ranges are
/// empty when `parts` exceeds the number of elements; `parts == 0` yields
/// no ranges at all.
pub fn partition(elems: Range<usize>, parts: usize) -> Vec<Range<usize>> {
    if parts == 0 {
        return Vec::new();
    }

    let len = elems.len();
    let base = len / parts;
    let remainder = len % parts;

    let mut start = elems.start;
    (0..parts)
        .map(|i| {
            let size = base + usize::from(i < remainder);
            let range = start..start + size;
            start += size;
            range
        })
        .collect()
}

/// Split `slice` into consecutive mutable chunks, one per range of `ranges`.
///
/// The ranges must be contiguous and start at zero, as produced by
/// [`partition`] over `0..slice.len()`.
pub fn split_by_ranges_mut<'a, T>(
    mut slice: &'a mut [T],
    ranges: &[Range<usize>],
) -> Vec<&'a mut [T]> {
    let mut chunks = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (head, tail) = std::mem::take(&mut slice).split_at_mut(range.len());
        chunks.push(head);
        slice = tail;
    }
    chunks
}
