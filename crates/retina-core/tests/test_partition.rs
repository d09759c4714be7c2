use retina_core::partition::{partition, split_by_ranges_mut};

#[test]
fn test_even_split() {
    assert_eq!(partition(0..9, 3), vec![0..3, 3..6, 6..9]);
}

#[test]
fn test_remainder_goes_first() {
    assert_eq!(partition(0..10, 3), vec![0..4, 4..7, 7..10]);
    assert_eq!(partition(5..12, 2), vec![5..9, 9..12]);
}

#[test]
fn test_more_parts_than_elements() {
    let ranges = partition(0..2, 4);
    assert_eq!(ranges, vec![0..1, 1..2, 2..2, 2..2]);
}

#[test]
fn test_zero_parts_and_empty_range() {
    assert!(partition(0..10, 0).is_empty());
    assert_eq!(partition(3..3, 2), vec![3..3, 3..3]);
}

#[test]
fn test_ranges_cover_input_exactly() {
    for len in 0..40 {
        for parts in 1..9 {
            let ranges = partition(0..len, parts);
            assert_eq!(ranges.len(), parts);
            assert_eq!(ranges.iter().map(|r| r.len()).sum::<usize>(), len);
            for w in ranges.windows(2) {
                assert_eq!(w[0].end, w[1].start);
                assert!(w[0].len() >= w[1].len());
                assert!(w[0].len() - w[1].len() <= 1);
            }
        }
    }
}

#[test]
fn test_split_by_ranges_mut_writes_disjoint_chunks() {
    let mut buf = vec![0usize; 10];
    let ranges = partition(0..buf.len(), 3);
    for (i, chunk) in split_by_ranges_mut(&mut buf, &ranges).into_iter().enumerate() {
        chunk.fill(i + 1);
    }
    assert_eq!(buf, vec![1, 1, 1, 1, 2, 2, 2, 3, 3, 3]);
}
