use crate::depth::Depth;

#[test]
fn test_depth_empty() {
    let depth = Depth::new();
    assert_eq!(depth.samples(), 0);
    assert_eq!(depth.mean(), 0);
    assert!(depth.percentiles().is_empty());
}

#[test]
fn test_depth_sample() {
    let mut depth = Depth::new();
    for d in [4, 2, 3, 3, 3, 3, 3, 3, 3, 3].iter() {
        depth.sample(*d);
    }
    assert_eq!(depth.samples(), 10);
    assert_eq!(depth.min(), 2);
    assert_eq!(depth.max(), 4);
    assert_eq!(depth.mean(), 3);

    // 9 out of 10 leaves sit at depth 3 or less.
    let percentiles = depth.percentiles();
    assert_eq!(percentiles.len(), 10);
    assert_eq!(percentiles[0], (90, 3));
    assert_eq!(percentiles[9], (99, 4));
}

#[test]
fn test_depth_uniform() {
    let mut depth = Depth::new();
    (0..16).for_each(|_| depth.sample(5));
    assert_eq!((depth.min(), depth.max()), (5, 5));
    assert!(depth.percentiles().iter().all(|(_, d)| *d == 5));

    let s = depth.to_string();
    assert!(s.starts_with("depth (min, mean, max): (5, 5, 5)"), "{}", s);
}
