use xbar_rs::sample;

#[test]
fn same_seed_reproduces_demo_data() {
    let (p1, x1) = sample::demo_pair(69);
    let (p2, x2) = sample::demo_pair(69);
    assert_eq!(p1, p2);
    assert_eq!(x1, x2);
}

#[test]
fn different_seeds_give_different_data() {
    let (p1, _) = sample::demo_pair(1);
    let (p2, _) = sample::demo_pair(2);
    assert_ne!(p1, p2);
}

#[test]
fn grid_has_requested_shape() {
    let grid = sample::normal_grid(0, 3, 7);
    assert_eq!(grid.len(), 3);
    assert!(grid.iter().all(|row| row.len() == 7));
}

#[test]
fn demo_labels_match_grid_rows() {
    let (primary, exploded) = sample::demo_pair(42);
    let labels: Vec<&str> = primary.labels().collect();
    assert_eq!(labels, sample::DEMO_LABELS);
    assert_eq!(primary.len(), exploded.len());
}
