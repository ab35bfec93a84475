use super::*;

fn k(time: f64, value: f64) -> Keyframe {
    Keyframe::new(time, value, 0.0, 0.0)
}

#[test]
fn add_appends_without_sorting_and_marks_dirty() {
    let mut set = KeyframeSet::new(true);
    assert!(!set.is_dirty());
    set.add(k(5.0, 0.0));
    set.add(k(1.0, 0.0));
    assert!(set.is_dirty());
    let times: Vec<f64> = set.keys().map(|k| k.time).collect();
    assert_eq!(times, vec![5.0, 1.0]);
}

#[test]
fn prepare_rebuild_sorts_stably_when_enabled() {
    let mut set = KeyframeSet::from_keys(
        true,
        [k(3.0, 0.0), k(1.0, 1.0), k(3.0, 2.0), k(1.0, 3.0), k(2.0, 4.0)],
    );
    let keys = set.prepare_rebuild();
    let pairs: Vec<(f64, f64)> = keys.iter().map(|k| (k.time, k.value)).collect();
    assert_eq!(
        pairs,
        vec![(1.0, 1.0), (1.0, 3.0), (2.0, 4.0), (3.0, 0.0), (3.0, 2.0)]
    );
    assert!(set.keys().zip(set.keys().skip(1)).all(|(a, b)| a.time <= b.time));
}

#[test]
fn prepare_rebuild_keeps_insertion_order_when_disabled() {
    let mut set = KeyframeSet::from_keys(false, [k(3.0, 0.0), k(1.0, 1.0)]);
    let times: Vec<f64> = set.prepare_rebuild().iter().map(|k| k.time).collect();
    assert_eq!(times, vec![3.0, 1.0]);
}

#[test]
fn derived_key_continues_last_or_starts_at_zero() {
    let mut set = KeyframeSet::new(true);
    let id = set.add_derived_from_last();
    assert_eq!(*set.get(id).unwrap().key.key(), Keyframe::ZERO);

    set.add(Keyframe::new(10.0, 2.0, 0.25, -0.5));
    let id = set.add_derived_from_last();
    assert_eq!(
        *set.get(id).unwrap().key.key(),
        Keyframe::new(11.0, 2.0, 0.25, -0.5)
    );
}

#[test]
fn remove_is_by_identity_not_value() {
    let mut set = KeyframeSet::new(true);
    let a = set.add(k(1.0, 1.0));
    let b = set.add(k(1.0, 1.0));
    set.mark_clean();

    assert_eq!(set.remove(b), Some(k(1.0, 1.0)));
    assert!(set.is_dirty());
    assert_eq!(set.ids().collect::<Vec<_>>(), vec![a]);

    set.mark_clean();
    assert_eq!(set.remove(b), None);
    assert!(!set.is_dirty());
    assert_eq!(set.len(), 1);
}

#[test]
fn edit_field_reconciles_floats_only_on_change() {
    let mut set = KeyframeSet::new(true);
    let id = set.add(k(1.0, 1.0));
    set.mark_clean();

    assert!(!set.edit_field(id, Field::Time, "1"));
    assert!(!set.is_dirty());

    assert!(set.edit_field(id, Field::Time, "4.5"));
    assert!(set.is_dirty());
    assert_eq!(set.get(id).unwrap().key.key().time, 4.5);

    assert!(set.edit_field(id, Field::Value, "oops"));
    assert_eq!(set.get(id).unwrap().key.key().value, 0.0);

    assert!(!set.edit_field(KeyId(999), Field::Value, "1"));
}

#[test]
fn clear_and_replace_mark_dirty_and_issue_fresh_ids() {
    let mut set = KeyframeSet::from_keys(true, [k(0.0, 0.0)]);
    let old: Vec<KeyId> = set.ids().collect();
    set.mark_clean();
    set.replace([k(1.0, 1.0), k(2.0, 2.0)]);
    assert!(set.is_dirty());
    assert_eq!(set.len(), 2);
    assert!(set.ids().all(|id| !old.contains(&id)));

    set.mark_clean();
    set.clear();
    assert!(set.is_empty());
    assert!(set.is_dirty());
}

#[test]
fn smoothing_two_points_uses_chord_slope() {
    let mut set = KeyframeSet::from_keys(
        true,
        [Keyframe::new(0.0, 0.0, 5.0, 5.0), Keyframe::new(4.0, 2.0, -1.0, 9.0)],
    );
    set.smooth_tangents();
    let keys: Vec<Keyframe> = set.keys().copied().collect();
    assert_eq!(
        keys,
        vec![
            Keyframe::new(0.0, 0.0, 0.5, 0.5),
            Keyframe::new(4.0, 2.0, 0.5, 0.5),
        ]
    );
}

#[test]
fn smoothing_follows_evaluator_order() {
    let mut set = KeyframeSet::from_keys(true, [k(2.0, 4.0), k(0.0, 0.0), k(1.0, 1.0)]);
    set.smooth_tangents();
    let times: Vec<f64> = set.keys().map(|k| k.time).collect();
    assert_eq!(times, vec![0.0, 1.0, 2.0]);
    // Interior tangent is the chord between its neighbours.
    let mid = set.keys().nth(1).copied().unwrap();
    assert_eq!(mid.tangent_in, 2.0);
    assert_eq!(mid.tangent_out, 2.0);
}

#[test]
fn toggling_sort_mode_marks_dirty() {
    let mut set = KeyframeSet::new(true);
    set.set_sort_mode(true);
    assert!(!set.is_dirty());
    set.set_sort_mode(false);
    assert!(set.is_dirty());
    assert!(!set.is_sorted_mode());
}

#[test]
fn sorting_with_nan_times_keeps_finite_keys_ordered() {
    let mut set = KeyframeSet::new(true);
    for i in 0..200 {
        let time = if i % 7 == 0 { f64::NAN.copysign(1.0) } else { f64::from(200 - i) };
        set.add(k(time, f64::from(i)));
    }
    let keys = set.prepare_rebuild();
    assert_eq!(keys.len(), 200);
    let finite: Vec<f64> = keys.iter().map(|k| k.time).filter(|t| !t.is_nan()).collect();
    assert!(finite.windows(2).all(|w| w[0] <= w[1]));
    assert!(keys.iter().skip(finite.len()).all(|k| k.time.is_nan()));
}
