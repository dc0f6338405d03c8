use sequin::{Sequence, d128};

#[derive(Debug, Clone, PartialEq)]
struct Card {
    id: u32,
    email: String,
    age: u32,
    rating: u32,
}

fn card(id: u32, age: u32, rating: u32) -> Card {
    Card {
        id,
        email: format!("user{id}@example.com"),
        age,
        rating,
    }
}

fn cards() -> Sequence<Card> {
    Sequence::from(vec![
        card(1, 17, 40),
        card(2, 25, 90),
        card(3, 25, 70),
        card(4, 31, 55),
        card(5, 17, 80),
        card(6, 42, 95),
    ])
}

/// End-to-end chain across filtering, ordering and projection: adults by
/// descending rating, projected to their ids.
#[test]
fn test_filter_order_project_chain() {
    let top_adult_ids = cards()
        .where_by(|c| c.age >= 18)
        .order_by_descending_key(|c| c.rating)
        .select(|c| c.id);
    assert_eq!(top_adult_ids.as_slice(), &[6, 2, 3, 4]);
}

#[test]
fn test_group_then_aggregate_per_group() {
    let groups = cards().group_by(|c| c.age);

    // first-occurrence key order
    let keys: Vec<u32> = groups.iter().map(|g| g.key).collect();
    assert_eq!(keys, vec![17, 25, 31, 42]);

    // chain continues inside each group
    let mean_ratings: Vec<d128> = groups
        .iter()
        .map(|g| g.items.average_by(|c| c.rating).unwrap())
        .collect();
    assert_eq!(mean_ratings[0], d128::from(60));
    assert_eq!(mean_ratings[1], d128::from(80));
}

#[test]
fn test_max_subset_feeds_further_queries() {
    let oldest = cards().max_by(|c| c.age);
    assert_eq!(oldest.len(), 1);
    assert_eq!(oldest[0].id, 6);

    let youngest = cards().min_by(|c| c.age);
    // ties are all included, in source order
    let ids = youngest.select(|c| c.id);
    assert_eq!(ids.as_slice(), &[1, 5]);
}

#[test]
fn test_set_algebra_between_queries() {
    let all = cards();
    let adults = all.where_by(|c| c.age >= 18);
    let minors = all.except_by(&adults, |c| c.id);
    assert_eq!(minors.select(|c| c.id).as_slice(), &[1, 5]);

    let both = all.intersect_by(&adults, |c| c.id);
    assert!(both.eq_values(&adults));
}

#[test]
fn test_distinct_then_membership() {
    let ages = cards().select(|c| c.age).distinct();
    assert_eq!(ages.as_slice(), &[17, 25, 31, 42]);
    assert!(ages.contains_all([25, 42]));
    assert!(!ages.contains(&18));
}

#[test]
fn test_select_many_flattens_group_members() {
    let groups = cards().group_by(|c| c.age);
    let rebuilt = groups.select_many(|g| g.items.to_vec());
    // same multiset of elements, regrouped in key order
    assert_eq!(rebuilt.len(), cards().len());
    assert_eq!(rebuilt[0].id, 1);
    assert_eq!(rebuilt[1].id, 5);
}

#[test]
fn test_decimal_precision_across_chain() {
    let readings = Sequence::from(vec![0.1f64; 30]);
    let total = readings.take(10).sum() + readings.skip(10).sum();
    assert_eq!(total, d128::from(3));

    let mean = readings.average().unwrap();
    assert_eq!(mean, d128::from(0.1));
}

#[test]
fn test_indices_roundtrip() {
    let seq = cards();
    let indices = seq.indices_where(|c| c.rating > 60);
    let picked = seq.elements_at(&indices).unwrap();
    assert!(picked.eq_values(&seq.where_by(|c| c.rating > 60)));
}
