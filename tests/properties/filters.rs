//! Filtering properties over arbitrary catalogs.
use chrono::Utc;
use meowmatch::{
    domain::{apply_filters, matches_filters},
    models::{Cat, CatAge, CatFilters, CatGender, CatSize, CatalogQuery, FavoriteSet},
};
use proptest::{prelude::*, sample::subsequence, test_runner::Config};

const COLORS: &[&str] = &["orange", "black", "white", "gray", "calico"];
const TRAITS: &[&str] = &["playful", "calm", "affectionate", "independent"];
const GOOD_WITH: &[&str] = &["children", "dogs", "other-cats"];

fn age() -> impl Strategy<Value = CatAge> {
    prop_oneof![
        Just(CatAge::Kitten),
        Just(CatAge::Young),
        Just(CatAge::Adult),
        Just(CatAge::Senior)
    ]
}

fn size() -> impl Strategy<Value = CatSize> {
    prop_oneof![Just(CatSize::Small), Just(CatSize::Medium), Just(CatSize::Large)]
}

fn gender() -> impl Strategy<Value = CatGender> {
    prop_oneof![Just(CatGender::Male), Just(CatGender::Female)]
}

fn tags(options: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    subsequence(options, 0..=options.len())
        .prop_map(|picked| picked.into_iter().map(String::from).collect())
}

fn cat(id: usize) -> impl Strategy<Value = Cat> {
    (
        age(),
        proptest::sample::select(COLORS),
        size(),
        gender(),
        tags(TRAITS),
        tags(GOOD_WITH),
    )
        .prop_map(move |(age, color, size, gender, personality, good_with)| Cat {
            id: id.to_string(),
            name: format!("Cat {}", id),
            age,
            color: color.to_string(),
            size,
            gender,
            personality,
            good_with,
            description: "Looking for a warm lap to call home.".to_string(),
            image_url: format!("https://images.example.com/{}.jpg", id),
            is_available: true,
            shelter_id: None,
            created_at: Utc::now(),
        })
}

fn catalog() -> impl Strategy<Value = Vec<Cat>> {
    (0usize..16).prop_flat_map(|len| (0..len).map(cat).collect::<Vec<_>>())
}

fn filters() -> impl Strategy<Value = CatFilters> {
    (
        proptest::option::of(age()),
        proptest::option::of(proptest::sample::select(COLORS)),
        proptest::option::of(size()),
        proptest::option::of(proptest::sample::select(TRAITS)),
        proptest::option::of(proptest::sample::select(GOOD_WITH)),
        proptest::option::of(gender()),
    )
        .prop_map(|(age, color, size, personality, good_with, gender)| CatFilters {
            age,
            color: color.map(String::from),
            size,
            personality: personality.map(String::from),
            good_with: good_with.map(String::from),
            gender,
        })
}

proptest! {
    #![proptest_config(Config { cases: 256, ..Config::default() })]

    #[test]
    fn filtered_is_ordered_subset(cats in catalog(), filters in filters()) {
        let filtered = apply_filters(&cats, &filters);

        let mut remaining = cats.iter();
        for cat in &filtered {
            prop_assert!(matches_filters(cat, &filters));
            prop_assert!(remaining.any(|candidate| candidate == cat));
        }
        let expected = cats.iter().filter(|c| matches_filters(c, &filters)).count();
        prop_assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn unconstrained_query_is_identity(cats in catalog()) {
        let query = CatalogQuery::default();
        prop_assert_eq!(query.apply(cats.clone(), &FavoriteSet::new()), cats);
    }

    #[test]
    fn personality_filter_is_membership(
        cats in catalog(),
        tag in proptest::sample::select(TRAITS),
    ) {
        let filters = CatFilters {
            personality: Some(tag.to_string()),
            ..CatFilters::default()
        };

        for cat in apply_filters(&cats, &filters) {
            prop_assert!(cat.personality.iter().any(|t| t == tag));
        }
    }

    #[test]
    fn favorites_only_never_shows_others(
        cats in catalog(),
        keep in proptest::collection::btree_set(0usize..16, 0..8),
    ) {
        let favorites: FavoriteSet = keep.iter().map(|id| id.to_string()).collect();
        let query = CatalogQuery { favorites_only: true, ..CatalogQuery::default() };

        for cat in query.apply(cats, &favorites) {
            prop_assert!(favorites.contains(&cat.id));
        }
    }
}
