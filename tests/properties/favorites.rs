//! Favorites toggling and persistence properties.
use std::sync::Arc;

use meowmatch::{
    domain::{toggle_favorite, FavoritesStore},
    models::FavoriteSet,
    repositories::KeyValueStorage,
};
use proptest::{collection::btree_set, prelude::*, test_runner::Config};

fn favorite_set() -> impl Strategy<Value = FavoriteSet> {
    btree_set("[a-z0-9-]{1,12}", 0..10)
}

proptest! {
    #![proptest_config(Config { cases: 256, ..Config::default() })]

    #[test]
    fn toggle_twice_is_identity(set in favorite_set(), cat_id in "[a-z0-9-]{1,12}") {
        let once = toggle_favorite(set.clone(), &cat_id);
        prop_assert_ne!(once.contains(&cat_id), set.contains(&cat_id));
        prop_assert_eq!(toggle_favorite(once, &cat_id), set);
    }

    #[test]
    fn saved_set_loads_back(set in favorite_set(), device in "[a-zA-Z0-9_-]{1,32}") {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let store = FavoritesStore::new(Arc::new(KeyValueStorage::new_in_memory()));

        let loaded = runtime.block_on(async {
            store.save(&device, &set).await.unwrap();
            store.load(&device).await.unwrap()
        });
        prop_assert_eq!(loaded, set);
    }
}
