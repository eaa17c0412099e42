use ctxgroup::{ContextGroupResolver, resolve};
use ctxgroup_test_utils::TreeBuilder;
use proptest::prelude::*;
use serde_json::{Value, json};

fn group_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,11}".prop_filter("reserved group key", |name| {
        name != "default" && name != "all"
    })
}

proptest! {
    #[test]
    fn test_explicit_name_is_recorded(
        names in prop::collection::btree_set(group_name(), 1..6),
        pick in any::<prop::sample::Index>(),
        override_pick in any::<prop::sample::Index>(),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let chosen = pick.get(&names).clone();
        let other = override_pick.get(&names).clone();

        let mut builder = TreeBuilder::new().default_group(&names[0]).ctxgroup(&other);
        for (i, name) in names.iter().enumerate() {
            builder = builder.group(name, json!({ "index": i }));
        }
        let context = builder.build();

        let group = ContextGroupResolver::new(&context)
            .with_group(chosen.clone())
            .resolve()
            .unwrap();
        prop_assert_eq!(group.name(), chosen.as_str());
    }

    #[test]
    fn test_every_layer_key_is_present(
        base in prop::collection::btree_map("[a-e]", 0i64..100, 0..5),
        own in prop::collection::btree_map("[c-h]", 0i64..100, 0..5),
        all in prop::collection::btree_map("[g-k]", 0i64..100, 0..5),
    ) {
        let context = TreeBuilder::new()
            .group("base", json!(base))
            .child("own", "base", json!(own))
            .all(json!(all))
            .build();

        let group = resolve(&context, Some("own")).unwrap();

        for (key, value) in &base {
            prop_assert!(group.contains_key(key));
            if !own.contains_key(key) && !all.contains_key(key) {
                prop_assert_eq!(group.get(key), Some(&Value::from(*value)));
            }
        }
        for (key, value) in &own {
            if !all.contains_key(key) {
                prop_assert_eq!(group.get(key), Some(&Value::from(*value)));
            }
        }
        for (key, value) in &all {
            prop_assert_eq!(group.get(key), Some(&Value::from(*value)));
        }
    }

    #[test]
    fn test_resolution_is_deterministic(
        values in prop::collection::btree_map("[a-z]{1,4}", any::<i32>(), 0..8),
    ) {
        let context = TreeBuilder::new()
            .group("dev", json!(values))
            .default_group("dev")
            .build();

        let first = resolve(&context, None).unwrap();
        let second = resolve(&context, None).unwrap();
        prop_assert_eq!(first.to_string(), second.to_string());
        prop_assert_eq!(first, second);
    }
}
