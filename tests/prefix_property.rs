//! Property tests for longest-prefix selection.

mod common;

use proptest::prelude::*;
use storage_broker::{Broker, BrokerConfig, CernBroker};

use common::as_user;

fn mount_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-c]{1,3}", 1..4).prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #[test]
    fn found_provider_is_the_longest_matching_mount(
        rules in prop::collection::btree_map(mount_path(), "[a-z]{1,8}", 0..12),
        path in prop::collection::vec("[a-c]{1,3}", 0..5).prop_map(|parts| format!("/{}", parts.join("/"))),
    ) {
        let config = BrokerConfig { rules, ..Default::default() };
        let broker = CernBroker::new(config).unwrap();
        let ctx = as_user("zed");

        let candidates = broker.list_providers(&ctx).unwrap();
        let longest = candidates
            .iter()
            .filter(|p| path.starts_with(p.mount_path.as_str()))
            .map(|p| p.mount_path.len())
            .max();

        match broker.find_provider(&ctx, &path) {
            Ok(found) => {
                prop_assert!(path.starts_with(found.mount_path.as_str()));
                prop_assert_eq!(Some(found.mount_path.len()), longest);
            }
            Err(err) => {
                prop_assert!(err.is_not_found());
                prop_assert_eq!(longest, None);
            }
        }
    }
}
