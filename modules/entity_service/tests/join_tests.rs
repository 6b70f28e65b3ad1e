//! Relation hydration through the join resolver

mod common;

use std::sync::Arc;

use common::{print_test_header, Harness};
use entity_service::contract::entities::{Account, Country, Feature, Password, Role, RoleFeature, User};
use entity_service::contract::{EntityError, JoinError, JoinItems, Joined, Record};
use entity_service::domain::cache::RecordCache;
use entity_service::domain::collection::Collections;
use entity_service::domain::join::{JoinResolver, Projection, QueryContext};
use entity_service::domain::registry::{EntityRegistry, Registration};
use entity_service::domain::repository::DocumentStore;
use entity_service::infra::storage::InMemoryDocumentStore;
use serde_json::json;

async fn seed_accounts(h: &Harness) {
    let store = &h.store;
    store
        .put("Users", "u1", json!({"Id": "u1", "First": "Ada", "Last": "Lovelace", "DefaultAccountId": "X", "PasswordId": "p1"}))
        .await
        .unwrap();
    store
        .put("Accounts", "X", json!({"Id": "X", "AccountName": "Acme", "City": "Paris", "CountryId": "c1"}))
        .await
        .unwrap();
    store
        .put("Countries", "c1", json!({"Id": "c1", "Iso": "FR", "Name": "France"}))
        .await
        .unwrap();
    store
        .put("Passwords", "p1", json!({"Id": "p1", "Value": "hash"}))
        .await
        .unwrap();
}

async fn seed_roles(h: &Harness) {
    let store = &h.store;
    store
        .put("Roles", "r1", json!({"Id": "r1", "Name": "Admin"}))
        .await
        .unwrap();
    store
        .put("Features", "f1", json!({"Id": "f1", "Key": "ADMIN", "Name": "Admin"}))
        .await
        .unwrap();
    for (id, role) in [("rf1", "r1"), ("rf2", "r1"), ("rf3", "r1"), ("rf4", "r2")] {
        store
            .put("RoleFeatures", id, json!({"Id": id, "RoleId": role, "FeatureId": "f1"}))
            .await
            .unwrap();
    }
}

async fn load(h: &Harness, collection: &str, id: &str) -> Record {
    h.collections
        .resolve_collection(collection)
        .unwrap()
        .query()
        .await
        .by_id(id)
        .await
        .unwrap()
        .unwrap()
}

#[tokio::test]
async fn test_single_relation_with_budget_one() {
    print_test_header(
        "test_single_relation_with_budget_one",
        &["User.Account resolves by id and stops at the first level"],
    );
    let h = Harness::new().ready();
    seed_accounts(&h).await;

    let mut user = load(&h, "Users", "u1").await;
    h.service
        .join_fields(&mut user, "Account", &QueryContext::new(), 1)
        .await
        .unwrap();

    let user = user.downcast::<User>().unwrap();
    let account = user.header.joins.one::<Account>("Account").unwrap();
    assert_eq!(account.header.id, "X");
    assert_eq!(account.account_name, "Acme");
    assert!(account.header.joins.is_empty());
    println!("✅ Account joined without nested relations");
}

#[tokio::test]
async fn test_nested_path_respects_budget() {
    print_test_header(
        "test_nested_path_respects_budget",
        &["Account.Country fills two levels only when the budget allows"],
    );
    let h = Harness::new().ready();
    seed_accounts(&h).await;
    let ctx = QueryContext::new();

    let mut shallow = load(&h, "Users", "u1").await;
    h.service
        .join_fields(&mut shallow, "Account.Country", &ctx, 1)
        .await
        .unwrap();
    let shallow = shallow.downcast::<User>().unwrap();
    let account = shallow.header.joins.one::<Account>("Account").unwrap();
    assert!(account.header.joins.get("Country").is_none());

    let mut deep = load(&h, "Users", "u1").await;
    h.service
        .join_fields(&mut deep, "Account.Country", &ctx, 2)
        .await
        .unwrap();
    let deep = deep.downcast::<User>().unwrap();
    let account = deep.header.joins.one::<Account>("Account").unwrap();
    let country = account.header.joins.one::<Country>("Country").unwrap();
    assert_eq!(country.iso, "FR");
    assert!(country.header.joins.is_empty());
    println!("✅ Depth bounded by budget");
}

#[tokio::test]
async fn test_single_segment_never_descends() {
    let h = Harness::new().ready();
    seed_accounts(&h).await;

    let mut user = load(&h, "Users", "u1").await;
    h.service
        .join_fields(&mut user, "Account", &QueryContext::new(), 8)
        .await
        .unwrap();
    let user = user.downcast::<User>().unwrap();
    let account = user.header.joins.one::<Account>("Account").unwrap();
    assert!(account.header.joins.is_empty());
}

#[tokio::test]
async fn test_count_only_relation() {
    print_test_header(
        "test_count_only_relation",
        &["RoleFeatures.Count sets only the count"],
    );
    let h = Harness::new().ready();
    seed_roles(&h).await;

    let mut role = load(&h, "Roles", "r1").await;
    h.service
        .join_fields(&mut role, "RoleFeatures.Count", &QueryContext::new(), 8)
        .await
        .unwrap();

    let role = role.downcast::<Role>().unwrap();
    let items = role.header.joins.many("RoleFeatures").unwrap();
    assert_eq!(items.count, 3);
    assert!(items.items.is_none());
    println!("✅ Count = {}", items.count);
}

#[tokio::test]
async fn test_many_relation_and_nested_items() {
    let h = Harness::new().ready();
    seed_roles(&h).await;

    let mut role = load(&h, "Roles", "r1").await;
    h.service
        .join_fields(&mut role, "RoleFeatures.Feature", &QueryContext::new(), 2)
        .await
        .unwrap();

    let role = role.downcast::<Role>().unwrap();
    let items = role.header.joins.many("RoleFeatures").unwrap();
    assert_eq!(items.count, 3);
    let role_features = items.items_as::<RoleFeature>();
    assert_eq!(role_features.len(), 3);
    for rf in role_features {
        assert_eq!(rf.role_id, "r1");
        let feature = rf.header.joins.one::<Feature>("Feature").unwrap();
        assert_eq!(feature.key, "ADMIN");
    }
}

#[tokio::test]
async fn test_all_joins_every_declared_relation() {
    let h = Harness::new().ready();
    seed_roles(&h).await;

    let mut rf = load(&h, "RoleFeatures", "rf1").await;
    h.service
        .join_fields(&mut rf, "All", &QueryContext::new(), 8)
        .await
        .unwrap();

    let rf = rf.downcast::<RoleFeature>().unwrap();
    assert_eq!(rf.header.joins.one::<Role>("Role").unwrap().name, "Admin");
    assert_eq!(rf.header.joins.one::<Feature>("Feature").unwrap().key, "ADMIN");
    // empty LastUpdateId: nothing to fetch
    assert!(rf.header.joins.get("LastUpdateUser").is_none());
    assert_eq!(rf.header.joins.len(), 2);
}

#[tokio::test]
async fn test_empty_path_is_noop() {
    let h = Harness::new().ready();
    seed_accounts(&h).await;

    let mut user = load(&h, "Users", "u1").await;
    let before = user.clone();
    h.service
        .join_fields(&mut user, "", &QueryContext::new(), 8)
        .await
        .unwrap();
    assert_eq!(user, before);
}

#[tokio::test]
async fn test_unknown_segment_is_skipped() {
    let h = Harness::new().ready();
    seed_accounts(&h).await;

    let mut user = load(&h, "Users", "u1").await;
    let before = user.clone();
    h.service
        .join_fields(&mut user, "Nope.Country", &QueryContext::new(), 8)
        .await
        .unwrap();
    assert_eq!(user, before);
}

#[tokio::test]
async fn test_missing_related_row_leaves_slot_empty() {
    let h = Harness::new().ready();
    h.store
        .put("Users", "u2", json!({"Id": "u2", "DefaultAccountId": "gone"}))
        .await
        .unwrap();

    let mut user = load(&h, "Users", "u2").await;
    h.service
        .join_fields(&mut user, "Account", &QueryContext::new(), 1)
        .await
        .unwrap();
    assert!(user.header().joins.get("Account").is_none());
}

#[tokio::test]
async fn test_projection_applies_to_joined_rows() {
    let h = Harness::new().ready();
    seed_accounts(&h).await;
    let ctx = QueryContext::new().with_projection("Accounts", Projection::whitelist(["AccountName"]));

    let mut user = load(&h, "Users", "u1").await;
    h.service
        .join_fields(&mut user, "Account", &ctx, 1)
        .await
        .unwrap();
    let user = user.downcast::<User>().unwrap();
    let account = user.header.joins.one::<Account>("Account").unwrap();
    assert_eq!(account.account_name, "Acme");
    assert!(account.city.is_empty());
    assert_eq!(account.header.id, "X");
}

#[tokio::test]
async fn test_failing_branch_does_not_block_siblings() {
    print_test_header(
        "test_failing_branch_does_not_block_siblings",
        &[
            "Accounts is not registered, so Account and AccountRoles fail",
            "Password still resolves and the first error is returned",
        ],
    );
    let mut registry = EntityRegistry::new();
    registry.register(Registration::of::<User>().with_seed_payload(""));
    registry.register(Registration::of::<Password>().with_seed_payload(""));

    let store = Arc::new(InMemoryDocumentStore::new());
    store
        .put("Users", "u1", json!({"Id": "u1", "DefaultAccountId": "X", "PasswordId": "p1"}))
        .await
        .unwrap();
    store
        .put("Passwords", "p1", json!({"Id": "p1", "Value": "hash"}))
        .await
        .unwrap();

    let collections = Arc::new(Collections::new(
        Arc::new(registry),
        store,
        Arc::new(RecordCache::new()),
        std::time::Duration::from_millis(100),
    ));
    collections.mark_all_ready();
    let resolver = JoinResolver::new(collections.clone());

    let mut user = collections
        .resolve_collection("Users")
        .unwrap()
        .query()
        .await
        .by_id("u1")
        .await
        .unwrap()
        .unwrap();
    let err = resolver
        .join_fields(&mut user, "All", &QueryContext::new(), 8)
        .await
        .unwrap_err();

    assert_eq!(err, JoinError::UnknownCollection("Accounts".to_string()));
    assert!(user.header().joins.one::<Password>("Password").is_some());
    assert!(user.header().joins.get("Account").is_none());
    println!("✅ {}", err);
}

#[tokio::test]
async fn test_service_by_id_hydrates_and_renders_views() {
    let h = Harness::new().ready();
    seed_accounts(&h).await;

    let record = h
        .service
        .by_id("Users", "u1", &["Account".to_string(), " ".to_string()])
        .await
        .unwrap();
    let user = record.downcast::<User>().unwrap();
    assert_eq!(user.views.full_name, "Lovelace, Ada");
    assert_eq!(user.views.locked, "Disabled");
    assert!(user.header.joins.one::<Account>("Account").is_some());

    let err = h.service.by_id("Users", "nobody", &[]).await.unwrap_err();
    assert!(matches!(err, EntityError::NotFound { .. }));
}

#[tokio::test]
async fn test_populated_slot_is_kept_and_walked() {
    print_test_header(
        "test_populated_slot_is_kept_and_walked",
        &[
            "An Account already in the joins sidecar is not refetched",
            "and its own relations are filled within the budget",
        ],
    );
    let h = Harness::new().ready();
    seed_accounts(&h).await;
    h.store
        .put("Accounts", "X", json!({"Id": "X", "AccountName": "Renamed", "CountryId": "c1"}))
        .await
        .unwrap();

    let mut sentinel = Account {
        account_name: "Sentinel".to_string(),
        country_id: "c1".to_string(),
        ..Default::default()
    };
    sentinel.header.id = "X".to_string();
    let prepared = |mut user: Record| {
        user.as_joinable_mut()
            .joins_mut()
            .insert("Account", Joined::One(Box::new(sentinel.clone().into())));
        user
    };
    let ctx = QueryContext::new();

    let mut shallow = prepared(load(&h, "Users", "u1").await);
    h.service
        .join_fields(&mut shallow, "Account.Country", &ctx, 1)
        .await
        .unwrap();
    let shallow = shallow.downcast::<User>().unwrap();
    let account = shallow.header.joins.one::<Account>("Account").unwrap();
    assert_eq!(account.account_name, "Sentinel");
    assert!(account.header.joins.is_empty());

    let mut deep = prepared(load(&h, "Users", "u1").await);
    h.service
        .join_fields(&mut deep, "Account.Country", &ctx, 2)
        .await
        .unwrap();
    let deep = deep.downcast::<User>().unwrap();
    let account = deep.header.joins.one::<Account>("Account").unwrap();
    assert_eq!(account.account_name, "Sentinel");
    assert_eq!(account.header.joins.one::<Country>("Country").unwrap().iso, "FR");
    println!("✅ Existing Account kept, Country filled through it");
}

#[tokio::test]
async fn test_populated_many_slot_items_are_walked() {
    let h = Harness::new().ready();
    seed_roles(&h).await;

    let mut only = RoleFeature {
        role_id: "r1".to_string(),
        feature_id: "f1".to_string(),
        ..Default::default()
    };
    only.header.id = "rfX".to_string();
    let mut role = load(&h, "Roles", "r1").await;
    role.as_joinable_mut().joins_mut().insert(
        "RoleFeatures",
        Joined::Many(JoinItems::from_items(vec![only.into()])),
    );

    h.service
        .join_fields(&mut role, "RoleFeatures.Feature", &QueryContext::new(), 2)
        .await
        .unwrap();

    let role = role.downcast::<Role>().unwrap();
    let items = role.header.joins.many("RoleFeatures").unwrap();
    assert_eq!(items.count, 1);
    let role_features = items.items_as::<RoleFeature>();
    assert_eq!(role_features.len(), 1);
    assert_eq!(role_features[0].header.id, "rfX");
    assert_eq!(role_features[0].header.joins.one::<Feature>("Feature").unwrap().key, "ADMIN");
}

#[tokio::test]
async fn test_single_value_in_many_slot_is_container_mismatch() {
    let h = Harness::new().ready();
    seed_roles(&h).await;

    let mut role = load(&h, "Roles", "r1").await;
    role.as_joinable_mut().joins_mut().insert(
        "RoleFeatures",
        Joined::One(Box::new(RoleFeature::default().into())),
    );

    let resolver = JoinResolver::new(h.collections.clone());
    let err = resolver
        .join_fields(&mut role, "RoleFeatures", &QueryContext::new(), 8)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        JoinError::ContainerMismatch {
            relation: "RoleFeatures".to_string(),
            id: "r1".to_string(),
        }
    );
    assert!(matches!(role.header().joins.get("RoleFeatures"), Some(Joined::One(_))));
}
