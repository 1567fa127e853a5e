//! Property tests for the identifier codec.

use std::collections::HashSet;

use keel_id::{
    from_uuid, generate, infer_entity, parse, to_uuid, validate, AnyId, Entity, IdError, Uuid,
    WorkspaceId,
};
use proptest::prelude::*;

fn any_entity() -> impl Strategy<Value = Entity> {
    proptest::sample::select(Entity::ALL.to_vec())
}

fn distinct_entities() -> impl Strategy<Value = (Entity, Entity)> {
    (any_entity(), any_entity()).prop_filter("entities must differ", |(a, b)| a != b)
}

#[test]
fn workspace_example_scenario() {
    let id = generate(Entity::Workspace).to_string();
    assert!(id.starts_with("wsp_"));
    assert_eq!(id.len(), 30);
    assert_eq!(parse(Entity::Workspace, &id).unwrap().to_string(), id);
    assert!(parse(Entity::Organization, &id).unwrap_err().is_malformed());

    let typed: WorkspaceId = id.parse().unwrap();
    assert_eq!(typed.to_string(), id);
}

#[test]
fn generated_ids_are_distinct_and_valid() {
    for entity in Entity::ALL {
        let ids: Vec<String> = (0..500).map(|_| generate(*entity).to_string()).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.iter().all(|id| validate(*entity, id)));
    }
}

proptest! {
    #[test]
    fn infer_entity_recovers_generated_entity(entity in any_entity()) {
        let id = generate(entity).to_string();
        prop_assert_eq!(infer_entity(&id), Ok(entity));
    }

    #[test]
    fn uuid_roundtrip_reproduces_identifier(entity in any_entity()) {
        let id = generate(entity).to_string();
        let decoded = to_uuid(&id).unwrap();
        prop_assert_eq!(decoded.entity, entity);
        let back = from_uuid(entity, &decoded.uuid_string()).unwrap();
        prop_assert_eq!(back.to_string(), id);
    }

    #[test]
    fn arbitrary_uuids_roundtrip(entity in any_entity(), raw in any::<u128>()) {
        let uuid = Uuid::from_u128(raw);
        let id = from_uuid(entity, &uuid.to_string()).unwrap();
        let s = id.to_string();
        prop_assert_eq!(s.len(), entity.id_len());
        prop_assert!(validate(entity, &s));
        prop_assert_eq!(to_uuid(&s).unwrap().uuid, uuid);
        prop_assert_eq!(s.parse::<AnyId>().unwrap(), id);
    }

    #[test]
    fn cross_entity_rejection((e1, e2) in distinct_entities()) {
        let id = generate(e1).to_string();
        prop_assert!(!validate(e2, &id));
    }

    #[test]
    fn invalid_candidates_fail_to_parse(entity in any_entity(), candidate in "\\PC{0,40}") {
        if validate(entity, &candidate) {
            prop_assert_eq!(parse(entity, &candidate).unwrap().to_string(), candidate);
        } else {
            let is_malformed = matches!(
                parse(entity, &candidate),
                Err(IdError::Malformed { .. })
            );
            prop_assert!(is_malformed);
        }
    }

    #[test]
    fn near_miss_candidates_fail_to_parse(
        entity in any_entity(),
        suffix in "[0-9a-zA-Z]{20,30}",
    ) {
        let candidate = format!("{}_{}", entity.prefix(), suffix);
        let canonical = suffix.len() == 26
            && suffix.as_bytes()[0] <= b'7'
            && suffix
                .bytes()
                .all(|b| b"0123456789abcdefghjkmnpqrstvwxyz".contains(&b));
        prop_assert_eq!(validate(entity, &candidate), canonical);
        prop_assert_eq!(parse(entity, &candidate).is_err(), !canonical);
    }
}
