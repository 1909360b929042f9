use mockforge_core::{Error, FieldDef, MockValue, TypeDef, TypeRegistry};
use mockforge_generate::{GenerateOptions, GenerationError, MockEngine};

fn registry_with(defs: Vec<TypeDef>) -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    for def in defs {
        registry.register(def).expect("valid definition");
    }
    registry
}

fn seeded(types: TypeRegistry, seed: u64) -> MockEngine {
    MockEngine::with_options(
        types,
        GenerateOptions {
            seed: Some(seed),
            ..GenerateOptions::default()
        },
    )
}

#[test]
fn every_record_has_exactly_the_declared_keys() {
    let engine = seeded(TypeRegistry::builtin(), 1);
    let records = engine.generate("wp.post", 25).expect("generate");
    assert_eq!(records.len(), 25);

    for record in &records {
        assert_eq!(record.len(), 23);
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys.first(), Some(&"author"));
        assert_eq!(keys.last(), Some(&"filter"));
    }
}

#[test]
fn simple_user_type_yields_expected_shapes() {
    let types = registry_with(vec![TypeDef::new(
        "user",
        vec![
            FieldDef::new("id", &["int"]),
            FieldDef::new("email", &["string"]),
            FieldDef::new("is_active", &["bool"]),
        ],
    )]);
    let engine = seeded(types, 7);
    let records = engine.generate("user", 3).expect("generate");
    assert_eq!(records.len(), 3);

    for record in &records {
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["id", "email", "is_active"]);

        // `id` ends with `id`, so the suffix rule applies.
        let id = record.get("id").and_then(MockValue::as_i64).expect("id");
        assert!((1..=10_000).contains(&id));

        let email = record.get("email").and_then(MockValue::as_str).expect("email");
        assert!(email.contains('@') && email.contains('.'), "bad email {email}");

        assert_eq!(record.get("is_active").map(MockValue::kind), Some("bool"));
    }
}

#[test]
fn user_id_and_age_respect_their_ranges() {
    let types = registry_with(vec![TypeDef::new(
        "visit",
        vec![
            FieldDef::new("user_id", &["int"]),
            FieldDef::new("age", &["int"]),
        ],
    )]);
    let engine = seeded(types, 5);
    let records = engine.generate("visit", 300).expect("generate");

    for record in &records {
        let user = record
            .get("user_id")
            .and_then(MockValue::as_i64)
            .expect("user id");
        // The specific `user_id` rule outranks the `id` suffix rule.
        assert!((1..=100).contains(&user), "out of range: {user}");

        let age = record.get("age").and_then(MockValue::as_i64).expect("age");
        assert!((18..=65).contains(&age), "out of range: {age}");
    }
}

#[test]
fn nullable_fields_go_null_at_roughly_the_default_rate() {
    let types = registry_with(vec![TypeDef::new(
        "note",
        vec![
            FieldDef::new("body", &["string", "null"]),
            FieldDef::new("pinned", &["bool"]),
        ],
    )]);
    let engine = seeded(types, 99);
    let records = engine.generate("note", 2_000).expect("generate");

    let nulls = records
        .iter()
        .filter(|record| record.get("body").is_some_and(MockValue::is_null))
        .count();
    let rate = nulls as f64 / records.len() as f64;
    assert!((0.15..=0.25).contains(&rate), "null rate {rate}");

    for record in &records {
        // Non-nullable fields are never null.
        assert!(!record.get("pinned").is_some_and(MockValue::is_null));
    }
}

#[test]
fn boolean_bias_follows_the_name_tables() {
    let types = registry_with(vec![TypeDef::new(
        "flags",
        vec![
            FieldDef::new("is_active", &["bool"]),
            FieldDef::new("account_enabled", &["bool"]),
        ],
    )]);
    let engine = seeded(types, 13);
    let records = engine.generate("flags", 2_000).expect("generate");

    // `is_active` starts with `is_`, which outranks the `active` rule.
    let active = records
        .iter()
        .filter(|r| r.get("is_active").and_then(MockValue::as_bool) == Some(true))
        .count() as f64
        / records.len() as f64;
    assert!((0.44..=0.56).contains(&active), "is_active rate {active}");

    let enabled = records
        .iter()
        .filter(|r| r.get("account_enabled").and_then(MockValue::as_bool) == Some(true))
        .count() as f64
        / records.len() as f64;
    assert!((0.86..=0.94).contains(&enabled), "enabled rate {enabled}");
}

#[test]
fn class_typed_fields_become_fully_populated_records() {
    let types = registry_with(vec![
        TypeDef::new(
            "customer",
            vec![
                FieldDef::new("id", &["int"]),
                FieldDef::new("email", &["string"]),
            ],
        ),
        TypeDef::new(
            "order",
            vec![
                FieldDef::new("order_id", &["int"]),
                FieldDef::new("customer", &["customer"]),
            ],
        ),
    ]);
    let engine = seeded(types, 21);
    let records = engine.generate("order", 50).expect("generate");

    for record in &records {
        let customer = record
            .get("customer")
            .and_then(MockValue::as_record)
            .expect("nested record");
        let keys: Vec<&str> = customer.keys().collect();
        assert_eq!(keys, vec!["id", "email"]);
        assert!(!customer.get("id").is_some_and(MockValue::is_null));
    }
}

#[test]
fn union_fields_resolve_to_the_first_declared_tag() {
    let types = registry_with(vec![TypeDef::new(
        "mixed",
        vec![FieldDef::new("value", &["int", "string"])],
    )]);
    let engine = seeded(types, 31);
    let records = engine.generate("mixed", 100).expect("generate");
    for record in &records {
        assert_eq!(record.get("value").map(MockValue::kind), Some("int"));
    }
}

#[test]
fn unknown_tags_degrade_to_heuristics_instead_of_failing() {
    let types = registry_with(vec![TypeDef::new(
        "odd",
        vec![
            FieldDef::new("widget_id", &["WidgetRef"]),
            FieldDef::new("has_warranty", &["Tri-State"]),
            FieldDef::new("anything", &[]),
        ],
    )]);
    let engine = seeded(types, 41);
    let records = engine.generate("odd", 20).expect("generate");

    for record in &records {
        assert_eq!(record.get("widget_id").map(MockValue::kind), Some("int"));
        assert_eq!(record.get("has_warranty").map(MockValue::kind), Some("bool"));
        assert_eq!(record.get("anything").map(MockValue::kind), Some("text"));
    }
}

#[test]
fn unknown_type_is_fatal_and_yields_no_records() {
    let engine = seeded(TypeRegistry::builtin(), 1);
    let err = engine.generate("wp.page", 5).unwrap_err();
    assert!(err.is_type_not_found());
    assert!(matches!(
        err,
        GenerationError::Core(Error::TypeNotFound(name)) if name == "wp.page"
    ));
}

#[test]
fn self_referential_types_fail_closed() {
    let types = registry_with(vec![TypeDef::new(
        "node",
        vec![
            FieldDef::new("id", &["int"]),
            FieldDef::new("next", &["node"]),
        ],
    )]);
    let engine = seeded(types, 1);
    let err = engine.generate("node", 1).unwrap_err();
    assert!(matches!(
        err,
        GenerationError::Core(Error::CyclicType { type_name, depth })
            if type_name == "node" && depth == 8
    ));
}

#[test]
fn identical_seeds_reproduce_identical_batches() {
    let build = || seeded(TypeRegistry::builtin(), 4242);
    let first = build().generate("wp.user", 10).expect("generate");
    let second = build().generate("wp.user", 10).expect("generate");
    assert_eq!(first, second);
}

#[test]
fn zero_count_yields_an_empty_batch() {
    let engine = seeded(TypeRegistry::builtin(), 1);
    let records = engine.generate("wp.category", 0).expect("generate");
    assert!(records.is_empty());
}

#[test]
fn serialized_batches_keep_field_names_and_kinds() {
    let engine = seeded(TypeRegistry::builtin(), 77);
    let records = engine.generate("wp.user", 10).expect("generate");

    let json = serde_json::to_string(&records).expect("serialize");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse");
    let array = parsed.as_array().expect("array");
    assert_eq!(array.len(), 10);

    for (record, value) in records.iter().zip(array) {
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), record.len());
        for (name, field) in record.iter() {
            let parsed_field = object.get(name).expect("field present");
            match field {
                MockValue::Null => assert!(parsed_field.is_null()),
                MockValue::Bool(_) => assert!(parsed_field.is_boolean()),
                MockValue::Int(_) => assert!(parsed_field.is_i64()),
                MockValue::Float(_) => assert!(parsed_field.is_f64()),
                MockValue::Text(_) => assert!(parsed_field.is_string()),
                MockValue::List(_) => assert!(parsed_field.is_array()),
                MockValue::Record(_) => assert!(parsed_field.is_object()),
            }
        }
    }
}

#[test]
fn caller_registered_generators_take_part_in_dispatch() {
    let types = registry_with(vec![TypeDef::new(
        "payment",
        vec![FieldDef::new("amount", &["money"])],
    )]);
    let mut engine = seeded(types, 3);
    engine
        .generators_mut()
        .register_fn("money", |_, _| MockValue::Text("0.00 USD".to_string()));

    let records = engine.generate("payment", 5).expect("generate");
    for record in &records {
        assert_eq!(
            record.get("amount").and_then(MockValue::as_str),
            Some("0.00 USD")
        );
    }
}
