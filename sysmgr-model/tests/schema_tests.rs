mod common;

use std::collections::HashSet;

use common::{Command, Severity, Target, full_command};
use pretty_assertions::assert_eq;
use sysmgr_model::{Constraints, Entity, FieldKind, FieldType, HashCode};

// ── Entity metadata ──────────────────────────────────────────────

#[test]
fn fields_are_listed_in_declared_order() {
    let names: Vec<&str> = Command::schema().fields.iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        vec![
            "DocumentName",
            "InstanceIds",
            "Targets",
            "Parameters",
            "TimeoutSeconds",
            "RequestedDateTime",
            "Severity",
            "Notification",
            "ARN",
            "Enabled",
            "Size",
        ]
    );
}

#[test]
fn schema_records_member_names_and_renames() {
    let schema = Command::schema();
    assert_eq!(schema.name, "Command");
    let arn = schema.field("ARN").unwrap();
    assert_eq!(arn.member, "arn");
    assert_eq!(schema.member("timeout_seconds").unwrap().name, "TimeoutSeconds");
    assert!(schema.field("Arn").is_none());
}

#[test]
fn schema_records_field_types() {
    let schema = Command::schema();
    let types: Vec<&FieldType> = schema.fields.iter().map(|f| &f.field_type).collect();
    assert_eq!(
        types,
        vec![
            &FieldType::String,
            &FieldType::List(Box::new(FieldType::String)),
            &FieldType::List(Box::new(FieldType::Structure("Target"))),
            &FieldType::Map(Box::new(FieldType::List(Box::new(FieldType::String)))),
            &FieldType::Integer,
            &FieldType::Timestamp,
            &FieldType::Enum("Severity"),
            &FieldType::Structure("Notification"),
            &FieldType::String,
            &FieldType::Boolean,
            &FieldType::Long,
        ]
    );
    assert!(types[3].is_collection());
}

#[test]
fn schema_records_constraints() {
    let schema = Command::schema();
    let timeout = schema.field("TimeoutSeconds").unwrap();
    assert_eq!(
        timeout.constraints,
        Constraints {
            min: Some(30),
            max: Some(2_592_000),
            ..Constraints::NONE
        }
    );
    assert!(schema.field("Enabled").unwrap().constraints.is_empty());

    let required: Vec<&str> = schema.required_fields().map(|f| f.name).collect();
    assert_eq!(required, vec!["DocumentName"]);
}

#[test]
fn enum_fields_carry_allowed_values() {
    let severity = Command::schema().field("Severity").unwrap();
    assert_eq!(
        severity.constraints.allowed,
        Some(&["CRITICAL", "HIGH", "LOW"][..])
    );
}

#[test]
fn nested_schema_is_shared() {
    assert!(std::ptr::eq(Target::schema(), Target::schema()));
    assert_eq!(Target::schema().fields.len(), 2);
}

// ── wire_enum! ───────────────────────────────────────────────────

#[test]
fn enum_values_and_text_forms() {
    assert_eq!(Severity::VALUES, &["CRITICAL", "HIGH", "LOW"]);
    assert_eq!(Severity::High.as_str(), "HIGH");
    assert_eq!(Severity::High.to_string(), "HIGH");
    assert_eq!("LOW".parse::<Severity>().unwrap(), Severity::Low);
    assert_eq!(Severity::from("LOW".to_string()), Severity::Low);
    assert_eq!(Severity::Critical.as_ref(), "CRITICAL");
}

#[test]
fn enum_matching_is_case_sensitive() {
    let parsed = Severity::from("high");
    assert_eq!(parsed, Severity::Unknown("high".to_string()));
    assert!(!parsed.is_known());
    assert!(Severity::High.is_known());
}

#[test]
fn enum_serde_uses_the_wire_value() {
    assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), "\"CRITICAL\"");
    let unknown: Severity = serde_json::from_str("\"NEW\"").unwrap();
    assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"NEW\"");
}

#[test]
fn hand_built_unknown_with_a_known_value_equals_the_variant() {
    let spelled_out = Severity::Unknown("HIGH".to_string());
    assert_eq!(spelled_out, Severity::High);
    assert_eq!(spelled_out.cmp(&Severity::High), std::cmp::Ordering::Equal);
    assert_ne!(Severity::Unknown("high".to_string()), Severity::High);

    let set: HashSet<Severity> = [Severity::High, spelled_out.clone()].into_iter().collect();
    assert_eq!(set.len(), 1);

    let by_hand = full_command().with_severity(spelled_out.clone());
    assert_eq!(by_hand, full_command());
    assert_eq!(by_hand.hash_code(), full_command().hash_code());

    let json = serde_json::to_string(&spelled_out).unwrap();
    assert_eq!(json, "\"HIGH\"");
    let decoded: Severity = serde_json::from_str(&json).unwrap();
    assert!(decoded.is_known());
    assert_eq!(decoded, spelled_out);
}

#[test]
fn enum_order_follows_the_wire_value() {
    let mut values = vec![Severity::Low, Severity::Unknown("MEDIUM".to_string()), Severity::Critical];
    values.sort();
    assert_eq!(
        values,
        vec![Severity::Critical, Severity::Low, Severity::Unknown("MEDIUM".to_string())]
    );
}

#[test]
fn enum_hash_is_the_string_hash() {
    assert_eq!(Severity::High.hash_code(), "HIGH".hash_code());
    assert_eq!(
        Severity::Unknown("X".to_string()).hash_code(),
        "X".hash_code()
    );
}

#[test]
fn enum_field_kind() {
    assert_eq!(Severity::field_type(), FieldType::Enum("Severity"));
    assert_eq!(Severity::allowed_values(), Some(Severity::VALUES));
    assert_eq!(
        <Vec<Severity>>::allowed_values(),
        Some(Severity::VALUES)
    );
}
