mod common;

use common::{Command, Notification, Severity, Target};
use proptest::option;
use proptest::prelude::*;
use sysmgr_model::{Entity, HashCode, Timestamp};

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Critical),
        Just(Severity::High),
        Just(Severity::Low),
        "[A-Z]{1,8}".prop_map(Severity::from),
    ]
}

fn target() -> impl Strategy<Value = Target> {
    (
        option::of("[a-zA-Z:]{0,12}"),
        option::of(prop::collection::vec("[a-z0-9-]{0,8}", 0..3)),
    )
        .prop_map(|(key, values)| {
            let mut target = Target::default();
            target.set_key(key);
            target.set_values(values);
            target
        })
}

/// Whether `rendered` has a top-level `name: ` entry. Labels always follow
/// the opening brace or a comma, which generated values never contain.
fn mentions(rendered: &str, name: &str) -> bool {
    rendered.starts_with(&format!("{{{name}: ")) || rendered.contains(&format!(",{name}: "))
}

prop_compose! {
    fn command()(
        document_name in option::of("[a-zA-Z0-9_.-]{0,20}"),
        instance_ids in option::of(prop::collection::vec("i-[0-9a-f]{1,8}", 0..4)),
        targets in option::of(prop::collection::vec(target(), 0..3)),
        parameters in option::of(prop::collection::btree_map(
            "[a-z]{1,6}",
            prop::collection::vec("[a-z0-9 ]{0,6}", 0..3),
            0..3,
        )),
        timeout_seconds in option::of(any::<i32>()),
        requested in option::of(-4_000_000_000_000_i64..4_000_000_000_000),
        severity in option::of(severity()),
        notification_arn in option::of(option::of("[a-z:]{0,10}")),
        arn in option::of("[a-z0-9:/-]{0,10}"),
        enabled in option::of(any::<bool>()),
        size in option::of(any::<i64>()),
    ) -> Command {
        let mut command = Command::default();
        command.set_document_name(document_name);
        command.set_instance_ids(instance_ids);
        command.set_targets(targets);
        command.set_parameters(parameters);
        command.set_timeout_seconds(timeout_seconds);
        command.set_requested_date_time(requested.map(Timestamp::from_millis));
        command.set_severity(severity);
        command.set_notification(notification_arn.map(|arn| {
            let mut notification = Notification::default();
            notification.set_notification_arn(arn);
            notification
        }));
        command.set_arn(arn);
        command.set_enabled(enabled);
        command.set_size(size);
        command
    }
}

proptest! {
    #[test]
    fn equality_is_reflexive(command in command()) {
        prop_assert_eq!(&command, &command.clone());
    }

    #[test]
    fn equality_is_symmetric(a in command(), b in command()) {
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn equal_entities_hash_equal(command in command()) {
        let copy = command.clone();
        prop_assert_eq!(command.hash_code(), copy.hash_code());
    }

    #[test]
    fn absent_and_empty_list_differ(command in command()) {
        let mut absent = command.clone();
        absent.set_instance_ids(None);
        let mut empty = command;
        empty.set_instance_ids(Some(Vec::new()));
        prop_assert_ne!(absent, empty);
    }

    #[test]
    fn append_preserves_order(
        first in prop::collection::vec("[a-z]{1,4}", 0..5),
        second in prop::collection::vec("[a-z]{1,4}", 0..5),
    ) {
        let command = Command::default()
            .append_instance_ids(first.clone())
            .append_instance_ids(second.clone());
        let expected: Vec<String> = first.into_iter().chain(second).collect();
        prop_assert_eq!(command.instance_ids(), Some(expected.as_slice()));
    }

    #[test]
    fn duplicate_key_is_rejected_and_value_kept(
        key in "[a-z]{1,6}",
        first in prop::collection::vec("[a-z]{0,4}", 0..3),
        second in prop::collection::vec("[a-z]{0,4}", 0..3),
    ) {
        let mut command = Command::default();
        command.put_parameters_entry(key.clone(), first.clone()).unwrap();
        prop_assert!(command.put_parameters_entry(key.clone(), second).is_err());
        prop_assert_eq!(&command.parameters().unwrap()[&key], &first);
    }

    #[test]
    fn render_mentions_exactly_the_present_fields(command in command()) {
        let rendered = command.to_string();
        let schema = Command::schema();
        for (field, value) in schema.fields.iter().zip(command.field_values()) {
            prop_assert_eq!(
                mentions(&rendered, field.name),
                value.is_some(),
                "{} in {}",
                field.name,
                rendered
            );
        }
        prop_assert!(rendered.starts_with('{') && rendered.ends_with('}'), "rendered output is not a braced object");
        if command.is_empty() {
            prop_assert_eq!(rendered, "{}");
        }
    }

    #[test]
    fn wire_round_trip_preserves_presence(command in command()) {
        let json = serde_json::to_string(&command).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, command);
    }
}
