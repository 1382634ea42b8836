use std::collections::HashSet;

use pretty_assertions::assert_eq;
use sysmgr_ssm::operation::{
    AddTagsToResourceResult, DeleteParameterRequest, PutParameterRequest, PutParameterResult,
    SendCommandRequest,
};
use sysmgr_ssm::types::{
    Command, CommandStatus, DocumentDescription, DocumentHashType, Fault, ParameterTier,
    ParameterType, Tag, Target,
};
use sysmgr_ssm::{DuplicateKeyError, Entity, HashCode, Timestamp};

fn send_command() -> SendCommandRequest {
    SendCommandRequest::default()
        .with_document_name("AWS-RunShellScript")
        .with_instance_ids(["i-0123456789abcdef0"])
        .with_parameters([("commands", vec!["uptime".to_string()])])
        .with_timeout_seconds(600)
}

// ── Presence ─────────────────────────────────────────────────────

#[test]
fn fresh_request_is_empty() {
    let request = SendCommandRequest::default();
    assert!(request.is_empty());
    assert_eq!(request.document_name(), None);
    assert_eq!(request.instance_ids(), None);
    assert_eq!(request.to_string(), "{}");
}

#[test]
fn keyword_members_use_raw_identifiers() {
    let request = PutParameterRequest::default().with_type(ParameterType::SecureString);
    assert_eq!(request.r#type(), Some(&ParameterType::SecureString));
    assert_eq!(request.to_string(), "{Type: SecureString}");
}

#[test]
fn operation_without_members_has_an_empty_result() {
    let result = AddTagsToResourceResult::default();
    assert!(result.is_empty());
    assert_eq!(result, AddTagsToResourceResult::default());
    assert_eq!(result.hash_code(), 1);
    assert!(AddTagsToResourceResult::schema().fields.is_empty());
}

// ── Collections ──────────────────────────────────────────────────

#[test]
fn append_and_put_entry() {
    let mut request = send_command().append_instance_ids(["mi-0123456789abcdef0"]);
    assert_eq!(request.instance_ids().map(<[String]>::len), Some(2));

    request
        .put_parameters_entry("workingDirectory", vec!["/tmp".to_string()])
        .unwrap();
    let err = request
        .put_parameters_entry("commands", vec!["reboot".to_string()])
        .unwrap_err();
    assert_eq!(
        err,
        DuplicateKeyError {
            field: "Parameters",
            key: "commands".to_string(),
        }
    );
    assert_eq!(
        request.parameters().unwrap()["commands"],
        vec!["uptime".to_string()]
    );
}

#[test]
fn absent_and_empty_tags_differ() {
    let absent = PutParameterRequest::default();
    let empty = PutParameterRequest::default().with_tags(Vec::<Tag>::new());
    assert_ne!(absent, empty);
    assert_eq!(empty.to_string(), "{Tags: []}");
}

// ── Equality and hash ────────────────────────────────────────────

#[test]
fn golden_hash_codes() {
    let tag = Tag::default().with_key("Env").with_value("prod");
    assert_eq!(tag.hash_code(), 5_615_595);

    let target = Target::default().with_key("tag:Env").with_values(["prod"]);
    assert_eq!(target.hash_code(), -795_937_814);

    let request = DeleteParameterRequest::default().with_name("/app/db/password");
    assert_eq!(request.hash_code(), 946_906_670);

    let result = PutParameterResult::default()
        .with_version(3)
        .with_tier(ParameterTier::Advanced);
    assert_eq!(result.hash_code(), -654_192_544);
}

#[test]
fn equal_entities_collapse_in_sets() {
    let mut set = HashSet::new();
    set.insert(send_command());
    set.insert(send_command());
    set.insert(send_command().with_comment("again"));
    assert_eq!(set.len(), 2);
}

#[test]
fn nested_entities_compare_structurally() {
    let running = Command::default()
        .with_command_id("0b1d2c3e-0000-4000-8000-000000000001")
        .with_status(CommandStatus::InProgress);
    let done = running.clone().with_status(CommandStatus::Success);
    assert_ne!(running, done);
    assert_eq!(running, running.clone());
}

// ── Rendering ────────────────────────────────────────────────────

#[test]
fn render_follows_declared_order() {
    assert_eq!(
        send_command().to_string(),
        "{InstanceIds: [i-0123456789abcdef0],\
         DocumentName: AWS-RunShellScript,\
         TimeoutSeconds: 600,\
         Parameters: {commands=[uptime]}}"
    );
}

#[test]
fn render_nests_entities_and_timestamps() {
    let document = DocumentDescription::default()
        .with_name("AWS-RunPatchBaseline")
        .with_created_date(Timestamp::from_secs(1_700_000_000))
        .with_tags([Tag::default().with_key("team").with_value("ops")]);
    assert_eq!(
        document.to_string(),
        "{Name: AWS-RunPatchBaseline,\
         CreatedDate: 2023-11-14T22:13:20.000Z,\
         Tags: [{Key: team,Value: ops}]}"
    );
}

// ── Enumerations ─────────────────────────────────────────────────

#[test]
fn enum_wire_values_survive_renaming() {
    assert_eq!(ParameterTier::IntelligentTiering.as_str(), "Intelligent-Tiering");
    assert_eq!(ParameterTier::from("Intelligent-Tiering"), ParameterTier::IntelligentTiering);
    assert_eq!(Fault::UnknownValue.as_str(), "Unknown");
    assert_eq!(Fault::from("Unknown"), Fault::UnknownValue);
    assert_eq!(Fault::from("Network"), Fault::Unknown("Network".to_string()));
}

#[test]
fn spelled_out_known_value_matches_its_variant() {
    let by_hand = DocumentHashType::Unknown("Sha1".to_string());
    assert_eq!(by_hand, DocumentHashType::Sha1);
    assert_eq!(Fault::Unknown("Unknown".to_string()), Fault::UnknownValue);

    let typed = send_command().with_document_hash_type(DocumentHashType::Sha1);
    let spelled = send_command().with_document_hash_type(by_hand.clone());
    assert_eq!(typed, spelled);
    assert_eq!(typed.hash_code(), spelled.hash_code());
    let set: HashSet<_> = [typed.clone(), spelled.clone()].into_iter().collect();
    assert_eq!(set.len(), 1);

    let wire = serde_json::to_value(&spelled).unwrap();
    assert_eq!(wire["DocumentHashType"], "Sha1");
    let decoded: SendCommandRequest = serde_json::from_value(wire).unwrap();
    assert_eq!(decoded.document_hash_type(), Some(&DocumentHashType::Sha1));
    assert!(decoded.document_hash_type().is_some_and(DocumentHashType::is_known));
    assert_eq!(decoded, typed);
}
