// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

mod association_compliance_severity;
mod association_description;
mod association_status;
mod association_status_name;
mod association_sync_compliance;
mod attachment_information;
mod automation_execution;
mod automation_execution_filter;
mod automation_execution_filter_key;
mod automation_execution_metadata;
mod automation_execution_status;
mod automation_type;
mod cloud_watch_output_config;
mod command;
mod command_filter;
mod command_filter_key;
mod command_invocation;
mod command_invocation_status;
mod command_plugin;
mod command_plugin_status;
mod command_status;
mod compliance_execution_summary;
mod compliance_item_entry;
mod compliance_severity;
mod compliance_status;
mod compliance_upload_type;
mod create_association_batch_request_entry;
mod document_description;
mod document_format;
mod document_hash_type;
mod document_parameter;
mod document_parameter_type;
mod document_requires;
mod document_status;
mod document_type;
mod execution_mode;
mod failed_create_association;
mod fault;
mod instance_association_output_location;
mod inventory_item;
mod notification_config;
mod notification_event;
mod notification_type;
mod parameter;
mod parameter_tier;
mod parameter_type;
mod platform_type;
mod resolved_targets;
mod resource_type_for_tagging;
mod s3_output_location;
mod tag;
mod target;

pub use association_compliance_severity::AssociationComplianceSeverity;
pub use association_description::AssociationDescription;
pub use association_status::AssociationStatus;
pub use association_status_name::AssociationStatusName;
pub use association_sync_compliance::AssociationSyncCompliance;
pub use attachment_information::AttachmentInformation;
pub use automation_execution::AutomationExecution;
pub use automation_execution_filter::AutomationExecutionFilter;
pub use automation_execution_filter_key::AutomationExecutionFilterKey;
pub use automation_execution_metadata::AutomationExecutionMetadata;
pub use automation_execution_status::AutomationExecutionStatus;
pub use automation_type::AutomationType;
pub use cloud_watch_output_config::CloudWatchOutputConfig;
pub use command::Command;
pub use command_filter::CommandFilter;
pub use command_filter_key::CommandFilterKey;
pub use command_invocation::CommandInvocation;
pub use command_invocation_status::CommandInvocationStatus;
pub use command_plugin::CommandPlugin;
pub use command_plugin_status::CommandPluginStatus;
pub use command_status::CommandStatus;
pub use compliance_execution_summary::ComplianceExecutionSummary;
pub use compliance_item_entry::ComplianceItemEntry;
pub use compliance_severity::ComplianceSeverity;
pub use compliance_status::ComplianceStatus;
pub use compliance_upload_type::ComplianceUploadType;
pub use create_association_batch_request_entry::CreateAssociationBatchRequestEntry;
pub use document_description::DocumentDescription;
pub use document_format::DocumentFormat;
pub use document_hash_type::DocumentHashType;
pub use document_parameter::DocumentParameter;
pub use document_parameter_type::DocumentParameterType;
pub use document_requires::DocumentRequires;
pub use document_status::DocumentStatus;
pub use document_type::DocumentType;
pub use execution_mode::ExecutionMode;
pub use failed_create_association::FailedCreateAssociation;
pub use fault::Fault;
pub use instance_association_output_location::InstanceAssociationOutputLocation;
pub use inventory_item::InventoryItem;
pub use notification_config::NotificationConfig;
pub use notification_event::NotificationEvent;
pub use notification_type::NotificationType;
pub use parameter::Parameter;
pub use parameter_tier::ParameterTier;
pub use parameter_type::ParameterType;
pub use platform_type::PlatformType;
pub use resolved_targets::ResolvedTargets;
pub use resource_type_for_tagging::ResourceTypeForTagging;
pub use s3_output_location::S3OutputLocation;
pub use tag::Tag;
pub use target::Target;
