// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

mod add_tags_to_resource;
mod cancel_command;
mod create_activation;
mod create_association;
mod create_association_batch;
mod create_maintenance_window;
mod delete_activation;
mod delete_parameter;
mod describe_automation_executions;
mod describe_document;
mod get_automation_execution;
mod get_command_invocation;
mod get_parameter;
mod list_command_invocations;
mod list_commands;
mod put_compliance_items;
mod put_inventory;
mod put_parameter;
mod send_command;
mod update_association;

pub use add_tags_to_resource::AddTagsToResource;
pub use add_tags_to_resource::AddTagsToResourceError;
pub use add_tags_to_resource::AddTagsToResourceRequest;
pub use add_tags_to_resource::AddTagsToResourceResult;
pub use cancel_command::CancelCommand;
pub use cancel_command::CancelCommandError;
pub use cancel_command::CancelCommandRequest;
pub use cancel_command::CancelCommandResult;
pub use create_activation::CreateActivation;
pub use create_activation::CreateActivationError;
pub use create_activation::CreateActivationRequest;
pub use create_activation::CreateActivationResult;
pub use create_association::CreateAssociation;
pub use create_association::CreateAssociationError;
pub use create_association::CreateAssociationRequest;
pub use create_association::CreateAssociationResult;
pub use create_association_batch::CreateAssociationBatch;
pub use create_association_batch::CreateAssociationBatchError;
pub use create_association_batch::CreateAssociationBatchRequest;
pub use create_association_batch::CreateAssociationBatchResult;
pub use create_maintenance_window::CreateMaintenanceWindow;
pub use create_maintenance_window::CreateMaintenanceWindowError;
pub use create_maintenance_window::CreateMaintenanceWindowRequest;
pub use create_maintenance_window::CreateMaintenanceWindowResult;
pub use delete_activation::DeleteActivation;
pub use delete_activation::DeleteActivationError;
pub use delete_activation::DeleteActivationRequest;
pub use delete_activation::DeleteActivationResult;
pub use delete_parameter::DeleteParameter;
pub use delete_parameter::DeleteParameterError;
pub use delete_parameter::DeleteParameterRequest;
pub use delete_parameter::DeleteParameterResult;
pub use describe_automation_executions::DescribeAutomationExecutions;
pub use describe_automation_executions::DescribeAutomationExecutionsError;
pub use describe_automation_executions::DescribeAutomationExecutionsRequest;
pub use describe_automation_executions::DescribeAutomationExecutionsResult;
pub use describe_document::DescribeDocument;
pub use describe_document::DescribeDocumentError;
pub use describe_document::DescribeDocumentRequest;
pub use describe_document::DescribeDocumentResult;
pub use get_automation_execution::GetAutomationExecution;
pub use get_automation_execution::GetAutomationExecutionError;
pub use get_automation_execution::GetAutomationExecutionRequest;
pub use get_automation_execution::GetAutomationExecutionResult;
pub use get_command_invocation::GetCommandInvocation;
pub use get_command_invocation::GetCommandInvocationError;
pub use get_command_invocation::GetCommandInvocationRequest;
pub use get_command_invocation::GetCommandInvocationResult;
pub use get_parameter::GetParameter;
pub use get_parameter::GetParameterError;
pub use get_parameter::GetParameterRequest;
pub use get_parameter::GetParameterResult;
pub use list_command_invocations::ListCommandInvocations;
pub use list_command_invocations::ListCommandInvocationsError;
pub use list_command_invocations::ListCommandInvocationsRequest;
pub use list_command_invocations::ListCommandInvocationsResult;
pub use list_commands::ListCommands;
pub use list_commands::ListCommandsError;
pub use list_commands::ListCommandsRequest;
pub use list_commands::ListCommandsResult;
pub use put_compliance_items::PutComplianceItems;
pub use put_compliance_items::PutComplianceItemsError;
pub use put_compliance_items::PutComplianceItemsRequest;
pub use put_compliance_items::PutComplianceItemsResult;
pub use put_inventory::PutInventory;
pub use put_inventory::PutInventoryError;
pub use put_inventory::PutInventoryRequest;
pub use put_inventory::PutInventoryResult;
pub use put_parameter::PutParameter;
pub use put_parameter::PutParameterError;
pub use put_parameter::PutParameterRequest;
pub use put_parameter::PutParameterResult;
pub use send_command::SendCommand;
pub use send_command::SendCommandError;
pub use send_command::SendCommandRequest;
pub use send_command::SendCommandResult;
pub use update_association::UpdateAssociation;
pub use update_association::UpdateAssociationError;
pub use update_association::UpdateAssociationRequest;
pub use update_association::UpdateAssociationResult;
