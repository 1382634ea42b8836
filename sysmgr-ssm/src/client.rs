// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use sysmgr_model::{CallResult, ClientConfig, Dispatcher, Transport};

use crate::metadata::TARGET_PREFIX;
use crate::operation::{
    AddTagsToResource, AddTagsToResourceRequest, CancelCommand, CancelCommandRequest,
    CreateActivation, CreateActivationRequest, CreateAssociation, CreateAssociationBatch,
    CreateAssociationBatchRequest, CreateAssociationRequest, CreateMaintenanceWindow,
    CreateMaintenanceWindowRequest, DeleteActivation, DeleteActivationRequest, DeleteParameter,
    DeleteParameterRequest, DescribeAutomationExecutions, DescribeAutomationExecutionsRequest,
    DescribeDocument, DescribeDocumentRequest, GetAutomationExecution,
    GetAutomationExecutionRequest, GetCommandInvocation, GetCommandInvocationRequest, GetParameter,
    GetParameterRequest, ListCommandInvocations, ListCommandInvocationsRequest, ListCommands,
    ListCommandsRequest, PutComplianceItems, PutComplianceItemsRequest, PutInventory,
    PutInventoryRequest, PutParameter, PutParameterRequest, SendCommand, SendCommandRequest,
    UpdateAssociation, UpdateAssociationRequest,
};

/// Client for Amazon Simple Systems Manager (SSM).
///
/// Configures, manages and inspects managed instances at scale.
///
/// Every method dispatches one operation through the configured
/// [`Transport`]. Requests are validated first only when the
/// configuration asks for strict validation.
#[derive(Debug, Clone)]
pub struct SsmClient<T> {
    dispatcher: Dispatcher<T>,
}

impl<T: Transport> SsmClient<T> {
    /// Creates a client for `AmazonSSM` with permissive validation.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ClientConfig::new(TARGET_PREFIX))
    }

    /// Creates a client with explicit configuration.
    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(transport, config),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    /// Adds or overwrites tags on a document, managed instance, maintenance window, parameter, patch baseline or OpsItem.
    pub fn add_tags_to_resource(
        &self,
        request: &AddTagsToResourceRequest,
    ) -> CallResult<AddTagsToResource, T> {
        self.dispatcher.call::<AddTagsToResource>(request)
    }

    /// Attempts to cancel a command.
    pub fn cancel_command(&self, request: &CancelCommandRequest) -> CallResult<CancelCommand, T> {
        self.dispatcher.call::<CancelCommand>(request)
    }

    /// Generates an activation code and id for registering on-premises machines.
    pub fn create_activation(
        &self,
        request: &CreateActivationRequest,
    ) -> CallResult<CreateActivation, T> {
        self.dispatcher.call::<CreateActivation>(request)
    }

    /// Associates a document with managed instances or targets.
    pub fn create_association(
        &self,
        request: &CreateAssociationRequest,
    ) -> CallResult<CreateAssociation, T> {
        self.dispatcher.call::<CreateAssociation>(request)
    }

    /// Associates documents with managed instances in one request.
    pub fn create_association_batch(
        &self,
        request: &CreateAssociationBatchRequest,
    ) -> CallResult<CreateAssociationBatch, T> {
        self.dispatcher.call::<CreateAssociationBatch>(request)
    }

    /// Creates a maintenance window.
    pub fn create_maintenance_window(
        &self,
        request: &CreateMaintenanceWindowRequest,
    ) -> CallResult<CreateMaintenanceWindow, T> {
        self.dispatcher.call::<CreateMaintenanceWindow>(request)
    }

    /// Deletes an activation code and id.
    pub fn delete_activation(
        &self,
        request: &DeleteActivationRequest,
    ) -> CallResult<DeleteActivation, T> {
        self.dispatcher.call::<DeleteActivation>(request)
    }

    /// Deletes a parameter from Parameter Store.
    pub fn delete_parameter(
        &self,
        request: &DeleteParameterRequest,
    ) -> CallResult<DeleteParameter, T> {
        self.dispatcher.call::<DeleteParameter>(request)
    }

    /// Lists active and finished Automation executions.
    pub fn describe_automation_executions(
        &self,
        request: &DescribeAutomationExecutionsRequest,
    ) -> CallResult<DescribeAutomationExecutions, T> {
        self.dispatcher.call::<DescribeAutomationExecutions>(request)
    }

    /// Describes an SSM document.
    pub fn describe_document(
        &self,
        request: &DescribeDocumentRequest,
    ) -> CallResult<DescribeDocument, T> {
        self.dispatcher.call::<DescribeDocument>(request)
    }

    /// Gets detailed information about an Automation execution.
    pub fn get_automation_execution(
        &self,
        request: &GetAutomationExecutionRequest,
    ) -> CallResult<GetAutomationExecution, T> {
        self.dispatcher.call::<GetAutomationExecution>(request)
    }

    /// Returns the result of a command on one instance, for one plugin.
    pub fn get_command_invocation(
        &self,
        request: &GetCommandInvocationRequest,
    ) -> CallResult<GetCommandInvocation, T> {
        self.dispatcher.call::<GetCommandInvocation>(request)
    }

    /// Gets one parameter by name.
    pub fn get_parameter(&self, request: &GetParameterRequest) -> CallResult<GetParameter, T> {
        self.dispatcher.call::<GetParameter>(request)
    }

    /// Lists the per-instance invocations of commands.
    pub fn list_command_invocations(
        &self,
        request: &ListCommandInvocationsRequest,
    ) -> CallResult<ListCommandInvocations, T> {
        self.dispatcher.call::<ListCommandInvocations>(request)
    }

    /// Lists the commands requested by users of the account.
    pub fn list_commands(&self, request: &ListCommandsRequest) -> CallResult<ListCommands, T> {
        self.dispatcher.call::<ListCommands>(request)
    }

    /// Registers a compliance type and items on a resource.
    pub fn put_compliance_items(
        &self,
        request: &PutComplianceItemsRequest,
    ) -> CallResult<PutComplianceItems, T> {
        self.dispatcher.call::<PutComplianceItems>(request)
    }

    /// Adds inventory items to a managed instance.
    pub fn put_inventory(&self, request: &PutInventoryRequest) -> CallResult<PutInventory, T> {
        self.dispatcher.call::<PutInventory>(request)
    }

    /// Adds a parameter to Parameter Store, or overwrites one.
    pub fn put_parameter(&self, request: &PutParameterRequest) -> CallResult<PutParameter, T> {
        self.dispatcher.call::<PutParameter>(request)
    }

    /// Runs commands on one or more managed instances.
    pub fn send_command(&self, request: &SendCommandRequest) -> CallResult<SendCommand, T> {
        self.dispatcher.call::<SendCommand>(request)
    }

    /// Updates an association and creates a new version of it.
    pub fn update_association(
        &self,
        request: &UpdateAssociationRequest,
    ) -> CallResult<UpdateAssociation, T> {
        self.dispatcher.call::<UpdateAssociation>(request)
    }
}
