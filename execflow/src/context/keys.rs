//! Well-known keys and identifiers read out of an execution context.

/// Setup-abstraction key holding the account ID.
pub const ACCOUNT_ID: &str = "accountId";

/// Setup-abstraction key holding the organization identifier.
pub const ORG_IDENTIFIER: &str = "orgIdentifier";

/// Setup-abstraction key holding the project identifier.
pub const PROJECT_IDENTIFIER: &str = "projectIdentifier";

/// Frame identifier of the rollback-steps section of a stage.
pub const ROLLBACK_STEPS: &str = "rollbackSteps";

/// Frame identifier of the structural wrapper around parallel siblings.
pub const PARALLEL: &str = "parallel";

/// Frame group of the section holding a pipeline's stages.
pub const STAGES_GROUP: &str = "STAGES";
