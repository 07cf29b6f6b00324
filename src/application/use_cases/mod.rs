pub mod update_workspace;

pub use update_workspace::{
    PlannedRepository, UpdatePlan, UpdateReport, UpdateWorkspaceConfig, UpdateWorkspaceError,
    UpdateWorkspaceUseCase,
};
