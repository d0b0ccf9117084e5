mod create_project;
mod delete_project;
mod get_project_tags;
mod get_projects;
mod get_related_projects;
mod get_single_project;
mod update_project;

pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_project_tags::{GetProjectTagsError, GetProjectTagsUseCase};
pub use get_projects::{GetProjectsError, GetProjectsUseCase, ProjectFilter};
pub use get_related_projects::{GetRelatedProjectsError, GetRelatedProjectsUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};
