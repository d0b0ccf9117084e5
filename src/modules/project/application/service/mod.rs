mod create_project_service;
mod delete_project_service;
mod get_project_tags_service;
mod get_projects_service;
mod get_related_projects_service;
mod get_single_project_service;
mod update_project_service;

pub use create_project_service::CreateProjectService;
pub use delete_project_service::DeleteProjectService;
pub use get_project_tags_service::GetProjectTagsService;
pub use get_projects_service::GetProjectsService;
pub use get_related_projects_service::GetRelatedProjectsService;
pub use get_single_project_service::GetSingleProjectService;
pub use update_project_service::UpdateProjectService;
