mod create_project;
mod delete_project;
mod get_project_tags;
mod get_projects;
mod get_related_projects;
mod get_single_project;
mod update_project;

pub use create_project::create_project_handler;
pub use delete_project::delete_project_handler;
pub use get_project_tags::get_project_tags_handler;
pub use get_projects::get_projects_handler;
pub use get_related_projects::get_related_projects_handler;
pub use get_single_project::get_single_project_handler;
pub use update_project::update_project_handler;
