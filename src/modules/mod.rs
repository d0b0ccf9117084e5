pub mod assistant;
pub mod mailbox;
pub mod project;
pub mod session;
pub mod site;
pub mod skill;
pub mod system;
