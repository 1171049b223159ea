pub mod forms;
pub mod roster;
pub mod user;
