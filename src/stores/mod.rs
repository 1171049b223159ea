pub mod confirm;
pub mod roster_store;
