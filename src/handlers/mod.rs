pub mod api;
pub mod fallback;
pub mod health;
pub mod roster;
