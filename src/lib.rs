pub mod core;
pub mod models;
pub mod stores;
pub mod storage;
pub mod view;
pub mod validation;
pub mod utils;
pub mod handlers;
