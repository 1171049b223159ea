pub mod html;
pub mod model;
