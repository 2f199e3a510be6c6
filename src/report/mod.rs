pub mod console;
pub mod html;
pub mod json;
pub mod report_model;
