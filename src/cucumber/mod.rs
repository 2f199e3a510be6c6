pub mod cucumber_model;
pub mod loader;
