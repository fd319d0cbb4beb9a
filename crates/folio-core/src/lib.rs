pub mod assets;
pub mod config;
pub mod consts;
pub mod error;
pub mod render;
pub mod source;
pub mod viewer;
