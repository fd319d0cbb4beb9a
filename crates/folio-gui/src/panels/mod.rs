pub mod document;
pub mod footer;
pub mod helpers;
pub mod hero;
pub mod pagination;
