mod hero;
mod page;

pub use hero::HeroState;
pub use page::PageState;
