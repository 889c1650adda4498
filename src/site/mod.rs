pub mod model;
pub mod page;

pub use model::Site;
pub use page::Page;
