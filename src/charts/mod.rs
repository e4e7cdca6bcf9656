pub mod bucket;
pub mod view;

pub use bucket::*;
pub use view::*;
