pub mod building;
pub mod input;
pub mod result;
pub mod section;

pub use building::*;
pub use input::*;
pub use result::*;
pub use section::*;
