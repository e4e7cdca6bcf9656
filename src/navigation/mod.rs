pub mod controller;
pub mod layout;
pub mod surface;

pub use controller::*;
pub use layout::*;
pub use surface::*;
