mod health_check;
mod join;
mod landing;

pub use health_check::*;
pub use join::*;
pub use landing::landing;
