mod auth;
mod product;

pub use auth::*;
pub use product::*;
