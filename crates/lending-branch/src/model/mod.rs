//! Plain data: loanable resources, their lifecycle variants, and request kinds.

pub mod request;
pub mod resource;

pub use request::*;
pub use resource::*;
