//! Identity tokens

mod jwt;

pub use jwt::{Claims, JwtService};
