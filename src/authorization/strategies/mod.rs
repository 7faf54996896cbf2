//! Built-in authorization strategies.
//!
//! Each strategy is an independent [`AuthorizationStrategy`] implementation.
//! Composites combine other strategies without knowing their concrete types.
//!
//! [`AuthorizationStrategy`]: crate::authorization::ports::AuthorizationStrategy

mod composite;
mod deny;
mod owner;
mod permission;
mod role;
mod time_window;

pub use composite::{AllOfStrategy, AnyOfStrategy};
pub use deny::DenyAllStrategy;
pub use owner::OwnerStrategy;
pub use permission::PermissionBasedStrategy;
pub use role::RoleBasedStrategy;
pub use time_window::TimeWindowStrategy;
