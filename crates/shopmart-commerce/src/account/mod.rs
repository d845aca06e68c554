//! Mock account flows: login, registration, order history.
//!
//! There is no real authentication or order processing; any non-empty
//! credentials log in, and orders are seeded demo records. What matters
//! to the rest of the layer is the state contract: failures surface as
//! inline errors and leave state unchanged.

mod auth;
mod user;

pub use auth::{AccountError, AccountSession, RegistrationForm, USER_KEY};
pub use user::{Order, OrderItem, OrderStatus, Role, User};
