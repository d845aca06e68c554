//! Mock authentication session and registration validation.

use crate::account::user::{mock_orders, mock_user, Order, OrderItem, OrderStatus, Role, User};
use crate::catalog::current_timestamp;
use crate::ids::{OrderId, UserId};
use shopmart_storage::LocalStore;
use std::time::Duration;
use thiserror::Error;

/// Storage key for the persisted user profile.
pub const USER_KEY: &str = "user";

/// Simulated network latency for the mock flows.
const SIMULATED_DELAY: Duration = Duration::from_millis(1000);

/// Errors surfaced inline by the account flows. All recoverable; failed
/// operations leave session state unchanged.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccountError {
    /// Login rejected (empty credentials in the mock flow).
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A form field failed validation; submission is blocked until the
    /// user re-inputs.
    #[error("{0}")]
    Validation(String),
}

/// Registration form input.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Validate the form, returning the first inline error.
    pub fn validate(&self) -> Result<(), AccountError> {
        if self.email.trim().is_empty() {
            return Err(AccountError::Validation("Email is required".to_string()));
        }
        if !self.email.contains('@') {
            return Err(AccountError::Validation(
                "Enter a valid email address".to_string(),
            ));
        }
        if self.first_name.trim().is_empty() {
            return Err(AccountError::Validation(
                "First name is required".to_string(),
            ));
        }
        if self.password.len() < 6 {
            return Err(AccountError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }
        if self.password != self.confirm_password {
            return Err(AccountError::Validation(
                "Passwords don't match".to_string(),
            ));
        }
        Ok(())
    }
}

/// The session's account state: current user and mock order history.
///
/// Login and registration simulate network latency with an awaited delay.
/// The returned futures are plain `async fn` futures: dropping one before
/// it resolves cancels the attempt outright, so a view torn down
/// mid-login can never have a stale completion applied to it.
pub struct AccountSession {
    storage: LocalStore,
    user: Option<User>,
    orders: Vec<Order>,
    delay: Duration,
    next_order_id: u64,
}

impl AccountSession {
    /// Create a session over the given storage, restoring a previously
    /// persisted user if one round-trips cleanly.
    pub fn new(storage: LocalStore) -> Self {
        let user: Option<User> = storage.load_or_default(USER_KEY);
        Self {
            storage,
            user,
            orders: Vec::new(),
            delay: SIMULATED_DELAY,
            next_order_id: 2001,
        }
    }

    /// Override the simulated delay (tests use zero).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Mock login: any non-empty email and password succeed after the
    /// simulated delay; empty credentials fail and change nothing.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, AccountError> {
        tokio::time::sleep(self.delay).await;

        if email.trim().is_empty() || password.is_empty() {
            return Err(AccountError::InvalidCredentials);
        }

        let user = mock_user(email);
        self.persist_user(&user);
        self.orders = mock_orders(user.id);
        tracing::debug!(email, "mock login succeeded");
        Ok(self.user.insert(user))
    }

    /// Mock registration: validates the form, then creates and signs in
    /// a fresh account.
    pub async fn register(&mut self, form: RegistrationForm) -> Result<&User, AccountError> {
        form.validate()?;
        tokio::time::sleep(self.delay).await;

        let now = current_timestamp();
        let user = User {
            id: UserId::new(now.unsigned_abs()),
            email: form.email.trim().to_string(),
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            phone: None,
            role: Role::Customer,
            created_at: now,
            last_login: Some(now),
        };
        self.persist_user(&user);
        self.orders.clear();
        Ok(self.user.insert(user))
    }

    /// Sign out: clears user and orders and removes the persisted blob.
    pub fn logout(&mut self) {
        self.user = None;
        self.orders.clear();
        self.storage.remove(USER_KEY);
    }

    // --- Orders ---

    /// Order history, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Record a mock order from the given items, prepending it to the
    /// history. Requires a signed-in user.
    pub fn place_order(
        &mut self,
        items: Vec<OrderItem>,
        currency: impl Into<String>,
    ) -> Option<&Order> {
        let user = self.user.as_ref()?;
        let now = current_timestamp();
        let total = items
            .iter()
            .map(|i| i.price * f64::from(i.quantity))
            .sum();
        let order = Order {
            id: OrderId::new(self.next_order_id),
            user_id: user.id,
            items,
            status: OrderStatus::Pending,
            total,
            currency: currency.into(),
            created_at: now,
            updated_at: now,
        };
        self.next_order_id += 1;
        self.orders.insert(0, order);
        self.orders.first()
    }

    /// Cancel an order. Returns false if the id is unknown.
    pub fn cancel_order(&mut self, id: OrderId) -> bool {
        match self.orders.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                order.status = OrderStatus::Cancelled;
                order.updated_at = current_timestamp();
                true
            }
            None => false,
        }
    }

    fn persist_user(&self, user: &User) {
        if let Err(e) = self.storage.set(USER_KEY, user) {
            tracing::warn!(error = %e, "failed to persist user profile");
        }
    }
}
