//! Serialized selection of authorization strategies per use case.
//!
//! A [`TaskPolicy`] names the strategy each task use case applies. It can be
//! loaded from JSON so operators change rules without touching code:
//!
//! ```
//! use taskgate::authorization::policy::{StrategySpec, TaskPolicy};
//!
//! let policy = TaskPolicy::from_json(r#"{
//!     "create": { "type": "permission", "permission": "tasks.create" },
//!     "complete": {
//!         "type": "any_of",
//!         "strategies": [{ "type": "role", "role": "admin" }, { "type": "owner" }]
//!     }
//! }"#).expect("valid policy");
//!
//! assert_eq!(
//!     policy.create,
//!     StrategySpec::Permission { permission: "tasks.create".to_owned() }
//! );
//! ```

use crate::authorization::{
    AuthorizationContext,
    ports::SharedStrategy,
    strategies::{
        AllOfStrategy, AnyOfStrategy, DenyAllStrategy, OwnerStrategy, PermissionBasedStrategy,
        RoleBasedStrategy, TimeWindowStrategy,
    },
};
use chrono::NaiveTime;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Role required by the default policy.
pub const ADMIN_ROLE: &str = "admin";

/// Errors returned while loading a policy document.
#[derive(Debug, Error)]
pub enum PolicyConfigError {
    /// The document is not valid policy JSON.
    #[error("invalid policy document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A role or permission label is empty after trimming.
    #[error("{kind} strategy requires a non-empty label")]
    EmptyLabel {
        /// Strategy kind carrying the empty label.
        kind: &'static str,
    },

    /// A composite strategy has no children.
    #[error("{kind} strategy requires at least one child strategy")]
    EmptyComposite {
        /// Composite kind with no children.
        kind: &'static str,
    },
}

/// Declarative description of a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategySpec {
    /// [`RoleBasedStrategy`] requiring `role`.
    Role {
        /// Required role label.
        role: String,
    },
    /// [`PermissionBasedStrategy`] requiring `permission`.
    Permission {
        /// Required permission label.
        permission: String,
    },
    /// [`OwnerStrategy`].
    Owner,
    /// [`TimeWindowStrategy`] open from `start` to `end` (UTC).
    TimeWindow {
        /// Inclusive window start.
        start: NaiveTime,
        /// Exclusive window end.
        end: NaiveTime,
    },
    /// [`AllOfStrategy`] over nested specs.
    AllOf {
        /// Child strategies.
        strategies: Vec<StrategySpec>,
    },
    /// [`AnyOfStrategy`] over nested specs.
    AnyOf {
        /// Child strategies.
        strategies: Vec<StrategySpec>,
    },
    /// [`DenyAllStrategy`].
    DenyAll,
}

impl StrategySpec {
    /// Returns a spec requiring `role`.
    #[must_use]
    pub fn role(role: impl Into<String>) -> Self {
        Self::Role { role: role.into() }
    }

    /// Returns a spec requiring `permission`.
    #[must_use]
    pub fn permission(permission: impl Into<String>) -> Self {
        Self::Permission {
            permission: permission.into(),
        }
    }

    /// Checks labels and composites recursively.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyConfigError::EmptyLabel`] for blank role or permission
    /// labels and [`PolicyConfigError::EmptyComposite`] for composites with
    /// no children.
    pub fn validate(&self) -> Result<(), PolicyConfigError> {
        match self {
            Self::Role { role } => require_label("role", role),
            Self::Permission { permission } => require_label("permission", permission),
            Self::AllOf { strategies } => validate_children("all_of", strategies),
            Self::AnyOf { strategies } => validate_children("any_of", strategies),
            Self::Owner | Self::TimeWindow { .. } | Self::DenyAll => Ok(()),
        }
    }

    /// Builds the described strategy.
    ///
    /// `clock` is only consulted by time-window strategies.
    #[must_use]
    pub fn build<C>(&self, clock: &Arc<C>) -> SharedStrategy
    where
        C: Clock + Send + Sync + 'static,
    {
        match self {
            Self::Role { role } => Arc::new(RoleBasedStrategy::new(role.as_str())),
            Self::Permission { permission } => {
                Arc::new(PermissionBasedStrategy::new(permission.as_str()))
            }
            Self::Owner => Arc::new(OwnerStrategy::new()),
            Self::TimeWindow { start, end } => {
                Arc::new(TimeWindowStrategy::new(*start, *end, Arc::clone(clock)))
            }
            Self::AllOf { strategies } => Arc::new(AllOfStrategy::new(
                strategies.iter().map(|spec| spec.build(clock)),
            )),
            Self::AnyOf { strategies } => Arc::new(AnyOfStrategy::new(
                strategies.iter().map(|spec| spec.build(clock)),
            )),
            Self::DenyAll => Arc::new(DenyAllStrategy),
        }
    }
}

fn require_label(kind: &'static str, label: &str) -> Result<(), PolicyConfigError> {
    if label.trim().is_empty() {
        return Err(PolicyConfigError::EmptyLabel { kind });
    }
    Ok(())
}

fn validate_children(kind: &'static str, children: &[StrategySpec]) -> Result<(), PolicyConfigError> {
    if children.is_empty() {
        return Err(PolicyConfigError::EmptyComposite { kind });
    }
    children.iter().try_for_each(StrategySpec::validate)
}

/// Strategy selection for the task use cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPolicy {
    /// Strategy applied by `CreateTask`.
    pub create: StrategySpec,
    /// Strategy applied by `CompleteTask`.
    pub complete: StrategySpec,
}

impl Default for TaskPolicy {
    /// Admins create tasks; admins or the task's creator complete them.
    fn default() -> Self {
        Self {
            create: StrategySpec::role(ADMIN_ROLE),
            complete: StrategySpec::AnyOf {
                strategies: vec![StrategySpec::role(ADMIN_ROLE), StrategySpec::Owner],
            },
        }
    }
}

impl TaskPolicy {
    /// Parses and validates a JSON policy document.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyConfigError::Parse`] for malformed JSON and the
    /// validation errors of [`StrategySpec::validate`].
    pub fn from_json(document: &str) -> Result<Self, PolicyConfigError> {
        let policy: Self = serde_json::from_str(document)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Validates both strategy specs.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(&self) -> Result<(), PolicyConfigError> {
        self.create.validate()?;
        self.complete.validate()
    }

    /// Builds the context used by `CreateTask`.
    #[must_use]
    pub fn create_context<C>(&self, clock: &Arc<C>) -> AuthorizationContext
    where
        C: Clock + Send + Sync + 'static,
    {
        AuthorizationContext::new(self.create.build(clock))
    }

    /// Builds the context used by `CompleteTask`.
    #[must_use]
    pub fn complete_context<C>(&self, clock: &Arc<C>) -> AuthorizationContext
    where
        C: Clock + Send + Sync + 'static,
    {
        AuthorizationContext::new(self.complete.build(clock))
    }
}
