//! # Session
//!
//! Cepbook has no accounts. A [`Session`] only exists to greet the user by name; it is
//! built once during initialization from the configured `user_name` and handed to the
//! presentation layer inside a [`SessionContext`].

use serde::Serialize;
use uuid::Uuid;

pub const DEFAULT_GREETING: &str = "Welcome";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

impl Session {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role,
        }
    }
}

/// Read-only identity context.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    current: Option<Session>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A context for `name`, or an anonymous one when there is no name.
    pub fn from_user_name(name: Option<&str>) -> Self {
        match name {
            Some(name) => Self::sign_in(Session::new(name, Role::Owner)),
            None => Self::anonymous(),
        }
    }

    pub fn sign_in(session: Session) -> Self {
        Self {
            current: Some(session),
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn greeting(&self) -> String {
        match &self.current {
            Some(session) => session.name.clone(),
            None => DEFAULT_GREETING.to_string(),
        }
    }
}
