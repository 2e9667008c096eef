//! Resolver contract: bind context + typed arguments, gate on `authorized`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::ops::Deref;
use tracing::warn;

use super::{Actor, AuthError, ResolverContext};
use crate::common::AppError;
use crate::domains::coaches::models::Coach;
use crate::domains::schools::models::{School, SchoolAdmin, User};
use crate::kernel::ServerDeps;

/// A single read operation bound to the request context.
///
/// `Args` is the statically declared argument set; JSON arguments are
/// deserialized into it with unknown fields rejected. `authorized` has no
/// default body, so every resolver states its own rule.
pub trait Resolver: Sized {
    type Args: DeserializeOwned;

    /// Operation name used in logs.
    const NAME: &'static str;

    fn new(context: ResolverContext, args: Self::Args) -> Self;

    fn context(&self) -> &ResolverContext;

    fn authorized(&self) -> bool;

    /// Passes silently when `authorized` holds, otherwise `Unauthorized`.
    fn authorize(&self) -> Result<(), AuthError> {
        if self.authorized() {
            return Ok(());
        }

        warn!(
            resolver = Self::NAME,
            user_id = ?self.current_user().map(|u| u.id),
            school_id = ?self.current_school().map(|s| s.id),
            "Resolver authorization denied"
        );
        Err(AuthError::Unauthorized)
    }

    /// Builds a resolver from untyped arguments, e.g. a JSON request body.
    fn from_json(context: ResolverContext, args: serde_json::Value) -> Result<Self, AuthError> {
        let args = serde_json::from_value(args)
            .map_err(|e| AuthError::InvalidArgument(e.to_string()))?;
        Ok(Self::new(context, args))
    }

    fn current_user(&self) -> Option<&User> {
        self.context().current_user()
    }

    fn current_school(&self) -> Option<&School> {
        self.context().current_school()
    }

    fn current_school_admin(&self) -> Option<&SchoolAdmin> {
        self.context().current_school_admin()
    }

    /// The signed-in user acting in the current school, with only the grants
    /// that belong to that user and school.
    fn current_actor(&self) -> Option<Actor<'_>> {
        self.context().actor()
    }

    /// True when the current actor holds an admin grant for the current school.
    fn is_school_admin(&self) -> bool {
        self.current_actor().is_some_and(|actor| actor.is_school_admin())
    }

    fn current_coach(&self) -> Option<&Coach> {
        self.context().current_coach()
    }
}

/// A resolver that has passed `authorize`.
///
/// Only [`Authorized::check`] constructs one, so `Resolve::resolve` cannot be
/// reached without the check.
pub struct Authorized<R>(R);

impl<R: Resolver> Authorized<R> {
    pub fn check(resolver: R) -> Result<Self, AuthError> {
        resolver.authorize()?;
        Ok(Self(resolver))
    }
}

impl<R> Deref for Authorized<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.0
    }
}

/// The domain step of a resolver.
#[async_trait]
pub trait Resolve: Resolver + Send + Sync {
    type Output: Send;

    async fn resolve(this: Authorized<Self>, deps: &ServerDeps) -> Result<Self::Output, AppError>;
}

/// Authorizes then resolves. Authorization is re-derived on every call.
pub async fn execute<R: Resolve>(resolver: R, deps: &ServerDeps) -> Result<R::Output, AppError> {
    let authorized = Authorized::check(resolver)?;
    R::resolve(authorized, deps).await
}
