/// Authorization module
///
/// Two gates guard every operation:
///
/// ```rust,ignore
/// use crate::common::auth::{execute, Policy, ResolverContext};
///
/// // Reads: a resolver binds context + typed arguments and must pass
/// // `authorized` before `resolve` can run.
/// let levels = execute(LevelsResolver::new(ctx.clone(), args), deps).await?;
///
/// // Writes: a policy answers one yes/no question per action.
/// let allowed = LevelPolicy::new(ctx.actor(), Some(&level)).update();
/// enforce(allowed, "update_level", ctx.actor().as_ref())?;
/// ```

mod context;
mod errors;
mod policy;
mod resolver;

pub use context::{Actor, ResolverContext};
pub use errors::AuthError;
pub use policy::{enforce, Policy};
pub use resolver::{execute, Authorized, Resolve, Resolver};
