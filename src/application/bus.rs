//! Command Bus
//!
//! Routes each command type to the single handler registered for it. The
//! bus wraps every dispatch in a tracing span named after the command and
//! logs rejections with their error kind.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::domain::value_objects::UserId;
use crate::error::{ShipyardError, ShipyardResult};

/// Who issued the command being handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    requested_by: UserId,
}

impl RequestContext {
    pub fn new(requested_by: impl Into<UserId>) -> Self {
        Self {
            requested_by: requested_by.into(),
        }
    }

    pub fn requested_by(&self) -> &UserId {
        &self.requested_by
    }
}

/// A request to change the system
pub trait Command: Send + 'static {
    type Output;

    /// Name used in logs
    const NAME: &'static str;
}

pub trait CommandHandler<C: Command>: Send + Sync {
    fn handle(&self, ctx: &RequestContext, command: C) -> ShipyardResult<C::Output>;
}

type BoxedHandler<C> = Box<dyn CommandHandler<C>>;

#[derive(Default)]
pub struct CommandBus {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl CommandBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for `C`, replacing any previous one
    pub fn register<C, H>(&mut self, handler: H)
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let boxed: BoxedHandler<C> = Box::new(handler);
        self.handlers.insert(TypeId::of::<C>(), Box::new(boxed));
    }

    pub fn is_registered<C: Command>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<C>())
    }

    pub fn execute<C: Command>(
        &self,
        ctx: &RequestContext,
        command: C,
    ) -> ShipyardResult<C::Output> {
        let handler = self
            .handlers
            .get(&TypeId::of::<C>())
            .and_then(|h| h.downcast_ref::<BoxedHandler<C>>())
            .ok_or(ShipyardError::HandlerNotRegistered { command: C::NAME })?;

        let span = tracing::info_span!("command", command = C::NAME, by = %ctx.requested_by());
        let _guard = span.enter();

        match handler.handle(ctx, command) {
            Ok(output) => {
                tracing::debug!("command handled");
                Ok(output)
            }
            Err(err) => {
                tracing::warn!(kind = %err.kind(), error = %err, "command rejected");
                Err(err)
            }
        }
    }
}
