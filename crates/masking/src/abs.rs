//! Abstract interfaces for accessing the value under a secret.

use crate::{Secret, Strategy};

/// Interface to peek at the inner value without consuming the wrapper.
pub trait PeekInterface<S> {
    /// Borrow the inner value.
    fn peek(&self) -> &S;
}

/// Interface that consumes the wrapper and returns the inner value.
pub trait ExposeInterface<S> {
    /// Consume the secret and return the inner value.
    fn expose(self) -> S;
}

/// Interface to expose an optional secret as an optional plain value.
pub trait ExposeOptionInterface<S> {
    /// Expose the contained value, if any.
    fn expose_option(self) -> S;
}

impl<S, I> ExposeInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn expose(self) -> S {
        self.inner_secret
    }
}

impl<S, I> ExposeOptionInterface<Option<S>> for Option<Secret<S, I>>
where
    I: Strategy<S>,
{
    fn expose_option(self) -> Option<S> {
        self.map(ExposeInterface::expose)
    }
}
