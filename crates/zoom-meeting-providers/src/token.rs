//! Token source abstraction.
//!
//! The meetings client never fetches tokens itself. It asks a
//! [`TokenSource`] for one on every request, which keeps the OAuth exchange
//! swappable: production code passes an [`OAuthClient`](crate::zoom::OAuthClient),
//! tests pass a fixed token.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::error::ProviderResult;

/// A boxed future for async trait methods.
///
/// Boxing keeps [`TokenSource`] object-safe so callers can take
/// `&dyn TokenSource`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// An opaque bearer token.
///
/// Lives for a single request; never cached or written anywhere.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token for use in an `Authorization` header.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Something that can hand out bearer tokens.
pub trait TokenSource: Send + Sync {
    /// Returns the name of this source, used in logs.
    fn name(&self) -> &str;

    /// Obtains an access token.
    ///
    /// Implementations should not cache: each call is expected to produce a
    /// token valid for the request that follows.
    fn access_token(&self) -> BoxFuture<'_, ProviderResult<AccessToken>>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// A token source that always returns the same token.
    #[derive(Debug, Clone)]
    pub struct StaticToken {
        token: AccessToken,
    }

    impl StaticToken {
        /// Creates a source handing out `token`.
        pub fn new(token: impl Into<String>) -> Self {
            Self {
                token: AccessToken::new(token),
            }
        }
    }

    impl TokenSource for StaticToken {
        fn name(&self) -> &str {
            "static"
        }

        fn access_token(&self) -> BoxFuture<'_, ProviderResult<AccessToken>> {
            let token = self.token.clone();
            Box::pin(async move { Ok(token) })
        }
    }
}
