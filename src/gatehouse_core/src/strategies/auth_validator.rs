use async_trait::async_trait;

/// Trait for validating bearer credentials in middleware.
///
/// Validators extract authentication information from HTTP requests,
/// verify the token, and produce claims for protected routes.
///
/// # Implementation Note
///
/// The validator receives `RequestParts` (headers, method, URI, extensions) rather
/// than the full `Request` to avoid issues with non-`Sync` request bodies.
/// This is sufficient since validators only need headers to extract tokens.
#[async_trait]
pub trait AuthValidator: Clone + Send + Sync + 'static {
    /// The claims extracted from a valid token.
    ///
    /// Made available to protected route handlers via request extensions.
    type Claims: Clone + Send + Sync + 'static;

    /// Typically `http::request::Parts`.
    type RequestParts: Send + Sync;

    /// Errors that can occur during validation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Validate authentication from the request parts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No token is present
    /// - The token is malformed, badly signed or expired
    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error>;
}
