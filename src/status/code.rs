//! Named constants for the status codes in the registry. Each one can be used
//! anywhere in place of its integer value.
//!
//! # Example
//!
//! ```
//! use statusify::code;
//!
//! assert_eq!(code::NOT_FOUND, 404);
//! assert_eq!(code::SERVICE_UNAVAILABLE, 503);
//! ```

// 1xx Informational
pub const CONTINUE: i32 = 100;
pub const SWITCHING_PROTOCOLS: i32 = 101;

// 2xx Success
pub const OK: i32 = 200;
pub const CREATED: i32 = 201;
pub const ACCEPTED: i32 = 202;
pub const NO_CONTENT: i32 = 204;

// 3xx Redirection
pub const MOVED_PERMANENTLY: i32 = 301;
pub const FOUND: i32 = 302;
pub const NOT_MODIFIED: i32 = 304;

// 4xx Client Errors
pub const BAD_REQUEST: i32 = 400;
pub const UNAUTHORIZED: i32 = 401;
pub const FORBIDDEN: i32 = 403;
pub const NOT_FOUND: i32 = 404;
pub const METHOD_NOT_ALLOWED: i32 = 405;

// 5xx Server Errors
pub const INTERNAL_SERVER_ERROR: i32 = 500;
pub const NOT_IMPLEMENTED: i32 = 501;
pub const BAD_GATEWAY: i32 = 502;
pub const SERVICE_UNAVAILABLE: i32 = 503;
