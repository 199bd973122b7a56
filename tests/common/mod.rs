extern crate lazy_static;
use lazy_static::lazy_static;

lazy_static! {
    /// Every entry of the registry with its expected code and name.
    pub static ref KNOWN_STATUSES: Vec<(i32, &'static str)> = vec![
        (100, "CONTINUE"),
        (101, "SWITCHING_PROTOCOLS"),
        (200, "OK"),
        (201, "CREATED"),
        (202, "ACCEPTED"),
        (204, "NO_CONTENT"),
        (301, "MOVED_PERMANENTLY"),
        (302, "FOUND"),
        (304, "NOT_MODIFIED"),
        (400, "BAD_REQUEST"),
        (401, "UNAUTHORIZED"),
        (403, "FORBIDDEN"),
        (404, "NOT_FOUND"),
        (405, "METHOD_NOT_ALLOWED"),
        (500, "INTERNAL_SERVER_ERROR"),
        (501, "NOT_IMPLEMENTED"),
        (502, "BAD_GATEWAY"),
        (503, "SERVICE_UNAVAILABLE"),
    ];
}
