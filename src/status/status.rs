use crate::status::code;

use log::trace;
use std::fmt;
use std::str::FromStr;

/// A status code from the registry. Each variant stands for one well known
/// http status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Continue,
    SwitchingProtocols,
    Ok,
    Created,
    Accepted,
    NoContent,
    MovedPermanently,
    Found,
    NotModified,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
}

impl Status {
    /// Numeric value of the status code
    pub fn code(&self) -> i32 {
        match self {
            Status::Continue => code::CONTINUE,
            Status::SwitchingProtocols => code::SWITCHING_PROTOCOLS,
            Status::Ok => code::OK,
            Status::Created => code::CREATED,
            Status::Accepted => code::ACCEPTED,
            Status::NoContent => code::NO_CONTENT,
            Status::MovedPermanently => code::MOVED_PERMANENTLY,
            Status::Found => code::FOUND,
            Status::NotModified => code::NOT_MODIFIED,
            Status::BadRequest => code::BAD_REQUEST,
            Status::Unauthorized => code::UNAUTHORIZED,
            Status::Forbidden => code::FORBIDDEN,
            Status::NotFound => code::NOT_FOUND,
            Status::MethodNotAllowed => code::METHOD_NOT_ALLOWED,
            Status::InternalServerError => code::INTERNAL_SERVER_ERROR,
            Status::NotImplemented => code::NOT_IMPLEMENTED,
            Status::BadGateway => code::BAD_GATEWAY,
            Status::ServiceUnavailable => code::SERVICE_UNAVAILABLE,
        }
    }

    /// Mnemonic name of the status code
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Continue => "CONTINUE",
            Status::SwitchingProtocols => "SWITCHING_PROTOCOLS",
            Status::Ok => "OK",
            Status::Created => "CREATED",
            Status::Accepted => "ACCEPTED",
            Status::NoContent => "NO_CONTENT",
            Status::MovedPermanently => "MOVED_PERMANENTLY",
            Status::Found => "FOUND",
            Status::NotModified => "NOT_MODIFIED",
            Status::BadRequest => "BAD_REQUEST",
            Status::Unauthorized => "UNAUTHORIZED",
            Status::Forbidden => "FORBIDDEN",
            Status::NotFound => "NOT_FOUND",
            Status::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Status::InternalServerError => "INTERNAL_SERVER_ERROR",
            Status::NotImplemented => "NOT_IMPLEMENTED",
            Status::BadGateway => "BAD_GATEWAY",
            Status::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Resolve an integer to its status. Return None when the code is not
    /// part of the registry.
    pub fn from_code(code: i32) -> Option<Status> {
        let status = match code {
            code::CONTINUE => Status::Continue,
            code::SWITCHING_PROTOCOLS => Status::SwitchingProtocols,
            code::OK => Status::Ok,
            code::CREATED => Status::Created,
            code::ACCEPTED => Status::Accepted,
            code::NO_CONTENT => Status::NoContent,
            code::MOVED_PERMANENTLY => Status::MovedPermanently,
            code::FOUND => Status::Found,
            code::NOT_MODIFIED => Status::NotModified,
            code::BAD_REQUEST => Status::BadRequest,
            code::UNAUTHORIZED => Status::Unauthorized,
            code::FORBIDDEN => Status::Forbidden,
            code::NOT_FOUND => Status::NotFound,
            code::METHOD_NOT_ALLOWED => Status::MethodNotAllowed,
            code::INTERNAL_SERVER_ERROR => Status::InternalServerError,
            code::NOT_IMPLEMENTED => Status::NotImplemented,
            code::BAD_GATEWAY => Status::BadGateway,
            code::SERVICE_UNAVAILABLE => Status::ServiceUnavailable,
            _ => return None,
        };

        Some(status)
    }
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONTINUE" => Ok(Status::Continue),
            "SWITCHING_PROTOCOLS" => Ok(Status::SwitchingProtocols),
            "OK" => Ok(Status::Ok),
            "CREATED" => Ok(Status::Created),
            "ACCEPTED" => Ok(Status::Accepted),
            "NO_CONTENT" => Ok(Status::NoContent),
            "MOVED_PERMANENTLY" => Ok(Status::MovedPermanently),
            "FOUND" => Ok(Status::Found),
            "NOT_MODIFIED" => Ok(Status::NotModified),
            "BAD_REQUEST" => Ok(Status::BadRequest),
            "UNAUTHORIZED" => Ok(Status::Unauthorized),
            "FORBIDDEN" => Ok(Status::Forbidden),
            "NOT_FOUND" => Ok(Status::NotFound),
            "METHOD_NOT_ALLOWED" => Ok(Status::MethodNotAllowed),
            "INTERNAL_SERVER_ERROR" => Ok(Status::InternalServerError),
            "NOT_IMPLEMENTED" => Ok(Status::NotImplemented),
            "BAD_GATEWAY" => Ok(Status::BadGateway),
            "SERVICE_UNAVAILABLE" => Ok(Status::ServiceUnavailable),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Look up the mnemonic name of the given status code.
/// Codes outside the registry resolve to "UNKNOWN_STATUS".
///
/// # Example
///
/// ```
/// assert_eq!(statusify::status_name(200), "OK");
/// assert_eq!(statusify::status_name(999), "UNKNOWN_STATUS");
/// ```
pub fn status_name(code: i32) -> &'static str {
    match Status::from_code(code) {
        Some(status) => status.as_str(),
        None => {
            trace!("No status registered for code {}", code);
            "UNKNOWN_STATUS"
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn as_str() {
        assert_eq!(Status::Ok.as_str(), "OK");
        assert_eq!(Status::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(Status::SwitchingProtocols.as_str(), "SWITCHING_PROTOCOLS");
        assert_eq!(Status::ServiceUnavailable.as_str(), "SERVICE_UNAVAILABLE");
    }

    #[test]
    fn code() {
        assert_eq!(Status::Continue.code(), 100);
        assert_eq!(Status::Ok.code(), 200);
        assert_eq!(Status::NotFound.code(), 404);
        assert_eq!(Status::InternalServerError.code(), 500);
    }

    #[test]
    fn from_code() {
        assert_eq!(Status::from_code(302).unwrap(), Status::Found);
        assert_eq!(Status::from_code(503).unwrap(), Status::ServiceUnavailable);

        assert!(Status::from_code(418).is_none());
        assert!(Status::from_code(-1).is_none());
    }

    #[test]
    fn from_str() {
        let status = Status::from_str("NO_CONTENT").unwrap();
        assert_eq!(status, Status::NoContent);

        assert!(Status::from_str("IM_A_TEAPOT").is_err());
        assert!(Status::from_str("not_found").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Status::BadGateway), "BAD_GATEWAY");
    }

    #[test]
    fn name_of_known_code() {
        assert_eq!(status_name(200), "OK");
        assert_eq!(status_name(404), "NOT_FOUND");
        assert_eq!(status_name(503), "SERVICE_UNAVAILABLE");
    }

    #[test]
    fn name_of_unknown_code() {
        assert_eq!(status_name(0), "UNKNOWN_STATUS");
        assert_eq!(status_name(-5), "UNKNOWN_STATUS");
        assert_eq!(status_name(999), "UNKNOWN_STATUS");
    }
}
