//! HTTP status catalog.
//!
//! Callers use the named constants on [`HttpStatus`] instead of raw integers
//! so the codes the API emits and the phrases in [`REASON_PHRASES`] cannot
//! drift apart.

use std::fmt;

/// Phrase returned for any code outside the catalog.
pub const UNKNOWN_STATUS: &str = "Unknown Status";

/// Every status code the API knows a reason phrase for.
pub const REASON_PHRASES: &[(u16, &str)] = &[
    // Success
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (204, "No Content"),
    // Client error
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (409, "Conflict"),
    (422, "Unprocessable Entity"),
    // Server error
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (503, "Service Unavailable"),
];

/// Look up the canonical reason phrase for a status code.
///
/// Codes outside the catalog resolve to [`UNKNOWN_STATUS`].
pub fn reason_phrase(code: u16) -> &'static str {
    REASON_PHRASES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, phrase)| *phrase)
        .unwrap_or(UNKNOWN_STATUS)
}

/// An HTTP status code as used by the response formatter.
///
/// Any `u16` can be wrapped (handlers occasionally need codes such as 405 that
/// are not catalogued), but the constants below cover everything the API
/// emits by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HttpStatus(u16);

impl HttpStatus {
    // -- Success --
    pub const OK: HttpStatus = HttpStatus(200);
    pub const CREATED: HttpStatus = HttpStatus(201);
    pub const ACCEPTED: HttpStatus = HttpStatus(202);
    pub const NO_CONTENT: HttpStatus = HttpStatus(204);

    // -- Client error --
    pub const BAD_REQUEST: HttpStatus = HttpStatus(400);
    pub const UNAUTHORIZED: HttpStatus = HttpStatus(401);
    pub const FORBIDDEN: HttpStatus = HttpStatus(403);
    pub const NOT_FOUND: HttpStatus = HttpStatus(404);
    pub const CONFLICT: HttpStatus = HttpStatus(409);
    pub const UNPROCESSABLE_ENTITY: HttpStatus = HttpStatus(422);

    // -- Server error --
    pub const INTERNAL_SERVER_ERROR: HttpStatus = HttpStatus(500);
    pub const NOT_IMPLEMENTED: HttpStatus = HttpStatus(501);
    pub const SERVICE_UNAVAILABLE: HttpStatus = HttpStatus(503);

    pub const fn new(code: u16) -> Self {
        HttpStatus(code)
    }

    pub const fn code(self) -> u16 {
        self.0
    }

    pub fn reason_phrase(self) -> &'static str {
        reason_phrase(self.0)
    }

    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    pub const fn is_client_error(self) -> bool {
        self.0 >= 400 && self.0 < 500
    }

    pub const fn is_server_error(self) -> bool {
        self.0 >= 500 && self.0 < 600
    }
}

impl From<u16> for HttpStatus {
    fn from(code: u16) -> Self {
        HttpStatus(code)
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}
