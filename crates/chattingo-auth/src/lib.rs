// Bearer-token authentication for the chat backend
pub mod claims;
pub mod error;
pub mod jwt;
pub mod middleware;

pub use claims::{parse_authorities, Claims, Principal};
pub use error::{AuthError, INVALID_TOKEN_MESSAGE};
pub use jwt::{JwtIssuer, JwtValidator, MIN_SECRET_LEN};
pub use middleware::{authenticate, Authenticated};
