pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_validator;
pub mod password;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_issuer::{IssuedToken, JwtIssuer};
pub use jwt_validator::JwtValidator;
pub use password::{MIN_PASSWORD_LEN, WEAK_PASSWORD, hash_password, validate_password, verify_password};
