pub mod add_points_request;
pub mod credit_error;
pub mod credit_response;
pub mod points;
