mod credit_error;
mod error;
mod extractors;
