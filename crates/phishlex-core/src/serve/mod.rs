//! Request handling for the prediction service: validation, request body
//! decoding and the predict/health handlers. No transport lives here; a
//! server or the CLI feeds bodies in and writes the responses out.

mod handlers;
mod request;
mod validate;

pub use handlers::{
    handle_health, handle_predict, ErrorBody, HealthResponse, PredictResponse, Prediction,
    Verdict, STATUS_BAD_REQUEST, STATUS_OK, STATUS_SERVER_ERROR,
};
pub use request::PredictRequest;
pub use validate::{validate_url, ValidationError};
