pub mod request_log;

pub use request_log::{request_log, REQUEST_ID_HEADER, RESPONSE_TIME_HEADER};
