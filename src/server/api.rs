pub mod connectivity_report;
pub mod error_response;
