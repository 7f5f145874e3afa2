pub mod search_request;
pub mod search_response;
pub mod submit;
