use axum::{body::Body, http::header::CONTENT_TYPE, response::Response};

/// The value of `header_name`, panicking if it is missing or not visible ASCII.
#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, header_name: &str) -> String {
    match response.headers().get(header_name) {
        Some(value) => value
            .to_str()
            .unwrap_or_else(|error| panic!("header {header_name} is not a string: {error}"))
            .to_owned(),
        None => panic!(
            "want header {header_name}, got headers {:?}",
            response.headers().keys().collect::<Vec<_>>()
        ),
    }
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    assert_eq!(get_header(response, CONTENT_TYPE.as_str()), content_type);
}
