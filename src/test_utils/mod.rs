#![allow(missing_docs)]

pub(crate) mod fake_api;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use fake_api::{FakeApi, FakeRoute, account_route, list_route, unreachable_client};
pub(crate) use form::{
    assert_form_input, assert_form_input_with_value, assert_selected_option,
    assert_textarea_value, must_get_form,
};
pub(crate) use html::{
    assert_valid_html, element_text, must_get_element, parse_html_document, parse_html_fragment,
    select_all,
};
pub(crate) use http::{assert_content_type, get_header};
