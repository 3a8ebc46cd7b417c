#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod mock_api;

pub(crate) use form::{
    assert_form_error_message, assert_form_input, assert_form_input_with_value,
    assert_form_submit_button, assert_hx_endpoint, must_get_form,
};
pub(crate) use html::{
    assert_valid_html, element_text, parse_html_document, parse_html_fragment, select_all_text,
};
pub(crate) use http::{
    assert_cookies_cleared, assert_hx_redirect, assert_redirect, get_header, session_cookies,
    test_cookie_key, with_session,
};
pub(crate) use mock_api::{spawn_mock_api, unreachable_api_url};
