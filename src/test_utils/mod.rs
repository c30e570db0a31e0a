#![allow(missing_docs)]

pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod sender;

pub(crate) use html::{assert_valid_html, parse_html_document};
pub(crate) use http::parse_json_body;
pub(crate) use sender::FakeSender;
