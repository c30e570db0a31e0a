//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/emails/preview/{kind}', use [format_endpoint].

/// The route for seeding the demo account with transactions.
pub const SEED_API: &str = "/api/seed";
/// The route for sending an email.
pub const EMAILS_API: &str = "/api/emails";
/// The page showing a sample email of the given kind.
pub const EMAIL_PREVIEW: &str = "/emails/preview/{kind}";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/emails/preview/{kind}', '{kind}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, value: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}
