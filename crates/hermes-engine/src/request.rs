//! Request construction.
//!
//! Pure transformation from a resolved descriptor and bound parameters to
//! an outgoing [`RequestEnvelope`]; no network activity happens here.
//!
//! Normalization is split out because the dispatcher re-applies it after
//! the request-phase hooks ran: hooks may rewrite the content-type header
//! or the body, and the form/query rules key off the envelope's current
//! state, not the declared metadata. Both normalization passes are
//! idempotent.

use hermes_binding::{BoundParams, MethodDescriptor};
use hermes_core::{Codec, HermesError, HermesResult, RequestEnvelope};
use http::Method;
use serde_json::Value;

/// Builds the outgoing request for one invocation.
///
/// The URL template is expanded with the original positional arguments;
/// the body is assembled from the bound parameters; form and read-verb
/// normalization is applied once here (and again by the dispatcher after
/// the pre-hooks ran).
pub fn build(
    descriptor: &MethodDescriptor,
    bound: &BoundParams,
    args: &[Value],
    codec: &dyn Codec,
) -> HermesResult<RequestEnvelope> {
    let url = expand_url(descriptor.url(), args)?;
    let mut request = RequestEnvelope::new(descriptor.verb().clone(), url);
    request.set_content_type(descriptor.content_type());

    match bound {
        BoundParams::Named(params) => {
            request
                .body_mut()
                .set_all(params.iter().map(|(name, value)| (name, value.clone())));
        }
        BoundParams::Single(Value::Object(fields)) => {
            // A bare structured parameter carries the body itself; its
            // fields become the body entries.
            request
                .body_mut()
                .set_all(fields.iter().map(|(name, value)| (name.clone(), value.clone())));
        }
        BoundParams::Single(_) | BoundParams::None => {}
    }

    normalize(&mut request, bound, codec)?;
    Ok(request)
}

/// Applies content-type and verb normalization to the envelope's current
/// state.
///
/// - Form-urlencoded: scalar body values are stringified; a bare
///   structured parameter is flattened into flat string fields via the
///   codec.
/// - GET: scalar body entries fold into the query string and the body is
///   cleared; structured entries cannot be represented in a query string
///   and are dropped with a warning.
pub fn normalize(
    request: &mut RequestEnvelope,
    bound: &BoundParams,
    codec: &dyn Codec,
) -> HermesResult<()> {
    if request.is_form_urlencoded() {
        request.body_mut().map_values_in_place(|_, value| {
            if let Some(text) = scalar_to_string(value) {
                *value = Value::String(text);
            }
        });
        if let BoundParams::Single(single) = bound {
            if single.is_object() {
                let flat = codec.flatten(single)?;
                request
                    .body_mut()
                    .set_all(flat.into_iter().map(|(name, text)| (name, Value::String(text))));
            }
        }
    }

    if request.verb() == Method::GET {
        fold_body_into_query(request);
    }
    Ok(())
}

/// Expands `{name}` placeholders in order of occurrence with the original
/// positional arguments, percent-encoding each value. With no arguments
/// the template is used as a literal URL.
pub fn expand_url(template: &str, args: &[Value]) -> HermesResult<String> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    let mut url = String::with_capacity(template.len());
    let mut rest = template;
    let mut next_arg = 0usize;

    while let Some(start) = rest.find('{') {
        url.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            return Err(HermesError::binding(format!(
                "unterminated placeholder in URL template '{template}'"
            )));
        };
        let value = args.get(next_arg).ok_or_else(|| {
            HermesError::binding(format!(
                "URL template '{template}' has more placeholders than arguments ({})",
                args.len()
            ))
        })?;
        let text = scalar_to_string(value).ok_or_else(|| {
            HermesError::binding(format!(
                "cannot expand placeholder '{{{}}}' from a structured value",
                &after[..end]
            ))
        })?;
        url.push_str(&urlencoding::encode(&text));
        next_arg += 1;
        rest = &after[end + 1..];
    }
    url.push_str(rest);
    Ok(url)
}

/// Moves scalar body entries into the URL query string and clears the
/// body. Structured values are dropped with a warning since they have no
/// query-string form.
fn fold_body_into_query(request: &mut RequestEnvelope) {
    if request.body().is_empty() {
        return;
    }

    let mut query = String::new();
    let mut dropped: Vec<String> = Vec::new();
    for (name, values) in request.body().iter() {
        for value in values {
            match scalar_to_string(value) {
                Some(text) => {
                    if !query.is_empty() {
                        query.push('&');
                    }
                    query.push_str(&urlencoding::encode(name));
                    query.push('=');
                    query.push_str(&urlencoding::encode(&text));
                }
                None => dropped.push(name.to_string()),
            }
        }
    }

    if !dropped.is_empty() {
        tracing::warn!(
            url = %request.url(),
            parameters = ?dropped,
            "dropping structured body parameters from read-only request"
        );
    }

    if !query.is_empty() {
        let url = request.url();
        let separator = if url.contains('?') { '&' } else { '?' };
        let appended = format!("{url}{separator}{query}");
        request.set_url(appended);
    }
    request.body_mut().clear();
}

/// Renders a scalar value as its query/form string form. Returns `None`
/// for structured values and `null`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
