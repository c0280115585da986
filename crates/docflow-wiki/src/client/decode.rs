//! Response decoding for the GraphQL transport.
//!
//! One decoding step turns `(status, body)` into either a typed `data`
//! value or a [`WikiError`] variant, so call sites match on the failure
//! class instead of probing nested JSON maps.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::WikiError;

/// GraphQL response envelope: `data` and/or `errors`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct GraphQlResponse<T> {
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

/// Single entry of the top-level `errors` array.
#[derive(Debug, Deserialize)]
struct GraphQlError {
    #[serde(default)]
    message: String,
}

/// Interpret an HTTP response from the GraphQL endpoint.
///
/// Status handling: 401 and 400 map to their own variants (they have
/// distinct, actionable causes), every other error status carries the body
/// along. A 200 response may still fail at the GraphQL level via the
/// `errors` array; that is reported as [`WikiError::GraphQl`] and never
/// retried.
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<T, WikiError> {
    match status {
        401 => return Err(WikiError::AuthFailed),
        400 => return Err(WikiError::BadRequest),
        s if s >= 400 => {
            return Err(WikiError::HttpResponse {
                status: s,
                body: body.to_owned(),
            });
        }
        _ => {}
    }

    let response: GraphQlResponse<T> = serde_json::from_str(body)?;

    if let Some(errors) = response.errors
        && !errors.is_empty()
    {
        let joined = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(WikiError::GraphQl(joined));
    }

    response
        .data
        .ok_or_else(|| WikiError::GraphQl("response contained neither data nor errors".to_owned()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: u32,
    }

    #[test]
    fn test_decode_success() {
        let result: Payload = decode_response(200, r#"{"data": {"value": 7}}"#).unwrap();
        assert_eq!(result, Payload { value: 7 });
    }

    #[test]
    fn test_401_is_auth_failure() {
        let result = decode_response::<Payload>(401, "unauthorized");
        assert!(matches!(result, Err(WikiError::AuthFailed)));
    }

    #[test]
    fn test_400_is_bad_request() {
        let result = decode_response::<Payload>(400, "bad request");
        assert!(matches!(result, Err(WikiError::BadRequest)));
    }

    #[test]
    fn test_auth_and_bad_request_messages_differ() {
        let auth = decode_response::<Payload>(401, "").unwrap_err().to_string();
        let bad = decode_response::<Payload>(400, "").unwrap_err().to_string();
        assert!(auth.contains("authentication"), "got: {auth}");
        assert!(!bad.contains("authentication"), "got: {bad}");
    }

    #[test]
    fn test_other_status_carries_body() {
        let result = decode_response::<Payload>(502, "upstream down");
        match result {
            Err(WikiError::HttpResponse { status, body }) => {
                assert_eq!(status, 502);
                assert_eq!(body, "upstream down");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_graphql_errors_win_over_data() {
        let body = r#"{"data": {"value": 7}, "errors": [{"message": "boom"}, {"message": "bang"}]}"#;
        let result = decode_response::<Payload>(200, body);
        match result {
            Err(WikiError::GraphQl(message)) => assert_eq!(message, "boom; bang"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_errors_array_is_ignored() {
        let body = r#"{"data": {"value": 7}, "errors": []}"#;
        let result: Payload = decode_response(200, body).unwrap();
        assert_eq!(result.value, 7);
    }

    #[test]
    fn test_missing_data_is_an_error() {
        let result = decode_response::<Payload>(200, "{}");
        assert!(matches!(result, Err(WikiError::GraphQl(_))));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = decode_response::<Payload>(200, "<html>not json</html>");
        assert!(matches!(result, Err(WikiError::Json(_))));
    }
}
