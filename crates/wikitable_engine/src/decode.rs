use serde::Deserialize;

use crate::{FailureKind, FetchError, WikiPage};

/// `action=parse&format=json` response. With `errorformat=plaintext` a
/// failed request carries `errors` instead of `parse`.
#[derive(Debug, Deserialize)]
struct ParseEnvelope {
    parse: Option<ParsePayload>,
    #[serde(default)]
    errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ParsePayload {
    #[serde(default)]
    pageid: u64,
    #[serde(default)]
    title: String,
    text: ParseText,
}

#[derive(Debug, Deserialize)]
struct ParseText {
    #[serde(rename = "*")]
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEntry {
    code: String,
    #[serde(default)]
    text: String,
}

/// Decodes a parse-API response body into the rendered page.
pub fn decode_parse_response(bytes: &[u8]) -> Result<WikiPage, FetchError> {
    let envelope: ParseEnvelope = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

    if let Some(first) = envelope.errors.into_iter().next() {
        return Err(FetchError::new(
            FailureKind::Api { code: first.code },
            first.text,
        ));
    }

    let parse = envelope.parse.ok_or_else(|| {
        FetchError::new(FailureKind::Decode, "response has neither `parse` nor `errors`")
    })?;

    Ok(WikiPage {
        page_id: parse.pageid,
        title: parse.title,
        html: parse.text.content,
    })
}

#[cfg(test)]
mod tests {
    use super::decode_parse_response;
    use crate::FailureKind;

    #[test]
    fn decodes_parse_payload() {
        let body = br#"{"parse":{"title":"Lists of earthquakes","pageid":1234,"text":{"*":"<table></table>"}}}"#;
        let page = decode_parse_response(body).unwrap();
        assert_eq!(page.page_id, 1234);
        assert_eq!(page.title, "Lists of earthquakes");
        assert_eq!(page.html, "<table></table>");
    }

    #[test]
    fn api_error_envelope_is_reported() {
        let body = br#"{"errors":[{"code":"missingtitle","text":"The page you specified doesn't exist.","module":"parse"}],"docref":"See /w/api.php"}"#;
        let err = decode_parse_response(body).unwrap_err();
        assert_eq!(
            err.kind,
            FailureKind::Api {
                code: "missingtitle".to_string()
            }
        );
        assert_eq!(err.message, "The page you specified doesn't exist.");
    }

    #[test]
    fn non_json_is_a_decode_error() {
        let err = decode_parse_response(b"<html>not json</html>").unwrap_err();
        assert_eq!(err.kind, FailureKind::Decode);
    }

    #[test]
    fn empty_object_is_a_decode_error() {
        let err = decode_parse_response(b"{}").unwrap_err();
        assert_eq!(err.kind, FailureKind::Decode);
    }
}
