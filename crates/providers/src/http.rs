use reqwest::Url;

use crate::error::ProviderError;

/// Validate one caller-supplied path segment.
///
/// Empty, `.` and `..` segments are refused. Everything else is
/// percent-encoded when pushed, so `/`, `?` and `#` stay inside the segment.
pub(crate) fn path_segment<'a>(
    argument: &'static str,
    value: &'a str,
) -> Result<&'a str, ProviderError> {
    match value {
        "" | "." | ".." => Err(ProviderError::InvalidArgument {
            argument,
            value: value.to_string(),
        }),
        _ => Ok(value),
    }
}

/// Append `segments` to `base_url`, percent-encoding each one.
pub(crate) fn endpoint<'a, I>(base_url: &str, segments: I) -> Result<Url, ProviderError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut url =
        Url::parse(base_url).map_err(|_| ProviderError::InvalidBaseUrl(base_url.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| ProviderError::InvalidBaseUrl(base_url.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Return the response unchanged on a 2xx status, otherwise a
/// [`ProviderError::Api`] carrying the status and body text.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(ProviderError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Parse a successful JSON response body.
pub(crate) async fn parse_json(
    response: reqwest::Response,
) -> Result<serde_json::Value, ProviderError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<serde_json::Value>().await?)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn reserved_characters_stay_inside_segment() {
        let url = endpoint(
            "https://api.example.com",
            ["v1", "text-to-speech", "../../v1/user?x=1#frag"],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/text-to-speech/..%2F..%2Fv1%2Fuser%3Fx=1%23frag"
        );
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn base_path_is_kept() {
        let url = endpoint("http://localhost:9000/proxy", ["a", "b"]).unwrap();
        assert_eq!(url.path(), "/proxy/a/b");
    }

    #[test]
    fn dot_segments_are_refused() {
        for value in ["", ".", ".."] {
            assert_matches!(
                path_segment("model", value),
                Err(ProviderError::InvalidArgument { argument: "model", .. })
            );
        }
        assert_eq!(path_segment("model", "kling-2.6").unwrap(), "kling-2.6");
    }

    #[test]
    fn unparseable_base_is_error() {
        assert_matches!(
            endpoint("not a url", ["x"]),
            Err(ProviderError::InvalidBaseUrl(_))
        );
    }
}
