//! Custom Axum extractors

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

/// Task id from the `{id}` path segment.
///
/// The segment is read the way MySQL coerces a string compared with an
/// integer column: leading whitespace is skipped and the leading number is
/// used, so `5abc` is task 5. `None` when there is no leading number or it
/// has a non-zero fraction; such an id matches no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskId(pub Option<i64>);

impl<S> FromRequestParts<S> for TaskId
where
    S: Send + Sync,
{
    type Rejection = PathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state).await?;
        Ok(Self(parse_id(&raw)))
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digit_at = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = start;
    while digit_at(end) {
        end += 1;
    }
    if end == start {
        return None;
    }

    // 3.0 still equals 3; 3.5 equals no integer.
    if bytes.get(end) == Some(&b'.') {
        let mut frac = end + 1;
        while digit_at(frac) {
            if bytes[frac] != b'0' {
                return None;
            }
            frac += 1;
        }
    }

    s[..end].parse().ok()
}
