use std::borrow::Cow;

use serde::de::IgnoredAny;

/// Non-finite number literals accepted as values alongside standard JSON.
const NON_FINITE: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// Checks that `payload` is a single JSON document.
///
/// Only syntax is checked. Nesting depth, number magnitude and unpaired
/// surrogate escapes are not limited. The `NaN`, `Infinity` and `-Infinity`
/// literals are allowed wherever a value may appear and come back as `null`
/// in the returned text.
pub fn validate(payload: &str) -> serde_json::Result<Cow<'_, str>> {
    let normalized = replace_non_finite(payload);
    serde_json::from_str::<IgnoredAny>(&normalized)?;
    Ok(normalized)
}

/// Rewrites non-finite literals outside of strings to `null`.
fn replace_non_finite(payload: &str) -> Cow<'_, str> {
    let bytes = payload.as_bytes();
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut in_string = false;
    let mut i = 0;

    while i < bytes.len() {
        if in_string {
            match bytes[i] {
                b'\\' => i += 1,
                b'"' => in_string = false,
                _ => {}
            }
            i += 1;
            continue;
        }

        if bytes[i] == b'"' {
            in_string = true;
            i += 1;
            continue;
        }

        match NON_FINITE
            .iter()
            .find(|literal| bytes[i..].starts_with(literal.as_bytes()))
        {
            Some(literal) => {
                let out = out.get_or_insert_with(|| String::with_capacity(payload.len()));
                out.push_str(&payload[copied..i]);
                out.push_str("null");
                i += literal.len();
                copied = i;
            }
            None => i += 1,
        }
    }

    match out {
        Some(mut out) => {
            out.push_str(&payload[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(payload),
    }
}
