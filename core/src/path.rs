//! Request URL assembly from host, base path and path segments.
//!
//! Nothing here escapes its input: host, path and segments are pasted into
//! the URL as given, so callers must pass components that are already safe
//! to appear in a URL.

use std::fmt::Display;

/// Join `host`, `path` and `segments` into `https://{host}{path}/{seg}...`.
///
/// Returns an empty string when `path` does not start with `/` or when
/// `path` contains `host` (a full URL passed where a path was expected).
/// An empty `host` is contained in every path and so always yields `""`.
pub fn assemble<I>(host: &str, path: &str, segments: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    if !path.starts_with('/') || path.contains(host) {
        return String::new();
    }

    let mut url = format!("https://{host}{path}");
    for segment in segments {
        url.push('/');
        url.push_str(&segment.to_string());
    }
    url
}

/// [`assemble`] with segments of mixed `Display` types.
///
/// ```
/// use http_caller::assemble_url;
///
/// let url = assemble_url!("api.example.com", "/users", 42, "posts");
/// assert_eq!(url, "https://api.example.com/users/42/posts");
/// ```
#[macro_export]
macro_rules! assemble_url {
    ($host:expr, $path:expr $(,)?) => {
        $crate::assemble($host, $path, ::std::iter::empty::<&str>())
    };
    ($host:expr, $path:expr, $($segment:expr),+ $(,)?) => {
        $crate::assemble($host, $path, [$(::std::string::ToString::to_string(&$segment)),+])
    };
}
