use std::collections::BTreeMap;
use std::fmt;

/// JSON object body carried by POST and PUT requests, field name to value.
pub type Body = BTreeMap<String, String>;

/// HTTP verb supported by the façade.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes one HTTP request. Immutable once constructed.
///
/// Only [`RequestSpec::post`] and [`RequestSpec::put`] carry a body; the
/// other constructors leave it empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestSpec {
    /// Verb to issue.
    pub method: Method,
    /// Fully resolved target URL.
    pub url: String,
    /// Optional JSON object body.
    pub body: Option<Body>,
}

impl RequestSpec {
    /// Describes a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    /// Describes a POST request with a JSON object body.
    pub fn post(url: impl Into<String>, body: Body) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body),
        }
    }

    /// Describes a PUT request with a JSON object body.
    pub fn put(url: impl Into<String>, body: Body) -> Self {
        Self {
            method: Method::Put,
            url: url.into(),
            body: Some(body),
        }
    }

    /// Describes a DELETE request.
    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            url: url.into(),
            body: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Body, Method, RequestSpec};

    #[test]
    fn bodyless_constructors() {
        let get = RequestSpec::get("http://httpbin.org/get");
        let delete = RequestSpec::delete("http://httpbin.org/delete");
        assert_eq!(get.method, Method::Get);
        assert_eq!(delete.method, Method::Delete);
        assert!(get.body.is_none());
        assert!(delete.body.is_none());
    }

    #[test]
    fn bodied_constructors() {
        let mut body = Body::new();
        body.insert("prop1".to_owned(), "Valor prop1".to_owned());

        let post = RequestSpec::post("http://httpbin.org/post", body.clone());
        let put = RequestSpec::put("http://httpbin.org/put", body.clone());
        assert_eq!(post.method, Method::Post);
        assert_eq!(put.method, Method::Put);
        assert_eq!(post.body.as_ref(), Some(&body));
        assert_eq!(put.body.as_ref(), Some(&body));
    }

    #[test]
    fn method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
