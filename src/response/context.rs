//! Request parameters echoed into the response header.

use serde::{Deserialize, Serialize};

/// The request-parameter bag handed down by the front-end.
///
/// All values are optional free-form strings; absent or empty values are
/// simply omitted from the response header echo, never emitted as empty
/// elements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestContext {
    /// The query string.
    pub q: Option<String>,
    /// The compact sort expression, e.g. `date:D:S:d1`.
    pub sort: Option<String>,
    /// Client id of the caller.
    pub client: Option<String>,
    /// Site scope restriction.
    pub site: Option<String>,
    /// IP address of the caller.
    pub ip: Option<String>,
    /// Access scope: `p` public, `s` secure, `a` all content.
    pub access: Option<String>,
    /// Query-expansion policy.
    pub entqr: Option<String>,
}

impl RequestContext {
    /// Create a new empty request context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query string.
    pub fn q<S: Into<String>>(mut self, q: S) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Set the sort expression.
    pub fn sort<S: Into<String>>(mut self, sort: S) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Set the client id.
    pub fn client<S: Into<String>>(mut self, client: S) -> Self {
        self.client = Some(client.into());
        self
    }

    /// Set the site scope.
    pub fn site<S: Into<String>>(mut self, site: S) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Set the caller IP.
    pub fn ip<S: Into<String>>(mut self, ip: S) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Set the access scope.
    pub fn access<S: Into<String>>(mut self, access: S) -> Self {
        self.access = Some(access.into());
        self
    }

    /// Set the query-expansion policy.
    pub fn entqr<S: Into<String>>(mut self, entqr: S) -> Self {
        self.entqr = Some(entqr.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let context = RequestContext::new()
            .q("chicken teriyaki")
            .client("test")
            .site("test")
            .sort("date:D:S:d1");

        assert_eq!(context.q.as_deref(), Some("chicken teriyaki"));
        assert_eq!(context.client.as_deref(), Some("test"));
        assert_eq!(context.ip, None);
    }
}
