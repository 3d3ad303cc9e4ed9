//! The RPC method allowlist.

use std::collections::HashSet;

/// An immutable set of RPC method names permitted through the proxy.
///
/// Membership is an exact, case-sensitive string match: no wildcards, no
/// prefixes. A method absent from the set is rejected even when it is a
/// perfectly valid standard method; admission is strict opt-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodAllowlist {
    methods: HashSet<String>,
}

impl MethodAllowlist {
    /// Build an allowlist from an iterator of method names.
    #[must_use]
    pub fn from_methods<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            methods: methods.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma-separated method list, trimming whitespace around each
    /// entry and skipping empty ones.
    #[must_use]
    pub fn from_comma_list(list: &str) -> Self {
        Self::from_methods(list.split(',').map(str::trim).filter(|m| !m.is_empty()))
    }

    /// Whether `method` is allowed through.
    #[must_use]
    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains(method)
    }

    /// Number of allowed methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether the allowlist permits nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl Default for MethodAllowlist {
    /// The read-only block inspection methods the proxy ships with.
    fn default() -> Self {
        Self::from_methods(["eth_blockNumber", "eth_getBlockByNumber"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allows_block_inspection_methods() {
        let allowlist = MethodAllowlist::default();

        assert_eq!(allowlist.len(), 2);
        assert!(allowlist.contains("eth_blockNumber"));
        assert!(allowlist.contains("eth_getBlockByNumber"));
    }

    #[test]
    fn membership_is_an_exact_match() {
        let allowlist = MethodAllowlist::default();

        assert!(!allowlist.contains("eth_blocknumber"));
        assert!(!allowlist.contains("eth_block"));
        assert!(!allowlist.contains("eth_blockNumberX"));
        assert!(!allowlist.contains(""));
    }

    #[test]
    fn valid_methods_outside_the_set_are_not_allowed() {
        let allowlist = MethodAllowlist::default();

        assert!(!allowlist.contains("eth_getBalance"));
        assert!(!allowlist.contains("eth_sendRawTransaction"));
    }

    #[test]
    fn parses_comma_separated_list() {
        let allowlist = MethodAllowlist::from_comma_list(" eth_call , net_version ,, ");

        assert_eq!(allowlist.len(), 2);
        assert!(allowlist.contains("eth_call"));
        assert!(allowlist.contains("net_version"));
    }

    #[test]
    fn empty_list_permits_nothing() {
        let allowlist = MethodAllowlist::from_comma_list("");

        assert!(allowlist.is_empty());
        assert!(!allowlist.contains("eth_blockNumber"));
    }
}
