//! Query-text rewriting for domain restriction.
//!
//! The provider has no native per-search domain filter, so restriction is
//! approximated by appending `site:` operators to the query text. This biases
//! ranking towards the listed domains rather than strictly excluding others.

/// Append a `site:` disjunction for `domains` to `query`.
///
/// Clauses keep their input order and are joined with a literal `" OR "`,
/// separated from the original query by a single space. An empty domain list
/// returns the query unchanged.
///
/// # Examples
///
/// ```
/// let rewritten = firecrawl_search::query::with_domain_filter(
///     "rust async",
///     &["docs.rs".to_string(), "lib.rs".to_string()],
/// );
/// assert_eq!(rewritten, "rust async site:docs.rs OR site:lib.rs");
/// ```
pub fn with_domain_filter(query: &str, domains: &[String]) -> String {
    if domains.is_empty() {
        return query.to_string();
    }
    let clauses = domains
        .iter()
        .map(|domain| format!("site:{domain}"))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("{query} {clauses}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_leaves_query_unchanged() {
        assert_eq!(with_domain_filter("rust async", &[]), "rust async");
    }

    #[test]
    fn single_domain() {
        assert_eq!(
            with_domain_filter("rust async", &["docs.rs".into()]),
            "rust async site:docs.rs"
        );
    }

    #[test]
    fn multiple_domains_joined_in_input_order() {
        let domains = vec![
            "docs.rs".to_string(),
            "lib.rs".to_string(),
            "crates.io".to_string(),
        ];
        assert_eq!(
            with_domain_filter("rust async", &domains),
            "rust async site:docs.rs OR site:lib.rs OR site:crates.io"
        );
    }

    #[test]
    fn single_space_before_first_clause() {
        let rewritten = with_domain_filter("q", &["a.example".into()]);
        assert_eq!(rewritten, "q site:a.example");
        assert!(!rewritten.contains("  "));
    }
}
