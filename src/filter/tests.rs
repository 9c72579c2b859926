use super::*;

fn domains(list: &[&str]) -> Vec<String> {
    list.iter().map(|d| d.to_string()).collect()
}

fn urls(list: &[&str]) -> Vec<String> {
    list.iter().map(|u| u.to_string()).collect()
}

#[test]
fn test_exact_host_scoping() {
    let scope = domains(&["example.com"]);
    let input = urls(&[
        "https://evil.com/api/x",
        "https://example.com/api/x",
        "https://sub.example.com/api/y",
        "https://example.com.evil.com/api/z",
        "https://notexample.com/",
    ]);
    assert_eq!(
        filter_urls(input, &scope, None),
        vec!["https://example.com/api/x"]
    );
}

#[test]
fn test_host_kept_regardless_of_path() {
    let scope = domains(&["example.com"]);
    let input = urls(&[
        "http://example.com",
        "http://example.com/",
        "http://example.com/deep/nested/path/here",
    ]);
    assert_eq!(
        filter_urls(input, &scope, None),
        vec![
            "http://example.com",
            "http://example.com/deep/nested/path/here"
        ]
    );
}

#[test]
fn test_relative_and_schemeless_urls_are_dropped() {
    let scope = domains(&["example.com"]);
    let input = urls(&[
        "/api/users",
        "example.com/api",
        "mailto:admin@example.com",
        "javascript:void(0)",
        "",
    ]);
    assert!(filter_urls(input, &scope, None).is_empty());
}

#[test]
fn test_query_and_fragment_are_stripped() {
    let scope = domains(&["example.com"]);
    let input = urls(&[
        "http://example.com/api/orders?page=1",
        "http://example.com/api/orders?page=2#top",
        "http://example.com/api/orders/",
    ]);
    assert_eq!(
        filter_urls(input, &scope, None),
        vec!["http://example.com/api/orders"]
    );
}

#[test]
fn test_canonicalization_rules() {
    let scope = domains(&["example.com"]);
    assert_eq!(
        canonicalize_url("http://example.com/api/:id/detail", &scope, None).as_deref(),
        Some("http://example.com/api/1/detail")
    );
    assert_eq!(
        canonicalize_url("http://example.com/assets/app.min.js?v=3", &scope, None).as_deref(),
        Some("http://example.com/assets")
    );
    assert_eq!(
        canonicalize_url("http://example.com/a/b/c/d", &scope, Some(2)).as_deref(),
        Some("http://example.com/a/b")
    );
    assert_eq!(
        canonicalize_url("http://example.com/logo.svg", &scope, None).as_deref(),
        Some("http://example.com")
    );
}

#[test]
fn test_port_and_scheme_are_preserved() {
    let scope = domains(&["127.0.0.1"]);
    assert_eq!(
        canonicalize_url("https://127.0.0.1:8443/x/", &scope, None).as_deref(),
        Some("https://127.0.0.1:8443/x")
    );
}

#[test]
fn test_multiple_base_domains() {
    let scope = domains(&["a.com", "b.com"]);
    let input = urls(&["http://b.com/1", "http://c.com/2", "http://a.com/3"]);
    assert_eq!(
        filter_urls(input, &scope, None),
        vec!["http://b.com/1", "http://a.com/3"]
    );
}

#[test]
fn test_empty_scope_keeps_nothing() {
    let input = urls(&["http://example.com/a"]);
    assert!(filter_urls(input, &[], None).is_empty());
}

#[test]
fn test_dedup_preserves_first_seen_order() {
    let scope = domains(&["example.com"]);
    let input = urls(&[
        "http://example.com/b",
        "http://example.com/a?x=1",
        "http://example.com/b#frag",
        "http://example.com/a",
        "http://example.com/c",
    ]);
    assert_eq!(
        filter_urls(input, &scope, None),
        vec![
            "http://example.com/b",
            "http://example.com/a",
            "http://example.com/c"
        ]
    );
}

#[test]
fn test_filter_is_idempotent() {
    let scope = domains(&["example.com"]);
    let input = urls(&[
        "http://example.com",
        "http://example.com/api/:id/detail?x=1",
        "http://example.com/static/js/app.js",
        "http://example.com/a/b.js/c.css",
        "http://example.com//double//slash/",
        "http://example.com/x/./y/../z#f",
        "https://example.com:8443/p/q/r/s",
        "http://sub.example.com/ignored",
    ]);
    for depth in [None, Some(1), Some(2)] {
        let once = filter_urls(input.clone(), &scope, depth);
        let twice = filter_urls(once.clone(), &scope, depth);
        assert_eq!(once, twice, "depth {:?}", depth);
    }
}

#[test]
fn test_host_of() {
    assert_eq!(host_of("https://Example.com:8080/x").as_deref(), Some("Example.com"));
    assert_eq!(host_of("https://example.com/x").as_deref(), Some("example.com"));
    assert_eq!(host_of("/relative"), None);
    assert_eq!(host_of("mailto:a@b.c"), None);
}

#[test]
fn test_mixed_case_seed_host_is_matched_exactly() {
    let scope: Vec<String> = host_of("http://Example.com").into_iter().collect();
    assert_eq!(scope, vec!["Example.com"]);

    let input = urls(&[
        "http://example.com/lower",
        "http://Example.com/kept?x=1",
        "http://EXAMPLE.COM/upper",
        "http://Example.com",
    ]);
    assert_eq!(
        filter_urls(input, &scope, None),
        vec!["http://Example.com/kept", "http://Example.com"]
    );
}

#[test]
fn test_caller_supplied_domain_keeps_written_case() {
    let scope = domains(&["Example.com"]);
    let input = urls(&["http://EXAMPLE.COM/api/x", "http://Example.com/b"]);
    assert_eq!(filter_urls(input, &scope, None), vec!["http://Example.com/b"]);
}

#[test]
fn test_mixed_case_output_is_idempotent() {
    let scope = domains(&["Example.com"]);
    let once = filter_urls(
        urls(&["https://user@Example.com:8443/a/:id/app.js?v=1"]),
        &scope,
        None,
    );
    assert_eq!(once, vec!["https://user@Example.com:8443/a/1"]);
    assert_eq!(filter_urls(once.clone(), &scope, None), once);
}
