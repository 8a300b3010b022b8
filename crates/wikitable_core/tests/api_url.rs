use wikitable_core::{create_api_url, UrlError};

const QUERY: &str =
    "api.php?action=parse&redirects=true&format=json&errorformat=plaintext&origin=*&page=";

#[test]
fn wikipedia_short_url() {
    let query = create_api_url("https://en.wikipedia.org/wiki/Lists_of_earthquakes").unwrap();
    assert_eq!(query.title, "Lists_of_earthquakes");
    assert_eq!(
        query.url,
        "https://en.wikipedia.org/w/api.php?action=parse&redirects=true&format=json&errorformat=plaintext&origin=*&page=Lists_of_earthquakes&prop=text"
    );
}

#[test]
fn view_prefix_is_a_short_url() {
    let query = create_api_url("http://example.org/view/Page_title").unwrap();
    assert_eq!(query.title, "Page_title");
    assert_eq!(
        query.url,
        format!("http://example.org/w/{QUERY}Page_title&prop=text")
    );
}

#[test]
fn index_php_path_form() {
    let query = create_api_url("http://example.org/w/index.php/Page_title").unwrap();
    assert_eq!(query.title, "Page_title");
    assert_eq!(
        query.url,
        format!("http://example.org/w/{QUERY}Page_title&prop=text")
    );
}

#[test]
fn index_php_title_parameter_form() {
    let query = create_api_url(
        "https://fr.wikipedia.org/w/index.php?title=Wikip%C3%A9dia:Rapports&action=view",
    )
    .unwrap();
    assert_eq!(query.title, "Wikip%C3%A9dia:Rapports");
    assert_eq!(query.display_title(), "Wikipédia:Rapports");
    assert_eq!(
        query.url,
        format!("https://fr.wikipedia.org/w/{QUERY}Wikip%C3%A9dia:Rapports&prop=text")
    );
}

#[test]
fn index_php_without_title_parameter_fails() {
    let err = create_api_url("https://example.org/w/index.php?action=view&title=X").unwrap_err();
    assert!(matches!(err, UrlError::NoMatch(_)));
}

#[test]
fn bare_title_uses_root_api() {
    let query = create_api_url("https://wiki.example.com/Main_Page").unwrap();
    assert_eq!(query.title, "Main_Page");
    assert_eq!(
        query.url,
        format!("https://wiki.example.com/{QUERY}Main_Page&prop=text")
    );
}

#[test]
fn uppercase_first_segment_is_a_bare_title() {
    let query = create_api_url("https://wiki.example.com/Category/Sub").unwrap();
    assert_eq!(query.title, "Category/Sub");
    assert!(query.url.starts_with("https://wiki.example.com/api.php?"));
}

#[test]
fn explicit_port_is_kept() {
    let query = create_api_url("http://127.0.0.1:8080/wiki/Foo").unwrap();
    assert!(query.url.starts_with("http://127.0.0.1:8080/w/api.php?"));
}

#[test]
fn fragment_is_not_part_of_the_title() {
    let query = create_api_url("https://en.wikipedia.org/wiki/Tsunami#History").unwrap();
    assert_eq!(query.title, "Tsunami");
}

#[test]
fn site_root_has_no_title() {
    let err = create_api_url("https://en.wikipedia.org/").unwrap_err();
    assert_eq!(err, UrlError::NoMatch("https://en.wikipedia.org/".to_string()));
}

#[test]
fn unparsable_url_is_rejected() {
    assert!(matches!(
        create_api_url("not a url"),
        Err(UrlError::Parse { .. })
    ));
    assert!(matches!(create_api_url(""), Err(UrlError::Parse { .. })));
}
