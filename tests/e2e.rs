use opensearch_engines as ose;
use ose::{Engine, FixedLocale, Method};
use pretty_assertions::assert_eq;

fn engine(doc: &str) -> Engine {
    Engine::from_xml_str(doc).unwrap()
}

fn no_locale() -> FixedLocale {
    FixedLocale::default()
}

#[test]
fn test_required_defaults_and_optional_blanks() {
    let eng = engine(
        r#"<OpenSearchDescription>
             <Url type="text/html" template="http://x/?q={searchTerms}&amp;p={startPage}&amp;c={count?}"/>
           </OpenSearchDescription>"#,
    );
    let req = ose::resolve(&eng, "a b", None, &no_locale()).unwrap();
    assert_eq!(req.url, "http://x/?q=a%20b&p=1&c=");
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.body, None);
}

#[test]
fn test_duplicate_type_last_wins() {
    let eng = engine(
        r#"<OpenSearchDescription>
             <Url type="text/html" template="http://first/?q={searchTerms}"/>
             <Url type="text/html" template="http://second/?q={searchTerms}"/>
           </OpenSearchDescription>"#,
    );
    let req = ose::resolve(&eng, "x", Some("text/html"), &no_locale()).unwrap();
    assert_eq!(req.url, "http://second/?q=x");
}

#[test]
fn test_invalid_scheme_skips_only_that_url() {
    let eng = engine(
        r#"<OpenSearchDescription>
             <ShortName>Mixed</ShortName>
             <Url type="text/html" template="ftp://x/{searchTerms}"/>
             <Url type="application/rss+xml" template="http://x/rss?q={searchTerms}"/>
           </OpenSearchDescription>"#,
    );
    assert_eq!(eng.name.as_deref(), Some("Mixed"));
    assert_eq!(ose::resolve(&eng, "x", None, &no_locale()), None);
    let req = ose::resolve(&eng, "x", Some("application/rss+xml"), &no_locale()).unwrap();
    assert_eq!(req.url, "http://x/rss?q=x");
}

#[test]
fn test_post_shaping() {
    let eng = engine(
        r#"<OpenSearchDescription>
             <Url type="text/html" method="POST" template="http://x/search">
               <Param name="q" value="{searchTerms}"/>
             </Url>
           </OpenSearchDescription>"#,
    );
    let req = ose::resolve(&eng, "hi", None, &no_locale()).unwrap();
    assert_eq!(req.url, "http://x/search");
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.body.as_deref(), Some("q=hi"));
    assert_eq!(req.content_type.as_deref(), Some("application/x-www-form-urlencoded"));
}

#[test]
fn test_get_separator_when_template_has_query() {
    let eng = engine(
        r#"<OpenSearchDescription>
             <Url type="text/html" template="http://x/s?format=xml">
               <Param name="q" value="{searchTerms}"/>
               <Param name="n" value="{count}"/>
             </Url>
           </OpenSearchDescription>"#,
    );
    let req = ose::resolve(&eng, "hi", None, &no_locale()).unwrap();
    assert_eq!(req.url, "http://x/s?format=xml&q=hi&n=20");
    assert_eq!(req.url.matches('?').count(), 1);
}

#[test]
fn test_unknown_result_type_is_none() {
    let eng = engine(
        r#"<OpenSearchDescription>
             <Url type="text/html" template="http://x/?q={searchTerms}"/>
           </OpenSearchDescription>"#,
    );
    assert_eq!(ose::resolve(&eng, "text", Some("application/unknown"), &no_locale()), None);
    assert_eq!(eng.query_request("text", Some("application/unknown"), ""), None);
}

#[test]
fn test_result_type_lookup_is_case_insensitive() {
    let eng = engine(
        r#"<OpenSearchDescription>
             <Url type="Application/RSS+XML" template="http://x/?q={searchTerms}"/>
           </OpenSearchDescription>"#,
    );
    assert!(ose::resolve(&eng, "x", Some("application/rss+xml"), &no_locale()).is_some());
}

#[test]
fn test_language_and_encodings() {
    let eng = engine(
        r#"<OpenSearchDescription>
             <InputEncoding>windows-1252</InputEncoding>
             <Url type="text/html" template="https://x/?q={searchTerms}&amp;hl={language}&amp;ie={inputEncoding?}&amp;oe={outputEncoding}"/>
           </OpenSearchDescription>"#,
    );
    let req = eng.query_request("ünï", None, "de-DE").unwrap();
    assert_eq!(req.url, "https://x/?q=%C3%BCn%C3%AF&hl=de-DE&ie=WINDOWS-1252&oe=UTF-8");

    let req = eng.query_request("x", None, "").unwrap();
    assert_eq!(req.url, "https://x/?q=x&hl=*&ie=WINDOWS-1252&oe=UTF-8");
}

#[test]
fn test_terms_are_encoded_once() {
    let eng = engine(
        r#"<OpenSearchDescription>
             <Url type="text/html" template="http://x/?q={searchTerms}">
               <Param name="again" value="{searchTerms}"/>
             </Url>
           </OpenSearchDescription>"#,
    );
    let req = eng.query_request("50% & {count}", None, "").unwrap();
    assert_eq!(
        req.url,
        "http://x/?q=50%25%20%26%20%7Bcount%7D&again=50%25%20%26%20%7Bcount%7D"
    );
}

#[test]
fn test_parsing_same_bytes_twice_resolves_identically() {
    let bytes = std::fs::read("tests/fixtures/wikipedia.xml").unwrap();
    let a = Engine::from_reader(bytes.as_slice()).unwrap();
    let b = Engine::from_reader(bytes.as_slice()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.query_request("rust", None, "en"), b.query_request("rust", None, "en"));
    assert_eq!(
        a.query_request("rust", None, "en").unwrap().url,
        "https://en.wikipedia.org/w/index.php?search=rust&fulltext=1"
    );
}
