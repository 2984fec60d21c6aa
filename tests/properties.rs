use opensearch_engines as ose;
use ose::context::SubstitutionContext;
use ose::template::substitute;
use ose::Engine;
use proptest::prelude::*;

fn ctx() -> SubstitutionContext {
    SubstitutionContext::new("terms", "UTF-8", "en")
}

proptest! {
    // Text without braces passes through unchanged.
    #[test]
    fn brace_free_text_is_untouched(s in "[^{}]*") {
        prop_assert_eq!(substitute(&s, &ctx()), s);
    }

    // Optional placeholders never survive, whatever their name or prefix.
    #[test]
    fn optional_placeholders_always_blanked(
        prefix in proptest::option::of("[a-z]{1,5}"),
        name in "[A-Za-z_][A-Za-z0-9_]{0,10}",
        before in "[a-z=&/]{0,8}",
        after in "[a-z=&/]{0,8}",
    ) {
        let token = match &prefix {
            Some(p) => format!("{{{p}:{name}?}}"),
            None => format!("{{{name}?}}"),
        };
        let out = substitute(&format!("{before}{token}{after}"), &ctx());
        prop_assert!(!out.contains(&token));
        prop_assert!(out.starts_with(&before));
        prop_assert!(out.ends_with(&after));
    }

    // Same descriptor bytes always produce the same request.
    #[test]
    fn parsing_is_idempotent(
        path in "[a-z]{1,8}",
        params in proptest::collection::vec(("[a-z]{1,5}", "[a-z]{0,4}"), 0..4),
        post in any::<bool>(),
        terms in "\\PC{0,12}",
    ) {
        let method = if post { "POST" } else { "GET" };
        let params_xml: String = params
            .iter()
            .map(|(n, v)| format!(r#"<Param name="{n}" value="{v}{{searchTerms}}"/>"#))
            .collect();
        let doc = format!(
            r#"<OpenSearchDescription><ShortName>P</ShortName>
                 <Url type="text/html" method="{method}" template="https://x/{path}?q={{searchTerms}}&amp;n={{count?}}">{params_xml}</Url>
               </OpenSearchDescription>"#
        );
        let a = Engine::from_xml_str(&doc).unwrap();
        let b = Engine::from_xml_str(&doc).unwrap();
        let ra = a.query_request(&terms, None, "en").unwrap();
        let rb = b.query_request(&terms, None, "en").unwrap();
        prop_assert_eq!(ra.clone(), rb);
        let prefix = format!("https://x/{path}?q=");
        prop_assert!(ra.url.starts_with(&prefix));
    }
}
