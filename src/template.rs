//! OpenSearch URL template substitution.
//!
//! A template is rewritten by a fixed sequence of passes. Every pass scans
//! the whole output of the previous one and replaces each placeholder it
//! recognizes:
//!
//! 1. `{searchTerms}` with the encoded search terms
//! 2. `{inputEncoding}` with the engine charset
//! 3. `{language}` with the locale, or `*`
//! 4. `{outputEncoding}` with `UTF-8`
//! 5. any remaining optional placeholder (`{name?}`, `{ns:name?}`) with nothing
//! 6. the required unsupported parameters with [`UNSUPPORTED_PARAMS`] defaults
//!
//! Pass 5 must come after 1-4 or it would blank placeholders that have a
//! real value. Anything else is copied through untouched.

use crate::context::SubstitutionContext;
use crate::parser::{Parser, Placeholder};

pub const LANGUAGE_DEFAULT: &str = "*";
pub const OUTPUT_ENCODING_DEFAULT: &str = "UTF-8";
pub const INPUT_ENCODING_DEFAULT: &str = "UTF-8";

/// Parameters we don't model (paging and result counts). They are filled
/// in only when the template requires them.
pub const UNSUPPORTED_PARAMS: [(&str, &str); 3] = [
    ("count", "20"),     // 20 results
    ("startIndex", "1"), // first result
    ("startPage", "1"),  // first page
];

/// Resolves every placeholder in `template` against `ctx`. Never fails.
pub fn substitute(template: &str, ctx: &SubstitutionContext) -> String {
    let language = if ctx.locale.is_empty() {
        LANGUAGE_DEFAULT
    } else {
        ctx.locale.as_str()
    };

    let mut value = rewrite(template, |p| {
        p.is_bare("searchTerms").then_some(ctx.search_terms.as_str())
    });
    value = rewrite(&value, |p| p.is_bare("inputEncoding").then_some(ctx.charset.as_str()));
    value = rewrite(&value, |p| p.is_bare("language").then_some(language));
    value = rewrite(&value, |p| p.is_bare("outputEncoding").then_some(OUTPUT_ENCODING_DEFAULT));

    value = rewrite(&value, |p| p.optional.then_some(""));

    for (name, default) in UNSUPPORTED_PARAMS {
        value = rewrite(&value, |p| p.is_bare(name).then_some(default));
    }
    value
}

/// One pass: copies `input`, swapping each placeholder for which `replace`
/// returns a value.
fn rewrite<'v, F>(input: &str, replace: F) -> String
where
    F: Fn(&Placeholder<'_>) -> Option<&'v str>,
{
    let mut out = String::with_capacity(input.len());
    let mut p = Parser::new(input);
    while !p.eof() {
        out.push_str(p.take_until('{'));
        if p.eof() {
            break;
        }
        match p.parse_placeholder() {
            Some(ph) => match replace(&ph) {
                Some(v) => out.push_str(v),
                None => push_placeholder(&mut out, &ph),
            },
            None => {
                // a stray brace; skip it so the scan can resync on the next one
                if let Some(c) = p.bump() {
                    out.push(c);
                }
            }
        }
    }
    out
}

fn push_placeholder(out: &mut String, ph: &Placeholder<'_>) {
    out.push('{');
    if let Some(prefix) = ph.prefix {
        out.push_str(prefix);
        out.push(':');
    }
    out.push_str(ph.name);
    if ph.optional {
        out.push('?');
    }
    out.push('}');
}
