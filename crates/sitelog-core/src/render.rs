//! Format string rendering.

use crate::tokens::TokenTable;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use sitelog_types::CallSite;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("valid placeholder pattern"));

/// Render `template` for one call.
///
/// Each `{name}` is looked up first in `per_call`, then in `tokens`.
/// Placeholders with no matching token are left as written.
pub fn render(
    template: &str,
    per_call: &[(&str, &str)],
    tokens: &TokenTable,
    site: &CallSite,
) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            if let Some((_, value)) = per_call.iter().find(|(key, _)| *key == name) {
                return (*value).to_string();
            }
            match tokens.get(name) {
                Some(token) => token.evaluate(site),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Token;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn site() -> CallSite {
        CallSite {
            file: "src/lib.rs".to_string(),
            line: 12,
            function: "main".to_string(),
        }
    }

    #[test]
    fn test_name_and_parameters() {
        let out = render(
            "{name}:{parameters}",
            &[("name", "svc"), ("parameters", "hello")],
            &TokenTable::with_builtins(),
            &site(),
        );
        assert_eq!(out, "svc:hello");
    }

    #[test]
    fn test_builtin_call_site_tokens() {
        let out = render("{filename}:{function}:{line}", &[], &TokenTable::with_builtins(), &site());
        assert_eq!(out, "src/lib.rs:main:12");
    }

    #[test]
    fn test_unknown_and_malformed_placeholders_stay() {
        let out = render("{nope} {} {a-b} {{x}", &[], &TokenTable::empty(), &site());
        assert_eq!(out, "{nope} {} {a-b} {{x}");
    }

    #[test]
    fn test_per_call_beats_table() {
        let mut tokens = TokenTable::empty();
        tokens.insert("name", "from-table");
        let out = render("{name}", &[("name", "per-call")], &tokens, &site());
        assert_eq!(out, "per-call");
    }

    #[test]
    fn test_function_token_invoked_per_occurrence() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut tokens = TokenTable::empty();
        tokens.insert(
            "seq",
            Token::thunk(move || counter.fetch_add(1, Ordering::SeqCst).to_string()),
        );

        let out = render("{seq}-{seq}-{seq}", &[], &tokens, &site());
        assert_eq!(out, "0-1-2");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    proptest! {
        #[test]
        fn prop_token_substituted_once_per_occurrence(
            name in "[a-z][a-z0-9_]{0,8}",
            value in "[^{}]{0,16}",
            count in 1usize..5,
            sep in "[ :|-]{1,3}",
        ) {
            let mut tokens = TokenTable::empty();
            tokens.insert(name.clone(), value.clone());

            let template = vec![format!("{{{}}}", name); count].join(sep.as_str());
            let expected = vec![value.clone(); count].join(sep.as_str());

            prop_assert_eq!(render(&template, &[], &tokens, &site()), expected);
        }
    }
}
