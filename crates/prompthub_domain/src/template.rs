use std::collections::BTreeSet;

use crate::Variables;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replaces every `{{key}}` whose key is bound in `variables` and records the
/// key in `used`. Unbound placeholders are copied through untouched.
///
/// This is a single left-to-right pass: substituted values are never scanned
/// again, so a value that itself looks like a placeholder stays literal.
pub(crate) fn substitute<'a>(
    template: &str,
    variables: &'a Variables,
    used: &mut BTreeSet<&'a str>,
) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match placeholder(candidate, variables) {
            Some((key, value, len)) => {
                output.push_str(value);
                used.insert(key);
                rest = &candidate[len..];
            }
            None => {
                // Step over a single brace so `{{{key}}}` still matches at the
                // next offset.
                output.push('{');
                rest = &candidate[1..];
            }
        }
    }

    output.push_str(rest);
    output
}

/// Returns the bound key, its value and the placeholder length when
/// `candidate` starts with a placeholder for a bound key.
///
/// Every `}}` after the opening braces is tried, nearest first, so a bound key
/// may itself contain `}}`.
fn placeholder<'a>(candidate: &str, variables: &'a Variables) -> Option<(&'a str, &'a str, usize)> {
    let inner = &candidate[OPEN.len()..];
    inner
        .char_indices()
        .filter(|(end, _)| inner[*end..].starts_with(CLOSE))
        .find_map(|(end, _)| {
            let (key, value) = variables.get_key_value(&inner[..end])?;
            Some((key, value, OPEN.len() + end + CLOSE.len()))
        })
}
