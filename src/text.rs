//! Small string helpers used around the identifier checks.

/// Returns true if `s` is empty or only whitespace.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Returns true if any value is missing or blank.
pub fn any_blank<'a, I>(values: I) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values.into_iter().any(|v| v.is_none_or(is_blank))
}

/// Returns true if any slice is empty.
pub fn any_empty<'a, T: 'a, I>(slices: I) -> bool
where
    I: IntoIterator<Item = &'a [T]>,
{
    slices.into_iter().any(<[T]>::is_empty)
}

/// Compares two strings ignoring surrounding whitespace.
#[must_use]
pub fn trimmed_eq(a: &str, b: &str) -> bool {
    a.trim() == b.trim()
}

/// Returns true if any candidate equals `s`, ignoring surrounding whitespace.
pub fn any_trimmed_eq<'a, I>(s: &str, candidates: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let s = s.trim();
    candidates.into_iter().any(|c| c.trim() == s)
}

fn is_local_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '_' || c == '-'
}

fn is_domain_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '-'
}

/// Non-empty dot-separated segments, each made of chars accepted by `allowed`.
fn is_dotted(s: &str, allowed: fn(char) -> bool) -> bool {
    s.split('.').all(|segment| !segment.is_empty() && segment.chars().all(allowed))
}

/// Returns true if `email` looks like an email address.
///
/// The local part is at most 64 characters of letters, digits, `_` and `-` in
/// dot-separated runs. The domain must not start with `-`, must have at least
/// two characters before the top-level label, and ends in a top-level label of
/// two or more letters. This is a shape check; it does not resolve anything.
#[must_use]
pub fn is_email(email: &str) -> bool {
    if is_blank(email) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.chars().count() > 64 || !is_dotted(local, is_local_char) {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if tld.chars().count() < 2 || !tld.chars().all(char::is_alphabetic) {
        return false;
    }

    // First host char is anything but '-', then a label of at least one char.
    let mut chars = host.chars();
    if chars.next().is_none_or(|first| first == '-') {
        return false;
    }
    let rest = chars.as_str();
    if rest.is_empty() {
        return false;
    }
    let (first_label, more) = rest.split_once('.').unwrap_or((rest, ""));
    if first_label.is_empty() || !first_label.chars().all(is_domain_char) {
        return false;
    }
    more.is_empty() || is_dotted(more, is_domain_char)
}

/// Replaces every literal occurrence of each key with its value.
///
/// Keys are matched as plain text, so `$name` or `[NAME]` work as placeholders.
/// Replacements run in iteration order.
pub fn replace_placeholders<'a, I>(template: &str, replacements: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    replacements
        .into_iter()
        .filter(|(key, _)| !key.is_empty())
        .fold(template.to_string(), |acc, (key, value)| acc.replace(key, value))
}
