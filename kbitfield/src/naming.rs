//! Identifier case conversion for generated items.

/// Acronyms that plain case conversion would split or lower-case wrongly.
const CAMEL_FIXUPS: &[(&str, &str)] = &[("Cnode", "CNode"), ("Vspace", "VSpace")];
const SNAKE_FIXUPS: &[(&str, &str)] = &[("c_node", "cnode"), ("v_space", "vspace")];

/// Converts `snake_case` to `UpperCamelCase`.
///
/// The first character and each character following an underscore are upper-cased; everything
/// else is kept as written, so `mdbNext` becomes `MdbNext`.
pub fn camelize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
                continue;
            }
        }
        out.push(c);
    }
    apply_fixups(out, CAMEL_FIXUPS)
}

/// Converts `camelCase` or `UpperCamelCase` to `snake_case`.
///
/// Runs of capitals stay together (`EPBadge` becomes `ep_badge`).
pub fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).map_or(false, |n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        match c {
            '-' => out.push('_'),
            c => out.push(c.to_ascii_lowercase()),
        }
    }
    apply_fixups(out, SNAKE_FIXUPS)
}

/// Removes `prefix` from the front of `name` when it is followed by a new word.
///
/// `capPtr` loses its `cap` prefix; `capacity` does not.
pub fn strip_prefix<'a>(name: &'a str, prefix: &str) -> &'a str {
    match name.strip_prefix(prefix) {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_uppercase() || c == '_') => {
            rest.trim_start_matches('_')
        }
        _ => name,
    }
}

fn apply_fixups(mut name: String, fixups: &[(&str, &str)]) -> String {
    for (from, to) in fixups {
        if name.contains(from) {
            name = name.replace(from, to);
        }
    }
    name
}
