//! Identifier formatting for generated Rust code.
//!
//! Remote names are upper-case and may contain characters Rust identifiers
//! cannot. Every function here is pure: the same remote name always yields
//! the same identifier, independent of locale or process state.
//!
//! # Examples
//!
//! ```
//! use pkgmap_codegen::common::naming::{pascal_case, snake_case};
//!
//! assert_eq!(snake_case("P_ORDER_ID"), "p_order_id");
//! assert_eq!(snake_case("TYPE"), "type_");
//! assert_eq!(pascal_case("ORDERS_PKG"), "OrdersPkg");
//! ```

/// Field name used for a function result merged into an output holder.
///
/// Remote identifiers must start with a letter, so no argument can map to it.
pub const RETURN_FIELD: &str = "_return";

/// Suffix appended to asynchronous callables when both variants are emitted.
pub const ASYNC_SUFFIX: &str = "_async";

/// Locals declared by generated bodies.
pub const RESERVED_LOCALS: &[&str] = &["conn", "call", "out", "value", "result"];

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Returns `true` if `ident` is a Rust keyword or a reserved generated local.
#[must_use]
pub fn is_reserved(ident: &str) -> bool {
    KEYWORDS.contains(&ident) || RESERVED_LOCALS.contains(&ident)
}

/// Converts a remote name to a snake_case identifier.
///
/// # Examples
///
/// ```
/// use pkgmap_codegen::common::naming::snake_case;
///
/// assert_eq!(snake_case("GET_INFO"), "get_info");
/// assert_eq!(snake_case("P$AMOUNT#2"), "p_amount_2");
/// assert_eq!(snake_case("VALUE"), "value_");
/// ```
#[must_use]
pub fn snake_case(remote: &str) -> String {
    let mut ident: String = remote
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if ident.chars().all(|c| c == '_') {
        ident.push_str("arg");
    }
    escape(ident)
}

/// Converts a remote name to a PascalCase type name.
///
/// # Examples
///
/// ```
/// use pkgmap_codegen::common::naming::pascal_case;
///
/// assert_eq!(pascal_case("GET_INFO"), "GetInfo");
/// assert_eq!(pascal_case("pkg$v2"), "PkgV2");
/// ```
#[must_use]
pub fn pascal_case(remote: &str) -> String {
    let mut ident = String::with_capacity(remote.len());
    for word in remote
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            ident.push(first.to_ascii_uppercase());
            ident.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, 'T');
    }
    escape(ident)
}

fn escape(mut ident: String) -> String {
    if is_reserved(&ident) {
        ident.push('_');
    }
    ident
}

/// Builds the name of a callable.
///
/// The overload id is appended only when the routine name is overloaded in
/// the catalog; the async suffix only when both variants are emitted.
///
/// # Examples
///
/// ```
/// use pkgmap_codegen::common::naming::callable_name;
///
/// assert_eq!(callable_name("ADD_ITEM", Some("1"), false, false), "add_item");
/// assert_eq!(callable_name("ADD_ITEM", Some("2"), true, false), "add_item_2");
/// assert_eq!(callable_name("ADD_ITEM", None, false, true), "add_item_async");
/// ```
#[must_use]
pub fn callable_name(
    routine: &str,
    overload: Option<&str>,
    overloaded: bool,
    async_suffix: bool,
) -> String {
    let mut name = snake_case(routine);
    if name.ends_with('_') && is_reserved(name.trim_end_matches('_')) {
        name.pop();
    }
    if overloaded && let Some(id) = overload {
        name.push('_');
        name.push_str(snake_case(id).trim_start_matches('_'));
    }
    if async_suffix {
        name.push_str(ASYNC_SUFFIX);
    }
    escape(name)
}

/// Builds the name of an output holder type.
///
/// # Examples
///
/// ```
/// use pkgmap_codegen::common::naming::holder_name;
///
/// assert_eq!(holder_name("GET_INFO", Some("1"), false, false), "GetInfoOut");
/// assert_eq!(holder_name("ADD_ITEM", Some("1"), true, false), "AddItem1Out");
/// assert_eq!(holder_name("GET_INFO", None, false, true), "GetInfoAsyncOut");
/// ```
#[must_use]
pub fn holder_name(
    routine: &str,
    overload: Option<&str>,
    overloaded: bool,
    async_marker: bool,
) -> String {
    let mut name = pascal_case(routine);
    if name.ends_with('_') {
        name.pop();
    }
    if overloaded && let Some(id) = overload {
        name.extend(id.chars().filter(char::is_ascii_alphanumeric));
    }
    if async_marker {
        name.push_str("Async");
    }
    name.push_str("Out");
    name
}

/// Returns the relative path of the file generated for a package.
///
/// # Examples
///
/// ```
/// use pkgmap_codegen::common::naming::module_file_path;
///
/// assert_eq!(
///     module_file_path(["billing", "orders"], "ORDERS_PKG"),
///     "billing/orders/orders_pkg.rs"
/// );
/// ```
#[must_use]
pub fn module_file_path<'a>(segments: impl IntoIterator<Item = &'a str>, package: &str) -> String {
    let mut parts: Vec<String> = segments.into_iter().map(str::to_string).collect();
    parts.push(format!("{}.rs", snake_case(package)));
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_sanitizes() {
        assert_eq!(snake_case("P_ID"), "p_id");
        assert_eq!(snake_case("  P ID "), "p_id");
        assert_eq!(snake_case("1ST"), "_1st");
        assert_eq!(snake_case("$"), "_arg");
    }

    #[test]
    fn test_keywords_and_locals_escaped() {
        assert_eq!(snake_case("MATCH"), "match_");
        assert_eq!(snake_case("CONN"), "conn_");
        assert_eq!(snake_case("RESULT"), "result_");
        assert_eq!(snake_case("OUT"), "out_");
        assert_eq!(pascal_case("SELF"), "Self_");
    }

    #[test]
    fn test_pascal_case_words() {
        assert_eq!(pascal_case("ORDERS_PKG"), "OrdersPkg");
        assert_eq!(pascal_case("A__B"), "AB");
        assert_eq!(pascal_case("42"), "T42");
        assert_eq!(pascal_case(""), "T");
    }

    #[test]
    fn test_callable_name_suffixes() {
        assert_eq!(callable_name("GET_INFO", Some("1"), true, true), "get_info_1_async");
        // a keyword routine name only needs escaping when nothing is appended
        assert_eq!(callable_name("DELETE", None, false, false), "delete");
        assert_eq!(callable_name("TYPE", None, false, false), "type_");
        assert_eq!(callable_name("TYPE", Some("2"), true, false), "type_2");
    }

    #[test]
    fn test_holder_name_variants() {
        assert_eq!(holder_name("GET_INFO", Some("3"), true, true), "GetInfo3AsyncOut");
        assert_eq!(holder_name("SELF", None, false, false), "SelfOut");
    }

    #[test]
    fn test_module_file_path() {
        assert_eq!(module_file_path(["db"], "PKG$X"), "db/pkg_x.rs");
    }
}
