/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Modules for turning our representation of the Graph API into Rust code
//! (specifically, a [`proc_macro2::TokenStream`]).

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use std::collections::{BTreeSet, HashMap};

use crate::extract::schema::{Extracted, ObjectSchema};
use crate::naming::{self, pascalize};

pub mod enums;
pub mod hierarchy;
pub mod types;

/// What the generator knows about every extracted type, for resolving
/// references and inheritance across files.
pub struct Registry<'a> {
    objects: HashMap<&'a str, &'a ObjectSchema>,
    enums: BTreeSet<&'a str>,
    /// Direct subtypes of each type, in generation order.
    children: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> Registry<'a> {
    pub fn new(extracted: &'a [Extracted]) -> Self {
        let mut objects = HashMap::new();
        let mut enums = BTreeSet::new();
        let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
        for item in extracted {
            match item {
                Extracted::Object(object) => {
                    objects.insert(object.name.as_str(), object);
                    if let Some(base) = &object.base {
                        children
                            .entry(base.as_str())
                            .or_default()
                            .push(object.name.as_str());
                    }
                }
                Extracted::Enum(graph_enum) => {
                    enums.insert(graph_enum.name.as_str());
                }
            }
        }
        Self {
            objects,
            enums,
            children,
        }
    }

    pub fn is_enum(&self, name: &str) -> bool {
        self.enums.contains(name)
    }

    /// Whether the type's discriminator routes to any generated subtype.
    pub fn is_polymorphic(&self, name: &str) -> bool {
        self.objects
            .get(name)
            .is_some_and(|object| !object.subtypes.is_empty())
    }

    /// Whether the type sits below a polymorphic type, and so has to identify
    /// itself with its own discriminator value.
    pub fn is_tagged(&self, name: &str) -> bool {
        self.ancestors(name)
            .into_iter()
            .any(|ancestor| self.is_polymorphic(ancestor))
    }

    /// The chain of base types above the named type, nearest first.
    pub fn ancestors(&self, name: &str) -> Vec<&'a str> {
        let mut out = vec![];
        let mut current = self.objects.get(name).copied().and_then(|o| o.base.as_deref());
        while let Some(base) = current {
            out.push(base);
            current = self.objects.get(base).copied().and_then(|o| o.base.as_deref());
        }
        out
    }

    /// Every type below the named one, depth first in generation order.
    pub fn descendants(&self, name: &str) -> Vec<&'a str> {
        let mut out = vec![];
        for &child in self.children.get(name).into_iter().flatten() {
            out.push(child);
            out.extend(self.descendants(child));
        }
        out
    }

    /// The Rust type a property of the named custom type is stored as.
    pub fn storage_ident(&self, name: &str) -> Ident {
        if self.is_polymorphic(name) {
            format_ident!("Any{}", pascalize(name))
        } else {
            format_ident!("{}", pascalize(name))
        }
    }
}

/// Collect the `use` items a generated file needs, given the other generated
/// modules it refers to and the external paths it uses.
fn imports(modules: BTreeSet<String>, external: BTreeSet<&str>) -> TokenStream {
    let modules = modules.iter().map(|s| format_ident!("{s}"));
    let external = external.iter().map(|path| {
        path.parse::<TokenStream>()
            .expect("import paths should be valid tokens")
    });

    quote! {
        use crate::Error;
        use crate::serialization::*;
        #( use crate::types::#modules::*; )*
        use serde_json::{Map, Value};
        #( use #external; )*
    }
}

/// Does some (very) basic clean up of descriptions to make them better
/// formatted as doc comments.
// This is dumb and buggy, and will eventually need proper regex, but is good
// enough for now to prevent major doc bugs/warnings.
fn markup_doc_comment(mut doc_comment: String) -> String {
    fn escape(s: &str) -> String {
        format!("`{s}`")
    }

    fn escape_in_place(s: &mut String, start_idx: usize, end_idx: usize) {
        s.reserve(2);
        // Make sure the end ` gets inserted first, so the index doesn't change
        s.insert(end_idx, '`');
        s.insert(start_idx, '`');
    }

    /// Escape members of a string of the form "Foo, Bar, and Baz" into
    /// "`Foo`, `Bar`, and `Baz`."
    fn escape_list(list: &str) -> String {
        let list = list.split(", ");
        let list = list
            .map(|item| {
                if item.starts_with("and ") {
                    let word = item
                        .split_ascii_whitespace()
                        .nth(1)
                        .expect("and is followed by a word");
                    let replacement = escape(word);
                    item.replace(word, &replacement)
                } else {
                    escape(item.trim_ascii())
                }
            })
            .collect::<Vec<_>>();
        list.join(", ")
    }

    // find all instances of " [Ff]or example: ", which are always followed by
    // something that can or should be escaped as code.
    let example_str = "for example: ";
    let lowered_comment = doc_comment.to_ascii_lowercase();
    let mut search_idx = 0;
    while let Some(match_idx) = lowered_comment[search_idx..].find(example_str) {
        let example_start = match_idx + example_str.len();

        // Examples always seem to have *some* text after them, so this match
        // always works in practice, but this is fragile.
        if let Some(example_len) = doc_comment[example_start..].find(". ") {
            let example_end = example_start + example_len;
            escape_in_place(&mut doc_comment, example_start, example_end);
            search_idx = example_end;
        } else {
            search_idx = example_start;
        }
    }

    // match against known lists of escaped words and escape them
    let list_wrappers = [("$filter (", ")"), ("Allowed values: ", ". ")];
    for (left, right) in list_wrappers {
        if let Some(match_idx) = doc_comment.find(left) {
            let start_idx = match_idx + left.len();
            if let Some(match_len) = doc_comment[start_idx..].find(right) {
                let before_list = &doc_comment[start_idx..start_idx + match_len];
                let after_list = escape_list(before_list);
                doc_comment = doc_comment.replace(before_list, &after_list);
            }
        }
    }

    // escape all keywords known to always benefit from escaping
    for word in [
        "$expand", "$filter", "$orderby", "$OrderBy", "$search", "$select", "$top",
    ] {
        let replacement = escape(word);
        doc_comment = doc_comment.replace(word, &replacement);
    }

    // if the doc comment doesn't have a summary line, turn the first sentence
    // into one
    if !doc_comment.contains("\n\n")
        && let Some(idx) = doc_comment.find(". ")
    {
        doc_comment.insert_str(idx + 1, "\n\n");
    }

    doc_comment
}

/// Our representation of a Rust type.
#[derive(Clone, Debug)]
pub enum RustType {
    Bool,
    I32,
    I64,
    F64,
    String,
    DateTime,
    Date,
    Uuid,
    Custom(CustomRustType),
}

impl RustType {
    /// The suffix of the reader and writer methods for scalar values, e.g.
    /// `get_date_time_value`.
    fn scalar_method(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F64 => "f64",
            Self::String => "string",
            Self::DateTime => "date_time",
            Self::Date => "date",
            Self::Uuid => "uuid",
            Self::Custom(name) => panic!("no scalar methods for {}", name.original_name()),
        }
    }

    /// The external path to import for this type, if any.
    fn import(&self) -> Option<&'static str> {
        match self {
            Self::DateTime => Some("time::OffsetDateTime"),
            Self::Date => Some("time::Date"),
            Self::Uuid => Some("uuid::Uuid"),
            _ => None,
        }
    }

    fn base_token(&self, registry: &Registry) -> TokenStream {
        match self {
            Self::Bool => quote!(bool),
            Self::I32 => quote!(i32),
            Self::I64 => quote!(i64),
            Self::F64 => quote!(f64),
            Self::String => quote!(String),
            Self::DateTime => quote!(OffsetDateTime),
            Self::Date => quote!(Date),
            Self::Uuid => quote!(Uuid),
            Self::Custom(name) => {
                let ident = registry.storage_ident(name.original_name());
                quote!(#ident)
            }
        }
    }
}

/// A reference to another generated type that doesn't fit in any of the
/// [`RustType`] variants. Whether it names an object or an enum is decided by
/// the [`Registry`].
#[derive(Debug, Clone)]
pub struct CustomRustType {
    original_name: String,
}

impl From<&str> for CustomRustType {
    fn from(value: &str) -> Self {
        CustomRustType {
            original_name: value.to_string(),
        }
    }
}

impl CustomRustType {
    /// Returns the type's name in snake_case.
    pub fn as_snake_case(&self) -> String {
        naming::snakeify(&self.original_name)
    }

    /// Returns the type's name as it was written in the OpenAPI metadata.
    pub fn original_name(&self) -> &String {
        &self.original_name
    }
}

/// Returns true if the given string is a reserved Rust keyword.
pub fn is_rust_keyword(s: &str) -> bool {
    // https://doc.rust-lang.org/reference/keywords.html
    let keywords = [
        // strong
        "as",
        "break",
        "const",
        "continue",
        "crate",
        "else",
        "enum",
        "extern",
        "false",
        "fn",
        "for",
        "if",
        "impl",
        "in",
        "let",
        "loop",
        "match",
        "mod",
        "move",
        "mut",
        "pub",
        "ref",
        "return",
        "self",
        "Self",
        "static",
        "struct",
        "super",
        "trait",
        "true",
        "type",
        "unsafe",
        "use",
        "where",
        "while",
        // strong 2018
        "async",
        "await",
        "dyn",
        // reserved
        "abstract",
        "become",
        "box",
        "do",
        "final",
        "macro",
        "override",
        "priv",
        "try",
        "typeof",
        "unsized",
        "virtual",
        "yield",
        // weak
        "'static",
        "macro_rules",
        "raw",
        "safe",
        "union",
    ];

    keywords.contains(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that lists of escaped values don't escape the word "and" at the end
    /// of the list.
    #[test]
    fn markup_list_with_and() {
        let input = r"The name of the company that the user is associated with. This property can be useful for describing the company that a guest comes from. The maximum length is 64 characters.Returned only on $select. Supports $filter (eq, ne, not, ge, le, in, startsWith, and eq on null values).".to_string();
        let expected = "The name of the company that the user is associated with.\n\n This property can be useful for describing the company that a guest comes from. The maximum length is 64 characters.Returned only on `$select`. Supports `$filter` (`eq`, `ne`, `not`, `ge`, `le`, `in`, `startsWith`, and `eq` on null values).";

        assert_eq!(markup_doc_comment(input), expected);
    }

    /// Test that "for example:" followed by an example escapes the example.
    #[test]
    fn markup_doc_with_examples() {
        let input = r"A list of other email addresses for the user; for example: ['bob@contoso.com', 'Robert@fabrikam.com']. Can store up to 250 values, each with a limit of 250 characters. NOTE: This property can't contain accent characters. Returned only on $select. Supports $filter (eq, not, ge, le, in, startsWith, endsWith, /$count eq 0, /$count ne 0).".to_string();
        let expected = "A list of other email addresses for the user; for example: `['bob@contoso.com', 'Robert@fabrikam.com']`.\n\n Can store up to 250 values, each with a limit of 250 characters. NOTE: This property can't contain accent characters. Returned only on `$select`. Supports `$filter` (`eq`, `not`, `ge`, `le`, `in`, `startsWith`, `endsWith`, `/$count eq 0`, `/$count ne 0`).";

        assert_eq!(markup_doc_comment(input), expected);
    }
    #[test]
    fn registry_resolves_hierarchies() {
        use crate::extract::schema::EnumSchema;

        fn object(name: &str, base: Option<&str>, subtypes: &[&str]) -> Extracted {
            Extracted::Object(ObjectSchema {
                name: name.to_string(),
                description: None,
                base: base.map(str::to_string),
                properties: vec![],
                subtypes: subtypes.iter().map(|s| s.to_string()).collect(),
            })
        }

        let extracted = vec![
            object("entity", None, &["groupAssignmentTarget", "target"]),
            object("target", Some("entity"), &["groupAssignmentTarget"]),
            object("groupAssignmentTarget", Some("target"), &[]),
            object("otherTarget", Some("target"), &[]),
            object("page", None, &[]),
            object("folderPage", Some("page"), &[]),
            Extracted::Enum(EnumSchema {
                name: "bodyType".to_string(),
                description: None,
                members: vec!["text".to_string()],
            }),
        ];
        let registry = Registry::new(&extracted);

        assert!(registry.is_enum("bodyType"));
        assert!(!registry.is_enum("entity"));
        assert!(registry.is_polymorphic("entity"));
        assert!(!registry.is_polymorphic("page"));

        assert!(!registry.is_tagged("entity"));
        assert!(registry.is_tagged("groupAssignmentTarget"));
        assert!(!registry.is_tagged("folderPage"));

        assert_eq!(
            registry.ancestors("groupAssignmentTarget"),
            ["target", "entity"]
        );
        assert_eq!(
            registry.descendants("entity"),
            ["target", "groupAssignmentTarget", "otherTarget"]
        );
        assert_eq!(registry.storage_ident("target").to_string(), "AnyTarget");
        assert_eq!(registry.storage_ident("page").to_string(), "Page");
    }
}
