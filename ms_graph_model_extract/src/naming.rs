/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Helper functions for converting strings to properly formatted names.

use crate::oxidize::is_rust_keyword;

/// Given a potentially fully qualified OpenAPI name ("microsoft.graph.user"),
/// produce the simple name for use here ("user").
pub fn simple_name(full: &str) -> &str {
    let out = full.rsplit('.').next().unwrap_or(full);
    assert!(!out.is_empty(), "attempted to generate empty name: {full}");
    assert!(
        !is_rust_keyword(out),
        "attempted to use a rust keyword as a name: {full}"
    );
    out
}

/// Sanitize a string into a PascalCase Rust identifier.
pub fn pascalize(s: &str) -> String {
    let mut out = String::new();
    let mut upper_next = true;
    for ch in s.chars() {
        if ch.is_alphanumeric() {
            if upper_next {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }
    assert!(
        !out.is_empty(),
        "attempted to pascalize into the empty string: {s}"
    );
    assert!(
        !is_rust_keyword(&out),
        "attempted to pascalize into a rust keyword: {s}"
    );
    out
}

/// Sanitize a string into a snake_case Rust identifier.
///
/// A run of capitals is one word ("macOSCompliancePolicy" becomes
/// "mac_os_compliance_policy"), and a digit ends a word.
pub fn snakeify(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::new();
    let mut prev_is_underscore = false;
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_alphanumeric() {
            if ch.is_ascii_uppercase() {
                let prev = i.checked_sub(1).map(|j| chars[j]);
                let next = chars.get(i + 1);
                let starts_word = match prev {
                    Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                    // The last capital of an acronym starts the next word.
                    Some(p) if p.is_ascii_uppercase() => {
                        next.is_some_and(char::is_ascii_lowercase)
                    }
                    _ => false,
                };
                if starts_word && !out.is_empty() && !prev_is_underscore {
                    out.push('_');
                }
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
            prev_is_underscore = false;
        } else if !prev_is_underscore && !out.is_empty() {
            out.push('_');
            prev_is_underscore = true;
        }
    }
    if out.ends_with('_') {
        out.pop();
    }
    assert!(
        !out.is_empty(),
        "attempted to snakify into the empty string: {s}"
    );
    assert!(
        !is_rust_keyword(&out),
        "attempted to snakify into a rust keyword: {s}"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_names() {
        assert_eq!(simple_name("microsoft.graph.user"), "user");
        assert_eq!(simple_name("microsoft.graph.security.alert"), "alert");
        assert_eq!(
            simple_name("BaseCollectionPaginationCountResponse"),
            "BaseCollectionPaginationCountResponse"
        );
    }

    #[test]
    fn pascal_case() {
        assert_eq!(pascalize("domainDnsMxRecord"), "DomainDnsMxRecord");
        assert_eq!(pascalize("macOSCompliancePolicy"), "MacOSCompliancePolicy");
        assert_eq!(pascalize("windows10CompliancePolicy"), "Windows10CompliancePolicy");
        assert_eq!(pascalize("unknownFutureValue"), "UnknownFutureValue");
    }

    #[test]
    fn snake_case() {
        assert_eq!(snakeify("domainDnsMxRecord"), "domain_dns_mx_record");
        assert_eq!(
            snakeify("BaseCollectionPaginationCountResponse"),
            "base_collection_pagination_count_response"
        );
        assert_eq!(snakeify("windows10CompliancePolicy"), "windows10_compliance_policy");
        assert_eq!(snakeify("@odata.nextLink"), "odata_next_link");
        assert_eq!(snakeify("id"), "id");
    }

    #[test]
    fn snake_case_acronyms() {
        assert_eq!(snakeify("macOSCompliancePolicy"), "mac_os_compliance_policy");
        assert_eq!(snakeify("notificationMessageCCList"), "notification_message_cc_list");
        assert_eq!(snakeify("osMaximumVersion"), "os_maximum_version");
        assert_eq!(snakeify("skuID"), "sku_id");
    }

    #[test]
    #[should_panic(expected = "rust keyword")]
    fn keywords_are_rejected() {
        snakeify("type");
    }
}
