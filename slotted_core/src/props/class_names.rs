// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Joins class-list fragments with single spaces.
///
/// Absent and empty fragments are skipped; tokens are not deduplicated.
///
/// ```
/// use slotted_core::props::class_names;
///
/// assert_eq!(class_names([Some("btn"), None, Some(""), Some("primary")]), "btn primary");
/// ```
pub fn class_names<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out = String::new();
    for fragment in fragments.into_iter().flatten() {
        if fragment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(fragment);
    }
    out
}
