// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Region metadata records and the indices built from them.
//!
//! A catalog is an ordered list of [`RegionMetadata`]. [`MetadataIndex::build`]
//! turns it, once, into a region → metadata map and a calling code → regions
//! map. Nothing here changes after the build.

pub mod catalog;
mod index;
mod types;

use std::borrow::Cow;

pub use index::{DuplicatePolicy, IndexOptions, MetadataIndex};
pub use types::{NumberDesc, RegionMetadata};

/// Upper-cases a region code, borrowing when it is already upper case.
pub(crate) fn normalize_region_code(region_code: &str) -> Cow<'_, str> {
    if region_code.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(region_code.to_ascii_uppercase())
    } else {
        Cow::Borrowed(region_code)
    }
}

/// Region ids are never numbers; numeric keys belong to non-geographical
/// entities.
pub(crate) fn is_integer_like(region_code: &str) -> bool {
    !region_code.is_empty() && region_code.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{is_integer_like, normalize_region_code};

    #[test]
    fn normalize_borrows_upper_case() {
        assert!(matches!(normalize_region_code("US"), Cow::Borrowed("US")));
        assert_eq!(normalize_region_code("gb"), "GB");
        assert_eq!(normalize_region_code("Gb"), "GB");
    }

    #[test]
    fn numeric_region_codes() {
        assert!(is_integer_like("1"));
        assert!(is_integer_like("800"));
        assert!(!is_integer_like("US"));
        assert!(!is_integer_like(""));
        assert!(!is_integer_like("1A"));
        // Wider than any calling code, still never a region.
        assert!(is_integer_like("99999999999"));
    }
}
