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

use std::collections::HashMap;

use crate::phonenumberutil::PhoneNumberType;

/// Pattern and length data describing one kind of number in a region.
///
/// An empty `possible_lengths` means the lengths are the same as those of
/// the region's general description. A single `-1` means there are no
/// numbers of this kind at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberDesc {
    pub national_number_pattern: Option<String>,
    pub possible_lengths: Vec<i32>,
    pub possible_lengths_local_only: Vec<i32>,
    pub example_number: Option<String>,
}

impl NumberDesc {
    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        Self {
            national_number_pattern: Some(pattern.into()),
            ..Default::default()
        }
    }

    /// Description of a number kind that does not exist in the region.
    pub fn not_available() -> Self {
        Self {
            possible_lengths: vec![-1],
            ..Default::default()
        }
    }

    pub fn with_possible_lengths(mut self, lengths: impl IntoIterator<Item = i32>) -> Self {
        self.possible_lengths = lengths.into_iter().collect();
        self
    }

    pub fn with_local_only_lengths(mut self, lengths: impl IntoIterator<Item = i32>) -> Self {
        self.possible_lengths_local_only = lengths.into_iter().collect();
        self
    }

    pub fn with_example_number(mut self, example: impl Into<String>) -> Self {
        self.example_number = Some(example.into());
        self
    }

    /// Pattern or an empty string when none is set.
    pub fn national_number_pattern(&self) -> &str {
        self.national_number_pattern.as_deref().unwrap_or_default()
    }

    pub fn has_national_number_pattern(&self) -> bool {
        self.national_number_pattern.is_some()
    }

    pub fn has_example_number(&self) -> bool {
        self.example_number.is_some()
    }
}

/// Metadata of one region, or of one non-geographical entity keyed by its
/// calling code (e.g. "800").
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionMetadata {
    pub id: String,
    pub country_code: i32,
    pub national_prefix: Option<String>,
    /// Prefix pattern that tells this region apart from the others sharing
    /// its calling code.
    pub leading_digits: Option<String>,
    pub main_country_for_code: bool,
    pub same_mobile_and_fixed_line_pattern: bool,
    pub mobile_number_portable_region: bool,
    pub general_desc: NumberDesc,
    pub no_international_dialling: NumberDesc,
    /// Descriptions per concrete number type. `FixedLineOrMobile` and
    /// `Unknown` are never keys here.
    pub type_descriptors: HashMap<PhoneNumberType, NumberDesc>,
}

impl RegionMetadata {
    pub fn new(id: impl Into<String>, country_code: i32) -> Self {
        Self {
            id: id.into(),
            country_code,
            ..Default::default()
        }
    }

    pub fn with_national_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.national_prefix = Some(prefix.into());
        self
    }

    pub fn with_leading_digits(mut self, pattern: impl Into<String>) -> Self {
        self.leading_digits = Some(pattern.into());
        self
    }

    pub fn with_main_country_for_code(mut self, main_country_for_code: bool) -> Self {
        self.main_country_for_code = main_country_for_code;
        self
    }

    pub fn with_same_mobile_and_fixed_line_pattern(mut self, same: bool) -> Self {
        self.same_mobile_and_fixed_line_pattern = same;
        self
    }

    pub fn with_mobile_number_portable_region(mut self, portable: bool) -> Self {
        self.mobile_number_portable_region = portable;
        self
    }

    pub fn with_general_desc(mut self, desc: NumberDesc) -> Self {
        self.general_desc = desc;
        self
    }

    pub fn with_no_international_dialling(mut self, desc: NumberDesc) -> Self {
        self.no_international_dialling = desc;
        self
    }

    /// Sets the description for `number_type`. `Unknown` stands for the
    /// general description; `FixedLineOrMobile` is derived and is ignored.
    pub fn with_type_desc(mut self, number_type: PhoneNumberType, desc: NumberDesc) -> Self {
        match number_type {
            PhoneNumberType::Unknown => self.general_desc = desc,
            PhoneNumberType::FixedLineOrMobile => {}
            _ => {
                self.type_descriptors.insert(number_type, desc);
            }
        }
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    /// National prefix, `None` when absent or empty.
    pub fn national_prefix(&self) -> Option<&str> {
        self.national_prefix.as_deref().filter(|prefix| !prefix.is_empty())
    }

    /// Leading digits pattern, `None` when absent or empty.
    pub fn leading_digits(&self) -> Option<&str> {
        self.leading_digits.as_deref().filter(|pattern| !pattern.is_empty())
    }

    /// Returns the description of the given type. `Unknown` maps to the
    /// general description and `FixedLineOrMobile` to the fixed-line one.
    pub fn number_desc(&self, number_type: PhoneNumberType) -> Option<&NumberDesc> {
        match number_type {
            PhoneNumberType::Unknown => Some(&self.general_desc),
            PhoneNumberType::FixedLineOrMobile => {
                self.type_descriptors.get(&PhoneNumberType::FixedLine)
            }
            _ => self.type_descriptors.get(&number_type),
        }
    }

    /// Every regex source carried by this record.
    pub(crate) fn patterns(&self) -> impl Iterator<Item = &str> {
        self.leading_digits()
            .into_iter()
            .chain(
                [&self.general_desc, &self.no_international_dialling]
                    .into_iter()
                    .chain(self.type_descriptors.values())
                    .filter_map(|desc| desc.national_number_pattern.as_deref()),
            )
    }
}
