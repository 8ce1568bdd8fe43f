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


use log::error;
use super::regex_util::{full_match_pattern, prefix_match_pattern};

use crate::{interfaces, metadata::NumberDesc, regexp_cache::{InvalidRegexError, RegexCache}};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(128) }
    }

    fn match_number(
        &self, phone_number: &str,
        number_pattern: &str,
        allow_prefix_match: bool
    ) -> Result<bool, InvalidRegexError> {
        let anchored = if allow_prefix_match {
            prefix_match_pattern(number_pattern)
        } else {
            full_match_pattern(number_pattern)
        };
        let regexp = self.cache.get_regex(&anchored)?;
        Ok(regexp.is_match(phone_number))
    }

    /// Compiles `pattern` in both anchorings and keeps the results, so a
    /// catalog with a broken pattern is rejected before any query runs.
    pub fn precompile(&self, pattern: &str) -> Result<(), InvalidRegexError> {
        self.cache.get_regex(&full_match_pattern(pattern))?;
        self.cache.get_regex(&prefix_match_pattern(pattern))?;
        Ok(())
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self, number: &str,
        number_desc: &NumberDesc,
        allow_prefix_match: bool
    ) -> bool {
        let national_number_pattern = number_desc.national_number_pattern();
        // We don't want to consider it a prefix match when matching non-empty input
        // against an empty pattern.
        if national_number_pattern.is_empty() {
            return false;
        }
        match self.match_number(number, national_number_pattern, allow_prefix_match) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex! {}: {}", national_number_pattern, err);
                false
            }
        }
    }

    fn match_leading_digits(&self, number: &str, pattern: &str) -> bool {
        match self.match_number(number, pattern, true) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid leading digits regex! {}: {}", pattern, err);
                false
            }
        }
    }
}
