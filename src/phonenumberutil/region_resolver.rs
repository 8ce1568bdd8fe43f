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

//! Attribution of calling codes and numbers to regions.

use log::{trace, warn};

use super::{
    PhoneNumber, PhoneNumberType,
    helper_constants::SORTED_CANDIDATES_TRIGGER_REGION,
    helper_functions::get_number_type_helper,
    phonenumberutil::PhoneNumberUtil,
};
use crate::{i18n, metadata::normalize_region_code};

impl PhoneNumberUtil {
    /// Returns the region code that matches the specific country calling code.
    ///
    /// When several regions share the code, the one flagged as main country
    /// for it wins; without such a flag the last region listed in the
    /// catalog is returned. In the case of no region code being found, the
    /// unknown region code will be returned.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        let Some(region_codes) = self.index.region_codes_for_calling_code(country_calling_code)
        else {
            return i18n::RegionCode::get_unknown();
        };
        if let [region_code] = region_codes {
            return region_code;
        }
        region_codes
            .iter()
            .find(|region_code| {
                self.index
                    .get(region_code)
                    .is_some_and(|metadata| metadata.main_country_for_code)
            })
            .or_else(|| region_codes.last())
            .map(String::as_str)
            .unwrap_or(i18n::RegionCode::get_unknown())
    }

    /// Returns the region codes sharing the specific country calling code, in
    /// catalog order. In the case of no region code being found, the list is
    /// empty.
    pub fn get_region_codes_for_country_calling_code(
        &self,
        country_calling_code: i32,
    ) -> Vec<&str> {
        self.index
            .region_codes_for_calling_code(country_calling_code)
            .map(|region_codes| region_codes.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns the region the number belongs to, or `None` when the calling
    /// code is unknown or no region sharing it accepts the number.
    ///
    /// A calling code used by a single region is attributed to that region
    /// without looking at the national number.
    pub fn get_region_code_for_number(&self, phone_number: &PhoneNumber) -> Option<&str> {
        let country_calling_code = phone_number.country_code();
        let Some(region_codes) = self.index.region_codes_for_calling_code(country_calling_code)
        else {
            trace!("Missing/invalid country calling code ({})", country_calling_code);
            return None;
        };
        if let [region_code] = region_codes {
            return Some(region_code);
        }
        let candidates = region_codes.iter().map(String::as_str).collect::<Vec<_>>();
        self.resolve_among_candidates(phone_number.national_number(), &candidates)
    }

    /// Picks the first of `region_codes` that accepts `national_number`.
    ///
    /// Candidates are tried in the given order, except that a list holding
    /// "GB" is tried in sorted order. A candidate with leading digits is
    /// decided by a prefix match on them alone; any other candidate accepts
    /// the number when it classifies as something other than
    /// [`PhoneNumberType::Unknown`].
    pub fn resolve_among_candidates<'b>(
        &self,
        national_number: &str,
        region_codes: &[&'b str],
    ) -> Option<&'b str> {
        let mut candidates = region_codes.to_vec();
        if candidates.contains(&SORTED_CANDIDATES_TRIGGER_REGION) {
            candidates.sort_unstable();
        }

        for region_code in candidates {
            let Some(metadata) = self.index.get(&normalize_region_code(region_code)) else {
                warn!("No metadata for candidate region {}", region_code);
                continue;
            };
            if let Some(leading_digits) = metadata.leading_digits() {
                if self
                    .matcher_api
                    .match_leading_digits(national_number, leading_digits)
                {
                    return Some(region_code);
                }
                trace!("Number '{national_number}' rejected by leading digits of {region_code}");
                continue;
            }
            if get_number_type_helper(&*self.matcher_api, national_number, metadata)
                != PhoneNumberType::Unknown
            {
                return Some(region_code);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        metadata::{NumberDesc, RegionMetadata},
        phonenumberutil::{PhoneNumber, PhoneNumberType, phonenumberutil::PhoneNumberUtil},
    };

    /// Regions on one calling code, all accepting any ten digit number.
    fn shared_code_util(ids: &[&str]) -> PhoneNumberUtil {
        let catalog: Vec<RegionMetadata> = ids
            .iter()
            .map(|id| {
                RegionMetadata::new(*id, 999)
                    .with_general_desc(NumberDesc::with_pattern(r"\d{10}"))
                    .with_type_desc(PhoneNumberType::FixedLine, NumberDesc::with_pattern(r"\d{10}"))
            })
            .collect();
        PhoneNumberUtil::new_for_metadata(catalog).unwrap()
    }

    #[test]
    fn catalog_order_without_gb() {
        let util = shared_code_util(&["US", "CA"]);
        assert_eq!(
            util.get_region_code_for_number(&PhoneNumber::new(999, "2015550123")),
            Some("US")
        );
    }

    #[test]
    fn sorted_order_with_gb() {
        let util = shared_code_util(&["US", "CA", "GB"]);
        assert_eq!(
            util.get_region_code_for_number(&PhoneNumber::new(999, "2015550123")),
            Some("CA")
        );
        assert_eq!(
            util.resolve_among_candidates("2015550123", &["US", "GB"]),
            Some("GB")
        );
    }

    #[test]
    fn fallback_is_last_region_without_main_country() {
        let util = shared_code_util(&["US", "CA", "GB"]);
        assert_eq!(util.get_region_code_for_country_code(999), "GB");
        let util = shared_code_util(&["GB", "CA", "US"]);
        assert_eq!(util.get_region_code_for_country_code(999), "US");
    }

    #[test]
    fn missing_candidate_metadata_is_skipped() {
        let util = shared_code_util(&["US", "CA"]);
        assert_eq!(
            util.resolve_among_candidates("2015550123", &["XX", "CA"]),
            Some("CA")
        );
        assert_eq!(util.resolve_among_candidates("2015550123", &["XX"]), None);
        assert_eq!(util.resolve_among_candidates("2015550123", &[]), None);
    }

    #[test]
    fn leading_digits_miss_does_not_fall_back_to_classification() {
        let catalog = vec![
            RegionMetadata::new("AA", 999)
                .with_leading_digits("5")
                .with_general_desc(NumberDesc::with_pattern(r"\d{4}"))
                .with_type_desc(PhoneNumberType::FixedLine, NumberDesc::with_pattern(r"\d{4}")),
            RegionMetadata::new("BB", 999)
                .with_general_desc(NumberDesc::with_pattern(r"9\d{3}"))
                .with_type_desc(PhoneNumberType::FixedLine, NumberDesc::with_pattern(r"9\d{3}")),
        ];
        let util = PhoneNumberUtil::new_for_metadata(catalog).unwrap();
        assert_eq!(util.get_region_code_for_number(&PhoneNumber::new(999, "5123")), Some("AA"));
        assert_eq!(util.get_region_code_for_number(&PhoneNumber::new(999, "9123")), Some("BB"));
        assert_eq!(util.get_region_code_for_number(&PhoneNumber::new(999, "1234")), None);
    }
}
