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

use std::collections::HashSet;

use log::trace;

use crate::{
    interfaces::MatcherApi,
    metadata::{NumberDesc, RegionMetadata},
};

use super::{PhoneNumberType, helper_constants::GEO_MOBILE_COUNTRIES};

/// Returns `true` if there is any possible number data set for a particular
/// NumberDesc.
pub(super) fn desc_has_possible_number_data(desc: &NumberDesc) -> bool {
    // If this is empty, it means numbers of this type inherit from the "general
    // desc" -> the value "-1" means that no numbers exist for this type.
    return desc.possible_lengths.len() != 1
        || desc
            .possible_lengths
            .first()
            .is_some_and(|length| *length != -1);
}

/// Returns `true` if there is any data set for a particular NumberDesc.
pub(super) fn desc_has_data(desc: &NumberDesc) -> bool {
    // Checking most properties since we don't know what's present, since a custom
    // build may have stripped just one of them (e.g. example numbers). We don't
    // bother checking the local-only lengths, since if this is the only thing
    // that's present we don't really support the type at all: no type-specific
    // methods will work with only this data.
    return desc.has_example_number()
        || desc_has_possible_number_data(desc)
        || desc.has_national_number_pattern();
}

/// Returns the types we have metadata for based on the RegionMetadata object
/// passed in.
pub(super) fn get_supported_types_for_metadata(
    metadata: &RegionMetadata,
) -> HashSet<PhoneNumberType> {
    // Never return FIXED_LINE_OR_MOBILE (it is a convenience type, and
    // represents that a particular number type can't be determined) or
    // UNKNOWN (the non-type).
    PhoneNumberType::concrete_types()
        .filter(|number_type| {
            metadata
                .number_desc(*number_type)
                .is_some_and(desc_has_data)
        })
        .collect()
}

/// Whether `national_number` is a match for `number_desc`.
pub(super) fn is_number_matching_desc(
    matcher_api: &dyn MatcherApi,
    national_number: &str,
    number_desc: &NumberDesc,
) -> bool {
    // Check if any possible number lengths are present; if so, we use them to
    // avoid checking the validation pattern if they don't match. If they are
    // absent, this means they match the general description, which we have
    // already checked before checking a specific number type.
    let actual_length = national_number.len() as i32;
    if !number_desc.possible_lengths.is_empty()
        && !number_desc.possible_lengths.contains(&actual_length)
    {
        return false;
    }
    matcher_api.match_national_number(national_number, number_desc, false)
}

fn is_number_matching_type(
    matcher_api: &dyn MatcherApi,
    national_number: &str,
    metadata: &RegionMetadata,
    number_type: PhoneNumberType,
) -> bool {
    metadata
        .number_desc(number_type)
        .is_some_and(|desc| is_number_matching_desc(matcher_api, national_number, desc))
}

/// Classifies `national_number` against the descriptions of one region.
/// Returns `Unknown` when the general description or every specific
/// description rejects it.
pub(super) fn get_number_type_helper(
    matcher_api: &dyn MatcherApi,
    national_number: &str,
    metadata: &RegionMetadata,
) -> PhoneNumberType {
    if !is_number_matching_desc(matcher_api, national_number, &metadata.general_desc) {
        trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
        return PhoneNumberType::Unknown;
    }
    let is_type = |number_type| {
        is_number_matching_type(matcher_api, national_number, metadata, number_type)
    };

    // Order matters: more specific tariffs are tested before the generic
    // fixed-line and mobile ones.
    const ORDERED_TYPES: [PhoneNumberType; 8] = [
        PhoneNumberType::PremiumRate,
        PhoneNumberType::TollFree,
        PhoneNumberType::SharedCost,
        PhoneNumberType::VoIP,
        PhoneNumberType::PersonalNumber,
        PhoneNumberType::Pager,
        PhoneNumberType::UAN,
        PhoneNumberType::VoiceMail,
    ];
    if let Some(number_type) = ORDERED_TYPES.into_iter().find(|t| is_type(*t)) {
        trace!("Number '{national_number}' is of type {number_type:?}");
        return number_type;
    }

    if is_type(PhoneNumberType::FixedLine) {
        if metadata.same_mobile_and_fixed_line_pattern {
            trace!("Number '{national_number}': fixed-line and mobile patterns equal, \
                 number is fixed-line or mobile");
            return PhoneNumberType::FixedLineOrMobile;
        } else if is_type(PhoneNumberType::Mobile) {
            trace!("Number '{national_number}': Fixed-line and mobile patterns differ, but number is \
                    still fixed-line or mobile"
            );
            return PhoneNumberType::FixedLineOrMobile;
        }
        trace!("Number '{national_number}' is a fixed line number.");
        return PhoneNumberType::FixedLine;
    }
    // Otherwise, test to see if the number is mobile. Only do this if certain
    // that the patterns for mobile and fixed line aren't the same.
    if !metadata.same_mobile_and_fixed_line_pattern && is_type(PhoneNumberType::Mobile) {
        trace!("Number '{national_number}' is a mobile number.");
        return PhoneNumberType::Mobile;
    }
    trace!("Number '{national_number}' type unknown - doesn't match any specific number type pattern.");
    return PhoneNumberType::Unknown;
}

/// Tests whether a phone number has a geographical association, as
/// represented by its type and the country it belongs to.
pub(super) fn is_number_type_geographical(
    phone_number_type: PhoneNumberType,
    country_calling_code: i32,
) -> bool {
    matches!(
        phone_number_type,
        PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile
    ) || (GEO_MOBILE_COUNTRIES.contains(&country_calling_code)
        && phone_number_type == PhoneNumberType::Mobile)
}

#[cfg(test)]
mod tests {
    use super::{
        desc_has_data, desc_has_possible_number_data, get_number_type_helper,
        get_supported_types_for_metadata, is_number_type_geographical,
    };
    use crate::{
        metadata::{NumberDesc, RegionMetadata},
        phonenumberutil::PhoneNumberType,
        regex_based_matcher::RegexBasedMatcher,
    };

    fn region() -> RegionMetadata {
        RegionMetadata::new("XX", 999)
            .with_general_desc(NumberDesc::with_pattern(r"[1-9]\d{5}").with_possible_lengths([6]))
            .with_type_desc(PhoneNumberType::FixedLine, NumberDesc::with_pattern(r"[2-5]\d{5}"))
            .with_type_desc(PhoneNumberType::Mobile, NumberDesc::with_pattern(r"[5-7]\d{5}"))
            .with_type_desc(PhoneNumberType::TollFree, NumberDesc::with_pattern(r"8\d{5}"))
            .with_type_desc(PhoneNumberType::Pager, NumberDesc::not_available())
    }

    #[test]
    fn possible_number_data() {
        assert!(desc_has_possible_number_data(&NumberDesc::default()));
        assert!(desc_has_possible_number_data(&NumberDesc::default().with_possible_lengths([6])));
        assert!(!desc_has_possible_number_data(&NumberDesc::not_available()));
        assert!(desc_has_data(&NumberDesc::not_available().with_example_number("123")));
    }

    #[test]
    fn supported_types_follow_descriptions() {
        let types = get_supported_types_for_metadata(&region());
        assert!(types.contains(&PhoneNumberType::FixedLine));
        assert!(types.contains(&PhoneNumberType::Mobile));
        assert!(types.contains(&PhoneNumberType::TollFree));
        assert!(!types.contains(&PhoneNumberType::Pager));
        assert!(!types.contains(&PhoneNumberType::VoIP));
        assert!(!types.contains(&PhoneNumberType::FixedLineOrMobile));
        assert!(!types.contains(&PhoneNumberType::Unknown));
    }

    #[test]
    fn classification() {
        let matcher = RegexBasedMatcher::new();
        let metadata = region();
        assert_eq!(get_number_type_helper(&matcher, "234567", &metadata), PhoneNumberType::FixedLine);
        assert_eq!(get_number_type_helper(&matcher, "512345", &metadata), PhoneNumberType::FixedLineOrMobile);
        assert_eq!(get_number_type_helper(&matcher, "612345", &metadata), PhoneNumberType::Mobile);
        assert_eq!(get_number_type_helper(&matcher, "812345", &metadata), PhoneNumberType::TollFree);
        assert_eq!(get_number_type_helper(&matcher, "912345", &metadata), PhoneNumberType::Unknown);
        // Wrong length never reaches the specific descriptions.
        assert_eq!(get_number_type_helper(&matcher, "2345678", &metadata), PhoneNumberType::Unknown);
    }

    #[test]
    fn same_fixed_and_mobile_pattern() {
        let matcher = RegexBasedMatcher::new();
        let metadata = region().with_same_mobile_and_fixed_line_pattern(true);
        assert_eq!(get_number_type_helper(&matcher, "234567", &metadata), PhoneNumberType::FixedLineOrMobile);
        assert_eq!(get_number_type_helper(&matcher, "612345", &metadata), PhoneNumberType::Unknown);
    }

    #[test]
    fn geographical_types() {
        assert!(is_number_type_geographical(PhoneNumberType::FixedLine, 44));
        assert!(is_number_type_geographical(PhoneNumberType::FixedLineOrMobile, 1));
        assert!(!is_number_type_geographical(PhoneNumberType::Mobile, 44));
        assert!(is_number_type_geographical(PhoneNumberType::Mobile, 54));
        assert!(!is_number_type_geographical(PhoneNumberType::TollFree, 54));
    }
}
