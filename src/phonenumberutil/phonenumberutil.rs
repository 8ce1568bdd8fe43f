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

use super::{
    PhoneNumber, PhoneNumberType,
    errors::MetadataError,
    helper_constants::{
        CARRIER_CODE_PLACEHOLDER, MOBILE_TOKEN_MAPPINGS, NANPA_COUNTRY_CODE,
        REGION_CODE_FOR_NON_GEO_ENTITY,
    },
    helper_functions::{
        self, get_number_type_helper, get_supported_types_for_metadata,
        is_number_matching_desc,
    },
};
use crate::{
    interfaces::MatcherApi,
    metadata::{
        IndexOptions, MetadataIndex, RegionMetadata, catalog::load_catalog_from_bytes,
        is_integer_like, normalize_region_code,
    },
    regex_based_matcher::RegexBasedMatcher,
};

use log::{trace, warn};

// Helper type for Result
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Region and capability queries over an immutable metadata catalog.
///
/// Built once from a catalog; every query afterwards is a read of the
/// indices, so one instance can be shared between any number of threads.
pub struct PhoneNumberUtil {
    /// An API for validation checking.
    pub(super) matcher_api: Box<dyn MatcherApi>,

    /// Region → metadata and calling code → regions.
    pub(super) index: MetadataIndex,

    /// The set of regions that share country calling code 1.
    nanpa_regions: HashSet<String>,
}

impl PhoneNumberUtil {
    /// Builds the indices for `catalog` with default [`IndexOptions`].
    pub fn new_for_metadata(catalog: impl IntoIterator<Item = RegionMetadata>) -> Result<Self> {
        Self::new_with_options(catalog, &IndexOptions::default())
    }

    /// Decodes a protobuf-encoded catalog and builds the indices for it.
    pub fn from_protobuf_bytes(bytes: &[u8]) -> Result<Self> {
        Self::new_for_metadata(load_catalog_from_bytes(bytes)?)
    }

    pub fn new_with_options(
        catalog: impl IntoIterator<Item = RegionMetadata>,
        options: &IndexOptions,
    ) -> Result<Self> {
        let index = MetadataIndex::build(catalog, options)?;

        // Every pattern is compiled up front: a catalog with a broken regex
        // must fail here rather than quietly misclassify later.
        let matcher = RegexBasedMatcher::new();
        for metadata in index.metadata() {
            for pattern in metadata.patterns() {
                matcher
                    .precompile(pattern)
                    .map_err(|source| MetadataError::InvalidPattern {
                        region: metadata.id().to_owned(),
                        source,
                    })?;
            }
        }

        let nanpa_regions = index
            .region_codes_for_calling_code(NANPA_COUNTRY_CODE)
            .map(|region_codes| region_codes.iter().cloned().collect())
            .unwrap_or_default();

        Ok(Self {
            matcher_api: Box::new(matcher),
            index,
            nanpa_regions,
        })
    }

    /// Geographical regions the catalog covers. Non-geographical entities
    /// are not included.
    pub fn get_supported_regions(&self) -> Vec<&str> {
        self.index
            .region_codes()
            .filter(|region_code| !is_integer_like(region_code))
            .collect()
    }

    /// Calling codes of the non-geographical entities, e.g. 800.
    pub fn get_supported_global_network_calling_codes(&self) -> HashSet<i32> {
        self.index
            .region_codes()
            .filter_map(|region_code| region_code.parse::<i32>().ok())
            .collect()
    }

    pub fn get_supported_calling_codes(&self) -> HashSet<i32> {
        let mut codes = self.get_supported_global_network_calling_codes();
        codes.extend(self.index.calling_codes());
        codes
    }

    pub fn get_supported_types_for_region(
        &self,
        region_code: &str,
    ) -> Option<HashSet<PhoneNumberType>> {
        self.get_metadata_for_region(region_code)
            .map(get_supported_types_for_metadata)
            .or_else(|| {
                warn!("Invalid or unknown region code provided: {}", region_code);
                None
            })
    }

    pub fn get_supported_types_for_non_geo_entity(
        &self,
        country_calling_code: i32,
    ) -> Option<HashSet<PhoneNumberType>> {
        self.get_metadata_for_non_geographical_entity(country_calling_code)
            .map(get_supported_types_for_metadata)
            .or_else(|| {
                warn!(
                    "Unknown country calling code for a non-geographical entity provided: {}",
                    country_calling_code
                );
                None
            })
    }

    /// Returns the national dialling prefix of the region, e.g. "0" for GB.
    ///
    /// With `strip_non_digits` the carrier code placeholder `~` is removed.
    /// `None` when the region is unknown or has no national prefix.
    pub fn get_ndd_prefix_for_region(
        &self,
        region_code: &str,
        strip_non_digits: bool,
    ) -> Option<String> {
        let Some(metadata) = self.get_metadata_for_region(region_code) else {
            warn!("Invalid or missing region code ({}) provided.", region_code);
            return None;
        };
        let prefix = metadata.national_prefix()?;
        if strip_non_digits {
            Some(prefix.replace(CARRIER_CODE_PLACEHOLDER, ""))
        } else {
            Some(prefix.to_owned())
        }
    }

    /// True iff `region_code` is a geographical region present in the
    /// catalog. Letter case is ignored; numeric strings are never regions.
    pub fn is_valid_region_code(&self, region_code: &str) -> bool {
        self.get_metadata_for_region(region_code).is_some()
    }

    /// Returns the country calling code of the region, or 0 when the region
    /// is invalid or unknown.
    pub fn get_country_code_for_region(&self, region_code: &str) -> i32 {
        match self.get_metadata_for_region(region_code) {
            Some(metadata) => metadata.country_code(),
            None => {
                warn!("Invalid or missing region code ({}) provided.", region_code);
                0
            }
        }
    }

    pub fn get_metadata_for_region(&self, region_code: &str) -> Option<&RegionMetadata> {
        if region_code.is_empty() || is_integer_like(region_code) {
            return None;
        }
        self.index.get(&normalize_region_code(region_code))
    }

    pub fn get_metadata_for_non_geographical_entity(
        &self,
        country_calling_code: i32,
    ) -> Option<&RegionMetadata> {
        let mut buf = itoa::Buffer::new();
        self.index.get(buf.format(country_calling_code))
    }

    /// Metadata of `region_code`, or of the non-geographical entity behind
    /// `country_calling_code` when the region code is "001" or numeric.
    pub fn get_metadata_for_region_or_calling_code(
        &self,
        country_calling_code: i32,
        region_code: &str,
    ) -> Option<&RegionMetadata> {
        if REGION_CODE_FOR_NON_GEO_ENTITY == region_code || is_integer_like(region_code) {
            self.get_metadata_for_non_geographical_entity(country_calling_code)
        } else {
            self.get_metadata_for_region(region_code)
        }
    }

    /// Whether the calling code is known to the catalog.
    pub fn has_valid_country_calling_code(&self, country_calling_code: i32) -> bool {
        self.index
            .region_codes_for_calling_code(country_calling_code)
            .is_some()
    }

    /// Returns true if the number can be dialled from outside the region,
    /// or unknown. Numbers whose region cannot be determined are assumed to
    /// be diallable.
    pub fn can_be_internationally_dialled(&self, phone_number: &PhoneNumber) -> bool {
        let Some(metadata) = self
            .get_region_code_for_number(phone_number)
            .and_then(|region_code| self.index.get(region_code))
        else {
            trace!(
                "No region for number with calling code {}; assuming it is internationally diallable",
                phone_number.country_code()
            );
            return true;
        };
        !is_number_matching_desc(
            &*self.matcher_api,
            phone_number.national_number(),
            &metadata.no_international_dialling,
        )
    }

    /// Classifies the number against the metadata of the region it belongs
    /// to. `Unknown` when no region can be determined.
    pub fn get_number_type(&self, phone_number: &PhoneNumber) -> PhoneNumberType {
        let Some(metadata) = self
            .get_region_code_for_number(phone_number)
            .and_then(|region_code| self.index.get(region_code))
        else {
            return PhoneNumberType::Unknown;
        };
        get_number_type_helper(&*self.matcher_api, phone_number.national_number(), metadata)
    }

    /// Tests whether a phone number has a geographical association. It
    /// checks if the number is associated with a certain region in the
    /// country to which it belongs.
    pub fn is_number_geographical(&self, phone_number: &PhoneNumber) -> bool {
        Self::is_number_type_geographical(
            self.get_number_type(phone_number),
            phone_number.country_code(),
        )
    }

    pub fn is_number_type_geographical(
        phone_number_type: PhoneNumberType,
        country_calling_code: i32,
    ) -> bool {
        helper_functions::is_number_type_geographical(phone_number_type, country_calling_code)
    }

    /// Returns the mobile token for the provided country calling code if it
    /// has one, e.g. '9' for Argentina (54).
    pub fn get_country_mobile_token(country_calling_code: i32) -> Option<char> {
        MOBILE_TOKEN_MAPPINGS
            .iter()
            .find(|(code, _)| *code == country_calling_code)
            .map(|(_, token)| *token)
    }

    /// Checks if this region is a NANPA region, i.e. one sharing calling
    /// code 1.
    pub fn is_nanpa_country(&self, region_code: &str) -> bool {
        !region_code.is_empty()
            && self
                .nanpa_regions
                .contains(&*normalize_region_code(region_code))
    }

    pub fn is_mobile_number_portable_region(&self, region_code: &str) -> bool {
        match self.get_metadata_for_region(region_code) {
            Some(metadata) => metadata.mobile_number_portable_region,
            None => {
                warn!("Invalid or unknown region code provided: {}", region_code);
                false
            }
        }
    }
}
