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

use std::collections::{HashMap, hash_map::Entry};

use log::{info, warn};

use super::{RegionMetadata, is_integer_like, normalize_region_code};
use crate::phonenumberutil::{
    errors::MetadataError, helper_constants::REGION_CODE_FOR_NON_GEO_ENTITY,
};

/// What to do when the catalog lists the same region id twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Abort the build with [`MetadataError::DuplicateRegion`].
    #[default]
    Reject,
    /// Keep the later record. The id is listed again under its calling
    /// code.
    LastWriteWins,
}

/// Options for [`MetadataIndex::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexOptions {
    pub duplicate_policy: DuplicatePolicy,
}

impl IndexOptions {
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

/// The two lookup tables derived from a catalog.
#[derive(Debug, Default)]
pub struct MetadataIndex {
    /// A mapping from an upper-cased region code to its metadata.
    /// Non-geographical entities are keyed by their calling code, e.g. "800".
    region_to_metadata_map: HashMap<String, RegionMetadata>,

    /// A mapping from a country calling code to the region codes sharing it,
    /// in the order the catalog lists them. Note regions under NANPA share
    /// the country calling code 1 and Russia and Kazakhstan share the
    /// country calling code 7. This is implemented as a vector sorted by
    /// calling code to achieve better performance.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,
}

impl MetadataIndex {
    /// Builds both indices in one pass over `catalog`.
    ///
    /// Records with the "001" id are keyed by their calling code. Fails on
    /// an empty region id, a non-positive calling code, a numeric id other
    /// than the record's calling code, or (under [`DuplicatePolicy::Reject`])
    /// a repeated id. No partial index is ever returned.
    pub fn build(
        catalog: impl IntoIterator<Item = RegionMetadata>,
        options: &IndexOptions,
    ) -> Result<Self, MetadataError> {
        let mut region_to_metadata_map = HashMap::<String, RegionMetadata>::new();
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<i32, Vec<String>>::new();

        for (index, mut metadata) in catalog.into_iter().enumerate() {
            if metadata.id.trim().is_empty() {
                return Err(MetadataError::EmptyRegionId { index });
            }
            let country_calling_code = metadata.country_code;
            if country_calling_code <= 0 {
                return Err(MetadataError::InvalidCountryCallingCode {
                    region: metadata.id,
                    country_code: country_calling_code,
                });
            }
            let region_code = if metadata.id == REGION_CODE_FOR_NON_GEO_ENTITY {
                itoa::Buffer::new().format(country_calling_code).to_owned()
            } else {
                normalize_region_code(&metadata.id).into_owned()
            };
            if is_integer_like(&region_code)
                && region_code != itoa::Buffer::new().format(country_calling_code)
            {
                return Err(MetadataError::NonGeographicalIdMismatch {
                    region: region_code,
                    country_code: country_calling_code,
                });
            }
            metadata.id.clone_from(&region_code);

            match region_to_metadata_map.entry(region_code.clone()) {
                Entry::Occupied(mut occupied) => match options.duplicate_policy {
                    DuplicatePolicy::Reject => {
                        return Err(MetadataError::DuplicateRegion(region_code));
                    }
                    DuplicatePolicy::LastWriteWins => {
                        warn!("Region {} occurs more than once in the catalog; keeping the last entry", region_code);
                        occupied.insert(metadata);
                    }
                },
                Entry::Vacant(vacant) => {
                    vacant.insert(metadata);
                }
            }

            country_calling_code_to_region_map
                .entry(country_calling_code)
                .or_default()
                .push(region_code);
        }

        let mut country_calling_code_to_region_code_map = country_calling_code_to_region_map
            .into_iter()
            .collect::<Vec<_>>();
        // Sort all the pairs in ascending order according to country calling code.
        country_calling_code_to_region_code_map.sort_by_key(|(code, _)| *code);

        info!(
            "Indexed metadata for {} regions across {} country calling codes",
            region_to_metadata_map.len(),
            country_calling_code_to_region_code_map.len()
        );

        Ok(Self {
            region_to_metadata_map,
            country_calling_code_to_region_code_map,
        })
    }

    /// Looks up an already upper-cased region code.
    pub fn get(&self, region_code: &str) -> Option<&RegionMetadata> {
        self.region_to_metadata_map.get(region_code)
    }

    pub fn contains_region(&self, region_code: &str) -> bool {
        self.region_to_metadata_map.contains_key(region_code)
    }

    /// Region codes sharing `country_calling_code`, in catalog order.
    pub fn region_codes_for_calling_code(&self, country_calling_code: i32) -> Option<&[String]> {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .ok()
            .map(|index| self.country_calling_code_to_region_code_map[index].1.as_slice())
    }

    pub fn region_codes(&self) -> impl Iterator<Item = &str> {
        self.region_to_metadata_map.keys().map(String::as_str)
    }

    pub fn calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
    }

    pub fn metadata(&self) -> impl Iterator<Item = &RegionMetadata> {
        self.region_to_metadata_map.values()
    }

    pub fn len(&self) -> usize {
        self.region_to_metadata_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.region_to_metadata_map.is_empty()
    }
}
