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

//! Decoding of protobuf-encoded catalogs (`PhoneMetadataCollection`).

use protobuf::{Message, MessageField};

use super::{NumberDesc, RegionMetadata};
use crate::{
    phonenumberutil::{PhoneNumberType, errors::MetadataError},
    proto_gen::phonemetadata::{PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc},
};

/// Decodes a serialized `PhoneMetadataCollection` into catalog order.
///
/// Ids are kept as stored; libphonenumber's "001" entries are re-keyed by
/// [`MetadataIndex::build`](super::MetadataIndex::build).
pub fn load_catalog_from_bytes(bytes: &[u8]) -> Result<Vec<RegionMetadata>, MetadataError> {
    let collection = PhoneMetadataCollection::parse_from_bytes(bytes)?;
    Ok(collection
        .metadata
        .into_iter()
        .map(RegionMetadata::from)
        .collect())
}

impl From<&PhoneNumberDesc> for NumberDesc {
    fn from(desc: &PhoneNumberDesc) -> Self {
        Self {
            national_number_pattern: desc.national_number_pattern.clone(),
            possible_lengths: desc.possible_length.clone(),
            possible_lengths_local_only: desc.possible_length_local_only.clone(),
            example_number: desc.example_number.clone(),
        }
    }
}

fn desc_or_default(desc: &MessageField<PhoneNumberDesc>) -> NumberDesc {
    desc.as_ref().map(NumberDesc::from).unwrap_or_default()
}

impl From<PhoneMetadata> for RegionMetadata {
    fn from(metadata: PhoneMetadata) -> Self {
        let country_code = metadata.country_code();
        let id = metadata.id().to_owned();

        let typed = [
            (PhoneNumberType::FixedLine, &metadata.fixed_line),
            (PhoneNumberType::Mobile, &metadata.mobile),
            (PhoneNumberType::TollFree, &metadata.toll_free),
            (PhoneNumberType::PremiumRate, &metadata.premium_rate),
            (PhoneNumberType::SharedCost, &metadata.shared_cost),
            (PhoneNumberType::PersonalNumber, &metadata.personal_number),
            (PhoneNumberType::VoIP, &metadata.voip),
            (PhoneNumberType::Pager, &metadata.pager),
            (PhoneNumberType::UAN, &metadata.uan),
            (PhoneNumberType::VoiceMail, &metadata.voicemail),
        ];
        // Absent descriptions mean the region has no numbers of that type.
        let type_descriptors = typed
            .into_iter()
            .filter_map(|(number_type, desc)| {
                desc.as_ref().map(|desc| (number_type, NumberDesc::from(desc)))
            })
            .collect();

        Self {
            id,
            country_code,
            national_prefix: metadata.national_prefix.clone(),
            leading_digits: metadata.leading_digits.clone(),
            main_country_for_code: metadata.main_country_for_code(),
            same_mobile_and_fixed_line_pattern: metadata.same_mobile_and_fixed_line_pattern(),
            mobile_number_portable_region: metadata.mobile_number_portable_region(),
            general_desc: desc_or_default(&metadata.general_desc),
            no_international_dialling: desc_or_default(&metadata.no_international_dialling),
            type_descriptors,
        }
    }
}
