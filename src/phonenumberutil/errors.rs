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

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Errors raised while loading a catalog. All of them are fatal: no
/// partially built index is ever handed out.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Catalog entry #{index} has an empty region id")]
    EmptyRegionId { index: usize },

    #[error("Region {region} has invalid country calling code {country_code}")]
    InvalidCountryCallingCode { region: String, country_code: i32 },

    #[error("Numeric id {region} does not match its country calling code {country_code}")]
    NonGeographicalIdMismatch { region: String, country_code: i32 },

    #[error("Region {0} occurs more than once in the catalog")]
    DuplicateRegion(String),

    #[error("Region {region} carries an invalid pattern: {source}")]
    InvalidPattern {
        region: String,
        #[source]
        source: InvalidRegexError,
    },

    #[error("Could not decode metadata catalog: {0}")]
    Decode(#[from] protobuf::Error),

    #[error("Phone number util is already initialized")]
    AlreadyInitialized,
}
