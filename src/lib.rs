mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen {
    include!(concat!(env!("OUT_DIR"), "/proto_gen/mod.rs"));
}
mod phonenumberutil;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub mod metadata;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use metadata::{
    DuplicatePolicy, IndexOptions, MetadataIndex, NumberDesc, RegionMetadata,
    catalog::load_catalog_from_bytes,
};
pub use phonenumberutil::{
    PhoneNumber, PhoneNumberType, init_phone_number_util, init_phone_number_util_from_bytes,
    phone_number_util,
    errors::MetadataError,
    phonenumberutil::PhoneNumberUtil,
};
pub use regexp_cache::InvalidRegexError;
