pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phonenumberutil;
mod phone_number;
mod region_resolver;

use std::sync::OnceLock;

pub use enums::PhoneNumberType;
pub use phone_number::PhoneNumber;
use crate::{
    metadata::{RegionMetadata, catalog::load_catalog_from_bytes},
    phonenumberutil::{errors::MetadataError, phonenumberutil::PhoneNumberUtil},
};

static PHONE_NUMBER_UTIL: OnceLock<PhoneNumberUtil> = OnceLock::new();

/// Builds the process-wide [`PhoneNumberUtil`] from `catalog`.
///
/// Must be called once, before serving queries. A second call fails with
/// [`MetadataError::AlreadyInitialized`] and leaves the installed instance
/// untouched.
pub fn init_phone_number_util(
    catalog: impl IntoIterator<Item = RegionMetadata>,
) -> Result<&'static PhoneNumberUtil, MetadataError> {
    if PHONE_NUMBER_UTIL.get().is_some() {
        return Err(MetadataError::AlreadyInitialized);
    }
    let util = PhoneNumberUtil::new_for_metadata(catalog)?;
    let mut installed = false;
    let instance = PHONE_NUMBER_UTIL.get_or_init(|| {
        installed = true;
        util
    });
    if installed {
        Ok(instance)
    } else {
        Err(MetadataError::AlreadyInitialized)
    }
}

/// Same as [`init_phone_number_util`] for a protobuf-encoded catalog.
pub fn init_phone_number_util_from_bytes(
    bytes: &[u8],
) -> Result<&'static PhoneNumberUtil, MetadataError> {
    init_phone_number_util(load_catalog_from_bytes(bytes)?)
}

/// The process-wide instance, once installed.
pub fn phone_number_util() -> Option<&'static PhoneNumberUtil> {
    PHONE_NUMBER_UTIL.get()
}
