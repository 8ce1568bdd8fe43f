/// Region code used by libphonenumber catalogs for non-geographical
/// entities. Such records are re-keyed by their calling code on load.
pub const REGION_CODE_FOR_NON_GEO_ENTITY: &'static str = "001";

pub const NANPA_COUNTRY_CODE: i32 = 1;

/// Placeholder for a carrier code inside a national prefix, e.g. "0~0".
pub const CARRIER_CODE_PLACEHOLDER: char = '~';

/// When this region shares a calling code with others, candidates are
/// tried in sorted order rather than catalog order.
pub const SORTED_CANDIDATES_TRIGGER_REGION: &'static str = "GB";

// Map of country calling codes that use a mobile token before the area code.
// One example of when this is relevant is when determining the length of the
// national destination code, which should be the length of the area code plus
// the length of the mobile token.
pub const MOBILE_TOKEN_MAPPINGS: &[(i32, char)] = &[(54, '9')];

// Set of country calling codes that have geographically assigned mobile
// numbers. This may not be complete; we add calling codes case by case, as we
// find geographical mobile numbers or hear from user reports.
pub const GEO_MOBILE_COUNTRIES: &[i32] = &[
    52, // Mexico
    54, // Argentina
    55, // Brazil
    62, // Indonesia: some prefixes only (fixed CMDA wireless)
    86, // China
];
