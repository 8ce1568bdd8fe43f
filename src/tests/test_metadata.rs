//! A small catalog in the shape of libphonenumber's test metadata. Patterns
//! are trimmed down to what the tests exercise.

use crate::{
    metadata::{NumberDesc, RegionMetadata},
    phonenumberutil::PhoneNumberType,
};

fn desc(pattern: &str) -> NumberDesc {
    NumberDesc::with_pattern(pattern)
}

fn us() -> RegionMetadata {
    let nanpa = r"[13-689]\d{9}|2[0-35-9]\d{8}";
    RegionMetadata::new("US", 1)
        .with_main_country_for_code(true)
        .with_national_prefix("1")
        .with_same_mobile_and_fixed_line_pattern(true)
        .with_mobile_number_portable_region(true)
        .with_general_desc(desc(nanpa).with_possible_lengths([10]).with_local_only_lengths([7]))
        .with_type_desc(PhoneNumberType::FixedLine, desc(nanpa).with_example_number("2012345678"))
        .with_type_desc(PhoneNumberType::Mobile, desc(nanpa))
        .with_type_desc(PhoneNumberType::TollFree, desc(r"8(?:00|66|77|88)\d{7}"))
        .with_type_desc(PhoneNumberType::PremiumRate, desc(r"900\d{7}"))
        .with_type_desc(PhoneNumberType::Pager, NumberDesc::not_available())
        .with_no_international_dialling(desc(r"800\d{7}").with_possible_lengths([10]))
}

fn bs() -> RegionMetadata {
    RegionMetadata::new("BS", 1)
        .with_national_prefix("1")
        .with_leading_digits("242")
        .with_general_desc(desc(r"(?:242|8(?:00|66|77|88)|900)\d{7}").with_possible_lengths([10]))
        .with_type_desc(PhoneNumberType::FixedLine, desc(r"242(?:3(?:02|[236][1-9]|4[0-24-9]))\d{4}"))
        .with_type_desc(PhoneNumberType::Mobile, desc(r"242(?:3(?:5[79]|[79]5)|4(?:[2-4][1-9]))\d{4}"))
}

fn ca() -> RegionMetadata {
    let fixed = r"(?:204|226|249|250)\d{7}";
    RegionMetadata::new("CA", 1)
        .with_national_prefix("1")
        .with_same_mobile_and_fixed_line_pattern(true)
        .with_general_desc(desc(r"[2-9]\d{9}").with_possible_lengths([10]))
        .with_type_desc(PhoneNumberType::FixedLine, desc(fixed))
        .with_type_desc(PhoneNumberType::Mobile, desc(fixed))
}

fn gg() -> RegionMetadata {
    RegionMetadata::new("GG", 44)
        .with_national_prefix("0")
        .with_general_desc(desc(r"(?:1481|7(?:781|839|911))\d{6}").with_possible_lengths([10]))
        .with_type_desc(PhoneNumberType::FixedLine, desc(r"1481[25-9]\d{5}"))
        .with_type_desc(PhoneNumberType::Mobile, desc(r"7(?:781|839|911)\d{6}"))
}

fn gb() -> RegionMetadata {
    RegionMetadata::new("GB", 44)
        .with_main_country_for_code(true)
        .with_national_prefix("0")
        .with_mobile_number_portable_region(true)
        .with_general_desc(desc(r"[1-357-9]\d{9}").with_possible_lengths([10]))
        .with_type_desc(PhoneNumberType::FixedLine, desc(r"[1-6]\d{9}"))
        .with_type_desc(PhoneNumberType::Mobile, desc(r"7[1-57-8]\d{8}"))
        .with_type_desc(PhoneNumberType::TollFree, desc(r"80\d{8}"))
        .with_type_desc(PhoneNumberType::PremiumRate, desc(r"9[018]\d{8}"))
}

fn ru() -> RegionMetadata {
    RegionMetadata::new("RU", 7)
        .with_main_country_for_code(true)
        .with_national_prefix("8")
        .with_general_desc(desc(r"[3489]\d{9}").with_possible_lengths([10]))
        .with_type_desc(PhoneNumberType::FixedLine, desc(r"[348]\d{9}"))
        .with_type_desc(PhoneNumberType::Mobile, desc(r"9\d{9}"))
}

fn kz() -> RegionMetadata {
    RegionMetadata::new("KZ", 7)
        .with_national_prefix("8")
        .with_leading_digits("33|7")
        .with_general_desc(desc(r"(?:33622|7\d\d)\d{5}").with_possible_lengths([10]))
        .with_type_desc(PhoneNumberType::FixedLine, desc(r"(?:33622|7(?:1|2)\d\d)\d{5}"))
        .with_type_desc(PhoneNumberType::Mobile, desc(r"7(?:0|47|6)\d{7}"))
}

fn it() -> RegionMetadata {
    RegionMetadata::new("IT", 39)
        .with_general_desc(desc(r"[0389]\d{5,10}").with_possible_lengths([6, 7, 8, 9, 10, 11]))
        .with_type_desc(PhoneNumberType::FixedLine, desc(r"0\d{9,10}"))
        .with_type_desc(PhoneNumberType::Mobile, desc(r"3\d{8,9}"))
        .with_type_desc(PhoneNumberType::PremiumRate, desc(r"89(?:2\d{3}|9\d{6})"))
}

fn ar() -> RegionMetadata {
    RegionMetadata::new("AR", 54)
        .with_national_prefix("0")
        .with_general_desc(desc(r"11\d{8}|[2368]\d{9}|9\d{10}").with_possible_lengths([10, 11]))
        .with_type_desc(PhoneNumberType::FixedLine, desc(r"11\d{8}|[2368]\d{9}"))
        .with_type_desc(PhoneNumberType::Mobile, desc(r"9\d{10}"))
}

fn ao() -> RegionMetadata {
    RegionMetadata::new("AO", 244)
        .with_national_prefix("0~0")
        .with_general_desc(desc(r"[29]\d{8}").with_possible_lengths([9]))
        .with_type_desc(PhoneNumberType::FixedLine, desc(r"2\d(?:[26-9]\d|\d[26-9])\d{5}"))
        .with_type_desc(PhoneNumberType::Mobile, desc(r"9[1-3]\d{7}"))
}

fn international_toll_free() -> RegionMetadata {
    RegionMetadata::new("800", 800)
        .with_general_desc(desc(r"\d{8}").with_possible_lengths([8]))
        .with_type_desc(PhoneNumberType::TollFree, desc(r"\d{8}").with_example_number("12345678"))
}

fn international_premium_rate() -> RegionMetadata {
    RegionMetadata::new("979", 979)
        .with_general_desc(desc(r"\d{9}").with_possible_lengths([9]))
        .with_type_desc(PhoneNumberType::PremiumRate, desc(r"\d{9}").with_example_number("123456789"))
}

/// GG is listed before GB on purpose: candidates on +44 are sorted before
/// being tried, so GB still goes first.
pub fn test_catalog() -> Vec<RegionMetadata> {
    vec![
        us(),
        bs(),
        ca(),
        gg(),
        gb(),
        ru(),
        kz(),
        it(),
        ar(),
        ao(),
        international_toll_free(),
        international_premium_rate(),
    ]
}
