/// A parsed phone number: its country calling code and its national
/// significant number as a string of ASCII digits.
///
/// The national significant number keeps any leading zeros (Italian numbers
/// start with one), which is why it is a string rather than an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country_code: i32,
    national_number: String,
}

impl PhoneNumber {
    pub fn new(country_code: i32, national_number: impl Into<String>) -> Self {
        Self {
            country_code,
            national_number: national_number.into(),
        }
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn national_number(&self) -> &str {
        &self.national_number
    }
}
