/// Well-known region codes handed out by lookups.
pub struct RegionCode {
}

impl RegionCode {
    const UNKNOWN: &'static str = "ZZ";

    /// Returns a region code string representing the "unknown" region.
    /// Calling codes that no catalog entry claims resolve to it.
    pub fn get_unknown() -> &'static str {
        Self::UNKNOWN
    }

    pub fn zz() -> &'static str {
        Self::UNKNOWN
    }
}
