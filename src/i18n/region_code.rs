pub struct RegionCode {
}

impl RegionCode {
    /// Country used whenever nothing better is known, e.g. when locale
    /// detection fails.
    pub fn fallback() -> &'static str {
        return Self::br();
    }

    pub fn br() -> &'static str {
        return "BR";
    }
}
