use strum::{Display, EnumString, FromRepr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, FromRepr)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[repr(u8)]
pub enum Severity {
    Info = 1,
    Warning = 2,
    Error = 3,
}

pub(crate) const UNKNOWN_LABEL: &str = "UNKNOWN";

impl Severity {
    pub fn code(self) -> u8 {
        self as u8
    }

    // Unrecognized levels are treated as INFO.
    pub fn from_level(level: &str) -> Self {
        level.parse().unwrap_or(Severity::Info)
    }

    pub fn label_for_code(code: u8) -> String {
        Severity::from_repr(code).map_or_else(|| UNKNOWN_LABEL.to_string(), |s| s.to_string())
    }
}
