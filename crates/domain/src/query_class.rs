use std::fmt;

/// DNS query classes, the second fixed code table for packed questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryClass {
    IN,
    CH,
    HS,
    NONE,
    ANY,
}

impl QueryClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryClass::IN => "IN",
            QueryClass::CH => "CH",
            QueryClass::HS => "HS",
            QueryClass::NONE => "NONE",
            QueryClass::ANY => "ANY",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            QueryClass::IN => 1,
            QueryClass::CH => 3,
            QueryClass::HS => 4,
            QueryClass::NONE => 254,
            QueryClass::ANY => 255,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(QueryClass::IN),
            3 => Some(QueryClass::CH),
            4 => Some(QueryClass::HS),
            254 => Some(QueryClass::NONE),
            255 => Some(QueryClass::ANY),
            _ => None,
        }
    }
}

impl fmt::Display for QueryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
