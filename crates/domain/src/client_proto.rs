use crate::errors::DecodeError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Transport protocol a client used to send its query.
///
/// Records carry the protocol as a short tag; plain DNS over UDP/TCP has
/// always been written as the empty tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClientProto {
    #[default]
    Plain,
    Dot,
    Doh,
    Doq,
    DnsCrypt,
}

impl ClientProto {
    /// The tag this protocol is written with in records.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientProto::Plain => "",
            ClientProto::Dot => "dot",
            ClientProto::Doh => "doh",
            ClientProto::Doq => "doq",
            ClientProto::DnsCrypt => "dnscrypt",
        }
    }
}

impl FromStr for ClientProto {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(ClientProto::Plain),
            "dot" => Ok(ClientProto::Dot),
            "doh" => Ok(ClientProto::Doh),
            "doq" => Ok(ClientProto::Doq),
            "dnscrypt" => Ok(ClientProto::DnsCrypt),
            _ => Err(DecodeError::InvalidClientProto(s.to_string())),
        }
    }
}

impl fmt::Display for ClientProto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ClientProto {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
