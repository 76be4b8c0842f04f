//! Query Log Domain Layer
pub mod client_proto;
pub mod errors;
pub mod log_entry;
pub mod query_class;
pub mod record_type;

pub use client_proto::ClientProto;
pub use errors::DecodeError;
pub use log_entry::{FilterResult, LogEntry};
pub use query_class::QueryClass;
pub use record_type::RecordType;
