//! Project tag collections: backlog tags, priorities, requirement focus and
//! requirement types.
//!
//! Every collection shares one shape and one rule set, so a single
//! [`domain::TagKind`] selects the collection instead of one module per
//! kind. Names are case-insensitively unique among the live tags of the same
//! project and kind; none of these collections has protected names.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
