//! Port traits implemented by the infrastructure layer

mod ports;

pub use ports::{MemberSource, RepoResult, RosterStore, TokenProvider};
