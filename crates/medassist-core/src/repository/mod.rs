//! Repository trait definitions.
//!
//! Each trait defines the contract for persisting and querying domain
//! entities. Implementations live in `medassist-infra`.

pub mod storage;
