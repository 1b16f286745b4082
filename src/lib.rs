//! Data-access library for CRM entities.
//!
//! Exposes accounts, contacts, assets, support cases and FTP credentials
//! through a repository/service layering. Persistence lives in two external
//! systems, a CRM reached over its object API and a message-relay service
//! reached over an XML RPC endpoint, and both stand behind the narrow
//! traits in [`repository`]. This crate owns the parts with actual design
//! decisions: entity invariants ([`domain`]), bidirectional DTO conversion
//! ([`dto`]), identifier-shape dispatch ([`lookup`]) and query construction
//! ([`soql`]). HTTP routing, token acquisition and envelope framing belong
//! to the host applications and adapters.

pub mod config;
pub mod domain;
pub mod dto;
pub mod lookup;
pub mod repository;
pub mod services;
pub mod soql;
