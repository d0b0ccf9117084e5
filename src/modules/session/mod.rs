//! Mock admin gate and per-session view flags.
//!
//! This is a demo gate, not a security boundary: the access key is a
//! plaintext constant compared without hashing, salting, rate limiting, or
//! token issuance, and the committed flag is a process-wide boolean. It
//! exists to mirror the theatrical login sequence of the original site and
//! must never guard real access control.

pub mod adapter;
pub mod application;
