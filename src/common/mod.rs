//! Common types shared across the crate.
//!
//! This module contains the primitives the hash index is built from:
//! - Configuration (pool capacities and hash table sizes)
//! - Identifiers (PageKey, FrameId, PoolType)

pub mod config;
mod frame_id;
mod page_key;
mod pool_type;

pub use crate::error::{Error, Result};
pub use config::{BufferPoolConfig, PoolConfig};
pub use frame_id::FrameId;
pub use page_key::PageKey;
pub use pool_type::PoolType;
