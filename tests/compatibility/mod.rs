// SPDX-License-Identifier: MIT OR Apache-2.0
//
// PostgreSQL Compatibility Tests

#[path = "../common/mod.rs"]
pub mod common;
