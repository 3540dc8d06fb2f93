// crates/xf2bf-cli/src/cmd/mod.rs

pub mod convert;
