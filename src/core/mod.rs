//! Core data types for EDS construction.
//!
//! - [`RawVariant`](variant::RawVariant): one decoded variant record (position, REF, ALT)
//! - [`VariantItem`](item::VariantItem): a consolidated reference span with its alleles
//!
//! ## Symbolic alleles
//!
//! Alleles starting with `<` (e.g. `<DEL>`) and the missing marker `.` carry
//! no literal bases. They are kept on [`RawVariant`](variant::RawVariant) as
//! read and filtered out whenever alleles are collected for output.

pub mod item;
pub mod variant;
