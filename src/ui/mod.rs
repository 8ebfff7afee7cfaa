//! Presentation glue. All formatting decisions live here, none in domain.

pub mod table;
