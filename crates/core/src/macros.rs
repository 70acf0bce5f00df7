// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros shared by the rlog crates.
//!
//! - [`named_enum!`]: `as_str()` and `Display` for fieldless enums
//! - [`setters!`]: chainable by-value setters for config/option structs

/// Give a fieldless enum an `as_str()` and a `Display` impl that writes it.
///
/// ```ignore
/// rlog_core::named_enum! {
///     Trigger {
///         Age => "age",
///         Lines => "lines",
///     }
/// }
/// ```
#[macro_export]
macro_rules! named_enum {
    ($enum:ty { $( $variant:ident => $name:literal ),+ $(,)? }) => {
        impl $enum {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )+
                }
            }
        }

        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Generate `pub fn field(self, v: Type) -> Self` for each listed field,
/// inside an existing `impl` block. Attributes (doc comments) carry over.
///
/// ```ignore
/// impl SinkOptions {
///     rlog_core::setters! {
///         /// Lines per file before rotating
///         max_line: u64,
///         is_allow_max_line: bool,
///     }
/// }
/// ```
#[macro_export]
macro_rules! setters {
    ($( $(#[$meta:meta])* $field:ident : $ty:ty ),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $field(mut self, v: $ty) -> Self {
                self.$field = v;
                self
            }
        )*
    };
}
