//! Error types for the arbor core library.
//!
//! Each algorithm module owns its error enum; this module hosts the macro
//! that attaches stable machine-readable codes to them and the umbrella
//! [`ArborError`] that callers can use when driving several algorithms.

use thiserror::Error;

use crate::{
    disjoint_set::DisjointSetError, mst::MstError, redundant::RedundantEdgeError,
    shortest_path::ShortestPathError,
};

/// Generates a `Copy` code enum mirroring the variants of an error enum,
/// plus `code()` on the error and `as_str()` on the code.
///
/// Each row reads `CodeVariant => [pattern] => "STABLE_CODE"`, where the
/// bracketed pattern matches the error variant without the `Self::` prefix.
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => [$($pattern:tt)+] => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$($pattern)+ => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// Any failure raised by the arbor algorithms.
///
/// Module-level errors convert into this type with `?`, which keeps call
/// sites that mix algorithms on a single error type.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ArborError {
    /// Disjoint-set lookup or merge failed.
    #[error(transparent)]
    DisjointSet(#[from] DisjointSetError),
    /// Minimum spanning forest construction failed.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// Shortest-path computation failed.
    #[error(transparent)]
    ShortestPath(#[from] ShortestPathError),
    /// Redundant-edge resolution failed.
    #[error(transparent)]
    RedundantEdge(#[from] RedundantEdgeError),
}

define_error_codes! {
    /// Stable codes naming which algorithm raised an [`ArborError`].
    enum ArborErrorCode for ArborError {
        /// Disjoint-set lookup or merge failed.
        DisjointSet => [DisjointSet(..)] => "ARBOR_DISJOINT_SET_FAILURE",
        /// Minimum spanning forest construction failed.
        Mst => [Mst(..)] => "ARBOR_MST_FAILURE",
        /// Shortest-path computation failed.
        ShortestPath => [ShortestPath(..)] => "ARBOR_SHORTEST_PATH_FAILURE",
        /// Redundant-edge resolution failed.
        RedundantEdge => [RedundantEdge(..)] => "ARBOR_REDUNDANT_EDGE_FAILURE",
    }
}

impl ArborError {
    /// Returns the stable code of the wrapped module error.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{ArborError, RedundantEdgeError};
    ///
    /// let error = ArborError::from(RedundantEdgeError::NoValidDefectFound);
    /// assert_eq!(error.code().as_str(), "ARBOR_REDUNDANT_EDGE_FAILURE");
    /// assert_eq!(error.detail_code(), "REDUNDANT_EDGE_NO_VALID_DEFECT");
    /// ```
    #[must_use]
    pub const fn detail_code(&self) -> &'static str {
        match self {
            Self::DisjointSet(error) => error.code().as_str(),
            Self::Mst(error) => error.code().as_str(),
            Self::ShortestPath(error) => error.code().as_str(),
            Self::RedundantEdge(error) => error.code().as_str(),
        }
    }
}

/// Convenient result alias for arbor operations.
pub type Result<T, E = ArborError> = core::result::Result<T, E>;
