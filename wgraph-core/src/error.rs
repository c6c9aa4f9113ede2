//! Error types for the weighted graph.
//!
//! Defines the error enum exposed by the public API, its stable codes, and a
//! convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
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

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
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
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Why a vertex index was refused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VertexRejection {
    /// The index is not below the graph's vertex count.
    OutOfRange {
        /// Number of vertices the graph was built with.
        vertex_count: usize,
    },
    /// Both endpoints of a mutation named the same vertex.
    SelfLoop,
}

impl fmt::Display for VertexRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { vertex_count } => {
                write!(f, "outside 0..{vertex_count}")
            }
            Self::SelfLoop => f.write_str("self-loops are not allowed"),
        }
    }
}

/// Error type produced by [`crate::WeightedGraph`] queries and mutations.
///
/// Every failing call validates before touching state, so a returned error
/// guarantees the graph is unchanged.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A vertex index was out of range, or a mutation named the same vertex
    /// twice.
    #[error("received invalid vertex {vertex}: {reason}")]
    InvalidVertex {
        /// The offending vertex index.
        vertex: usize,
        /// Which check the vertex failed.
        reason: VertexRejection,
    },
    /// A mutation supplied a negative, infinite, or NaN weight.
    #[error("received invalid weight {weight}")]
    InvalidWeight {
        /// The rejected weight as supplied.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex index was out of range or formed a self-loop.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
        /// A mutation supplied an unusable weight.
        InvalidWeight => InvalidWeight { .. } => "GRAPH_INVALID_WEIGHT",
    }
}

impl GraphError {
    pub(crate) const fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Self::InvalidVertex {
            vertex,
            reason: VertexRejection::OutOfRange { vertex_count },
        }
    }

    pub(crate) const fn self_loop(vertex: usize) -> Self {
        Self::InvalidVertex {
            vertex,
            reason: VertexRejection::SelfLoop,
        }
    }
}

/// Convenient alias for results returned by the graph API.
pub type Result<T> = core::result::Result<T, GraphError>;
