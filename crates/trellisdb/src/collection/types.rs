//! Field data types and vector attribute codes.
//!
//! Collections persist numeric codes rather than enum variants so records
//! stay readable by other tooling. The enums here own the mapping in both
//! directions.

use std::str::FromStr;

use crate::error::Error;

/// The type of a collection field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    String,
    FloatVector,
    BinaryVector,
}

impl DataType {
    /// The stable numeric code persisted in field records.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Bool => 1,
            Self::Int8 => 2,
            Self::Int16 => 3,
            Self::Int32 => 4,
            Self::Int64 => 5,
            Self::Float => 10,
            Self::Double => 11,
            Self::String => 20,
            Self::FloatVector => 100,
            Self::BinaryVector => 101,
        }
    }

    /// Recover a data type from its persisted code.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Bool),
            2 => Some(Self::Int8),
            3 => Some(Self::Int16),
            4 => Some(Self::Int32),
            5 => Some(Self::Int64),
            10 => Some(Self::Float),
            11 => Some(Self::Double),
            20 => Some(Self::String),
            100 => Some(Self::FloatVector),
            101 => Some(Self::BinaryVector),
            _ => None,
        }
    }

    /// Whether this is one of the vector types.
    ///
    /// Vector fields contribute to a collection's dimension, metric, and
    /// index engine; scalar fields never do.
    #[must_use]
    pub const fn is_vector(self) -> bool {
        matches!(self, Self::FloatVector | Self::BinaryVector)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool => write!(f, "Bool"),
            Self::Int8 => write!(f, "Int8"),
            Self::Int16 => write!(f, "Int16"),
            Self::Int32 => write!(f, "Int32"),
            Self::Int64 => write!(f, "Int64"),
            Self::Float => write!(f, "Float"),
            Self::Double => write!(f, "Double"),
            Self::String => write!(f, "String"),
            Self::FloatVector => write!(f, "FloatVector"),
            Self::BinaryVector => write!(f, "BinaryVector"),
        }
    }
}

/// Distance metric used to compare vectors in a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricType {
    L2,
    Ip,
    Hamming,
    Jaccard,
    Tanimoto,
}

impl MetricType {
    /// The numeric code persisted in collection records.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::L2 => 1,
            Self::Ip => 2,
            Self::Hamming => 3,
            Self::Jaccard => 4,
            Self::Tanimoto => 5,
        }
    }
}

impl FromStr for MetricType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L2" => Ok(Self::L2),
            "IP" => Ok(Self::Ip),
            "HAMMING" => Ok(Self::Hamming),
            "JACCARD" => Ok(Self::Jaccard),
            "TANIMOTO" => Ok(Self::Tanimoto),
            _ => Err(Error::malformed(format!("unknown metric type: {s}"))),
        }
    }
}

impl std::fmt::Display for MetricType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::L2 => write!(f, "L2"),
            Self::Ip => write!(f, "IP"),
            Self::Hamming => write!(f, "HAMMING"),
            Self::Jaccard => write!(f, "JACCARD"),
            Self::Tanimoto => write!(f, "TANIMOTO"),
        }
    }
}

/// Index engine used to build the vector index of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineType {
    Flat,
    IvfFlat,
    IvfSq8,
    IvfPq,
    Hnsw,
    Annoy,
}

impl EngineType {
    /// The numeric code persisted in collection records.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Flat => 1,
            Self::IvfFlat => 2,
            Self::IvfSq8 => 3,
            Self::IvfPq => 4,
            Self::Hnsw => 5,
            Self::Annoy => 6,
        }
    }
}

impl FromStr for EngineType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FLAT" => Ok(Self::Flat),
            "IVF_FLAT" => Ok(Self::IvfFlat),
            "IVF_SQ8" => Ok(Self::IvfSq8),
            "IVF_PQ" => Ok(Self::IvfPq),
            "HNSW" => Ok(Self::Hnsw),
            "ANNOY" => Ok(Self::Annoy),
            _ => Err(Error::malformed(format!("unknown index type: {s}"))),
        }
    }
}

impl std::fmt::Display for EngineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flat => write!(f, "FLAT"),
            Self::IvfFlat => write!(f, "IVF_FLAT"),
            Self::IvfSq8 => write!(f, "IVF_SQ8"),
            Self::IvfPq => write!(f, "IVF_PQ"),
            Self::Hnsw => write!(f, "HNSW"),
            Self::Annoy => write!(f, "ANNOY"),
        }
    }
}
