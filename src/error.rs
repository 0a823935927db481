use thiserror::Error as ThisError;

use crate::zcl::{AttrId, ClusterId};

#[derive(ThisError, Debug)]
pub enum QuirkError {
    #[error("duplicate attribute 0x{attr_id:04X} in extension {cluster}")]
    DuplicateAttribute {
        cluster: &'static str,
        attr_id: AttrId,
    },

    #[error("attribute 0x{attr_id:04X} in extension {cluster} collides with the inherited table")]
    AttributeCollision {
        cluster: &'static str,
        attr_id: AttrId,
    },

    #[error("quirk {quirk}: replacement endpoints do not mirror the signature endpoints")]
    EndpointSetMismatch { quirk: &'static str },

    #[error("quirk {quirk}: unknown cluster id 0x{cluster_id:04X}")]
    UnknownCluster {
        quirk: &'static str,
        cluster_id: ClusterId,
    },

    #[error("quirk {0} is already registered")]
    DuplicateQuirk(&'static str),

    #[error("device does not match quirk {0}")]
    NoMatch(&'static str),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuirkError>;
