use crate::entities::VID;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MutateGraphError {
    #[error("Vertex with label '{0}' already exists")]
    LabelExists(String),
    #[error("No vertex with id {0}")]
    VertexNotFound(VID),
    #[error("No vertex with label '{0}'")]
    LabelNotFound(String),
    #[error("Self loops are not supported, tried to link vertex {0} to itself")]
    SelfLoop(String),
    #[error("No edge between {src} and {dst}")]
    MissingEdge { src: VID, dst: VID },
}
