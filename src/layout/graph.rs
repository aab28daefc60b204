//! GraphIR: loads a parsed model into a petgraph multigraph for layout.
//!
//! Node `i` of the digraph is vertex slot `i` of the model and edges are
//! added in model order, so petgraph indices and iteration order line up with
//! the model one-to-one. Construction is where the render-time invariants on
//! edges are enforced.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::error::RenderError;
use crate::syntax::types::{Edge, Flags, GraphModel, is_invisible};

/// Node data stored in the digraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexData {
    pub name: String,
    pub visible: bool,
}

/// Graph intermediate representation.
pub struct GraphIR {
    pub digraph: DiGraph<VertexData, ()>,
    pub flags: Flags,
}

impl GraphIR {
    /// Build a GraphIR from a parsed model.
    ///
    /// Fails if an edge points outside the vertex sequence or touches an
    /// invisible vertex.
    pub fn from_model(model: &GraphModel) -> Result<Self, RenderError> {
        let mut digraph = DiGraph::with_capacity(model.vertices.len(), model.edges.len());
        for name in &model.vertices {
            digraph.add_node(VertexData {
                name: name.clone(),
                visible: !is_invisible(name),
            });
        }

        for edge in &model.edges {
            let from = endpoint(&digraph, edge.from)?;
            let to = endpoint(&digraph, edge.to)?;
            digraph.add_edge(from, to, ());
        }

        debug!(
            vertices = digraph.node_count(),
            edges = digraph.edge_count(),
            "built graph IR"
        );
        Ok(Self {
            digraph,
            flags: model.flags,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Vertex data in slot order.
    pub fn vertices(&self) -> impl Iterator<Item = &VertexData> + '_ {
        self.digraph.node_indices().map(move |i| &self.digraph[i])
    }

    /// Edges as index pairs, in model order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.digraph
            .edge_references()
            .map(|e| Edge::new(e.source().index(), e.target().index()))
    }
}

fn endpoint(digraph: &DiGraph<VertexData, ()>, index: usize) -> Result<NodeIndex, RenderError> {
    let node = NodeIndex::new(index);
    let data = digraph.node_weight(node).ok_or(RenderError::VertexOutOfRange {
        index,
        count: digraph.node_count(),
    })?;
    if !data.visible {
        return Err(RenderError::InvisibleEndpoint {
            name: data.name.clone(),
        });
    }
    Ok(node)
}
