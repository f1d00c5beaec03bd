//! Arena of nodes with parent/child links.

use glam::{Mat4, Quat, Vec3};

use glide_motion::camera_look_at;

use super::node::{Node, NodeId};

/// Owns every node of a scene.
///
/// # Example
///
/// ```
/// use glam::Vec3;
/// use glide_demo::scene::SceneGraph;
///
/// let mut graph = SceneGraph::new();
/// let camera = graph.add("camera");
/// let ship = graph.add("ship");
/// graph.node_mut(camera).position = Vec3::new(0.0, 4.0, 5.0);
/// graph.node_mut(ship).position = Vec3::new(0.0, -1.0, -4.0);
/// graph.attach(camera, ship);
///
/// assert_eq!(graph.world_position(ship), Vec3::new(0.0, 3.0, 1.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root node with an identity transform.
    pub fn add(&mut self, name: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name));
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node.
    ///
    /// # Panics
    ///
    /// If `id` came from a different graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Get a node mutably.
    ///
    /// # Panics
    ///
    /// If `id` came from a different graph.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Iterate over every node id and node.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    /// Make `child` a child of `parent`, detaching it from any previous
    /// parent. The child's local transform is kept as-is.
    ///
    /// Attaching a node to itself or to one of its descendants is ignored.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.is_ancestor(child, parent) {
            log::debug!(
                "refusing to attach {} under {}: would form a cycle",
                self.node(child).name,
                self.node(parent).name
            );
            return;
        }

        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Make `child` a root node again. The local transform is kept.
    pub fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.nodes[child.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != child);
        }
    }

    /// Check if `ancestor` appears on `node`'s parent chain.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.node(node).parent;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }

    // ========================================================================
    // World-Space Queries
    // ========================================================================

    /// Full world transform.
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let node = self.node(id);
        match node.parent {
            Some(parent) => self.world_matrix(parent) * node.local_matrix(),
            None => node.local_matrix(),
        }
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).w_axis.truncate()
    }

    /// World rotation, ignoring scale.
    pub fn world_rotation(&self, id: NodeId) -> Quat {
        let node = self.node(id);
        match node.parent {
            Some(parent) => (self.world_rotation(parent) * node.rotation).normalize(),
            None => node.rotation,
        }
    }

    /// Direction of the node's local +Z in world space.
    pub fn world_direction(&self, id: NodeId) -> Vec3 {
        self.world_rotation(id) * Vec3::Z
    }

    // ========================================================================
    // Orientation
    // ========================================================================

    /// Turn a root node so its local -Z faces `target`.
    ///
    /// Leaves the rotation unchanged when the node sits on `target` or the
    /// view would be straight along `up`.
    pub fn look_at(&mut self, id: NodeId, target: Vec3, up: Vec3) {
        let eye = self.world_position(id);
        match camera_look_at(eye, target, up) {
            Some(rotation) => self.node_mut(id).rotation = rotation,
            None => log::debug!("look_at ignored for {}: degenerate view", self.node(id).name),
        }
    }
}
