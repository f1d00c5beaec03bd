//! The demo's fixed cast of nodes.

use glam::{Quat, Vec3};

use crate::config::StageLayout;
use crate::scene::{NodeId, SceneGraph};
use crate::targets::ActiveTarget;

/// Scene graph plus handles to every node the demo moves or reads.
#[derive(Debug, Clone)]
pub struct Stage {
    pub graph: SceneGraph,

    pub character: NodeId,
    pub solo: NodeId,
    pub sphere_one: NodeId,
    pub sphere_two: NodeId,
    pub camera: NodeId,

    /// Indicator parented to the camera while the camera is flown.
    pub ship: NodeId,

    layout: StageLayout,
}

impl Stage {
    /// Build the stage and place every node at its start transform.
    pub fn new(layout: StageLayout) -> Self {
        let mut graph = SceneGraph::new();
        let character = graph.add("character");
        let solo = graph.add("solo");
        let sphere_one = graph.add("sphere_one");
        let sphere_two = graph.add("sphere_two");
        let camera = graph.add("camera");
        let ship = graph.add("ship");

        let mut stage = Self {
            graph,
            character,
            solo,
            sphere_one,
            sphere_two,
            camera,
            ship,
            layout,
        };
        stage.reset();
        stage
    }

    pub fn layout(&self) -> &StageLayout {
        &self.layout
    }

    /// Put every node back at its start transform and detach the ship.
    ///
    /// The camera ends up looking at the world origin.
    pub fn reset(&mut self) {
        self.detach_ship();

        let layout = self.layout.clone();
        self.place(self.character, layout.character_position, Vec3::splat(layout.character_scale));
        self.place(self.solo, layout.solo_position, Vec3::splat(layout.solo_scale));
        self.place(self.sphere_one, layout.sphere_one_position, Vec3::splat(layout.sphere_one_radius));
        self.place(self.sphere_two, layout.sphere_two_position, Vec3::splat(layout.sphere_two_radius));
        self.place(self.camera, layout.camera_position, Vec3::ONE);
        self.place(self.ship, layout.ship_offset, Vec3::ONE);

        self.graph.node_mut(self.ship).rotate_xyz(layout.ship_rotation);
        self.graph.look_at(self.camera, Vec3::ZERO, Vec3::Y);
    }

    /// Node driven by movement keys for `target`.
    pub fn node_for(&self, target: ActiveTarget) -> NodeId {
        match target {
            ActiveTarget::Character => self.character,
            ActiveTarget::Camera => self.camera,
        }
    }

    pub fn attach_ship(&mut self) {
        self.graph.attach(self.camera, self.ship);
    }

    pub fn detach_ship(&mut self) {
        self.graph.detach(self.ship);
    }

    pub fn ship_attached(&self) -> bool {
        self.graph.node(self.ship).parent() == Some(self.camera)
    }

    fn place(&mut self, id: NodeId, position: Vec3, scale: Vec3) {
        let node = self.graph.node_mut(id);
        node.position = position;
        node.rotation = Quat::IDENTITY;
        node.scale = scale;
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(StageLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_start_transforms() {
        let stage = Stage::default();
        let graph = &stage.graph;

        assert_eq!(graph.world_position(stage.character), Vec3::ZERO);
        assert_eq!(graph.node(stage.character).rotation, Quat::IDENTITY);
        assert_eq!(graph.node(stage.solo).position, Vec3::new(-5.0, 4.0, 3.0));
        assert_eq!(graph.node(stage.sphere_two).scale, Vec3::splat(2.0));
        assert!(!stage.ship_attached());

        let camera = Vec3::new(15.0, 4.0, -2.0);
        assert_eq!(graph.world_position(stage.camera), camera);
        let view = graph.world_rotation(stage.camera) * Vec3::NEG_Z;
        assert!((view - (-camera).normalize()).length() < EPS);
    }

    #[test]
    fn test_ship_follows_camera() {
        let mut stage = Stage::default();
        stage.attach_ship();
        assert!(stage.ship_attached());

        let before = stage.graph.world_position(stage.ship);
        stage.graph.node_mut(stage.camera).translate(Vec3::new(0.0, 1.0, 0.0));
        let after = stage.graph.world_position(stage.ship);
        assert!((after - before - Vec3::Y).length() < EPS);

        stage.detach_ship();
        assert!(!stage.ship_attached());
    }

    #[test]
    fn test_reset_restores_moved_nodes() {
        let mut stage = Stage::default();
        stage.attach_ship();
        stage.graph.node_mut(stage.character).translate(Vec3::new(3.0, 0.0, 1.0));
        stage.graph.node_mut(stage.character).rotate_y(0.7);
        stage.graph.node_mut(stage.sphere_one).translate(Vec3::Z);

        stage.reset();

        assert_eq!(stage.graph.node(stage.character).position, Vec3::ZERO);
        assert_eq!(stage.graph.node(stage.character).rotation, Quat::IDENTITY);
        assert_eq!(stage.graph.node(stage.sphere_one).position, Vec3::new(-10.0, 4.0, 10.0));
        assert!(!stage.ship_attached());
    }

    #[test]
    fn test_node_for_target() {
        let stage = Stage::default();
        assert_eq!(stage.node_for(ActiveTarget::Character), stage.character);
        assert_eq!(stage.node_for(ActiveTarget::Camera), stage.camera);
    }
}
