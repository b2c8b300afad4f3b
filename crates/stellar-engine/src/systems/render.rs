use crate::assets::textures::TextureRegistry;
use crate::components::mesh::Shape;
use crate::components::node::Node;
use crate::renderer::instance::{RenderBuffer, RenderInstance, SHAPE_SPHERE, SHAPE_TORUS};

/// Build the render buffer from the scene graph.
///
/// Walks every active node with a mesh, resolves its texture handles
/// through the registry (unresolved handles flatten to the untextured
/// sentinel slot), and packs one instance per mesh. The buffer is read
/// by the host renderer for the next paint — rendering never feeds back
/// into scene state.
pub fn build_render_buffer<'a>(
    nodes: impl Iterator<Item = &'a Node>,
    textures: &TextureRegistry,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    for node in nodes {
        if !node.active {
            continue;
        }

        let mesh = match &node.mesh {
            Some(m) => m,
            None => continue,
        };

        let (shape, param_a, param_b, seg_a, seg_b) = match mesh.shape {
            Shape::Sphere { radius, segments } => {
                (SHAPE_SPHERE, radius, 0.0, segments as f32, 0.0)
            }
            Shape::Torus { radius, tube, radial_segments, tubular_segments } => {
                (SHAPE_TORUS, radius, tube, radial_segments as f32, tubular_segments as f32)
            }
        };

        buffer.push(RenderInstance {
            x: node.pos.x,
            y: node.pos.y,
            z: node.pos.z,
            rot_x: node.rotation.x,
            rot_y: node.rotation.y,
            rot_z: node.rotation.z,
            shape,
            param_a,
            param_b,
            seg_a,
            seg_b,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            map_slot: textures.slot_for(mesh.map),
            normal_slot: textures.slot_for(mesh.normal_map),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::NodeId;
    use crate::components::mesh::MeshComponent;
    use crate::renderer::instance::RenderBuffer;
    use glam::Vec3;

    #[test]
    fn packs_sphere_and_torus_params() {
        let textures = TextureRegistry::new();
        let nodes = vec![
            Node::new(NodeId(1))
                .with_pos(Vec3::new(0.0, 0.0, -50.0))
                .with_mesh(MeshComponent::sphere(20.0, 32)),
            Node::new(NodeId(2))
                .with_mesh(MeshComponent::torus(117.0, 0.1, 30, 200)),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(nodes.iter(), &textures, &mut buffer);

        assert_eq!(buffer.instance_count(), 2);
        assert_eq!(buffer.instances[0].shape, SHAPE_SPHERE);
        assert_eq!(buffer.instances[0].param_a, 20.0);
        assert_eq!(buffer.instances[0].z, -50.0);
        assert_eq!(buffer.instances[1].shape, SHAPE_TORUS);
        assert_eq!(buffer.instances[1].param_a, 117.0);
        assert_eq!(buffer.instances[1].param_b, 0.1);
        assert_eq!(buffer.instances[1].seg_b, 200.0);
    }

    #[test]
    fn inactive_and_meshless_nodes_are_skipped() {
        let textures = TextureRegistry::new();
        let mut hidden = Node::new(NodeId(1)).with_mesh(MeshComponent::sphere(1.0, 8));
        hidden.active = false;
        let nodes = vec![hidden, Node::new(NodeId(2))];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(nodes.iter(), &textures, &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }

    #[test]
    fn pending_texture_renders_untextured_then_resolves() {
        use crate::assets::textures::UNTEXTURED_SLOT;

        let mut textures = TextureRegistry::new();
        let id = textures.load("Images/earth.jpg");
        let nodes = vec![
            Node::new(NodeId(1)).with_mesh(MeshComponent::sphere(5.0, 32).with_map(id)),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(nodes.iter(), &textures, &mut buffer);
        assert_eq!(buffer.instances[0].map_slot, UNTEXTURED_SLOT);

        textures.resolve(id, 4);
        build_render_buffer(nodes.iter(), &textures, &mut buffer);
        assert_eq!(buffer.instances[0].map_slot, 4.0);
    }
}
