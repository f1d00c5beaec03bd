//! Glide - Main Entry Point
//!
//! Opens a window onto the demo stage and drives it from the keyboard.
//! Set `GLIDE_CONFIG` to a JSON file to override tuning or layout, and
//! `RUST_LOG=debug` to watch state transitions.

use anyhow::Context as _;
use glide_demo::{Demo, DemoConfig, HostRequest, Key as DemoKey, KeyEvent, Modifiers as DemoModifiers, NodeId, StatusReport};
use glide_renderer::{Shape, ShapeKind, ViewCamera};
use three_d::*;

/// Convert a key from the window into the demo's key set.
fn map_key(key: Key) -> Option<DemoKey> {
    let key = match key {
        Key::A => DemoKey::A,
        Key::B => DemoKey::B,
        Key::D => DemoKey::D,
        Key::E => DemoKey::E,
        Key::F => DemoKey::F,
        Key::H => DemoKey::H,
        Key::L => DemoKey::L,
        Key::M => DemoKey::M,
        Key::N => DemoKey::N,
        Key::O => DemoKey::O,
        Key::P => DemoKey::P,
        Key::Q => DemoKey::Q,
        Key::R => DemoKey::R,
        Key::S => DemoKey::S,
        Key::T => DemoKey::T,
        Key::V => DemoKey::V,
        Key::W => DemoKey::W,
        Key::X => DemoKey::X,
        Key::Y => DemoKey::Y,
        Key::Z => DemoKey::Z,
        Key::Num0 => DemoKey::Num0,
        _ => return None,
    };
    Some(key)
}

fn map_modifiers(modifiers: &Modifiers) -> DemoModifiers {
    let mut mods = DemoModifiers::NONE;
    if modifiers.shift {
        mods.insert(DemoModifiers::SHIFT);
    }
    if modifiers.ctrl {
        mods.insert(DemoModifiers::CTRL);
    }
    if modifiers.alt {
        mods.insert(DemoModifiers::ALT);
    }
    if modifiers.command && !modifiers.ctrl {
        mods.insert(DemoModifiers::SUPER);
    }
    mods
}

fn to_three_d(matrix: glam::Mat4) -> Mat4 {
    Mat4::from(matrix.to_cols_array_2d())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DemoConfig::from_env().context("loading demo config")?;
    let mut demo = Demo::new(config);

    // Create window
    let window = Window::new(WindowSettings {
        title: "Glide".to_string(),
        max_size: Some((1920, 1080)),
        ..Default::default()
    })
    .map_err(|e| anyhow::anyhow!("failed to open window: {e}"))?;

    let context = window.gl();

    // One mesh per visible node
    let mut bodies: Vec<(NodeId, Gm<Mesh, ColorMaterial>)> = demo
        .stage()
        .graph
        .iter()
        .filter(|(_, node)| Shape::is_visible(&node.name))
        .map(|(id, node)| {
            let shape = Shape::for_node(&node.name);
            let cpu_mesh = match shape.kind {
                ShapeKind::Sphere => CpuMesh::sphere(32),
                ShapeKind::Cube => CpuMesh::cube(),
            };
            let [r, g, b, a] = shape.color;
            let body = Gm::new(
                Mesh::new(&context, &cpu_mesh),
                ColorMaterial {
                    color: Srgba::new(r, g, b, a),
                    ..Default::default()
                },
            );
            (id, body)
        })
        .collect();

    // Floor
    let mut floor = Gm::new(
        Mesh::new(&context, &CpuMesh::square()),
        ColorMaterial {
            color: Srgba::new(90, 90, 95, 255),
            ..Default::default()
        },
    );
    floor.set_transformation(
        Mat4::from_translation(vec3(0.0, -1.5, 0.0))
            * Mat4::from_scale(50.0)
            * Mat4::from_angle_x(degrees(-90.0)),
    );

    let mut view = {
        let stage = demo.stage();
        ViewCamera::from_node(
            stage.graph.world_position(stage.camera),
            stage.graph.world_rotation(stage.camera),
        )
    };
    let mut last_status: Option<StatusReport> = None;

    log::info!("glide started: M toggles fly mode, N switches target, L looks, Q quits");

    // Main loop
    window.render_loop(move |mut frame_input| {
        // Handle input events
        for event in frame_input.events.iter() {
            if let Event::KeyPress { kind, modifiers, handled } = event {
                if *handled {
                    continue;
                }
                let Some(key) = map_key(*kind) else {
                    continue;
                };

                match demo.handle_key(&KeyEvent::new(key, map_modifiers(modifiers))) {
                    Some(HostRequest::Quit) => {
                        return FrameOutput {
                            exit: true,
                            ..Default::default()
                        };
                    }
                    Some(HostRequest::ToggleFullscreen) => {
                        log::info!("fullscreen toggling is not available in this window backend");
                    }
                    None => {}
                }
            }
        }

        // Advance motion
        demo.update((frame_input.elapsed_time / 1000.0) as f32);

        let status = demo.status();
        if last_status.map_or(true, |last| !last.same_alerts(&status)) {
            log::info!("{}", status.to_string().replace('\n', " | "));
        }
        last_status = Some(status);

        // Sync node meshes
        let stage = demo.stage();
        for (id, body) in bodies.iter_mut() {
            body.set_transformation(to_three_d(stage.graph.world_matrix(*id)));
        }

        // View from the camera node
        view.sync(
            stage.graph.world_position(stage.camera),
            stage.graph.world_rotation(stage.camera),
        );
        view.aspect = frame_input.viewport.aspect();
        let eye = view.position;
        let target = view.target();
        let up = view.up();
        let camera = Camera::new_perspective(
            frame_input.viewport,
            vec3(eye.x, eye.y, eye.z),
            vec3(target.x, target.y, target.z),
            vec3(up.x, up.y, up.z),
            degrees(view.fov),
            view.near,
            view.far,
        );

        // The ship is only shown while it rides with the camera
        let ship_visible = stage.ship_attached();
        let visible: Vec<&Gm<Mesh, ColorMaterial>> = bodies
            .iter()
            .filter(|(id, _)| ship_visible || *id != stage.ship)
            .map(|(_, body)| body)
            .collect();

        // Render
        frame_input
            .screen()
            .clear(ClearState::color_and_depth(0.5, 0.5, 0.5, 1.0, 1.0))
            .render(&camera, &[&floor], &[])
            .render(&camera, visible.as_slice(), &[]);

        FrameOutput::default()
    });

    Ok(())
}
