use std::sync;

use winit::{event, event_loop, keyboard, window};

use crate::{geom, scene, state, vertex, wire};
use crate::scene::camera;

/// Interactive window that draws the scene as coloured line segments.
///
/// Nothing touches the GPU until `show`, which uploads every line
/// in one buffer and then runs the event loop until the window closes.
pub struct Viewport {
    config: crate::Config,
    lines: Vec<vertex::Vertex>,
    bounds: geom::Bounds,
    labels: [String; 3],
    equal: bool,
}

impl Viewport {
    pub fn new(config: &crate::Config) -> Self {
        Self {
            config: config.clone(),
            lines: Vec::new(),
            bounds: geom::Bounds::empty(),
            labels: scene::AXIS_LABELS.map(String::from),
            equal: false,
        }
    }

    fn title(&self) -> String {
        let [x, y, z] = &self.labels;

        format!("BVH leaves [{x}: red, {y}: green, {z}: blue]")
    }
}

impl scene::Sink for Viewport {
    fn line(&mut self, edge: wire::Edge, style: scene::LineStyle) {
        self.bounds.extend(edge.a);
        self.bounds.extend(edge.b);

        self.lines.extend(vertex::Vertex::line(edge, style.colour));
    }

    fn label_axes(&mut self, labels: [&str; 3]) {
        self.labels = labels.map(String::from);
    }

    fn equal_aspect(&mut self) {
        self.equal = true;
    }

    fn show(self) -> anyhow::Result<()> {
        let title = self.title();

        let Self {
            config,
            mut lines,
            bounds,
            equal, ..
        } = self;

        // The gizmo also keeps the vertex buffer from ever being empty
        lines.extend(vertex::axes(bounds));

        let model = camera::normalize(bounds, equal);

        let event_loop = event_loop::EventLoop::new()?;
            event_loop.set_control_flow(event_loop::ControlFlow::Wait);

        let window = window::WindowBuilder::new()
            .with_title(title)
            .with_inner_size(config.size)
            .build(&event_loop)?;

        // This needs to be shared with State
        let window = sync::Arc::new(window);

        let mut camera = camera::Camera::new(window.inner_size());
        let mut controller = camera::CameraController::default();

        let mut state = pollster::block_on(state::State::new(
            window.clone(),
            &lines,
            camera.uniform(model),
            config.background,
        ))?;

        log::info!(
            "Viewport open with {} line segments, close the window to exit",
            lines.len() / 2
        );

        let mut failure = None;

        event_loop.run(|event, target| match event {
            event::Event::WindowEvent { event, window_id }
                if window_id == window.id() => {

                if controller.handle_event(&event) {
                    window.request_redraw();
                }

                match event {
                    event::WindowEvent::CloseRequested | //
                    event::WindowEvent::KeyboardInput {
                        event: event::KeyEvent {
                            state: event::ElementState::Pressed,
                            logical_key: keyboard::Key::Named(keyboard::NamedKey::Escape), ..
                        }, ..
                    } => target.exit(),
                    event::WindowEvent::Resized(physical_size) => {
                        state.resize(physical_size);
                        camera.resize(state.window_size());

                        window.request_redraw();
                    },
                    event::WindowEvent::RedrawRequested => {
                        controller.update(&mut camera);

                        state.update_camera_buffer(camera.uniform(model));

                        match state.render() {
                            Ok(()) => { /*  */ },
                            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => //
                                state.reconfigure(),
                            Err(e @ wgpu::SurfaceError::OutOfMemory) => {
                                failure = Some(e);

                                target.exit();
                            },
                            Err(e) => log::warn!("Skipped frame: {e}"),
                        }
                    },
                    _ => { /*  */ },
                }
            },
            event::Event::AboutToWait => {
                // Keep polling while a key is held
                if controller.is_active() {
                    window.request_redraw();

                    target.set_control_flow(event_loop::ControlFlow::Poll);
                } else {
                    target.set_control_flow(event_loop::ControlFlow::Wait);
                }
            },
            _ => { /*  */ },
        })?;

        match failure {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}
