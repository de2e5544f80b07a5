use winit::{dpi, event, keyboard};

use crate::geom;

// What the line shader reads at group(0) binding(0)
#[repr(C)]
#[derive(bytemuck::Pod, bytemuck::Zeroable)]
#[derive(Clone, Copy)]
#[derive(Debug)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
}

// Maps scene coordinates into a box of unit size around the origin.
// With `equal` the largest axis decides the scale for all three
pub fn normalize(bounds: geom::Bounds, equal: bool) -> glam::Mat4 {
    use geom::V3Ops as _;

    let bounds = bounds.or_unit();
    let size = bounds.size();

    let scale = if equal {
        glam::Vec3::splat(1. / size.extent())
    } else {
        glam::Vec3::from_array(size).recip()
    };

    glam::Mat4::from_scale(scale) * //
        glam::Mat4::from_translation(-glam::Vec3::from_array(bounds.center()))
}

#[derive(Clone, Copy)]
#[derive(Debug)]
pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
    pub dist: f32,
    pub at: glam::Vec3,
    pub aspect: f32,
}

impl Camera {
    const FOV: f32 = std::f32::consts::FRAC_PI_4;
    const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

    pub fn new(size: dpi::PhysicalSize<u32>) -> Self {
        Self {
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 0.5,
            dist: 2.5,
            at: glam::Vec3::ZERO,
            aspect: aspect(size),
        }
    }

    pub fn resize(&mut self, size: dpi::PhysicalSize<u32>) {
        self.aspect = aspect(size);
    }

    pub fn eye(&self) -> glam::Vec3 {
        let Self { yaw, pitch, dist, at, .. } = *self;

        at + dist * glam::Vec3::new(
            pitch.cos() * yaw.cos(),
            pitch.sin(),
            pitch.cos() * yaw.sin(),
        )
    }

    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch)
            .clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    pub fn zoom(&mut self, steps: f32) {
        self.dist = (self.dist * 0.9f32.powf(steps)).clamp(0.05, 100.);
    }

    // Moves the target in the view plane, scaled by distance
    // so a drag covers the same share of the screen at any zoom
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let forward = (self.at - self.eye()).normalize();
        let right = forward.cross(glam::Vec3::Y).normalize();
        let up = right.cross(forward);

        self.at += (up * dy - right * dx) * self.dist;
    }

    pub fn uniform(&self, model: glam::Mat4) -> CameraUniform {
        let view = glam::Mat4::look_at_rh(self.eye(), self.at, glam::Vec3::Y);
        let proj = glam::Mat4::perspective_rh(Self::FOV, self.aspect, 0.01, 1000.);

        CameraUniform {
            view_proj: (proj * view).to_cols_array_2d(),
            model: model.to_cols_array_2d(),
        }
    }
}

fn aspect(size: dpi::PhysicalSize<u32>) -> f32 {
    size.width.max(1) as f32 / size.height.max(1) as f32
}

#[derive(Clone, Copy)]
#[derive(Debug, Default)]
enum Drag {
    #[default]
    None,
    Orbit,
    Pan,
}

// Keyboard and mouse state between frames
#[derive(Clone, Copy)]
#[derive(Debug, Default)]
pub struct CameraController {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    scroll: f32,
    drag: Drag,
    cursor: Option<dpi::PhysicalPosition<f64>>,
    moved: (f32, f32),
}

impl CameraController {
    const SPEED: f32 = 0.0314;
    const DRAG_SPEED: f32 = 0.005;
    const PAN_SPEED: f32 = 0.0015;

    pub fn handle_event(&mut self, event: &event::WindowEvent) -> bool {
        match event {
            event::WindowEvent::KeyboardInput {
                event: event::KeyEvent {
                    logical_key: keyboard::Key::Named(key),
                    state, ..
                }, ..
            } => {
                let pressed = matches!(state, event::ElementState::Pressed);

                let mut handled = true;
                match *key {
                    keyboard::NamedKey::ArrowLeft => self.left = pressed,
                    keyboard::NamedKey::ArrowRight => self.right = pressed,
                    keyboard::NamedKey::ArrowUp => self.up = pressed,
                    keyboard::NamedKey::ArrowDown => self.down = pressed,
                    _ => handled = false,
                }

                handled
            },
            event::WindowEvent::MouseWheel { delta, .. } => {
                self.scroll += match delta {
                    event::MouseScrollDelta::LineDelta(_, y) => *y,
                    event::MouseScrollDelta::PixelDelta(
                        dpi::PhysicalPosition { y, .. }
                    ) => y.signum() as f32,
                };

                true
            },
            event::WindowEvent::MouseInput { state, button, .. } => {
                let pressed = matches!(state, event::ElementState::Pressed);

                self.drag = match (button, pressed) {
                    (event::MouseButton::Left, true) => Drag::Orbit,
                    (event::MouseButton::Right, true) => Drag::Pan,
                    (_, false) => Drag::None,
                    _ => self.drag,
                };

                true
            },
            event::WindowEvent::CursorMoved { position, .. } => {
                if let (Some(prev), Drag::Orbit | Drag::Pan) = (self.cursor, self.drag) {
                    self.moved.0 += (position.x - prev.x) as f32;
                    self.moved.1 += (position.y - prev.y) as f32;
                }

                self.cursor = Some(*position);

                true
            },
            _ => false,
        }
    }

    // Held keys keep moving the camera without new events
    pub fn is_active(&self) -> bool {
        self.left || self.right || self.up || self.down
    }

    // Applies whatever input arrived since the last frame.
    // Returns false if the camera did not move
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let mut d_yaw = 0.;
        let mut d_pitch = 0.;

        if self.left { d_yaw += Self::SPEED; }
        if self.right { d_yaw -= Self::SPEED; }
        if self.up { d_pitch += Self::SPEED; }
        if self.down { d_pitch -= Self::SPEED; }

        let (dx, dy) = std::mem::take(&mut self.moved);

        match self.drag {
            Drag::Orbit => {
                d_yaw += dx * Self::DRAG_SPEED;
                d_pitch += dy * Self::DRAG_SPEED;
            },
            Drag::Pan => camera.pan(dx * Self::PAN_SPEED, dy * Self::PAN_SPEED),
            Drag::None => { /*  */ },
        }

        let scroll = std::mem::take(&mut self.scroll);

        if scroll != 0. {
            camera.zoom(scroll);
        }

        if d_yaw != 0. || d_pitch != 0. {
            camera.orbit(d_yaw, d_pitch);
        }

        d_yaw != 0. || d_pitch != 0. || dx != 0. || dy != 0. || scroll != 0.
    }
}
