//! Sandbox application: a box falling onto a ground slab.

use fable_app::{AppContext, Entity, FableApp, FrameContext};
use fable_core::Transform;
use fable_entity::render::{Camera, Light, Material, MeshFilter, MeshHandle, MeshRenderer};
use fable_entity::ComponentKind;
use fable_physics::{BoxCollider, Rigidbody};
use glam::{Mat4, Vec3};
use tracing::{debug, info};

/// Log the scene every this many frames.
const LOG_INTERVAL: u64 = 30;
/// Aspect ratio of the virtual framebuffer.
const ASPECT: f32 = 16.0 / 9.0;
/// Mesh handle of the built-in cube.
const CUBE_MESH: MeshHandle = MeshHandle(0);

/// Sandbox parameters (from CLI or defaults).
#[derive(Debug, Clone)]
pub struct SandboxParams {
    pub frames: u64,
    pub fps: u32,
    pub start_paused: bool,
    pub toggle_at: Option<u64>,
}

impl Default for SandboxParams {
    fn default() -> Self {
        Self {
            frames: 180,
            fps: 60,
            start_paused: false,
            toggle_at: None,
        }
    }
}

impl SandboxParams {
    /// Parse sandbox parameters from command line arguments.
    pub fn from_args() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut params = Self::default();
        let args: Vec<String> = args.into_iter().collect();

        let mut i = 0;
        while i < args.len() {
            let value = args.get(i + 1);
            match args[i].as_str() {
                "--frames" => {
                    if let Some(v) = value.and_then(|v| v.parse().ok()) {
                        params.frames = v;
                        i += 1;
                    }
                }
                "--fps" => {
                    if let Some(v) = value.and_then(|v| v.parse().ok()) {
                        params.fps = v;
                        i += 1;
                    }
                }
                "--toggle-at" => {
                    if let Some(v) = value.and_then(|v| v.parse().ok()) {
                        params.toggle_at = Some(v);
                        i += 1;
                    }
                }
                "--paused" => params.start_paused = true,
                _ => {}
            }
            i += 1;
        }

        params
    }
}

/// Sandbox application state.
pub struct Sandbox {
    params: SandboxParams,
    /// Index of the falling box in the scene.
    falling: usize,
    /// Draw calls issued by the last render.
    draw_calls: usize,
    contacts_seen: usize,
    /// Physics tick of the last report already counted.
    seen_tick: u64,
}

impl FableApp for Sandbox {
    fn init(ctx: &mut AppContext) -> anyhow::Result<Self> {
        let params = SandboxParams::from_args();
        let world = *ctx.physics.world();

        ctx.spawn(
            Entity::empty("camera")
                .with_component(Transform::from_degrees(
                    Vec3::new(0.0, 3.0, 10.0),
                    Vec3::new(-15.0, 0.0, 0.0),
                    Vec3::ONE,
                ))
                .with_component(Camera::default()),
        );
        ctx.spawn(
            Entity::empty("sun")
                .with_component(Transform::default())
                .with_component(Light::directional(Vec3::new(-0.3, -1.0, -0.5))),
        );
        ctx.spawn(
            Entity::empty("ground")
                .with_component(Transform::new(Vec3::ZERO, Vec3::ZERO, Vec3::new(5.0, 1.0, 5.0)))
                .with_component(MeshFilter::cube(CUBE_MESH))
                .with_component(MeshRenderer::new([Material::lit(Vec3::new(0.4, 0.6, 0.3))]))
                .with_component(BoxCollider::from_size(Vec3::new(5.0, 1.0, 5.0))?),
        );
        let falling = ctx.spawn(
            Entity::empty("box")
                .with_component(Transform::from_degrees(
                    Vec3::new(0.0, 4.0, 0.0),
                    Vec3::new(0.0, 0.0, 10.0),
                    Vec3::ONE,
                ))
                .with_component(MeshFilter::cube(CUBE_MESH))
                .with_component(MeshRenderer::new([Material::lit(Vec3::new(0.8, 0.3, 0.2))]))
                .with_component(BoxCollider::unit())
                .with_component(Rigidbody::with_world_gravity(1.0, &world)?),
        );

        info!(
            entities = ctx.entities.len(),
            frames = params.frames,
            "Sandbox scene built"
        );

        Ok(Self {
            params,
            falling,
            draw_calls: 0,
            contacts_seen: 0,
            seen_tick: 0,
        })
    }

    fn update(&mut self, ctx: &mut AppContext, frame: &FrameContext) {
        if self.params.toggle_at == Some(frame.frame_number) {
            ctx.toggle_pause();
        }

        let tick = ctx.physics.tick();
        if tick == self.seen_tick {
            return;
        }
        self.seen_tick = tick;

        if let Some(report) = ctx.last_report() {
            self.contacts_seen += report.contacts.len();
            for contact in &report.contacts {
                debug!(
                    tick,
                    first = %ctx.entities[contact.first].name,
                    second = %ctx.entities[contact.second].name,
                    depth = contact.manifold.penetration_depth,
                    normal = ?contact.manifold.normal,
                    "contact"
                );
            }
        }
    }

    fn render(&mut self, ctx: &AppContext, frame: &FrameContext) -> anyhow::Result<()> {
        let view_projection = view_projection(&ctx.entities).unwrap_or(Mat4::IDENTITY);
        self.draw_calls = draw_scene(&ctx.entities, view_projection)?;

        if frame.frame_number % LOG_INTERVAL == 0 {
            if let Some(transform) = ctx.entities[self.falling].transform() {
                info!(
                    frame = frame.frame_number,
                    paused = frame.paused,
                    position = ?transform.position,
                    rotation = ?transform.rotation,
                    draw_calls = self.draw_calls,
                    "box"
                );
            }
        }

        Ok(())
    }

    fn cleanup(&mut self, ctx: &mut AppContext) {
        if let Some(transform) = ctx.entities[self.falling].transform() {
            info!(position = ?transform.position, "Final box position");
        }
        info!("Contacts observed: {}", self.contacts_seen);
    }
}

/// Walk the scene the way a renderer would, returning the draw call count.
///
/// An entity is drawn when it has a transform and an enabled mesh filter,
/// and at least one of its materials survives alpha clipping at its own base
/// alpha. Entities without a mesh renderer draw with the default material.
fn draw_scene(entities: &[Entity], view_projection: Mat4) -> anyhow::Result<usize> {
    let mut draw_calls = 0;

    for entity in entities {
        let Some(transform) = entity.transform() else {
            continue;
        };
        let Some(mesh) = entity
            .get_component(ComponentKind::MeshFilter)
            .filter(|c| c.enabled)
            .and_then(|c| c.data.as_mesh_filter())
        else {
            continue;
        };

        let visible = entity
            .get_component(ComponentKind::MeshRenderer)
            .filter(|c| c.enabled)
            .and_then(|c| c.data.as_mesh_renderer())
            .map_or(true, |renderer| {
                renderer
                    .materials
                    .iter()
                    .any(|material| material.passes_alpha_clip(material.base_color.w))
            });
        if !visible {
            tracing::trace!(entity = %entity.name, "clipped");
            continue;
        }

        let mvp = view_projection * transform.model_matrix();
        anyhow::ensure!(mvp.is_finite(), "non-finite transform on {}", entity.name);
        tracing::trace!(entity = %entity.name, vertices = mesh.vertex_count, "draw");
        draw_calls += 1;
    }

    Ok(draw_calls)
}

/// View-projection matrix of the first enabled camera.
fn view_projection(entities: &[Entity]) -> Option<Mat4> {
    entities.iter().find_map(|entity| {
        let camera = entity
            .get_component(ComponentKind::Camera)
            .filter(|c| c.enabled)
            .and_then(|c| c.data.as_camera())?;
        let transform = entity.transform()?;
        let view = transform.model_matrix().inverse();
        Some(camera.projection_matrix(ASPECT) * view)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parse_defaults() {
        let params = SandboxParams::parse(Vec::new());
        assert_eq!(params.frames, 180);
        assert_eq!(params.fps, 60);
        assert!(!params.start_paused);
        assert_eq!(params.toggle_at, None);
    }

    #[test]
    fn parse_options() {
        let params =
            SandboxParams::parse(args(&["--frames", "30", "--paused", "--toggle-at", "5", "--fps", "0"]));
        assert_eq!(params.frames, 30);
        assert_eq!(params.fps, 0);
        assert!(params.start_paused);
        assert_eq!(params.toggle_at, Some(5));
    }

    #[test]
    fn parse_ignores_bad_values() {
        let params = SandboxParams::parse(args(&["--frames", "lots"]));
        assert_eq!(params.frames, 180);
    }

    fn cube(name: &str, material: Material) -> Entity {
        Entity::empty(name)
            .with_component(Transform::default())
            .with_component(MeshFilter::cube(CUBE_MESH))
            .with_component(MeshRenderer::new([material]))
    }

    #[test]
    fn alpha_clipped_entities_are_not_drawn() {
        let mut faded = Material::lit(Vec3::ONE);
        faded.base_color.w = 0.2;
        faded.alpha_clip = Some(0.5);

        let mut cutout = faded;
        cutout.base_color.w = 0.8;

        let scene = [
            cube("solid", Material::lit(Vec3::ONE)),
            cube("faded", faded),
            cube("cutout", cutout),
            Entity::empty("bare").with_component(Transform::default()),
        ];

        assert_eq!(draw_scene(&scene, Mat4::IDENTITY).unwrap(), 2);
    }

    #[test]
    fn camera_view_projection_is_finite() {
        let camera = Entity::empty("camera")
            .with_component(Transform::from_position(Vec3::new(0.0, 2.0, 8.0)))
            .with_component(Camera::default());
        let vp = view_projection(&[camera]).unwrap();
        assert!(vp.is_finite());
    }
}
