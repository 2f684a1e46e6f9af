//! Render-side component payloads.
//!
//! These are plain data consumed by the host renderer through component
//! lookups. GPU resources are referred to by opaque handles owned elsewhere.

use glam::{Mat4, Vec3, Vec4};

/// Vertex count of the built-in cube mesh (6 faces × 2 triangles × 3).
pub const CUBE_VERTEX_COUNT: u32 = 36;

/// Opaque handle to an uploaded mesh (vertex array object).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// Opaque handle to an uploaded texture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Built-in mesh shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MeshKind {
    #[default]
    Cube,
    Sphere,
    Plane,
    Custom,
}

/// Which mesh an entity draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshFilter {
    pub kind: MeshKind,
    pub mesh: MeshHandle,
    pub vertex_count: u32,
}

impl MeshFilter {
    /// The built-in cube uploaded as `mesh`.
    pub const fn cube(mesh: MeshHandle) -> Self {
        Self {
            kind: MeshKind::Cube,
            mesh,
            vertex_count: CUBE_VERTEX_COUNT,
        }
    }

    /// A custom mesh with `vertex_count` vertices.
    pub const fn custom(mesh: MeshHandle, vertex_count: u32) -> Self {
        Self {
            kind: MeshKind::Custom,
            mesh,
            vertex_count,
        }
    }
}

/// Materials applied to an entity's mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshRenderer {
    pub materials: Vec<Material>,
}

impl MeshRenderer {
    pub fn new(materials: impl IntoIterator<Item = Material>) -> Self {
        Self {
            materials: materials.into_iter().collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaterialShader {
    #[default]
    Lit,
    Unlit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SurfaceType {
    #[default]
    Opaque,
    Transparent,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderFace {
    #[default]
    Front,
    Back,
    Double,
}

/// Surface description for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub shader: MaterialShader,
    pub surface: SurfaceType,
    pub render_face: RenderFace,
    pub preserve_specular_highlights: bool,
    /// Base color (RGBA, 0.0-1.0)
    pub base_color: Vec4,
    pub base_map: Option<TextureHandle>,
    pub specular: Vec3,
    /// Smoothness (0.0 = rough, 1.0 = mirror)
    pub smoothness: f32,
    /// Fragments with alpha below this threshold are discarded
    pub alpha_clip: Option<f32>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            shader: MaterialShader::Lit,
            surface: SurfaceType::Opaque,
            render_face: RenderFace::Front,
            preserve_specular_highlights: true,
            base_color: Vec4::ONE,
            base_map: None,
            specular: Vec3::splat(0.5),
            smoothness: 0.5,
            alpha_clip: None,
        }
    }
}

impl Material {
    /// Opaque lit material with a flat color.
    pub fn lit(color: Vec3) -> Self {
        Self {
            base_color: color.extend(1.0),
            ..Default::default()
        }
    }

    /// Whether a fragment with the given alpha survives alpha clipping.
    pub fn passes_alpha_clip(&self, alpha: f32) -> bool {
        self.alpha_clip.map_or(true, |threshold| alpha >= threshold)
    }
}

/// Light source parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Directional {
        direction: Vec3,
        ambient: Vec3,
        diffuse: Vec3,
        specular: Vec3,
    },
    Point,
    Spot,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Vec3,
    pub intensity: f32,
}

impl Light {
    /// White directional light shining along `direction`.
    pub fn directional(direction: Vec3) -> Self {
        Self {
            kind: LightKind::Directional {
                direction: direction.normalize_or_zero(),
                ambient: Vec3::splat(0.2),
                diffuse: Vec3::splat(0.8),
                specular: Vec3::ONE,
            },
            color: Vec3::ONE,
            intensity: 1.0,
        }
    }
}

/// What a camera clears its viewport to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraBackground {
    Color(Vec4),
    Skybox,
}

/// Camera parameters; the view comes from the owning entity's transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Vertical field of view in radians
    pub fovy: f32,
    pub near: f32,
    pub far: f32,
    pub is_perspective: bool,
    pub display_to_screen: bool,
    /// Normalized viewport rectangle (x, y, width, height)
    pub viewport: Vec4,
    pub background: CameraBackground,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fovy: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 100.0,
            is_perspective: true,
            display_to_screen: true,
            viewport: Vec4::new(0.0, 0.0, 1.0, 1.0),
            background: CameraBackground::Color(Vec4::new(0.2, 0.3, 0.3, 1.0)),
        }
    }
}

impl Camera {
    /// Projection matrix for a framebuffer of the given aspect ratio.
    ///
    /// Uses OpenGL clip-space depth (-1..1). Orthographic cameras use `fovy`
    /// as the half-height of the view volume at unit distance.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        if self.is_perspective {
            Mat4::perspective_rh_gl(self.fovy, aspect, self.near, self.far)
        } else {
            let half_height = self.fovy;
            let half_width = half_height * aspect;
            Mat4::orthographic_rh_gl(
                -half_width,
                half_width,
                -half_height,
                half_height,
                self.near,
                self.far,
            )
        }
    }
}
