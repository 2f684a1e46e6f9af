//! Tagged component records.

use fable_core::Transform;
use fable_physics::{BoxCollider, Rigidbody};

use crate::render::{Camera, Light, Material, MeshFilter, MeshRenderer};

/// Kind tag of a component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Transform,
    MeshFilter,
    MeshRenderer,
    Material,
    Light,
    Camera,
    Rigidbody,
    BoxCollider,
}

/// Payload of a component; the variant determines the kind.
#[derive(Debug)]
pub enum ComponentData {
    Transform(Transform),
    MeshFilter(MeshFilter),
    MeshRenderer(MeshRenderer),
    Material(Material),
    Light(Light),
    Camera(Camera),
    Rigidbody(Rigidbody),
    BoxCollider(BoxCollider),
}

impl ComponentData {
    /// Kind tag of this payload.
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Transform(_) => ComponentKind::Transform,
            Self::MeshFilter(_) => ComponentKind::MeshFilter,
            Self::MeshRenderer(_) => ComponentKind::MeshRenderer,
            Self::Material(_) => ComponentKind::Material,
            Self::Light(_) => ComponentKind::Light,
            Self::Camera(_) => ComponentKind::Camera,
            Self::Rigidbody(_) => ComponentKind::Rigidbody,
            Self::BoxCollider(_) => ComponentKind::BoxCollider,
        }
    }
}

/// A component owned by an entity.
#[derive(Debug)]
pub struct Component {
    pub enabled: bool,
    pub data: ComponentData,
}

impl Component {
    /// Create an enabled component.
    pub const fn new(data: ComponentData) -> Self {
        Self {
            enabled: true,
            data,
        }
    }

    /// Create a disabled component.
    pub const fn disabled(data: ComponentData) -> Self {
        Self {
            enabled: false,
            data,
        }
    }

    #[inline]
    pub const fn kind(&self) -> ComponentKind {
        self.data.kind()
    }

    #[inline]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Typed accessors and `From` conversions for every payload variant.
macro_rules! component_payloads {
    ($($variant:ident => $as_ref:ident, $as_mut:ident;)*) => {
        impl ComponentData {
            $(
                pub const fn $as_ref(&self) -> Option<&$variant> {
                    match self {
                        Self::$variant(payload) => Some(payload),
                        _ => None,
                    }
                }

                pub fn $as_mut(&mut self) -> Option<&mut $variant> {
                    match self {
                        Self::$variant(payload) => Some(payload),
                        _ => None,
                    }
                }
            )*
        }

        $(
            impl From<$variant> for ComponentData {
                fn from(payload: $variant) -> Self {
                    Self::$variant(payload)
                }
            }

            impl From<$variant> for Component {
                fn from(payload: $variant) -> Self {
                    Self::new(ComponentData::$variant(payload))
                }
            }
        )*
    };
}

component_payloads! {
    Transform => as_transform, as_transform_mut;
    MeshFilter => as_mesh_filter, as_mesh_filter_mut;
    MeshRenderer => as_mesh_renderer, as_mesh_renderer_mut;
    Material => as_material, as_material_mut;
    Light => as_light, as_light_mut;
    Camera => as_camera, as_camera_mut;
    Rigidbody => as_rigidbody, as_rigidbody_mut;
    BoxCollider => as_box_collider, as_box_collider_mut;
}
