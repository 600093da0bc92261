//! Rigid transforms and ordered transform chains.
//!
//! A [`RigidTransform`] rotates about an axis through a pivot and then
//! translates. A [`TransformChain`] applies its transforms left to right,
//! so order matters: rotate-then-translate differs from translate-then-rotate.

use glam::{DAffine3, DQuat, DVec3};

use super::vec3::{angle_between, normalize};
use crate::error::MeshResult;
use config::constants::approx_zero;

/// Rotation about an axis through `pivot`, followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    rotation: DQuat,
    pivot: DVec3,
    translation: DVec3,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidTransform {
    /// The transform that leaves every point in place.
    pub const fn identity() -> Self {
        Self {
            rotation: DQuat::IDENTITY,
            pivot: DVec3::ZERO,
            translation: DVec3::ZERO,
        }
    }

    /// Pure translation by `offset`.
    pub fn translation(offset: DVec3) -> Self {
        Self {
            translation: offset,
            ..Self::identity()
        }
    }

    /// Rotation by `angle` radians about `axis` through the origin.
    ///
    /// # Errors
    /// `DegenerateVector` when `axis` has zero length.
    pub fn rotation(axis: DVec3, angle: f64) -> MeshResult<Self> {
        Self::rotation_about(axis, angle, DVec3::ZERO)
    }

    /// Rotation by `angle` radians about `axis` through `pivot`.
    ///
    /// # Examples
    /// ```
    /// use std::f64::consts::FRAC_PI_2;
    /// use glam::DVec3;
    /// use spring_mesh::math::RigidTransform;
    ///
    /// let t = RigidTransform::rotation_about(DVec3::Z, FRAC_PI_2, DVec3::X).unwrap();
    /// let p = t.apply(DVec3::new(2.0, 0.0, 0.0));
    /// assert!((p - DVec3::new(1.0, 1.0, 0.0)).length() < 1e-12);
    /// ```
    pub fn rotation_about(axis: DVec3, angle: f64, pivot: DVec3) -> MeshResult<Self> {
        let axis = normalize(axis)?;
        Ok(Self {
            rotation: DQuat::from_axis_angle(axis, angle),
            pivot,
            translation: DVec3::ZERO,
        })
    }

    /// Rotation that carries local +Z onto `direction`, then a move to `anchor`.
    ///
    /// The rotation axis is `z × direction` and the angle is the signed angle
    /// between them. A direction parallel to +Z needs no rotation; an
    /// antiparallel one turns half way about +X.
    ///
    /// # Errors
    /// `DegenerateVector` when `direction` has zero length.
    pub fn aligning_z(anchor: DVec3, direction: DVec3) -> MeshResult<Self> {
        let direction = normalize(direction)?;
        let axis = DVec3::Z.cross(direction);

        let rotation = if !approx_zero(axis.length()) {
            let axis = axis.normalize();
            DQuat::from_axis_angle(axis, angle_between(DVec3::Z, direction, axis))
        } else if direction.z > 0.0 {
            DQuat::IDENTITY
        } else {
            DQuat::from_axis_angle(DVec3::X, std::f64::consts::PI)
        };

        Ok(Self {
            rotation,
            pivot: DVec3::ZERO,
            translation: anchor,
        })
    }

    /// Returns this transform followed by an extra translation.
    pub fn then_translate(mut self, offset: DVec3) -> Self {
        self.translation += offset;
        self
    }

    /// Maps a point.
    #[inline]
    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.rotation * (point - self.pivot) + self.pivot + self.translation
    }

    /// Maps a direction; pivot and translation do not apply.
    #[inline]
    pub fn apply_vector(&self, vector: DVec3) -> DVec3 {
        self.rotation * vector
    }

    /// The equivalent affine matrix.
    pub fn to_affine(&self) -> DAffine3 {
        DAffine3::from_translation(self.pivot + self.translation)
            * DAffine3::from_quat(self.rotation)
            * DAffine3::from_translation(-self.pivot)
    }
}

/// Ordered sequence of rigid transforms applied left to right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformChain {
    transforms: Vec<RigidTransform>,
}

impl TransformChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty chain with room for `capacity` transforms.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transforms: Vec::with_capacity(capacity),
        }
    }

    /// Appends a transform to the end of the chain.
    pub fn push(&mut self, transform: RigidTransform) {
        self.transforms.push(transform);
    }

    /// Number of transforms.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns true for the empty (identity) chain.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Applies every transform in order to `point`.
    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.transforms.iter().fold(point, |p, t| t.apply(p))
    }

    /// Collapses the chain into one affine matrix.
    pub fn compose(&self) -> DAffine3 {
        self.transforms
            .iter()
            .fold(DAffine3::IDENTITY, |acc, t| t.to_affine() * acc)
    }
}

impl FromIterator<RigidTransform> for TransformChain {
    fn from_iter<I: IntoIterator<Item = RigidTransform>>(iter: I) -> Self {
        Self {
            transforms: iter.into_iter().collect(),
        }
    }
}

/// Applies `chain` to `point`, first transform first.
///
/// # Examples
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use glam::DVec3;
/// use spring_mesh::math::{compose_transform, RigidTransform, TransformChain};
///
/// let chain: TransformChain = [
///     RigidTransform::translation(DVec3::X),
///     RigidTransform::rotation(DVec3::Z, FRAC_PI_2).unwrap(),
/// ]
/// .into_iter()
/// .collect();
/// let p = compose_transform(&chain, DVec3::ZERO);
/// assert!((p - DVec3::Y).length() < 1e-12);
/// ```
#[inline]
pub fn compose_transform(chain: &TransformChain, point: DVec3) -> DVec3 {
    chain.apply(point)
}
