use std::num::NonZeroUsize;

use bevy::prelude::Vec3;
use bevy_rapier3d::rapier::dynamics::IntegrationParameters;

/// Default contact material shared by every collider in the scene.
///
/// Friction and restitution are applied per collider; the four solver
/// constants parameterize contact and joint stiffness/relaxation in Rapier's
/// natural-frequency/damping-ratio form.
#[derive(Clone, Copy, Debug)]
pub struct ContactMaterial {
    pub friction: f32,
    pub restitution: f32,
    pub contact_frequency: f32,
    pub contact_damping: f32,
    pub joint_frequency: f32,
    pub joint_damping: f32,
}

/// Global physics configuration. Fixed at startup, not runtime-tunable.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsConfig {
    pub solver_iterations: usize,
    pub tolerance: f32,
    pub gravity: Vec3,
    pub material: ContactMaterial,
}

pub const PHYSICS: PhysicsConfig = PhysicsConfig {
    solver_iterations: 20,
    tolerance: 1.0e-4,
    gravity: Vec3::new(0.0, -40.0, 0.0),
    material: ContactMaterial {
        friction: 0.9,
        restitution: 0.7,
        contact_frequency: 30.0,
        contact_damping: 5.0,
        joint_frequency: 30.0,
        joint_damping: 2.0,
    },
};

impl PhysicsConfig {
    pub fn apply(&self, params: &mut IntegrationParameters) {
        if let Some(iterations) = NonZeroUsize::new(self.solver_iterations) {
            params.num_solver_iterations = iterations.into();
        }
        params.normalized_allowed_linear_error = self.tolerance;
        params.contact_softness.natural_frequency = self.material.contact_frequency;
        params.contact_softness.damping_ratio = self.material.contact_damping;
        params.joint_natural_frequency = self.material.joint_frequency;
        params.joint_damping_ratio = self.material.joint_damping;
    }
}
