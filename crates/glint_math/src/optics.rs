//! Mirror reflection, Snell refraction and secondary-ray origin bias.

use crate::Vec3;

/// Distance secondary rays are pushed off a surface to avoid hitting it again.
pub const SURFACE_EPSILON: f32 = 1e-3;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit direction through a surface with unit normal `n`.
///
/// `ior` is the refractive index of the object, the other side is assumed to
/// be vacuum (index 1). When the ray leaves the object (`dot(v, n) > 0`) the
/// normal is flipped and the ratio inverted.
///
/// Returns `None` on total internal reflection.
pub fn refract(v: Vec3, n: Vec3, ior: f32) -> Option<Vec3> {
    let mut cosi = -v.dot(n).clamp(-1.0, 1.0);
    let mut eta_i = 1.0;
    let mut eta_t = ior;
    let mut normal = n;

    if cosi < 0.0 {
        // Exiting the medium
        cosi = -cosi;
        std::mem::swap(&mut eta_i, &mut eta_t);
        normal = -n;
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        return None;
    }

    Some((v * eta + normal * (eta * cosi - k.sqrt())).normalize())
}

/// Move `point` off the surface along `normal`, to the side `direction` leaves on.
#[inline]
pub fn offset_origin(point: Vec3, direction: Vec3, normal: Vec3) -> Vec3 {
    if direction.dot(normal) < 0.0 {
        point - normal * SURFACE_EPSILON
    } else {
        point + normal * SURFACE_EPSILON
    }
}
