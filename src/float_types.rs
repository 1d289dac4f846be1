// Our Real scalar type:
pub type Real = f64;

/// Tolerance below which two coordinates count as coincident.
pub const EPSILON: Real = 1e-9;

// Pi
/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
pub const INCH: Real = 25.4;
pub const FOOT: Real = 25.4 * 12.0;
pub const MM: Real = 1.0;
pub const CM: Real = 10.0;

/// Panel width/height parameters arrive in inches; everything internal is
/// millimeters.
pub const fn inches_to_mm(inches: Real) -> Real {
    inches * INCH
}
