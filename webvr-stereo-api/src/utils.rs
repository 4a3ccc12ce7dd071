use euclid::Transform3D;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering::SeqCst;

static DEVICE_ID_COUNTER: AtomicU32 = AtomicU32::new(0);

// Generates a unique identifier for any VRDisplay
pub fn new_id() -> u32 {
    DEVICE_ID_COUNTER.fetch_add(1, SeqCst)
}

// Returns the current time in milliseconds
#[cfg(feature = "utils")]
pub fn timestamp() -> f64 {
    time::OffsetDateTime::now_utc().unix_timestamp_nanos() as f64 * 1e-6
}

// Device matrices are column-major, which lines up element for element with
// euclid's row-vector storage (translation in m41..m43).
pub fn transform_from_array<Src, Dst>(m: &[f32; 16]) -> Transform3D<f32, Src, Dst> {
    Transform3D::new(
        m[0], m[1], m[2], m[3],
        m[4], m[5], m[6], m[7],
        m[8], m[9], m[10], m[11],
        m[12], m[13], m[14], m[15],
    )
}
