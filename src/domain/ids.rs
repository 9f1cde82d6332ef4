// src/domain/ids.rs
use rand::rngs::OsRng;
use rand::RngCore;

/// Generate a complaint id using the OS RNG.
/// This is what the submission handler should call.
pub fn generate_complaint_id_default(now_ms: i64) -> String {
    let mut rng = OsRng;
    generate_complaint_id(&mut rng, now_ms)
}

/// `c-<epoch millis>-<8 hex digits>`.
/// The random suffix keeps ids apart when two submissions share a millisecond.
pub fn generate_complaint_id<R: RngCore>(rng: &mut R, now_ms: i64) -> String {
    format!("c-{now_ms}-{:08x}", rng.next_u32())
}
