//! Combat-domain primitives shared by the modifier system.
//!
//! - `damage`: damage type classification and its wire mapping
//! - `origin`: attack origin classification and its wire mapping
//! - `rng`: deterministic RNG for trigger-chance rolls

pub mod damage;
pub mod origin;
pub mod rng;

pub use damage::DamageType;
pub use origin::CombatOrigin;
pub use rng::CombatRng;
