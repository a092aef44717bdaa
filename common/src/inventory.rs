//! # Inventory Model
//!
//! Everything here is a plain value type. Nothing in this module talks to the
//! network or the filesystem.

pub mod ball;
pub mod collection;
pub mod game;
pub mod identity;
pub mod quantity;

pub use ball::Ball;
pub use collection::Collection;
pub use game::GameProfile;
pub use identity::Identity;
pub use quantity::QuantityVector;
