// Interaction module
//
// How the player manipulates the inventory: per-frame pointer input, the
// drag/drop session, the choices offered on a drop and the timed pickup.

pub mod input;
pub mod pickup;
pub mod resolution;
pub mod session;

pub use input::{FrameInput, InputEvent, PointerInput, PointerTracker};
pub use pickup::{PickupInput, PickupInteraction, PickupProgress};
pub use resolution::{offered_actions, ResolutionAction};
pub use session::{InteractionSession, SessionEvent, SessionState};
