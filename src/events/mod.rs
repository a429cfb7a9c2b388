pub mod orbit;
pub mod proximity;
pub mod stage;
pub mod tilt;
pub mod title;

pub use orbit::wire_orbit_stages;
pub use proximity::wire_finale_proximity;
pub use stage::wire_stage_trackers;
pub use tilt::wire_tilt_cards;
pub use title::wire_draggable_title;
