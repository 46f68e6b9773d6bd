mod id;
mod spaced;

pub use id::{pack_edict_id, pack_edict_id_with, EdictId, RuneId};
pub use spaced::SpacedRune;
