use crate::model::id::{TotemId, UserId};
use derive_new::new;

pub struct CreateTotem {
    pub name: String,
    pub registered_by: UserId,
}

#[derive(Debug, new)]
pub struct ClaimTotem {
    pub totem_id: TotemId,
    pub claimed_by: UserId,
}

#[derive(Debug)]
pub struct StartTotem {
    pub totem_id: TotemId,
}

#[derive(Debug)]
pub struct ReleaseTotem {
    pub totem_id: TotemId,
}

#[derive(Debug)]
pub struct DeleteTotem {
    pub totem_id: TotemId,
}
