use kernel::model::{
    id::{TotemId, UserId},
    totem::{Totem, TotemStatus},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct TotemRow {
    pub totem_id: TotemId,
    pub name: String,
    pub status: String,
    pub claimed_by: Option<UserId>,
    pub registered_by: UserId,
}

impl TryFrom<TotemRow> for Totem {
    type Error = AppError;

    fn try_from(value: TotemRow) -> Result<Self, Self::Error> {
        let TotemRow {
            totem_id,
            name,
            status,
            claimed_by,
            registered_by,
        } = value;
        let status = status
            .parse::<TotemStatus>()
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        Ok(Totem {
            totem_id,
            name,
            status,
            claimed_by,
            registered_by,
        })
    }
}
