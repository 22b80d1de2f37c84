use garde::Validate;
use kernel::model::{
    id::{TotemId, UserId},
    totem::{Totem, TotemStatus},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotemStatusName {
    Parado,
    Iniciado,
    Aguardo,
}

impl From<TotemStatus> for TotemStatusName {
    fn from(value: TotemStatus) -> Self {
        match value {
            TotemStatus::Parado => Self::Parado,
            TotemStatus::Iniciado => Self::Iniciado,
            TotemStatus::Aguardo => Self::Aguardo,
        }
    }
}

impl From<TotemStatusName> for TotemStatus {
    fn from(value: TotemStatusName) -> Self {
        match value {
            TotemStatusName::Parado => Self::Parado,
            TotemStatusName::Iniciado => Self::Iniciado,
            TotemStatusName::Aguardo => Self::Aguardo,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTotemRequest {
    #[garde(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotemListQuery {
    pub status: Option<TotemStatusName>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotensResponse {
    pub items: Vec<TotemResponse>,
}

impl From<Vec<Totem>> for TotensResponse {
    fn from(value: Vec<Totem>) -> Self {
        Self {
            items: value.into_iter().map(TotemResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotemResponse {
    pub totem_id: TotemId,
    pub name: String,
    pub status: TotemStatusName,
    pub claimed_by: Option<UserId>,
}

impl From<Totem> for TotemResponse {
    fn from(value: Totem) -> Self {
        let Totem {
            totem_id,
            name,
            status,
            claimed_by,
            ..
        } = value;
        Self {
            totem_id,
            name,
            status: TotemStatusName::from(status),
            claimed_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_name_keeps_original_wire_values() {
        assert_eq!(
            serde_json::to_string(&TotemStatusName::Parado).unwrap(),
            r#""parado""#
        );
        assert_eq!(
            serde_json::to_string(&TotemStatusName::Iniciado).unwrap(),
            r#""iniciado""#
        );
        assert_eq!(
            serde_json::to_string(&TotemStatusName::Aguardo).unwrap(),
            r#""aguardo""#
        );
    }

    #[test]
    fn empty_totem_name_fails_validation() {
        let req = CreateTotemRequest { name: "".into() };
        assert!(req.validate().is_err());
    }
}
