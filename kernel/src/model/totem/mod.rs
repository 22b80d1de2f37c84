use crate::model::id::{TotemId, UserId};
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, Display, EnumString};

pub mod event;

/// A physical disposal station. `claimed_by` is meaningful only while the
/// status is `aguardo`.
#[derive(Debug, Clone)]
pub struct Totem {
    pub totem_id: TotemId,
    pub name: String,
    pub status: TotemStatus,
    pub claimed_by: Option<UserId>,
    pub registered_by: UserId,
}

/// Totem lifecycle status, stored with the original wire values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
pub enum TotemStatus {
    /// Stopped; not yet offered to users.
    #[default]
    #[strum(serialize = "parado")]
    Parado,
    /// Available for a disposal claim.
    #[strum(serialize = "iniciado")]
    Iniciado,
    /// Claimed; awaiting disposal completion.
    #[strum(serialize = "aguardo")]
    Aguardo,
}

impl TotemStatus {
    pub fn is_claimable(self) -> bool {
        matches!(self, TotemStatus::Iniciado)
    }
}

impl Totem {
    /// Claim transition (`iniciado -> aguardo`). The adapter expresses the
    /// same precondition as a conditional UPDATE so that two concurrent
    /// claimants cannot both win.
    pub fn claim(&mut self, user_id: UserId) -> AppResult<()> {
        if !self.status.is_claimable() {
            return Err(AppError::AlreadyClaimed(format!(
                "totem ({}) is not available for a claim",
                self.totem_id
            )));
        }
        self.status = TotemStatus::Aguardo;
        self.claimed_by = Some(user_id);
        Ok(())
    }

    /// Return transition (`aguardo -> iniciado`), clearing the claimant.
    pub fn release(&mut self) -> AppResult<()> {
        if self.status != TotemStatus::Aguardo {
            return Err(AppError::InvalidTransition(format!(
                "totem ({}) has no claim to release",
                self.totem_id
            )));
        }
        self.status = TotemStatus::Iniciado;
        self.claimed_by = None;
        Ok(())
    }

    /// Activation transition (`parado -> iniciado`).
    pub fn start(&mut self) -> AppResult<()> {
        if self.status != TotemStatus::Parado {
            return Err(AppError::InvalidTransition(format!(
                "totem ({}) is already started",
                self.totem_id
            )));
        }
        self.status = TotemStatus::Iniciado;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totem(status: TotemStatus) -> Totem {
        Totem {
            totem_id: TotemId::new(),
            name: "Totem Central".into(),
            status,
            claimed_by: None,
            registered_by: UserId::new(),
        }
    }

    #[test]
    fn claim_moves_available_totem_to_aguardo() {
        let user_a = UserId::new();
        let mut t = totem(TotemStatus::Iniciado);

        t.claim(user_a).unwrap();

        assert_eq!(t.status, TotemStatus::Aguardo);
        assert_eq!(t.claimed_by, Some(user_a));
    }

    #[test]
    fn second_claim_fails_with_already_claimed() {
        let mut t = totem(TotemStatus::Iniciado);
        t.claim(UserId::new()).unwrap();

        let res = t.claim(UserId::new());
        assert!(matches!(res, Err(AppError::AlreadyClaimed(_))));
        // The first claimant is untouched.
        assert_eq!(t.status, TotemStatus::Aguardo);
    }

    #[test]
    fn stopped_totem_cannot_be_claimed() {
        let mut t = totem(TotemStatus::Parado);
        assert!(matches!(
            t.claim(UserId::new()),
            Err(AppError::AlreadyClaimed(_))
        ));
    }

    #[test]
    fn release_clears_claimant_and_reopens() {
        let mut t = totem(TotemStatus::Iniciado);
        t.claim(UserId::new()).unwrap();

        t.release().unwrap();

        assert_eq!(t.status, TotemStatus::Iniciado);
        assert_eq!(t.claimed_by, None);
    }

    #[test]
    fn release_without_claim_is_invalid() {
        let mut t = totem(TotemStatus::Iniciado);
        assert!(matches!(t.release(), Err(AppError::InvalidTransition(_))));
    }

    #[test]
    fn start_only_from_parado() {
        let mut t = totem(TotemStatus::Parado);
        t.start().unwrap();
        assert_eq!(t.status, TotemStatus::Iniciado);
        assert!(matches!(t.start(), Err(AppError::InvalidTransition(_))));
    }
}
