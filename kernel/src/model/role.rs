use strum::{AsRefStr, Display, EnumString};

/// Closed role enumeration. The wire/database values keep the original
/// collection vocabulary (`admin` / `usuario`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
pub enum Role {
    #[strum(serialize = "admin")]
    Admin,
    #[default]
    #[strum(serialize = "usuario")]
    Usuario,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Idempotent-complement flip used by the admin user list.
    pub fn toggled(self) -> Self {
        match self {
            Role::Admin => Role::Usuario,
            Role::Usuario => Role::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_its_own_inverse() {
        assert_eq!(Role::Admin.toggled(), Role::Usuario);
        assert_eq!(Role::Usuario.toggled(), Role::Admin);
        assert_eq!(Role::Admin.toggled().toggled(), Role::Admin);
        assert_eq!(Role::Usuario.toggled().toggled(), Role::Usuario);
    }

    #[test]
    fn wire_strings_round_trip() {
        assert_eq!(Role::Admin.as_ref(), "admin");
        assert_eq!(Role::Usuario.as_ref(), "usuario");
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("usuario".parse::<Role>().unwrap(), Role::Usuario);
    }

    #[test]
    fn default_role_is_usuario() {
        assert_eq!(Role::default(), Role::Usuario);
    }
}
