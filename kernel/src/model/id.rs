use shared::error::AppError;

macro_rules! define_id {
    ($id_name:ident, $id_type:ty) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $id_name($id_type);

        impl $id_name {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn raw(self) -> $id_type {
                self.0
            }
        }

        impl From<$id_type> for $id_name {
            fn from(value: $id_type) -> Self {
                Self(value)
            }
        }

        impl std::str::FromStr for $id_name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl std::fmt::Display for $id_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(UserId, uuid::Uuid);
define_id!(TotemId, uuid::Uuid);
define_id!(DisposalId, uuid::Uuid);
