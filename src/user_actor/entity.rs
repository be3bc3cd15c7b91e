use std::convert::Infallible;

use chrono::{DateTime, Utc};

use crate::actor_framework::Entity;
use crate::domain::{hash_password, Role, User};
use crate::error::{StoreError, StoreResult};
use crate::validation::{email, non_blank, required};

use super::dtos::{UserCreate, UserPatch};

fn parse_role(raw: Option<String>) -> StoreResult<Option<Role>> {
    non_blank(raw)
        .map(|r| r.parse::<Role>().map_err(StoreError::Validation))
        .transpose()
}

impl Entity for User {
    type CreatePayload = UserCreate;
    type Patch = UserPatch;
    type Action = Infallible;
    type ActionResult = ();

    const KIND: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    /// Name and email are required. Age defaults to 0, role to `user`.
    fn from_create(id: String, created_at: DateTime<Utc>, params: UserCreate) -> StoreResult<Self> {
        let name = required("name", params.name)?;
        let email = email(required("email", params.email)?)?;
        Ok(Self {
            id,
            name,
            email,
            age: params.age.unwrap_or(0),
            username: non_blank(params.username),
            password_hash: non_blank(params.password).map(|p| hash_password(&p)),
            role: parse_role(params.role)?.unwrap_or_default(),
            created_at,
        })
    }

    /// Non-empty text fields overwrite; `age` overwrites whenever supplied.
    fn on_update(&mut self, patch: UserPatch) -> StoreResult<()> {
        if let Some(name) = non_blank(patch.name) {
            self.name = name;
        }
        if let Some(new_email) = non_blank(patch.email) {
            self.email = email(new_email)?;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(password) = non_blank(patch.password) {
            self.password_hash = Some(hash_password(&password));
        }
        if let Some(role) = parse_role(patch.role)? {
            self.role = role;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Infallible) -> StoreResult<()> {
        match action {}
    }

    /// Email compares case-insensitively; username exactly.
    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        let mut keys = vec![("email", self.email.to_lowercase())];
        if let Some(username) = &self.username {
            keys.push(("username", username.clone()));
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> UserCreate {
        UserCreate {
            name: Some("Ann".into()),
            email: Some("ann@x.com".into()),
            ..Default::default()
        }
    }

    #[test]
    fn create_applies_defaults() {
        let user = User::from_create("u1".into(), Utc::now(), ann()).unwrap();
        assert_eq!(user.age, 0);
        assert_eq!(user.role, Role::User);
        assert!(user.username.is_none());
        assert!(user.password_hash.is_none());
    }

    #[test]
    fn create_requires_name_and_email() {
        let missing_email = UserCreate {
            email: None,
            ..ann()
        };
        let err = User::from_create("u1".into(), Utc::now(), missing_email).unwrap_err();
        assert_eq!(err, StoreError::Validation("email is required".into()));

        let blank_name = UserCreate {
            name: Some(" ".into()),
            ..ann()
        };
        assert!(User::from_create("u1".into(), Utc::now(), blank_name).is_err());
    }

    #[test]
    fn create_hashes_password_and_parses_role() {
        let params = UserCreate {
            username: Some("admin".into()),
            password: Some("admin123".into()),
            role: Some("admin".into()),
            ..ann()
        };
        let user = User::from_create("u1".into(), Utc::now(), params).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(user.verify_password("admin123"));
        assert_eq!(
            user.unique_keys(),
            vec![("email", "ann@x.com".to_string()), ("username", "admin".to_string())]
        );
    }

    #[test]
    fn patch_overwrites_only_supplied_fields() {
        let mut user = User::from_create("u1".into(), Utc::now(), ann()).unwrap();
        let before = user.clone();

        user.on_update(UserPatch {
            name: Some(String::new()),
            age: Some(41),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(user.name, before.name);
        assert_eq!(user.email, before.email);
        assert_eq!(user.age, 41);
    }

    #[test]
    fn patch_rejects_bad_role() {
        let mut user = User::from_create("u1".into(), Utc::now(), ann()).unwrap();
        let err = user
            .on_update(UserPatch {
                role: Some("root".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}
