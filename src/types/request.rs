use serde_json::Value;

use crate::utils::validate::{Fields, Schema, ValidationError};

pub(crate) const PROFILE_COLORS: [&str; 5] = ["1", "2", "3", "4", "5"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SignIn {
    pub(crate) email: String,
    pub(crate) password: String,
}

impl Schema for SignIn {
    fn parse(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = Fields::of(raw, "body")?;

        let email = fields.email("email");
        let password = fields.non_empty("password");

        let value = email.zip(password).map(|(email, password)| SignIn {
            email: email.to_string(),
            password: password.to_string(),
        });

        fields.finish(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ProfileData {
    pub(crate) avatar_id: i32,
    pub(crate) name: String,
    pub(crate) color: String,
}

impl Schema for ProfileData {
    fn parse(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = Fields::of(raw, "body")?;

        let avatar_id = fields.integer("avatarId");
        let name = fields.non_empty("name");
        let color = fields.one_of("color", &PROFILE_COLORS);

        let value = match (avatar_id, name, color) {
            (Some(avatar_id), Some(name), Some(color)) => Some(ProfileData {
                avatar_id,
                name: name.to_string(),
                color: color.to_string(),
            }),
            _ => None,
        };

        fields.finish(value)
    }
}
