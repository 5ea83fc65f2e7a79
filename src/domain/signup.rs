// src/domain/signup.rs

use crate::domain::validation::{self, FieldErrors, FieldRules, FormInput, Rule, Schema};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const SIGNUP_SCHEMA: Schema = &[
    FieldRules {
        field: "name",
        rules: &[
            Rule::MinChars(2, "Name must be at least 2 characters"),
            Rule::MaxChars(100, "Name is too long"),
        ],
    },
    FieldRules {
        field: "email",
        rules: &[
            Rule::MaxChars(255, "Email is too long"),
            Rule::Email("Invalid email address"),
        ],
    },
    FieldRules {
        field: "phone",
        rules: &[
            Rule::MinChars(10, "Phone number must be at least 10 digits"),
            Rule::MaxChars(15, "Phone number is too long"),
        ],
    },
    FieldRules {
        field: "userType",
        rules: &[Rule::OneOf(&["tenant", "landlord"], "Please select your role")],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Tenant,
    Landlord,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Tenant => "tenant",
            UserType::Landlord => "landlord",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "tenant" => Ok(UserType::Tenant),
            "landlord" => Ok(UserType::Landlord),
            other => Err(format!("unknown user type: {other}")),
        }
    }
}

/// Signup form exactly as typed; kept around so a failed submit can re-render it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_type: String,
}

impl FormInput for SignupForm {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "userType" => Some(&self.user_type),
            _ => None,
        }
    }
}

impl SignupForm {
    pub fn from_input(input: &dyn FormInput) -> Self {
        let raw = |name: &str| input.field(name).unwrap_or("").to_string();
        Self {
            name: raw("name"),
            email: raw("email"),
            phone: raw("phone"),
            user_type: raw("userType"),
        }
    }
}

/// A signup that passed `SIGNUP_SCHEMA`, with every string trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_type: UserType,
}

impl Signup {
    pub fn validate(form: &SignupForm) -> Result<Self, FieldErrors> {
        validation::validate(SIGNUP_SCHEMA, form)?;

        Ok(Self {
            name: validation::trimmed(form, "name"),
            email: validation::trimmed(form, "email"),
            phone: validation::trimmed(form, "phone"),
            user_type: validation::parse_field(SIGNUP_SCHEMA, form, "userType")?,
        })
    }
}

impl From<&Signup> for SignupForm {
    fn from(signup: &Signup) -> Self {
        Self {
            name: signup.name.clone(),
            email: signup.email.clone(),
            phone: signup.phone.clone(),
            user_type: signup.user_type.as_str().to_string(),
        }
    }
}
