//! Guardian model

use serde::{Deserialize, Serialize};

use super::form::RequiredFields;
use super::ids::GuardianId;
use super::mask::{format_national_id, format_phone};
use crate::error::OnboardResult;

/// A student's guardian
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guardian {
    /// Unique identifier within the session
    pub id: GuardianId,

    /// Full name
    pub name: String,

    /// National id (CPF), masked
    pub national_id: String,

    /// WhatsApp phone number, masked
    pub phone: String,

    /// Contact email
    pub email: String,
}

/// Guardian entry form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGuardian {
    pub name: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
}

impl NewGuardian {
    /// Apply the input masks, check required fields and build the record
    pub fn into_guardian(self, id: GuardianId) -> OnboardResult<Guardian> {
        let national_id = format_national_id(&self.national_id);
        let phone = format_phone(&self.phone);

        RequiredFields::new("guardian")
            .require("name", &self.name)
            .require("national_id", &national_id)
            .require("phone", &phone)
            .require("email", &self.email)
            .finish()?;

        Ok(Guardian {
            id,
            name: self.name.trim().to_string(),
            national_id,
            phone,
            email: self.email.trim().to_string(),
        })
    }
}
