//! Staff model
//!
//! School employees. A staff member may also be the guardian of an enrolled
//! student, in which case staff links attach them to that student.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::form::RequiredFields;
use super::ids::StaffId;
use super::mask::{format_national_id, format_phone};
use crate::error::{OnboardError, OnboardResult};

/// Role held by a staff member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Professor,
    Coordenador,
    Diretor,
    Secretario,
    Auxiliar,
    ServicosGerais,
    Porteiro,
    Outro,
}

impl StaffRole {
    /// All roles, in the order they are offered to the operator
    pub const ALL: [StaffRole; 8] = [
        Self::Professor,
        Self::Coordenador,
        Self::Diretor,
        Self::Secretario,
        Self::Auxiliar,
        Self::ServicosGerais,
        Self::Porteiro,
        Self::Outro,
    ];

    /// Parse a role from its tag
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "professor" => Some(Self::Professor),
            "coordenador" => Some(Self::Coordenador),
            "diretor" => Some(Self::Diretor),
            "secretario" => Some(Self::Secretario),
            "auxiliar" => Some(Self::Auxiliar),
            "servicos_gerais" => Some(Self::ServicosGerais),
            "porteiro" => Some(Self::Porteiro),
            "outro" => Some(Self::Outro),
            _ => None,
        }
    }

    /// Tag written to the export
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Professor => "professor",
            Self::Coordenador => "coordenador",
            Self::Diretor => "diretor",
            Self::Secretario => "secretario",
            Self::Auxiliar => "auxiliar",
            Self::ServicosGerais => "servicos_gerais",
            Self::Porteiro => "porteiro",
            Self::Outro => "outro",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Professor => "Professor(a)",
            Self::Coordenador => "Coordenador(a)",
            Self::Diretor => "Diretor(a)",
            Self::Secretario => "Secretário(a)",
            Self::Auxiliar => "Auxiliar",
            Self::ServicosGerais => "Serviços Gerais",
            Self::Porteiro => "Porteiro(a)",
            Self::Outro => "Outro",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Unique identifier within the session
    pub id: StaffId,

    /// Full name
    pub name: String,

    /// National id (CPF), masked
    pub national_id: String,

    /// WhatsApp phone number, masked
    pub phone: String,

    /// Contact email
    pub email: String,

    /// Employee registration number
    pub registration: String,

    pub role: StaffRole,

    /// Free-text description of duties
    #[serde(default)]
    pub duty: String,

    /// Whether the staff member may use the school app
    #[serde(default)]
    pub app_authorized: bool,

    /// Whether the staff member has a child enrolled at this school
    #[serde(default)]
    pub has_child_enrolled: bool,
}

impl Staff {
    /// `Sim`/`Não` rendering of the app authorization flag
    pub fn app_authorized_label(&self) -> &'static str {
        if self.app_authorized {
            "Sim"
        } else {
            "Não"
        }
    }
}

/// Staff entry form
///
/// The role is kept as typed so that a blank role is reported together with
/// the other missing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStaff {
    pub name: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub registration: String,
    pub role: String,
    pub duty: String,
    pub app_authorized: bool,
    pub has_child_enrolled: bool,
}

impl NewStaff {
    /// Apply the input masks, check required fields and build the record
    pub fn into_staff(self, id: StaffId) -> OnboardResult<Staff> {
        let national_id = format_national_id(&self.national_id);
        let phone = format_phone(&self.phone);

        RequiredFields::new("staff")
            .require("name", &self.name)
            .require("national_id", &national_id)
            .require("phone", &phone)
            .require("email", &self.email)
            .require("registration", &self.registration)
            .require("role", &self.role)
            .finish()?;

        let role = StaffRole::parse(&self.role).ok_or_else(|| {
            OnboardError::Validation(format!(
                "Invalid staff role: '{}'. Valid roles: {}",
                self.role,
                StaffRole::ALL
                    .iter()
                    .map(|r| r.tag())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?;

        Ok(Staff {
            id,
            name: self.name.trim().to_string(),
            national_id,
            phone,
            email: self.email.trim().to_string(),
            registration: self.registration.trim().to_string(),
            role,
            duty: self.duty.trim().to_string(),
            app_authorized: self.app_authorized,
            has_child_enrolled: self.has_child_enrolled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewStaff {
        NewStaff {
            name: "Ana Costa".into(),
            national_id: "22222222222".into(),
            phone: "11912345678".into(),
            email: "ana@escola.com".into(),
            registration: "FUNC001".into(),
            role: "professor".into(),
            duty: "Professor, turno tarde".into(),
            app_authorized: true,
            has_child_enrolled: false,
        }
    }

    #[test]
    fn test_role_parse_round_trip() {
        for role in StaffRole::ALL {
            assert_eq!(StaffRole::parse(role.tag()), Some(role));
        }
        assert_eq!(StaffRole::parse("Servicos_Gerais"), Some(StaffRole::ServicosGerais));
        assert_eq!(StaffRole::parse("janitor"), None);
    }

    #[test]
    fn test_role_serializes_as_tag() {
        let json = serde_json::to_string(&StaffRole::ServicosGerais).unwrap();
        assert_eq!(json, "\"servicos_gerais\"");
    }

    #[test]
    fn test_into_staff() {
        let staff = form().into_staff(StaffId::new(5)).unwrap();
        assert_eq!(staff.national_id, "222.222.222-22");
        assert_eq!(staff.role, StaffRole::Professor);
        assert_eq!(staff.app_authorized_label(), "Sim");
    }

    #[test]
    fn test_invalid_role() {
        let mut form = form();
        form.role = "janitor".into();
        let err = form.into_staff(StaffId::new(5)).unwrap_err();
        assert!(matches!(err, OnboardError::Validation(_)));
    }

    #[test]
    fn test_duty_is_optional() {
        let mut form = form();
        form.duty.clear();
        assert!(form.into_staff(StaffId::new(5)).is_ok());
    }
}
