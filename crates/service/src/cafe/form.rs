//! Raw form input for creating a cafe and its conversion into a typed record.

use models::cafe::NewCafe;
use serde::Deserialize;

use crate::errors::ServiceError;

/// Fields as posted by an `application/x-www-form-urlencoded` body.
/// Every field is optional here so a missing one becomes a validation error
/// naming the field rather than a generic decode failure.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CafeForm {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub has_sockets: Option<String>,
    pub can_take_calls: Option<String>,
    pub coffee_price: Option<String>,
}

fn required(field: &str, value: Option<String>) -> Result<String, ServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ServiceError::Validation(format!("{field} is required"))),
    }
}

/// Accepts the usual truthy/falsy spellings, case-insensitively.
pub fn parse_flag(field: &str, value: Option<&str>) -> Result<bool, ServiceError> {
    let Some(raw) = value else {
        return Err(ServiceError::Validation(format!("{field} is required")));
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Ok(false),
        other => Err(ServiceError::Validation(format!("{field} must be a boolean, got '{other}'"))),
    }
}

impl TryFrom<CafeForm> for NewCafe {
    type Error = ServiceError;

    fn try_from(form: CafeForm) -> Result<Self, Self::Error> {
        Ok(NewCafe {
            has_toilet: parse_flag("has_toilet", form.has_toilet.as_deref())?,
            has_wifi: parse_flag("has_wifi", form.has_wifi.as_deref())?,
            has_sockets: parse_flag("has_sockets", form.has_sockets.as_deref())?,
            can_take_calls: parse_flag("can_take_calls", form.can_take_calls.as_deref())?,
            name: required("name", form.name)?,
            map_url: required("map_url", form.map_url)?,
            img_url: required("img_url", form.img_url)?,
            location: required("location", form.location)?,
            seats: required("seats", form.seats)?,
            coffee_price: form.coffee_price.filter(|p| !p.trim().is_empty()),
        })
    }
}
