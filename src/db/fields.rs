//! Declarative field descriptors for the domain models.
//!
//! Each model publishes a static table describing its fields: the column
//! name, a display label, the kind of value it holds and whether it is
//! required. Front-ends build forms and tables from this table, and
//! [`Described::validate`] checks a record against it before it is written.

use crate::db::models::{
    Booking, BookingService, Payment, Person, Property, Roster, Service, TRANSIENT_ID,
};
use crate::db::{DbError, DbResult};

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Database-assigned integer id.
    Id,
    Text,
    Email,
    Phone,
    Flag,
    /// Whole minutes.
    Minutes,
    Money,
    Date,
    /// Id of a row in another table.
    Reference,
    /// Stored but never displayed.
    Secret,
}

/// One row of a model's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
        }
    }

    /// Whether this field belongs in a listing.
    pub fn is_listed(&self) -> bool {
        self.kind != FieldKind::Secret
    }
}

/// A model described by a static field table.
pub trait Described {
    /// Entity name used in messages.
    const ENTITY: &'static str;

    const FIELDS: &'static [FieldDescriptor];

    /// The value of `name` rendered as text, or None for unknown fields.
    fn field_value(&self, name: &str) -> Option<String>;

    /// The unrounded value of a money field.
    fn amount(&self, _name: &str) -> Option<f64> {
        None
    }

    /// Listed fields as display strings, in table order.
    fn row(&self) -> Vec<String> {
        Self::FIELDS
            .iter()
            .filter(|f| f.is_listed())
            .map(|f| self.field_value(f.name).unwrap_or_default())
            .collect()
    }

    /// Labels of the listed fields, in table order.
    fn header() -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .filter(|f| f.is_listed())
            .map(|f| f.label)
            .collect()
    }

    /// Check every field against its descriptor.
    fn validate(&self) -> DbResult<()> {
        for field in Self::FIELDS {
            if field.kind == FieldKind::Money
                && let Some(amount) = self.amount(field.name)
            {
                check_amount(Self::ENTITY, field, amount)?;
                continue;
            }
            let value = self.field_value(field.name).unwrap_or_default();
            check_field(Self::ENTITY, field, &value)?;
        }
        Ok(())
    }
}

fn check_amount(entity: &str, field: &FieldDescriptor, amount: f64) -> DbResult<()> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(DbError::validation(format!(
            "{} {} must be a non-negative amount",
            entity, field.label
        )))
    }
}

fn check_field(entity: &str, field: &FieldDescriptor, value: &str) -> DbResult<()> {
    let value = value.trim();
    let invalid = |reason: &str| {
        Err(DbError::validation(format!(
            "{} {} {}",
            entity, field.label, reason
        )))
    };

    if value.is_empty() {
        return if field.required {
            invalid("is required")
        } else {
            Ok(())
        };
    }

    match field.kind {
        FieldKind::Email if !looks_like_email(value) => invalid("is not a valid email address"),
        FieldKind::Phone if !looks_like_phone(value) => invalid("is not a valid phone number"),
        FieldKind::Money => match value.parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(()),
            _ => invalid("must be a non-negative amount"),
        },
        FieldKind::Minutes => match value.parse::<i64>() {
            Ok(minutes) if minutes > 0 => Ok(()),
            _ => invalid("must be a positive number of minutes"),
        },
        FieldKind::Reference if value == TRANSIENT_ID.to_string() => {
            invalid("must reference a saved record")
        }
        _ => Ok(()),
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !value.chars().any(char::is_whitespace)
}

fn looks_like_phone(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || " +-().".contains(c))
}

// =============================================================================
// Field tables
// =============================================================================

impl Described for Person {
    const ENTITY: &'static str = "Person";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("id", "ID", FieldKind::Id),
        FieldDescriptor::new("username", "Username", FieldKind::Text),
        FieldDescriptor::new("first_name", "First name", FieldKind::Text),
        FieldDescriptor::new("last_name", "Last name", FieldKind::Text),
        FieldDescriptor::new("email", "Email", FieldKind::Email),
        FieldDescriptor::new("phone_number", "Phone", FieldKind::Phone),
        FieldDescriptor::new("is_employee", "Employee", FieldKind::Flag),
        FieldDescriptor::new("hashed_password", "Password", FieldKind::Secret),
    ];

    fn field_value(&self, name: &str) -> Option<String> {
        Some(match name {
            "id" => self.id.to_string(),
            "username" => self.username.clone(),
            "first_name" => self.first_name.clone(),
            "last_name" => self.last_name.clone(),
            "email" => self.email.clone(),
            "phone_number" => self.phone_number.clone(),
            "is_employee" => self.is_employee.to_string(),
            "hashed_password" => self.hashed_password.clone(),
            _ => return None,
        })
    }
}

impl Described for Property {
    const ENTITY: &'static str = "Property";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("id", "ID", FieldKind::Id),
        FieldDescriptor::new("street_address", "Street address", FieldKind::Text),
        FieldDescriptor::new("city", "City", FieldKind::Text),
        FieldDescriptor::new("state", "State", FieldKind::Text),
        FieldDescriptor::new("post_code", "Post code", FieldKind::Text),
    ];

    fn field_value(&self, name: &str) -> Option<String> {
        Some(match name {
            "id" => self.id.to_string(),
            "street_address" => self.street_address.clone(),
            "city" => self.city.clone(),
            "state" => self.state.clone(),
            "post_code" => self.post_code.clone(),
            _ => return None,
        })
    }
}

impl Described for Booking {
    const ENTITY: &'static str = "Booking";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("id", "ID", FieldKind::Id),
        FieldDescriptor::new("person_id", "Customer", FieldKind::Reference),
        FieldDescriptor::new("property_id", "Property", FieldKind::Reference),
        FieldDescriptor::new("booking_date", "Date", FieldKind::Date),
    ];

    fn field_value(&self, name: &str) -> Option<String> {
        Some(match name {
            "id" => self.id.to_string(),
            "person_id" => self.person_id.to_string(),
            "property_id" => self.property_id.to_string(),
            "booking_date" => self.booking_date.to_string(),
            _ => return None,
        })
    }
}

impl Described for Service {
    const ENTITY: &'static str = "Service";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("id", "ID", FieldKind::Text),
        FieldDescriptor::new("description", "Description", FieldKind::Text),
        FieldDescriptor::new("price", "Price", FieldKind::Money),
    ];

    fn field_value(&self, name: &str) -> Option<String> {
        Some(match name {
            "id" => self.id.clone(),
            "description" => self.description.clone(),
            "price" => format!("{:.2}", self.price),
            _ => return None,
        })
    }

    fn amount(&self, name: &str) -> Option<f64> {
        (name == "price").then_some(self.price)
    }
}

impl Described for BookingService {
    const ENTITY: &'static str = "Booking service";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("id", "ID", FieldKind::Id),
        FieldDescriptor::new("booking_id", "Booking", FieldKind::Reference),
        FieldDescriptor::new("service_id", "Service", FieldKind::Text),
        FieldDescriptor::new("duration", "Minutes", FieldKind::Minutes),
        FieldDescriptor::new("completed", "Completed", FieldKind::Flag),
    ];

    fn field_value(&self, name: &str) -> Option<String> {
        Some(match name {
            "id" => self.id.to_string(),
            "booking_id" => self.booking_id.to_string(),
            "service_id" => self.service_id.clone(),
            "duration" => self.duration.to_string(),
            "completed" => self.completed.to_string(),
            _ => return None,
        })
    }
}

impl Described for Payment {
    const ENTITY: &'static str = "Payment";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("id", "ID", FieldKind::Id),
        FieldDescriptor::new("booking_id", "Booking", FieldKind::Reference),
        FieldDescriptor::new("amount", "Amount", FieldKind::Money),
        FieldDescriptor::new("payment_date", "Date", FieldKind::Date),
    ];

    fn field_value(&self, name: &str) -> Option<String> {
        Some(match name {
            "id" => self.id.to_string(),
            "booking_id" => self.booking_id.to_string(),
            "amount" => format!("{:.2}", self.amount),
            "payment_date" => self.payment_date.to_string(),
            _ => return None,
        })
    }

    fn amount(&self, name: &str) -> Option<f64> {
        (name == "amount").then_some(self.amount)
    }
}

impl Described for Roster {
    const ENTITY: &'static str = "Roster";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("id", "ID", FieldKind::Id),
        FieldDescriptor::new("person_id", "Employee", FieldKind::Reference),
        FieldDescriptor::new("booking_service_id", "Booking service", FieldKind::Reference),
    ];

    fn field_value(&self, name: &str) -> Option<String> {
        Some(match name {
            "id" => self.id.to_string(),
            "person_id" => self.person_id.to_string(),
            "booking_service_id" => self.booking_service_id.to_string(),
            _ => return None,
        })
    }
}
