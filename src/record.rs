//! Questionnaire record type and its fixed-order text serialization.
//!
//! A record is one blank-line-delimited block of the source file, reduced to
//! six named fields. The labels are fixed and case-sensitive; they are the
//! exact strings used in the source files this tool consumes.

use std::fmt;

/// The six fields a record can carry, in serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Lastname,
    Firstname,
    Sex,
    Birthday,
    Phone,
    City,
}

/// Serialization (and render) order of the fields.
pub const FIELD_ORDER: [Field; 6] = [
    Field::Lastname,
    Field::Firstname,
    Field::Sex,
    Field::Birthday,
    Field::Phone,
    Field::City,
];

impl Field {
    /// The label as it appears in source files, without the trailing colon.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Lastname => "Фамилия",
            Field::Firstname => "Имя",
            Field::Sex => "Пол",
            Field::Birthday => "Дата рождения",
            Field::Phone => "Номер телефона или email",
            Field::City => "Город",
        }
    }

    /// Whether a record without this field is still a valid record.
    pub fn is_required(&self) -> bool {
        matches!(self, Field::Firstname | Field::Sex)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A parsed questionnaire record.
///
/// `firstname` and `sex` are guaranteed non-empty by the parser; the other
/// fields may be empty when the corresponding label was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub lastname: String,
    pub firstname: String,
    pub sex: String,
    pub birthday: String,
    pub phone: String,
    pub city: String,
}

impl Record {
    /// Field value by field kind.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Lastname => &self.lastname,
            Field::Firstname => &self.firstname,
            Field::Sex => &self.sex,
            Field::Birthday => &self.birthday,
            Field::Phone => &self.phone,
            Field::City => &self.city,
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Lastname => self.lastname = value,
            Field::Firstname => self.firstname = value,
            Field::Sex => self.sex = value,
            Field::Birthday => self.birthday = value,
            Field::Phone => self.phone = value,
            Field::City => self.city = value,
        }
    }

    /// Renders the record as a text block in fixed field order.
    ///
    /// Absent optional fields render as an empty value rather than being
    /// omitted, so every rendered block has exactly six lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for field in FIELD_ORDER {
            out.push_str(field.label());
            out.push_str(": ");
            out.push_str(self.get(field));
            out.push('\n');
        }
        out
    }
}
