use crate::domain::{Address, Birthday, Email, Name, Phone};
use crate::error::CoreError;

/// One contact. Fields are validated at construction of each field
/// type; the record itself only enforces that name and birthday exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: Name,
    pub phones: Vec<Phone>,
    pub birthday: Birthday,
    pub email: Option<Email>,
    pub address: Option<Address>,
}

impl Record {
    pub fn new(name: Name, birthday: Birthday) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday,
            email: None,
            address: None,
        }
    }

    /// Boundary constructor for callers assembling a record from
    /// individually collected fields. Name and birthday are required.
    pub fn from_parts(
        name: Option<Name>,
        phones: Vec<Phone>,
        birthday: Option<Birthday>,
        email: Option<Email>,
        address: Option<Address>,
    ) -> Result<Self, CoreError> {
        let name = name.ok_or(CoreError::MissingRequiredField("name"))?;
        let birthday = birthday.ok_or(CoreError::MissingRequiredField("birthday"))?;
        Ok(Self {
            name,
            phones,
            birthday,
            email,
            address,
        })
    }

    /// First phone on file, if any.
    pub fn primary_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::domain::{Birthday, Name, Phone};
    use crate::error::CoreError;

    #[test]
    fn from_parts_requires_name_and_birthday() {
        let birthday = Birthday::parse("1990-01-15").unwrap();
        let err = Record::from_parts(None, Vec::new(), Some(birthday), None, None).unwrap_err();
        assert_eq!(err, CoreError::MissingRequiredField("name"));

        let name = Name::new("Ada").unwrap();
        let err = Record::from_parts(Some(name), Vec::new(), None, None, None).unwrap_err();
        assert_eq!(err, CoreError::MissingRequiredField("birthday"));
    }

    #[test]
    fn primary_phone_is_first_entry() {
        let mut record = Record::new(
            Name::new("Ada").unwrap(),
            Birthday::parse("1990-01-15").unwrap(),
        );
        assert!(record.primary_phone().is_none());

        record.phones.push(Phone::new("+380441234567").unwrap());
        record.phones.push(Phone::new("0937654321").unwrap());
        assert_eq!(record.primary_phone().unwrap().as_str(), "+380441234567");
    }
}
