use crate::domain::{Address, Birthday, Email, Name, Phone, Record};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Wire shape of one contact in the persisted snapshot. Plain strings
/// only; conversion back into a [`Record`] goes through the validating
/// field constructors, so a tampered file cannot smuggle in an invalid
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDto {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl From<&Record> for RecordDto {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.as_str().to_string(),
            phones: record
                .phones
                .iter()
                .map(|phone| phone.as_str().to_string())
                .collect(),
            birthday: record.birthday.to_string(),
            email: record.email.as_ref().map(|email| email.as_str().to_string()),
            address: record
                .address
                .as_ref()
                .map(|address| address.as_str().to_string()),
        }
    }
}

impl RecordDto {
    pub fn into_record(self) -> Result<Record, CoreError> {
        let name = Name::new(self.name)?;
        let birthday = Birthday::parse(&self.birthday)?;
        let phones = self
            .phones
            .into_iter()
            .map(Phone::new)
            .collect::<Result<Vec<_>, _>>()?;
        let email = self.email.map(Email::new).transpose()?;
        let address = self.address.map(Address::new);
        Ok(Record {
            name,
            phones,
            birthday,
            email,
            address,
        })
    }
}
