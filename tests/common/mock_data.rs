//! Mock data builders for records and feed bodies.

use roster::types::{Record, RecordId};

/// Builder for creating test records
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Create a member record with the given id and derived name/email
    pub fn new(id: u64) -> Self {
        Self {
            record: Record {
                id: RecordId::new(id),
                name: format!("Member {id}"),
                email: format!("member{id}@mailinator.com"),
                role: "member".to_string(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.record.email = email.to_string();
        self
    }

    pub fn role(mut self, role: &str) -> Self {
        self.record.role = role.to_string();
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

/// `count` records with ids 1..=count; every fifth one is an admin
pub fn mock_records(count: u64) -> Vec<Record> {
    (1..=count)
        .map(|id| {
            let role = if id % 5 == 0 { "admin" } else { "member" };
            RecordBuilder::new(id).role(role).build()
        })
        .collect()
}

/// A feed body shaped like the hosted members.json (string ids)
pub fn feed_body() -> &'static str {
    r#"[
  {"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
  {"id":"2","name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"member"},
  {"id":"3","name":"Arvind Kumar","email":"arvind@mailinator.com","role":"admin"},
  {"id":"4","name":"Caterina Binotto","email":"caterina@mailinator.com","role":"member"},
  {"id":"5","name":"Chetan Kumar","email":"chetan@mailinator.com","role":"member"},
  {"id":"6","name":"Jim McClain","email":"jim@mailinator.com","role":"member"},
  {"id":"7","name":"Mahaveer Singh","email":"mahaveer@mailinator.com","role":"member"},
  {"id":"8","name":"Rahul Jain","email":"rahul@mailinator.com","role":"admin"},
  {"id":"9","name":"Rizan Khan","email":"rizan@mailinator.com","role":"member"},
  {"id":"10","name":"Sarah Potter","email":"sarah@mailinator.com","role":"admin"},
  {"id":"11","name":"Keshav Muddaiah","email":"keshav@mailinator.com","role":"member"},
  {"id":"12","name":"Nita Ramesh","email":"nita@mailinator.com","role":"member"}
]"#
}
