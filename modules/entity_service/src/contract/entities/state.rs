use serde::{Deserialize, Serialize};

use crate::contract::model::{Entity, RecordHeader, Relation};

/// State or province; `Country` holds the owning country's id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct State {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub short: String,
    pub name: String,
    pub alternative_name: String,
    pub country: String,
}

const RELATIONS: &[Relation] = &[Relation::new("Country", "Countries,Country,Country,false,")];

impl Entity for State {
    const TYPE_NAME: &'static str = "State";
    const COLLECTION: &'static str = "States";

    header_access!();

    fn relations() -> &'static [Relation] {
        RELATIONS
    }

    fn key(&self, field: &str) -> Option<&str> {
        match field {
            "Country" => Some(&self.country),
            _ => self.header.key(field),
        }
    }
}
