use serde::{Deserialize, Serialize};

use crate::contract::model::{Entity, FieldRule, RecordHeader, Relation};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Country {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub iso: String,
    pub name: String,
}

const RELATIONS: &[Relation] = &[Relation::new("States", "States,State,Id,true,Country")];

const RULES: &[FieldRule] = &[FieldRule::required("Iso"), FieldRule::required("Name")];

impl Entity for Country {
    const TYPE_NAME: &'static str = "Country";
    const COLLECTION: &'static str = "Countries";

    header_access!();

    fn relations() -> &'static [Relation] {
        RELATIONS
    }

    fn rules() -> &'static [FieldRule] {
        RULES
    }
}
