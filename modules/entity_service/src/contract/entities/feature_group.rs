use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::model::{ChangeViews, Entity, FieldRule, RecordHeader, Relation};
use crate::contract::seeds;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FeatureGroup {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub name: String,
    pub account_type: String,
    #[serde(skip_deserializing, skip_serializing_if = "ChangeViews::is_empty")]
    pub views: ChangeViews,
}

const RELATIONS: &[Relation] = &[
    Relation::new("Features", "Features,Feature,Id,true,FeatureGroupId"),
    Relation::new("LastUpdateUser", "Users,User,LastUpdateId,false,"),
];

const RULES: &[FieldRule] = &[FieldRule::required("Name")];

impl Entity for FeatureGroup {
    const TYPE_NAME: &'static str = "FeatureGroup";
    const COLLECTION: &'static str = "FeatureGroups";
    const SEED_PAYLOAD: &'static str = seeds::FEATURE_GROUPS;

    header_access!();

    fn relations() -> &'static [Relation] {
        RELATIONS
    }

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn render_views(&mut self, now: DateTime<Utc>) {
        self.views.render(self.header.update_date, now);
    }
}
