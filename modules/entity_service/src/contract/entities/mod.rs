//! Entity definitions
//!
//! One file per collection. Each entity flattens a [`RecordHeader`] and
//! declares its relations and save-path rules through [`Entity`].
//!
//! [`RecordHeader`]: super::model::RecordHeader
//! [`Entity`]: super::model::Entity

macro_rules! header_access {
    () => {
        fn header(&self) -> &$crate::contract::model::RecordHeader {
            &self.header
        }

        fn header_mut(&mut self) -> &mut $crate::contract::model::RecordHeader {
            &mut self.header
        }
    };
}

mod account;
mod account_role;
mod activity_log;
mod app_error;
mod country;
mod feature;
mod feature_group;
mod file_object;
mod password;
mod password_reset;
mod role;
mod role_feature;
mod server_setting;
mod state;
mod user;

pub use account::Account;
pub use account_role::AccountRole;
pub use activity_log::ActivityLog;
pub use app_error::AppError;
pub use country::Country;
pub use feature::Feature;
pub use feature_group::FeatureGroup;
pub use file_object::FileObject;
pub use password::Password;
pub use password_reset::PasswordReset;
pub use role::Role;
pub use role_feature::RoleFeature;
pub use server_setting::ServerSetting;
pub use state::State;
pub use user::{Preference, User, UserViews};
