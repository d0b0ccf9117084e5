use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The site owner as shown in the admin header. A singleton; `last_login` is
/// stamped when the access gate commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorProfile {
    pub user: String,
    pub role: String,
    pub avatar: String,
    pub last_login: DateTime<Utc>,
}
