use serde::{Deserialize, Serialize};

/// One extracurricular offering. The activity name is the directory key,
/// not a field here, matching the shape of the `GET /activities` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory capacity; signups beyond it are not rejected.
    pub max_participants: u32,
    /// Unique emails in signup order.
    pub participants: Vec<String>,
}
