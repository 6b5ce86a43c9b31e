use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub state_code: String,
    pub state_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn same_state_as(&self, other: &City) -> bool {
        self.state_code.trim().eq_ignore_ascii_case(other.state_code.trim())
    }
}
