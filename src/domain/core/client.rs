use serde::{Deserialize, Serialize};

/// 宿泊客
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    name: String,
    age: u32,
    height: u32,
}

impl Client {
    pub fn new(name: impl Into<String>, age: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            age,
            height,
        }
    }

    /// 予約間で重複を判定するキー
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// 身長 (cm)
    pub fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn same_person(&self, other: &Client) -> bool {
        self.name == other.name
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_same_person_by_name_only() {
        let goku = Client::new("Goku", 24, 175);
        assert!(goku.same_person(&Client::new("Goku", 40, 180)));
        assert!(!goku.same_person(&Client::new("goku", 24, 175)));
    }

    #[test]
    fn test_client_serialize() {
        let goku = Client::new("Goku", 24, 175);
        assert_eq!(
            serde_json::to_value(&goku).unwrap(),
            json!({ "name": "Goku", "age": 24, "height": 175 })
        );
    }
}
